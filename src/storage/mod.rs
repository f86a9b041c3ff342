//! Storage module for the snapshot journal and configuration.

pub mod config;
pub mod journal;

pub use config::{AppConfig, ConfigError, Theme, Units};
pub use journal::{Journal, JournalError};
