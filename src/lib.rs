//! LiftLog - Local Workout Tracker
//!
//! A single-user workout log: pick a calendar date, create a workout under a
//! split (Push/Pull/Legs), and record exercises with sets of weight and reps.
//! All data lives in one date-keyed store persisted to a local JSON snapshot.

pub mod cli;
pub mod storage;
pub mod workouts;

// Re-export commonly used types
pub use storage::config::AppConfig;
pub use storage::journal::Journal;
pub use workouts::store::WorkoutStore;
pub use workouts::types::{Exercise, ExerciseSet, Workout, WorkoutDraft};
