//! Workout data model, store, and exercise suggestions.

pub mod store;
pub mod suggestions;
pub mod types;

pub use store::{DateMark, MarkedDates, WorkoutLog, WorkoutStore};
pub use suggestions::{suggest, EXERCISE_SUGGESTIONS};
pub use types::{
    validate_exercise, Exercise, ExerciseSet, Workout, WorkoutDraft, WorkoutError,
    SPLIT_SUGGESTIONS,
};
