//! Workout data model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Conventional split labels offered by the add-workout picker.
///
/// The split field itself is free-form; these are only suggestions.
pub const SPLIT_SUGGESTIONS: [&str; 3] = ["Push", "Pull", "Legs"];

/// One performance of an exercise at a given weight and rep count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseSet {
    /// Weight lifted in kilograms
    pub weight_kg: f64,
    /// Repetitions performed
    pub reps: u32,
}

impl ExerciseSet {
    /// Create a set from weight and rep count.
    pub fn new(weight_kg: f64, reps: u32) -> Self {
        Self { weight_kg, reps }
    }
}

impl std::fmt::Display for ExerciseSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.weight_kg, self.reps)
    }
}

/// A named movement within a workout, comprising one or more sets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    /// Exercise name, picked from the suggestion list or freely typed
    pub name: String,
    /// Ordered sets as performed
    pub sets: Vec<ExerciseSet>,
}

impl Exercise {
    /// Create an exercise with the given name and sets.
    pub fn new(name: impl Into<String>, sets: Vec<ExerciseSet>) -> Self {
        Self {
            name: name.into(),
            sets,
        }
    }

    /// Total repetitions across all sets.
    pub fn total_reps(&self) -> u32 {
        self.sets.iter().map(|s| s.reps).sum()
    }

    /// Heaviest set weight, if any sets exist.
    pub fn top_weight_kg(&self) -> Option<f64> {
        self.sets
            .iter()
            .map(|s| s.weight_kg)
            .fold(None, |acc, w| Some(acc.map_or(w, |a: f64| a.max(w))))
    }
}

/// A dated collection of exercises performed under one split.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    /// Unique identifier, assigned by the store at insertion
    pub id: Uuid,
    /// Calendar date the workout belongs to
    pub date: NaiveDate,
    /// Split label (e.g. Push, Pull, Legs)
    pub split: String,
    /// Ordered exercises performed
    pub exercises: Vec<Exercise>,
}

impl Workout {
    /// Look up an exercise by name (case-insensitive).
    pub fn exercise(&self, name: &str) -> Option<&Exercise> {
        self.exercises
            .iter()
            .find(|e| e.name.eq_ignore_ascii_case(name))
    }

    /// Number of sets across all exercises.
    pub fn total_sets(&self) -> usize {
        self.exercises.iter().map(|e| e.sets.len()).sum()
    }
}

/// A workout as submitted by the add form, before the store assigns an id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkoutDraft {
    /// Split label
    pub split: String,
    /// Initial exercises, usually empty at creation
    pub exercises: Vec<Exercise>,
}

impl WorkoutDraft {
    /// Create a draft for the given split with no exercises yet.
    pub fn new(split: impl Into<String>) -> Self {
        Self {
            split: split.into(),
            exercises: Vec::new(),
        }
    }

    /// Validate the draft as the add form does before submitting.
    pub fn validate(&self) -> Result<(), WorkoutError> {
        if self.split.trim().is_empty() {
            return Err(WorkoutError::MissingField("split"));
        }
        Ok(())
    }
}

/// Validate an exercise as the edit form does before appending it.
pub fn validate_exercise(exercise: &Exercise) -> Result<(), WorkoutError> {
    if exercise.name.trim().is_empty() {
        return Err(WorkoutError::MissingField("exercise name"));
    }
    if exercise.sets.is_empty() {
        return Err(WorkoutError::MissingField("sets"));
    }
    for set in &exercise.sets {
        if set.reps == 0 {
            return Err(WorkoutError::InvalidValue {
                field: "reps",
                value: set.reps.to_string(),
            });
        }
        if !set.weight_kg.is_finite() || set.weight_kg < 0.0 {
            return Err(WorkoutError::InvalidValue {
                field: "weight",
                value: set.weight_kg.to_string(),
            });
        }
    }
    Ok(())
}

/// Errors raised by form validation before a mutation is attempted.
#[derive(Debug, Error)]
pub enum WorkoutError {
    /// A required form field was left empty
    #[error("Please fill in the {0} field")]
    MissingField(&'static str),

    /// A field value was out of range or unparseable
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_validation_rejects_blank_split() {
        assert!(WorkoutDraft::new("Push").validate().is_ok());
        assert!(matches!(
            WorkoutDraft::new("  ").validate(),
            Err(WorkoutError::MissingField("split"))
        ));
    }

    #[test]
    fn test_exercise_validation() {
        let ok = Exercise::new("Bench Press", vec![ExerciseSet::new(80.0, 5)]);
        assert!(validate_exercise(&ok).is_ok());

        let unnamed = Exercise::new("", vec![ExerciseSet::new(80.0, 5)]);
        assert!(validate_exercise(&unnamed).is_err());

        let setless = Exercise::new("Bench Press", vec![]);
        assert!(validate_exercise(&setless).is_err());

        let zero_reps = Exercise::new("Bench Press", vec![ExerciseSet::new(80.0, 0)]);
        assert!(validate_exercise(&zero_reps).is_err());

        let negative = Exercise::new("Bench Press", vec![ExerciseSet::new(-5.0, 5)]);
        assert!(validate_exercise(&negative).is_err());
    }

    #[test]
    fn test_exercise_aggregates() {
        let exercise = Exercise::new(
            "Squat",
            vec![
                ExerciseSet::new(100.0, 5),
                ExerciseSet::new(110.0, 3),
                ExerciseSet::new(105.0, 4),
            ],
        );
        assert_eq!(exercise.total_reps(), 12);
        assert_eq!(exercise.top_weight_kg(), Some(110.0));

        let empty = Exercise::new("Squat", vec![]);
        assert_eq!(empty.top_weight_kg(), None);
    }
}
