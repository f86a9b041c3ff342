//! The workout store: single source of truth for all workout data.
//!
//! The store owns the date-keyed workout log, keeps the derived marked-dates
//! index in step with it, and persists the full structure through its
//! [`Journal`] after every successful mutation. Screens hold no workout state
//! of their own; they render from the store and call back into it.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::storage::journal::Journal;

use super::types::{Exercise, Workout, WorkoutDraft};

/// The root aggregate: workouts grouped by calendar date.
///
/// Invariant: every date key maps to a non-empty list. A mutation that
/// empties a date's list removes the key.
pub type WorkoutLog = BTreeMap<NaiveDate, Vec<Workout>>;

/// Calendar annotation for one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateMark {
    /// Date has at least one workout
    pub marked: bool,
}

/// Derived index of dates carrying at least one workout.
///
/// Recomputed after every mutation; holds a key exactly for the dates present
/// in the log. Carries no authority of its own.
pub type MarkedDates = BTreeMap<NaiveDate, DateMark>;

/// Owner of the canonical workout collection, with automatic persistence.
pub struct WorkoutStore {
    log: WorkoutLog,
    marks: MarkedDates,
    current: Option<(NaiveDate, Uuid)>,
    journal: Journal,
}

impl WorkoutStore {
    /// Open the store against a journal, loading the persisted snapshot.
    ///
    /// An absent snapshot starts the store empty. An unreadable or corrupt
    /// snapshot is logged and also starts the store empty; it is never fatal.
    pub fn open(journal: Journal) -> Self {
        let log = match journal.load() {
            Ok(Some(log)) => log,
            Ok(None) => WorkoutLog::new(),
            Err(e) => {
                tracing::warn!("could not load workout snapshot, starting empty: {e}");
                WorkoutLog::new()
            }
        };

        let mut store = Self {
            log,
            marks: MarkedDates::new(),
            current: None,
            journal,
        };
        // A hand-edited snapshot may carry empty date lists
        store.log.retain(|_, workouts| !workouts.is_empty());
        store.recompute_marks();
        store
    }

    /// Add a workout for a date.
    ///
    /// Assigns a fresh identifier, appends the workout to the date's list
    /// (creating it if absent), marks it as the current workout for edit
    /// flows, and persists. Returns the assigned id. The date itself is not
    /// validated; callers pass whatever the calendar handed them.
    pub fn add_workout(&mut self, date: NaiveDate, draft: WorkoutDraft) -> Uuid {
        let id = Uuid::new_v4();
        let workout = Workout {
            id,
            date,
            split: draft.split,
            exercises: draft.exercises,
        };

        self.log.entry(date).or_default().push(workout);
        self.current = Some((date, id));
        self.after_mutation();
        id
    }

    /// Replace the split and exercises of the workout matching `id` on `date`.
    ///
    /// The stored identifier and date are preserved regardless of what the
    /// patch carries. A missing date or id is a silent no-op; the method
    /// returns whether a workout was patched.
    pub fn update_workout(&mut self, date: NaiveDate, id: Uuid, patch: Workout) -> bool {
        let Some(workouts) = self.log.get_mut(&date) else {
            return false;
        };
        let Some(existing) = workouts.iter_mut().find(|w| w.id == id) else {
            return false;
        };

        existing.split = patch.split;
        existing.exercises = patch.exercises;
        self.after_mutation();
        true
    }

    /// Append an exercise to the workout matching `id` on `date`.
    ///
    /// Convenience for the edit flow; same silent no-op contract as
    /// [`update_workout`](Self::update_workout).
    pub fn add_exercise(&mut self, date: NaiveDate, id: Uuid, exercise: Exercise) -> bool {
        let Some(workout) = self
            .log
            .get_mut(&date)
            .and_then(|workouts| workouts.iter_mut().find(|w| w.id == id))
        else {
            return false;
        };

        workout.exercises.push(exercise);
        self.after_mutation();
        true
    }

    /// Remove the workout matching `id` from `date`'s list.
    ///
    /// Drops the date key entirely when the list empties. A missing date or
    /// id is a silent no-op; the method returns whether a workout was removed.
    pub fn remove_workout(&mut self, date: NaiveDate, id: Uuid) -> bool {
        let Some(workouts) = self.log.get_mut(&date) else {
            return false;
        };

        let before = workouts.len();
        workouts.retain(|w| w.id != id);
        if workouts.len() == before {
            return false;
        }

        if workouts.is_empty() {
            self.log.remove(&date);
        }
        if self.current == Some((date, id)) {
            self.current = None;
        }
        self.after_mutation();
        true
    }

    /// Workouts recorded on a date, in insertion order. Empty when none.
    pub fn workouts_on(&self, date: NaiveDate) -> &[Workout] {
        self.log.get(&date).map(Vec::as_slice).unwrap_or_default()
    }

    /// Find one workout by date and id.
    pub fn find(&self, date: NaiveDate, id: Uuid) -> Option<&Workout> {
        self.log.get(&date)?.iter().find(|w| w.id == id)
    }

    /// The workout most recently created or selected for editing.
    pub fn current(&self) -> Option<&Workout> {
        let (date, id) = self.current?;
        self.find(date, id)
    }

    /// Point edit flows at a specific workout.
    pub fn set_current(&mut self, date: NaiveDate, id: Uuid) {
        self.current = Some((date, id));
    }

    /// The derived calendar annotations.
    pub fn marked_dates(&self) -> &MarkedDates {
        &self.marks
    }

    /// Whether a date has at least one workout.
    pub fn is_marked(&self, date: NaiveDate) -> bool {
        self.marks.get(&date).is_some_and(|m| m.marked)
    }

    /// All dates carrying workouts, ascending.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.log.keys().copied()
    }

    /// Total number of workouts across all dates.
    pub fn len(&self) -> usize {
        self.log.values().map(Vec::len).sum()
    }

    /// Whether the store holds no workouts at all.
    pub fn is_empty(&self) -> bool {
        self.log.is_empty()
    }

    /// The full log, for rendering and serialization round-trips.
    pub fn log(&self) -> &WorkoutLog {
        &self.log
    }

    /// Recompute marks and persist the full snapshot.
    ///
    /// A persistence failure is logged and swallowed; the in-memory state
    /// stays authoritative for the rest of the session.
    fn after_mutation(&mut self) {
        self.recompute_marks();
        if let Err(e) = self.journal.save(&self.log, &self.marks) {
            tracing::warn!("failed to persist workout snapshot: {e}");
        }
    }

    fn recompute_marks(&mut self) {
        self.marks = self
            .log
            .keys()
            .map(|date| (*date, DateMark { marked: true }))
            .collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workouts::types::{Exercise, ExerciseSet};
    use tempfile::TempDir;

    fn setup_store() -> (TempDir, WorkoutStore) {
        let dir = TempDir::new().unwrap();
        let store = WorkoutStore::open(Journal::at(dir.path()));
        (dir, store)
    }

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_add_workout_assigns_unique_ids() {
        let (_dir, mut store) = setup_store();
        let d = date("2024-06-01");

        let a = store.add_workout(d, WorkoutDraft::new("Push"));
        let b = store.add_workout(d, WorkoutDraft::new("Pull"));
        let c = store.add_workout(date("2024-06-02"), WorkoutDraft::new("Legs"));

        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_ne!(a, c);
        assert!(store.find(d, a).is_some());
        assert!(store.find(d, b).is_some());
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_add_sets_current_workout() {
        let (_dir, mut store) = setup_store();
        let d = date("2024-06-01");

        let id = store.add_workout(d, WorkoutDraft::new("Push"));

        let current = store.current().unwrap();
        assert_eq!(current.id, id);
        assert_eq!(current.split, "Push");
    }

    #[test]
    fn test_update_preserves_id_and_date() {
        let (_dir, mut store) = setup_store();
        let d = date("2024-06-01");
        let id = store.add_workout(d, WorkoutDraft::new("Push"));

        // Patch carries a foreign id and date; both must be ignored
        let patch = Workout {
            id: Uuid::new_v4(),
            date: date("1999-01-01"),
            split: "Pull".to_string(),
            exercises: vec![Exercise::new("Chin-up", vec![ExerciseSet::new(0.0, 8)])],
        };
        assert!(store.update_workout(d, id, patch));

        let stored = store.find(d, id).unwrap();
        assert_eq!(stored.id, id);
        assert_eq!(stored.date, d);
        assert_eq!(stored.split, "Pull");
        assert_eq!(stored.exercises.len(), 1);
    }

    #[test]
    fn test_update_missing_is_silent_noop() {
        let (_dir, mut store) = setup_store();
        let d = date("2024-06-01");
        let id = store.add_workout(d, WorkoutDraft::new("Push"));

        let patch = Workout {
            id,
            date: d,
            split: "Pull".to_string(),
            exercises: vec![],
        };

        // Unknown date
        assert!(!store.update_workout(date("2024-06-02"), id, patch.clone()));
        // Known date, unknown id
        assert!(!store.update_workout(d, Uuid::new_v4(), patch));

        assert_eq!(store.find(d, id).unwrap().split, "Push");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_remove_second_of_two_keeps_other() {
        let (_dir, mut store) = setup_store();
        let d = date("2024-06-01");
        let first = store.add_workout(d, WorkoutDraft::new("Push"));
        let second = store.add_workout(d, WorkoutDraft::new("Pull"));

        assert!(store.remove_workout(d, first));

        let remaining = store.workouts_on(d);
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, second);
        assert!(store.is_marked(d));
    }

    #[test]
    fn test_remove_last_drops_date_key() {
        let (_dir, mut store) = setup_store();
        let d = date("2024-06-01");
        let id = store.add_workout(d, WorkoutDraft::new("Legs"));

        assert!(store.remove_workout(d, id));

        assert!(store.workouts_on(d).is_empty());
        assert!(!store.log().contains_key(&d));
        assert!(!store.is_marked(d));
        assert!(store.is_empty());
    }

    #[test]
    fn test_remove_missing_is_silent_noop() {
        let (_dir, mut store) = setup_store();
        let d = date("2024-06-01");
        store.add_workout(d, WorkoutDraft::new("Push"));

        assert!(!store.remove_workout(d, Uuid::new_v4()));
        assert!(!store.remove_workout(date("2024-06-02"), Uuid::new_v4()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_remove_clears_stale_current() {
        let (_dir, mut store) = setup_store();
        let d = date("2024-06-01");
        let id = store.add_workout(d, WorkoutDraft::new("Push"));

        assert!(store.current().is_some());
        store.remove_workout(d, id);
        assert!(store.current().is_none());
    }

    #[test]
    fn test_marked_dates_track_log_exactly() {
        let (_dir, mut store) = setup_store();
        let d1 = date("2024-06-01");
        let d2 = date("2024-06-02");

        let id1 = store.add_workout(d1, WorkoutDraft::new("Push"));
        store.add_workout(d2, WorkoutDraft::new("Pull"));
        assert_marks_consistent(&store);

        store.remove_workout(d1, id1);
        assert_marks_consistent(&store);
        assert!(!store.marked_dates().contains_key(&d1));
        assert!(store.marked_dates()[&d2].marked);
    }

    #[test]
    fn test_add_exercise_through_store() {
        let (_dir, mut store) = setup_store();
        let d = date("2024-06-01");
        let id = store.add_workout(d, WorkoutDraft::new("Push"));

        let exercise = Exercise::new(
            "Bench Press",
            vec![ExerciseSet::new(80.0, 5), ExerciseSet::new(85.0, 3)],
        );
        assert!(store.add_exercise(d, id, exercise));
        assert!(!store.add_exercise(d, Uuid::new_v4(), Exercise::new("Squat", vec![])));

        let stored = store.find(d, id).unwrap();
        assert_eq!(stored.exercises.len(), 1);
        assert_eq!(stored.total_sets(), 2);
    }

    fn assert_marks_consistent(store: &WorkoutStore) {
        for date in store.dates() {
            assert!(store.is_marked(date), "log date {date} missing mark");
        }
        for date in store.marked_dates().keys() {
            assert!(
                store.log().contains_key(date),
                "mark {date} has no log entry"
            );
        }
    }
}
