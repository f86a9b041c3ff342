//! Built-in exercise suggestion list.
//!
//! The list backs the exercise-name picker; anything not on it can still be
//! typed freely.

/// Popular exercises offered by the picker, roughly by popularity.
pub const EXERCISE_SUGGESTIONS: [&str; 80] = [
    "Bench Press",
    "Squat",
    "Deadlift",
    "Pull-up",
    "Push-up",
    "Dumbbell Curl",
    "Tricep Dip",
    "Lunges",
    "Shoulder Press",
    "Lat Pulldown",
    "Barbell Row",
    "Leg Press",
    "Chest Fly",
    "Bent Over Row",
    "Leg Extension",
    "Hamstring Curl",
    "Calf Raise",
    "Overhead Press",
    "Incline Bench Press",
    "Decline Bench Press",
    "Cable Crossover",
    "Dumbbell Bench Press",
    "Kettlebell Swing",
    "Russian Twist",
    "Plank",
    "Mountain Climbers",
    "Burpees",
    "Box Jumps",
    "Tricep Pushdown",
    "Face Pull",
    "Seated Row",
    "Dumbbell Shoulder Press",
    "Lateral Raise",
    "Front Raise",
    "Cable Row",
    "Chin-up",
    "T-Bar Row",
    "Cable Fly",
    "Single-Leg Deadlift",
    "Goblet Squat",
    "Sumo Deadlift",
    "Romanian Deadlift",
    "Reverse Lunge",
    "Bulgarian Split Squat",
    "Hip Thrust",
    "Glute Bridge",
    "Ab Rollout",
    "Hanging Leg Raise",
    "Cable Crunch",
    "Side Plank",
    "Medicine Ball Slam",
    "Battle Ropes",
    "Sled Push",
    "Farmer's Walk",
    "Kettlebell Snatch",
    "Clean and Jerk",
    "Snatch",
    "Box Squat",
    "Front Squat",
    "Back Squat",
    "Trap Bar Deadlift",
    "Landmine Press",
    "Arnold Press",
    "Preacher Curl",
    "Hammer Curl",
    "Skull Crusher",
    "Concentration Curl",
    "Zottman Curl",
    "Dips",
    "Tricep Kickback",
    "Seated Calf Raise",
    "Standing Calf Raise",
    "Chest Press Machine",
    "Pec Deck Machine",
    "Hip Abductor Machine",
    "Hip Adductor Machine",
    "Row Machine",
    "Elliptical Trainer",
    "Treadmill",
    "Stationary Bike",
];

/// Suggestions matching a query, case-insensitive.
///
/// Prefix matches sort ahead of substring matches; an empty query returns the
/// full list in its built-in order.
pub fn suggest(query: &str) -> Vec<&'static str> {
    let query = query.trim().to_ascii_lowercase();
    if query.is_empty() {
        return EXERCISE_SUGGESTIONS.to_vec();
    }

    let mut prefix_matches = Vec::new();
    let mut substring_matches = Vec::new();

    for name in EXERCISE_SUGGESTIONS {
        let lowered = name.to_ascii_lowercase();
        if lowered.starts_with(&query) {
            prefix_matches.push(name);
        } else if lowered.contains(&query) {
            substring_matches.push(name);
        }
    }

    prefix_matches.extend(substring_matches);
    prefix_matches
}
