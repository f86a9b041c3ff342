//! CLI for LiftLog
//!
//! Each subcommand is a thin consumer of the workout store: it renders the
//! current state and issues mutation calls, holding no state of its own.

use anyhow::{anyhow, bail, Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use uuid::Uuid;

use crate::storage::config::{self, AppConfig, Theme, Units};
use crate::storage::journal::{get_data_dir, Journal};
use crate::workouts::store::WorkoutStore;
use crate::workouts::suggestions;
use crate::workouts::types::{validate_exercise, Exercise, WorkoutDraft, SPLIT_SUGGESTIONS};

mod calendar;
mod setspec;

pub use setspec::parse_set_spec;

/// LiftLog workout tracker CLI
#[derive(Parser, Debug)]
#[command(name = "liftlog")]
#[command(about = "Track workouts, exercises, and sets per calendar date")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show a month calendar with workout dates marked
    Calendar {
        /// Month to show as YYYY-MM (defaults to the current month)
        #[arg(long)]
        month: Option<String>,
    },
    /// List workouts for a date
    List {
        /// Date as YYYY-MM-DD (defaults to today)
        date: Option<NaiveDate>,
    },
    /// Add a workout for a date
    Add {
        /// Date as YYYY-MM-DD
        date: NaiveDate,
        /// Split label, conventionally Push, Pull, or Legs
        #[arg(long)]
        split: String,
    },
    /// Remove a workout by id
    Remove {
        /// Date as YYYY-MM-DD
        date: NaiveDate,
        /// Workout id, full or unambiguous prefix
        id: String,
    },
    /// Show one workout with its exercises and sets
    Show {
        /// Date as YYYY-MM-DD
        date: NaiveDate,
        /// Workout id, full or unambiguous prefix
        id: String,
    },
    /// Append an exercise with its sets to a workout
    LogExercise {
        /// Date as YYYY-MM-DD
        date: NaiveDate,
        /// Workout id, full or unambiguous prefix
        id: String,
        /// Exercise name, free-form or from the suggestion list
        #[arg(long)]
        name: String,
        /// Set as WEIGHTxREPS (e.g. 80x5), repeatable, in configured units
        #[arg(long = "set", required = true)]
        sets: Vec<String>,
    },
    /// List exercise name suggestions, optionally filtered
    Exercises {
        /// Filter query
        query: Option<String>,
    },
    /// Show or change preferences
    Settings {
        /// Unit system: metric or imperial
        #[arg(long)]
        units: Option<Units>,
        /// Theme: light or dark
        #[arg(long)]
        theme: Option<Theme>,
    },
}

/// Run the parsed CLI command.
pub fn run(cli: Cli) -> Result<()> {
    let data_dir: std::path::PathBuf = match std::env::var_os("LIFTLOG_DATA_DIR") {
        Some(dir) => dir.into(),
        None => get_data_dir(),
    };
    let config = config::load_config_from(&data_dir).unwrap_or_else(|e| {
        tracing::warn!("could not load config, using defaults: {e}");
        AppConfig::default()
    });
    let mut store = WorkoutStore::open(Journal::at(&data_dir));

    match cli.command {
        Some(Commands::Calendar { month }) => calendar::render(&store, month.as_deref()),
        Some(Commands::List { date }) => {
            let date = date.unwrap_or_else(|| Local::now().date_naive());
            list_workouts(&store, date)
        }
        Some(Commands::Add { date, split }) => add_workout(&mut store, date, split),
        Some(Commands::Remove { date, id }) => remove_workout(&mut store, date, &id),
        Some(Commands::Show { date, id }) => show_workout(&store, &config, date, &id),
        Some(Commands::LogExercise {
            date,
            id,
            name,
            sets,
        }) => log_exercise(&mut store, &config, date, &id, name, &sets),
        Some(Commands::Exercises { query }) => {
            for name in suggestions::suggest(query.as_deref().unwrap_or("")) {
                println!("{name}");
            }
            Ok(())
        }
        Some(Commands::Settings { units, theme }) => update_settings(&data_dir, config, units, theme),
        None => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            cmd.print_help()?;
            println!();
            Ok(())
        }
    }
}

fn list_workouts(store: &WorkoutStore, date: NaiveDate) -> Result<()> {
    let workouts = store.workouts_on(date);
    if workouts.is_empty() {
        println!("No workouts on {date}.");
        return Ok(());
    }

    println!("Workouts on {date}:");
    for workout in workouts {
        println!(
            "  {}  {}  ({} exercises, {} sets)",
            short_id(workout.id),
            workout.split,
            workout.exercises.len(),
            workout.total_sets(),
        );
    }
    Ok(())
}

fn add_workout(store: &mut WorkoutStore, date: NaiveDate, split: String) -> Result<()> {
    let draft = WorkoutDraft::new(split);
    // Blocks the mutation, like the add form's alert
    draft.validate()?;

    if !SPLIT_SUGGESTIONS
        .iter()
        .any(|s| s.eq_ignore_ascii_case(&draft.split))
    {
        println!(
            "Note: '{}' is not one of the usual splits ({}).",
            draft.split,
            SPLIT_SUGGESTIONS.join(", ")
        );
    }

    let id = store.add_workout(date, draft);
    println!("Added workout {} on {date}.", short_id(id));
    Ok(())
}

fn remove_workout(store: &mut WorkoutStore, date: NaiveDate, idref: &str) -> Result<()> {
    let id = resolve_workout(store, date, idref)?;
    // The store itself treats a missing workout as a silent no-op; the
    // screen still tells the user nothing matched.
    if !store.remove_workout(date, id) {
        bail!("no workout {} on {date}", short_id(id));
    }
    println!("Removed workout {} from {date}.", short_id(id));
    Ok(())
}

fn show_workout(store: &WorkoutStore, config: &AppConfig, date: NaiveDate, idref: &str) -> Result<()> {
    let id = resolve_workout(store, date, idref)?;
    let workout = store
        .find(date, id)
        .ok_or_else(|| anyhow!("no workout {} on {date}", short_id(id)))?;

    println!("{}  {}  ({})", workout.date, workout.split, workout.id);
    if workout.exercises.is_empty() {
        println!("  (no exercises logged)");
    }
    for exercise in &workout.exercises {
        println!("  {}", exercise.name);
        for set in &exercise.sets {
            let (weight, unit) = config.units.display_weight(set.weight_kg);
            println!("    {weight:.1} {unit} x {}", set.reps);
        }
    }
    Ok(())
}

fn log_exercise(
    store: &mut WorkoutStore,
    config: &AppConfig,
    date: NaiveDate,
    idref: &str,
    name: String,
    set_specs: &[String],
) -> Result<()> {
    let id = resolve_workout(store, date, idref)?;

    let sets = set_specs
        .iter()
        .map(|spec| parse_set_spec(spec, config.units))
        .collect::<Result<Vec<_>>>()?;

    let exercise = Exercise::new(name, sets);
    // Blocks the mutation, like the edit form's alert
    validate_exercise(&exercise)?;

    if !store.add_exercise(date, id, exercise) {
        bail!("no workout {} on {date}", short_id(id));
    }
    println!("Logged exercise on workout {}.", short_id(id));
    Ok(())
}

fn update_settings(
    data_dir: &std::path::Path,
    mut config: AppConfig,
    units: Option<Units>,
    theme: Option<Theme>,
) -> Result<()> {
    let changed = units.is_some() || theme.is_some();
    if let Some(units) = units {
        config.units = units;
    }
    if let Some(theme) = theme {
        config.theme = theme;
    }
    if changed {
        config::save_config_to(data_dir, &config).context("saving config")?;
    }

    println!("Units: {}", config.units);
    println!("Theme: {}", config.theme);
    Ok(())
}

/// Resolve a workout id from a full UUID or an unambiguous prefix among the
/// date's workouts.
fn resolve_workout(store: &WorkoutStore, date: NaiveDate, idref: &str) -> Result<Uuid> {
    if let Ok(id) = idref.parse::<Uuid>() {
        return Ok(id);
    }

    let matches: Vec<Uuid> = store
        .workouts_on(date)
        .iter()
        .map(|w| w.id)
        .filter(|id| id.to_string().starts_with(&idref.to_ascii_lowercase()))
        .collect();

    match matches.as_slice() {
        [id] => Ok(*id),
        [] => bail!("no workout matching '{idref}' on {date}"),
        _ => bail!("'{idref}' is ambiguous on {date}; use more characters"),
    }
}

/// First eight hex characters of an id, enough to reference it on the CLI.
fn short_id(id: Uuid) -> String {
    id.to_string()[..8].to_string()
}
