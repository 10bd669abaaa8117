//! FitTracker Status Tool
//!
//! Diary health, active goals and process details, plus usage instructions
//! for assistants.

use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};
use tracing::warn;

use crate::build_info;
use crate::db::EntryStore;
use crate::models::DailyGoals;

/// Diary usage instructions for AI assistants
pub const DIARY_INSTRUCTIONS: &str = r#"
# FitTracker Diary Instructions

FitTracker keeps one day of food and exercise entries and reports totals
against fixed daily goals.

## Logging food

1. `search_foods` with part of the name (e.g. "frango"). An empty query
   returns nothing.
2. `add_food` with the exact catalog name and a meal:
   `breakfast`, `lunch`, `dinner` or `snack` (default `lunch`).
   One call logs one catalog serving (e.g. 100g or 1 unidade).

## Logging exercise

1. `search_exercises` with part of the name; pass `duration_minutes` to see
   the calories that duration would burn.
2. `add_exercise` with the exact catalog name and `duration_minutes`
   (default 30, must be at least 1). Calories scale linearly with duration.

## Reviewing the day

- `get_daily_summary` returns totals, net calories (may be negative),
  per-goal progress (0-100%) and calories remaining.
- `list_meals` groups food entries by meal with calorie subtotals.
- `list_exercises` lists exercise entries with totals.
- `remove_entry` deletes a food or exercise entry by id. Removing an unknown
  id changes nothing.

Entries cannot be edited; remove and add again instead.
"#;

/// Whether the stored day could be read, and how much it holds
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DiaryState {
    Readable {
        food_entries: usize,
        exercise_entries: usize,
    },
    Unreadable {
        error: String,
    },
}

#[derive(Debug, Clone, Serialize)]
pub struct FitTrackerStatus {
    pub build: String,
    pub build_number: u64,
    pub database_path: String,
    pub database_size_bytes: Option<u64>,
    pub diary: DiaryState,
    pub goals: DailyGoals,
    pub uptime_seconds: u64,
    pub memory_usage_bytes: u64,
}

/// Reports the diary's health next to the goals it is scored against
pub struct StatusTracker {
    start_time: Instant,
    database_path: PathBuf,
    goals: DailyGoals,
}

impl StatusTracker {
    pub fn new(database_path: PathBuf, goals: DailyGoals) -> Self {
        Self {
            start_time: Instant::now(),
            database_path,
            goals,
        }
    }

    pub fn get_status<S: EntryStore + ?Sized>(&self, store: &S) -> FitTrackerStatus {
        let diary = match store.snapshot() {
            Ok(day) => DiaryState::Readable {
                food_entries: day.foods.len(),
                exercise_entries: day.exercises.len(),
            },
            Err(e) => {
                warn!(error = %e, "Status check could not read the diary");
                DiaryState::Unreadable {
                    error: e.to_string(),
                }
            }
        };

        FitTrackerStatus {
            build: build_info::banner(),
            build_number: build_info::build_number(),
            database_path: self.database_path.display().to_string(),
            database_size_bytes: std::fs::metadata(&self.database_path)
                .ok()
                .map(|m| m.len()),
            diary,
            goals: self.goals,
            uptime_seconds: self.start_time.elapsed().as_secs(),
            memory_usage_bytes: resident_memory(),
        }
    }
}

fn resident_memory() -> u64 {
    let pid = Pid::from_u32(std::process::id());
    let mut sys = System::new();
    sys.refresh_processes(ProcessesToUpdate::Some(&[pid]));
    sys.process(pid).map(|p| p.memory()).unwrap_or(0)
}
