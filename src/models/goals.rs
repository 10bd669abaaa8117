//! Daily goals
//!
//! Fixed targets the progress calculator compares the day against.

use serde::{Deserialize, Serialize};

pub const DEFAULT_CALORIES_GOAL: f64 = 2000.0;
pub const DEFAULT_PROTEIN_GOAL: f64 = 150.0;
pub const DEFAULT_CARBS_GOAL: f64 = 250.0;
pub const DEFAULT_FAT_GOAL: f64 = 65.0;
pub const DEFAULT_EXERCISE_GOAL: f64 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyGoals {
    pub calories: f64,
    pub protein: f64,         // grams
    pub carbs: f64,           // grams
    pub fat: f64,             // grams
    pub exercise_minutes: f64,
}

impl Default for DailyGoals {
    fn default() -> Self {
        Self {
            calories: DEFAULT_CALORIES_GOAL,
            protein: DEFAULT_PROTEIN_GOAL,
            carbs: DEFAULT_CARBS_GOAL,
            fat: DEFAULT_FAT_GOAL,
            exercise_minutes: DEFAULT_EXERCISE_GOAL,
        }
    }
}
