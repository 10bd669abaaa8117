//! Data models
//!
//! Logged entries, goals, and the derived daily stats.

mod entry;
mod exercise_entry;
mod food_entry;
mod goals;
mod meal_slot;
mod nutrition;
mod stats;

pub use entry::Entry;
pub use exercise_entry::{ActivityType, ExerciseEntry};
pub use food_entry::FoodEntry;
pub use goals::{
    DailyGoals, DEFAULT_CALORIES_GOAL, DEFAULT_CARBS_GOAL, DEFAULT_EXERCISE_GOAL,
    DEFAULT_FAT_GOAL, DEFAULT_PROTEIN_GOAL,
};
pub use meal_slot::MealSlot;
pub use nutrition::Nutrition;
pub use stats::DailyStats;
