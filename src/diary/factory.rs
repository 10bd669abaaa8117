//! Entry factory
//!
//! Builds logged entries from catalog items, doing all the derived-value
//! arithmetic (calorie burn rescaled to the chosen duration).

use chrono::NaiveDateTime;
use uuid::Uuid;

use super::clock::format_time;
use super::error::EntryError;
use crate::catalog::{CatalogExerciseItem, CatalogFoodItem};
use crate::models::{ExerciseEntry, FoodEntry, MealSlot};

/// Duration offered before the user picks one
pub const DEFAULT_EXERCISE_DURATION: i64 = 30;

/// Fresh identity for a new entry
pub fn new_entry_id() -> String {
    Uuid::new_v4().to_string()
}

/// Log one serving of `item` under `meal`
pub fn make_food_entry(item: &CatalogFoodItem, meal: MealSlot, now: NaiveDateTime) -> FoodEntry {
    FoodEntry {
        id: new_entry_id(),
        name: item.name.to_string(),
        nutrition: item.nutrition,
        serving: item.serving.to_string(),
        time: format_time(&now),
        meal,
    }
}

/// Calories `item` burns over `duration` minutes, rounded half away from zero
pub fn preview_calories_burned(item: &CatalogExerciseItem, duration: i64) -> Result<u32, EntryError> {
    if duration < 1 {
        return Err(EntryError::duration(duration, "must be at least 1 minute"));
    }
    if duration > i64::from(u32::MAX) {
        return Err(EntryError::duration(duration, "exceeds the longest recordable duration"));
    }

    let calories = item.reference_calories_burned;
    if !calories.is_finite() || calories < 0.0 {
        return Err(EntryError::InvalidCatalogItem {
            name: item.name.to_string(),
            reason: format!("reference calories {} must be a non-negative number", calories),
        });
    }
    let per_minute = item.calories_per_minute().ok_or_else(|| EntryError::InvalidCatalogItem {
        name: item.name.to_string(),
        reason: format!(
            "reference duration {} must be positive",
            item.reference_duration_minutes
        ),
    })?;

    let burned = (per_minute * duration as f64).round();
    if burned > f64::from(u32::MAX) {
        return Err(EntryError::duration(
            duration,
            "burns more calories than an entry can record",
        ));
    }
    Ok(burned as u32)
}

/// Log `duration` minutes of `item`
pub fn make_exercise_entry(
    item: &CatalogExerciseItem,
    duration: i64,
    now: NaiveDateTime,
) -> Result<ExerciseEntry, EntryError> {
    let calories_burned = preview_calories_burned(item, duration)?;

    Ok(ExerciseEntry {
        id: new_entry_id(),
        name: item.name.to_string(),
        duration_minutes: duration as u32,
        calories_burned,
        activity_type: item.activity_type,
        time: format_time(&now),
    })
}
