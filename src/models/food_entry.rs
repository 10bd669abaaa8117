//! Food Entry model
//!
//! A single food item logged for the day.

use serde::{Deserialize, Serialize};

use super::{MealSlot, Nutrition};

/// A logged food entry. Nutrition is copied from the catalog item at
/// creation time and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodEntry {
    pub id: String,
    pub name: String,
    #[serde(flatten)]
    pub nutrition: Nutrition,
    /// Serving label, e.g. "100g" or "1 unidade"
    pub serving: String,
    /// Local time of day the entry was logged, `HH:MM`
    pub time: String,
    pub meal: MealSlot,
}

impl FoodEntry {
    pub fn calories(&self) -> f64 {
        self.nutrition.calories
    }
}
