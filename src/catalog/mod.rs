//! Static catalog of known foods and exercises
//!
//! Reference data used as templates when logging entries. Search is a
//! case-insensitive substring match in declaration order.

mod exercises;
mod foods;

use serde::Serialize;

use crate::models::{ActivityType, Nutrition};

pub use exercises::EXERCISES;
pub use foods::FOODS;

/// A known food, nutrition given per one serving
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogFoodItem {
    pub name: &'static str,
    #[serde(flatten)]
    pub nutrition: Nutrition,
    pub serving: &'static str,
}

/// A known exercise; burn scales linearly with duration
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogExerciseItem {
    pub name: &'static str,
    pub reference_calories_burned: f64,
    pub reference_duration_minutes: i64,
    pub activity_type: ActivityType,
}

impl CatalogExerciseItem {
    /// Calories burned per minute, `None` for a non-positive reference duration
    pub fn calories_per_minute(&self) -> Option<f64> {
        if self.reference_duration_minutes <= 0 {
            return None;
        }
        Some(self.reference_calories_burned / self.reference_duration_minutes as f64)
    }
}

fn matches(name: &str, query: &str) -> bool {
    name.to_lowercase().contains(&query.to_lowercase())
}

/// Foods whose name contains `query`. An empty query yields nothing.
pub fn search_foods(query: &str) -> Vec<&'static CatalogFoodItem> {
    if query.is_empty() {
        return Vec::new();
    }
    FOODS.iter().filter(|f| matches(f.name, query)).collect()
}

/// Exercises whose name contains `query`. An empty query yields nothing.
pub fn search_exercises(query: &str) -> Vec<&'static CatalogExerciseItem> {
    if query.is_empty() {
        return Vec::new();
    }
    EXERCISES.iter().filter(|e| matches(e.name, query)).collect()
}

/// Exact (case-insensitive) lookup by name
pub fn find_food(name: &str) -> Option<&'static CatalogFoodItem> {
    let wanted = name.trim().to_lowercase();
    FOODS.iter().find(|f| f.name.to_lowercase() == wanted)
}

/// Exact (case-insensitive) lookup by name
pub fn find_exercise(name: &str) -> Option<&'static CatalogExerciseItem> {
    let wanted = name.trim().to_lowercase();
    EXERCISES.iter().find(|e| e.name.to_lowercase() == wanted)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn food_names(items: &[&CatalogFoodItem]) -> Vec<&'static str> {
        items.iter().map(|f| f.name).collect()
    }

    fn exercise_names(items: &[&CatalogExerciseItem]) -> Vec<&'static str> {
        items.iter().map(|e| e.name).collect()
    }

    #[test]
    fn test_empty_query_returns_nothing() {
        assert!(search_foods("").is_empty());
        assert!(search_exercises("").is_empty());
    }

    #[test]
    fn test_search_foods_case_insensitive() {
        let found = search_foods("FRANGO");
        assert_eq!(food_names(&found), vec!["Frango Grelhado"]);
    }

    #[test]
    fn test_search_foods_keeps_catalog_order() {
        let found = search_foods("ão");
        assert_eq!(food_names(&found), vec!["Feijão Preto", "Pão Integral", "Salmão"]);
    }

    #[test]
    fn test_search_foods_non_ascii_case() {
        let found = search_foods("MAÇÃ");
        assert_eq!(food_names(&found), vec!["Maçã"]);
    }

    #[test]
    fn test_search_exercises() {
        let found = search_exercises("ção");
        assert_eq!(exercise_names(&found), vec!["Natação", "Musculação"]);
        assert!(search_exercises("xyz").is_empty());
    }

    #[test]
    fn test_find_by_exact_name() {
        assert_eq!(find_food("banana").map(|f| f.name), Some("Banana"));
        assert!(find_food("ban").is_none());
        assert_eq!(find_exercise(" corrida ").map(|e| e.name), Some("Corrida"));
    }

    #[test]
    fn test_calories_per_minute() {
        let corrida = find_exercise("Corrida").unwrap();
        assert_eq!(corrida.calories_per_minute(), Some(10.0));

        let broken = CatalogExerciseItem {
            name: "Broken",
            reference_calories_burned: 100.0,
            reference_duration_minutes: 0,
            activity_type: ActivityType::Cardio,
        };
        assert_eq!(broken.calories_per_minute(), None);
    }

    #[test]
    fn test_catalog_reference_durations_are_positive() {
        assert!(EXERCISES.iter().all(|e| e.reference_duration_minutes > 0));
        assert!(FOODS.iter().all(|f| f.nutrition.is_valid()));
    }
}
