//! Stats aggregator
//!
//! Folds the day's food and exercise entries into totals.

use serde::Serialize;

use crate::models::{DailyStats, ExerciseEntry, FoodEntry, MealSlot, Nutrition};

/// Totals for the day. Pure: the same snapshot always yields the same stats.
pub fn compute_stats(foods: &[FoodEntry], exercises: &[ExerciseEntry]) -> DailyStats {
    let consumed: Nutrition = foods.iter().map(|f| f.nutrition).sum();
    let calories_burned: u64 = exercises.iter().map(|e| u64::from(e.calories_burned)).sum();
    let exercise_minutes: u64 = exercises.iter().map(|e| u64::from(e.duration_minutes)).sum();

    DailyStats {
        calories_consumed: consumed.calories,
        calories_burned,
        protein_consumed: consumed.protein,
        carbs_consumed: consumed.carbs,
        fat_consumed: consumed.fat,
        exercise_minutes,
        net_calories: consumed.calories - calories_burned as f64,
    }
}

/// Food entries of one meal slot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MealGroup {
    pub meal: MealSlot,
    pub label: &'static str,
    pub entries: Vec<FoodEntry>,
    pub total_calories: f64,
}

/// Group foods by meal slot. Groups appear in the order their first entry
/// was logged, entries keep their relative order, and empty slots are omitted.
pub fn group_foods_by_meal(foods: &[FoodEntry]) -> Vec<MealGroup> {
    let mut groups: Vec<MealGroup> = Vec::new();

    for food in foods {
        match groups.iter_mut().find(|g| g.meal == food.meal) {
            Some(group) => {
                group.total_calories += food.calories();
                group.entries.push(food.clone());
            }
            None => groups.push(MealGroup {
                meal: food.meal,
                label: food.meal.label(),
                entries: vec![food.clone()],
                total_calories: food.calories(),
            }),
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ActivityType;

    fn food(id: &str, calories: f64, meal: MealSlot) -> FoodEntry {
        FoodEntry {
            id: id.to_string(),
            name: format!("food {}", id),
            nutrition: Nutrition::new(calories, 10.0, 20.0, 5.0),
            serving: "100g".to_string(),
            time: "12:00".to_string(),
            meal,
        }
    }

    fn exercise(id: &str, minutes: u32, calories: u32) -> ExerciseEntry {
        ExerciseEntry {
            id: id.to_string(),
            name: format!("exercise {}", id),
            duration_minutes: minutes,
            calories_burned: calories,
            activity_type: ActivityType::Cardio,
            time: "18:00".to_string(),
        }
    }

    #[test]
    fn test_empty_day_is_all_zero() {
        let stats = compute_stats(&[], &[]);
        assert_eq!(stats, DailyStats::default());
        assert_eq!(stats.net_calories, 0.0);
    }

    #[test]
    fn test_deficit_goes_negative() {
        let foods = vec![food("1", 130.0, MealSlot::Lunch), food("2", 165.0, MealSlot::Lunch)];
        let exercises = vec![exercise("3", 30, 300)];

        let stats = compute_stats(&foods, &exercises);
        assert_eq!(stats.calories_consumed, 295.0);
        assert_eq!(stats.calories_burned, 300);
        assert_eq!(stats.net_calories, -5.0);
        assert_eq!(stats.exercise_minutes, 30);
        assert_eq!(stats.protein_consumed, 20.0);
        assert_eq!(stats.carbs_consumed, 40.0);
        assert_eq!(stats.fat_consumed, 10.0);
    }

    #[test]
    fn test_net_is_consumed_minus_burned() {
        let foods = vec![food("1", 500.0, MealSlot::Dinner), food("2", 0.0, MealSlot::Snack)];
        let exercises = vec![exercise("3", 45, 200), exercise("4", 10, 0)];

        let stats = compute_stats(&foods, &exercises);
        assert_eq!(stats.net_calories, stats.calories_consumed - stats.calories_burned as f64);
        assert_eq!(stats.exercise_minutes, 55);
    }

    #[test]
    fn test_order_and_repetition_do_not_matter() {
        let mut foods = vec![
            food("1", 130.0, MealSlot::Breakfast),
            food("2", 89.0, MealSlot::Lunch),
            food("3", 52.0, MealSlot::Snack),
        ];
        let exercises = vec![exercise("4", 30, 150)];

        let first = compute_stats(&foods, &exercises);
        assert_eq!(first, compute_stats(&foods, &exercises));

        foods.reverse();
        assert_eq!(first, compute_stats(&foods, &exercises));
    }

    #[test]
    fn test_group_foods_by_meal() {
        let foods = vec![
            food("1", 100.0, MealSlot::Breakfast),
            food("2", 200.0, MealSlot::Lunch),
            food("3", 50.0, MealSlot::Breakfast),
        ];

        let groups = group_foods_by_meal(&foods);
        assert_eq!(groups.len(), 2);

        assert_eq!(groups[0].meal, MealSlot::Breakfast);
        assert_eq!(groups[0].label, "Café da Manhã");
        let ids: Vec<&str> = groups[0].entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
        assert_eq!(groups[0].total_calories, 150.0);

        assert_eq!(groups[1].meal, MealSlot::Lunch);
        assert_eq!(groups[1].entries.len(), 1);
        assert_eq!(groups[1].total_calories, 200.0);

        assert!(!groups.iter().any(|g| g.meal == MealSlot::Dinner || g.meal == MealSlot::Snack));
    }

    #[test]
    fn test_group_empty() {
        assert!(group_foods_by_meal(&[]).is_empty());
    }
}
