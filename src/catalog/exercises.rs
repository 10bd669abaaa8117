//! Known exercises, calories burned over a reference duration

use super::CatalogExerciseItem;
use crate::models::ActivityType;

const fn exercise(
    name: &'static str,
    calories: f64,
    minutes: i64,
    activity_type: ActivityType,
) -> CatalogExerciseItem {
    CatalogExerciseItem {
        name,
        reference_calories_burned: calories,
        reference_duration_minutes: minutes,
        activity_type,
    }
}

pub static EXERCISES: [CatalogExerciseItem; 10] = [
    exercise("Corrida", 300.0, 30, ActivityType::Cardio),
    exercise("Caminhada", 150.0, 30, ActivityType::Cardio),
    exercise("Ciclismo", 250.0, 30, ActivityType::Cardio),
    exercise("Natação", 400.0, 30, ActivityType::Cardio),
    exercise("Musculação", 200.0, 45, ActivityType::Strength),
    exercise("Yoga", 120.0, 45, ActivityType::Flexibility),
    exercise("Futebol", 350.0, 60, ActivityType::Sports),
    exercise("Basquete", 300.0, 60, ActivityType::Sports),
    exercise("Dança", 250.0, 45, ActivityType::Cardio),
    exercise("Pilates", 180.0, 45, ActivityType::Flexibility),
];
