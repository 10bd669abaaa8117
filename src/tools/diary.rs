//! Diary MCP Tools
//!
//! Catalog search, logging and removing entries, and the daily summary.
//! Mutations read the day before writing and recompute the stats from that
//! read plus the change, so a stored entry is never reported as a failure.

use serde::Serialize;
use tracing::info;

use crate::catalog::{self, CatalogExerciseItem, CatalogFoodItem};
use crate::db::{DaySnapshot, EntryStore};
use crate::diary::{
    calories_remaining, compute_stats, group_foods_by_meal, make_exercise_entry, make_food_entry,
    preview_calories_burned, Clock, DailyProgress, MealGroup, DEFAULT_EXERCISE_DURATION,
};
use crate::models::{DailyGoals, DailyStats, Entry, ExerciseEntry, FoodEntry, MealSlot};

// ============================================================================
// Response Structs
// ============================================================================

#[derive(Debug, Serialize)]
pub struct SearchFoodsResponse {
    pub query: String,
    pub foods: Vec<&'static CatalogFoodItem>,
    pub total: usize,
}

/// Catalog exercise plus its rate and the burn for the requested duration
#[derive(Debug, Serialize)]
pub struct ExerciseMatch {
    #[serde(flatten)]
    pub item: &'static CatalogExerciseItem,
    pub calories_per_minute: Option<f64>,
    pub preview_duration_minutes: i64,
    pub preview_calories_burned: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct SearchExercisesResponse {
    pub query: String,
    pub exercises: Vec<ExerciseMatch>,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct AddFoodResponse {
    pub entry: FoodEntry,
    pub stats: DailyStats,
}

#[derive(Debug, Serialize)]
pub struct AddExerciseResponse {
    pub entry: ExerciseEntry,
    pub stats: DailyStats,
}

#[derive(Debug, Serialize)]
pub struct RemoveEntryResponse {
    pub id: String,
    pub removed: bool,
    pub stats: DailyStats,
}

#[derive(Debug, Serialize)]
pub struct DailySummary {
    pub stats: DailyStats,
    pub goals: DailyGoals,
    pub progress: DailyProgress,
    pub calories_remaining: f64,
    pub food_count: usize,
    pub exercise_count: usize,
}

#[derive(Debug, Serialize)]
pub struct ListMealsResponse {
    pub meals: Vec<MealGroup>,
    pub total_entries: usize,
}

#[derive(Debug, Serialize)]
pub struct ListExercisesResponse {
    pub exercises: Vec<ExerciseEntry>,
    pub total_minutes: u64,
    pub total_calories_burned: u64,
}

// ============================================================================
// Catalog Tools
// ============================================================================

pub fn search_foods(query: &str) -> SearchFoodsResponse {
    let foods = catalog::search_foods(query);
    SearchFoodsResponse {
        query: query.to_string(),
        total: foods.len(),
        foods,
    }
}

/// Search exercises, previewing the burn for `duration` (default 30 min)
pub fn search_exercises(query: &str, duration: Option<i64>) -> SearchExercisesResponse {
    let duration = duration.unwrap_or(DEFAULT_EXERCISE_DURATION);
    let exercises: Vec<ExerciseMatch> = catalog::search_exercises(query)
        .into_iter()
        .map(|item| ExerciseMatch {
            item,
            calories_per_minute: item.calories_per_minute(),
            preview_duration_minutes: duration,
            preview_calories_burned: preview_calories_burned(item, duration).ok(),
        })
        .collect();

    SearchExercisesResponse {
        query: query.to_string(),
        total: exercises.len(),
        exercises,
    }
}

// ============================================================================
// Entry Tools
// ============================================================================

fn load_day<S: EntryStore + ?Sized>(store: &S) -> Result<DaySnapshot, String> {
    store
        .snapshot()
        .map_err(|e| format!("Failed to load entries: {}", e))
}

/// Log one serving of the catalog food `name`. Meal defaults to lunch.
pub fn add_food<S: EntryStore + ?Sized>(
    store: &S,
    clock: &dyn Clock,
    name: &str,
    meal: Option<&str>,
) -> Result<AddFoodResponse, String> {
    let item = catalog::find_food(name).ok_or_else(|| format!("Unknown food: '{}'", name))?;
    let meal: MealSlot = match meal {
        Some(m) => m.parse()?,
        None => MealSlot::default(),
    };

    let entry = make_food_entry(item, meal, clock.now());

    // Read before writing: once the entry is stored nothing below may fail
    let mut day = load_day(store)?;
    store
        .append(&Entry::Food(entry.clone()))
        .map_err(|e| format!("Failed to save food entry: {}", e))?;
    info!(id = %entry.id, name = %entry.name, meal = %entry.meal, "Logged food");

    day.foods.push(entry.clone());
    Ok(AddFoodResponse {
        stats: compute_stats(&day.foods, &day.exercises),
        entry,
    })
}

/// Log `duration` minutes (default 30) of the catalog exercise `name`
pub fn add_exercise<S: EntryStore + ?Sized>(
    store: &S,
    clock: &dyn Clock,
    name: &str,
    duration: Option<i64>,
) -> Result<AddExerciseResponse, String> {
    let item =
        catalog::find_exercise(name).ok_or_else(|| format!("Unknown exercise: '{}'", name))?;
    let duration = duration.unwrap_or(DEFAULT_EXERCISE_DURATION);

    let entry = make_exercise_entry(item, duration, clock.now()).map_err(|e| e.to_string())?;

    let mut day = load_day(store)?;
    store
        .append(&Entry::Exercise(entry.clone()))
        .map_err(|e| format!("Failed to save exercise entry: {}", e))?;
    info!(
        id = %entry.id,
        name = %entry.name,
        minutes = entry.duration_minutes,
        calories = entry.calories_burned,
        "Logged exercise"
    );

    day.exercises.push(entry.clone());
    Ok(AddExerciseResponse {
        stats: compute_stats(&day.foods, &day.exercises),
        entry,
    })
}

/// Remove a food or exercise entry. Unknown ids are a no-op.
pub fn remove_entry<S: EntryStore + ?Sized>(store: &S, id: &str) -> Result<RemoveEntryResponse, String> {
    let mut day = load_day(store)?;
    let removed = store
        .remove_by_id(id)
        .map_err(|e| format!("Failed to remove entry: {}", e))?;

    day.foods.retain(|f| f.id != id);
    day.exercises.retain(|e| e.id != id);
    Ok(RemoveEntryResponse {
        id: id.to_string(),
        removed,
        stats: compute_stats(&day.foods, &day.exercises),
    })
}

// ============================================================================
// Summary Tools
// ============================================================================

pub fn get_daily_summary<S: EntryStore + ?Sized>(
    store: &S,
    goals: &DailyGoals,
) -> Result<DailySummary, String> {
    let day = load_day(store)?;
    let stats = compute_stats(&day.foods, &day.exercises);

    Ok(DailySummary {
        progress: DailyProgress::new(&stats, goals),
        calories_remaining: calories_remaining(&stats, goals),
        goals: *goals,
        food_count: day.foods.len(),
        exercise_count: day.exercises.len(),
        stats,
    })
}

pub fn list_meals<S: EntryStore + ?Sized>(store: &S) -> Result<ListMealsResponse, String> {
    let day = load_day(store)?;

    Ok(ListMealsResponse {
        meals: group_foods_by_meal(&day.foods),
        total_entries: day.foods.len(),
    })
}

pub fn list_exercises<S: EntryStore + ?Sized>(store: &S) -> Result<ListExercisesResponse, String> {
    let day = load_day(store)?;
    let stats = compute_stats(&[], &day.exercises);

    Ok(ListExercisesResponse {
        exercises: day.exercises,
        total_minutes: stats.exercise_minutes,
        total_calories_burned: stats.calories_burned,
    })
}
