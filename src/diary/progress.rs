//! Progress calculator
//!
//! Maps a (current, goal) pair to a bounded completion percentage and the
//! amount left, identically for calories, each macro, and exercise minutes.

use serde::Serialize;

use crate::models::{DailyGoals, DailyStats};

/// Completion in `[0, 100]`. A goal of zero or less means "no target" and
/// reports 0; anything at or past the goal reports exactly 100.
pub fn progress_percentage(current: f64, goal: f64) -> f64 {
    if goal <= 0.0 || goal.is_nan() {
        return 0.0;
    }
    // max() first so a NaN current collapses to 0
    (current / goal * 100.0).max(0.0).min(100.0)
}

/// Amount still to go, never negative. Zero means the goal is reached.
pub fn remaining(current: f64, goal: f64) -> f64 {
    (goal - current).max(0.0)
}

/// Headline figure: calorie goal minus net calories, floored at zero
pub fn calories_remaining(stats: &DailyStats, goals: &DailyGoals) -> f64 {
    remaining(stats.net_calories, goals.calories)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GoalProgress {
    pub current: f64,
    pub goal: f64,
    pub percentage: f64,
    pub remaining: f64,
}

impl GoalProgress {
    pub fn new(current: f64, goal: f64) -> Self {
        Self {
            current,
            goal,
            percentage: progress_percentage(current, goal),
            remaining: remaining(current, goal),
        }
    }

    pub fn is_reached(&self) -> bool {
        self.remaining == 0.0
    }
}

/// Progress for every tracked metric. Calories are measured by net calories.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DailyProgress {
    pub calories: GoalProgress,
    pub protein: GoalProgress,
    pub carbs: GoalProgress,
    pub fat: GoalProgress,
    pub exercise_minutes: GoalProgress,
}

impl DailyProgress {
    pub fn new(stats: &DailyStats, goals: &DailyGoals) -> Self {
        Self {
            calories: GoalProgress::new(stats.net_calories, goals.calories),
            protein: GoalProgress::new(stats.protein_consumed, goals.protein),
            carbs: GoalProgress::new(stats.carbs_consumed, goals.carbs),
            fat: GoalProgress::new(stats.fat_consumed, goals.fat),
            exercise_minutes: GoalProgress::new(stats.exercise_minutes as f64, goals.exercise_minutes),
        }
    }
}
