//! Daily stats
//!
//! Derived totals for the day. Always produced by
//! [`compute_stats`](crate::diary::compute_stats), never stored.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyStats {
    pub calories_consumed: f64,
    pub calories_burned: u64,
    pub protein_consumed: f64,
    pub carbs_consumed: f64,
    pub fat_consumed: f64,
    pub exercise_minutes: u64,
    /// Consumed minus burned; negative on a deficit
    pub net_calories: f64,
}
