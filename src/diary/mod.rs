//! Daily diary core
//!
//! Pure functions that turn catalog items into entries and fold the day's
//! entries into stats and goal progress. Nothing here holds state or does I/O;
//! callers pass in a snapshot of the entry lists on every call.

mod clock;
mod error;
mod factory;
mod progress;
mod stats;

pub use clock::{format_time, Clock, FixedClock, SystemClock};
pub use error::EntryError;
pub use factory::{
    make_exercise_entry, make_food_entry, new_entry_id, preview_calories_burned,
    DEFAULT_EXERCISE_DURATION,
};
pub use progress::{calories_remaining, progress_percentage, remaining, DailyProgress, GoalProgress};
pub use stats::{compute_stats, group_foods_by_meal, MealGroup};
