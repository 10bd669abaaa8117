//! Configuration
//!
//! Loaded from environment variables at startup. Supplies the database path
//! and the daily goals the progress calculator compares against.

use std::path::PathBuf;

use thiserror::Error;

use crate::models::DailyGoals;

pub const DATABASE_PATH_VAR: &str = "FITTRACKER_DATABASE_PATH";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: '{value}' (expected a non-negative number)")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_path: PathBuf,
    pub goals: DailyGoals,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset keys fall back to defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_path = lookup(DATABASE_PATH_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(default_database_path);

        let defaults = DailyGoals::default();
        let goal = |key: &'static str, default: f64| -> Result<f64, ConfigError> {
            match lookup(key) {
                None => Ok(default),
                Some(raw) => match raw.trim().parse::<f64>() {
                    Ok(v) if v.is_finite() && v >= 0.0 => Ok(v),
                    _ => Err(ConfigError::Invalid { key, value: raw }),
                },
            }
        };

        let goals = DailyGoals {
            calories: goal("FITTRACKER_GOAL_CALORIES", defaults.calories)?,
            protein: goal("FITTRACKER_GOAL_PROTEIN", defaults.protein)?,
            carbs: goal("FITTRACKER_GOAL_CARBS", defaults.carbs)?,
            fat: goal("FITTRACKER_GOAL_FAT", defaults.fat)?,
            exercise_minutes: goal("FITTRACKER_GOAL_EXERCISE", defaults.exercise_minutes)?,
        };

        Ok(Self {
            database_path,
            goals,
        })
    }
}

/// `data/fittracker.db` under the project root, found from the executable path
fn default_database_path() -> PathBuf {
    let mut path = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."));

    // Go up from target/release or target/debug to project root
    if path.ends_with("release") || path.ends_with("debug") {
        if let Some(grandparent) = path.parent().and_then(|p| p.parent()) {
            path = grandparent.to_path_buf();
        }
    }

    path.push("data");
    path.push("fittracker.db");
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.goals, DailyGoals::default());
        assert!(config.database_path.ends_with("data/fittracker.db"));
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            (DATABASE_PATH_VAR, "/tmp/diary.db"),
            ("FITTRACKER_GOAL_CALORIES", "1800"),
            ("FITTRACKER_GOAL_EXERCISE", " 45 "),
        ]))
        .unwrap();
        assert_eq!(config.database_path, PathBuf::from("/tmp/diary.db"));
        assert_eq!(config.goals.calories, 1800.0);
        assert_eq!(config.goals.exercise_minutes, 45.0);
        assert_eq!(config.goals.protein, 150.0);
    }

    #[test]
    fn test_invalid_goal() {
        let err = Config::from_lookup(lookup(&[("FITTRACKER_GOAL_FAT", "-3")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid {
                key: "FITTRACKER_GOAL_FAT",
                value: "-3".to_string()
            }
        );
        assert!(Config::from_lookup(lookup(&[("FITTRACKER_GOAL_CARBS", "lots")])).is_err());
    }
}
