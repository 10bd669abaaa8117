//! Exercise Entry model
//!
//! A single exercise activity logged for the day.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of activity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityType {
    Cardio,
    Strength,
    Flexibility,
    Sports,
}

impl ActivityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityType::Cardio => "cardio",
            ActivityType::Strength => "strength",
            ActivityType::Flexibility => "flexibility",
            ActivityType::Sports => "sports",
        }
    }

    /// Display label shown to the user
    pub fn label(&self) -> &'static str {
        match self {
            ActivityType::Cardio => "Cardio",
            ActivityType::Strength => "Força",
            ActivityType::Flexibility => "Flexibilidade",
            ActivityType::Sports => "Esportes",
        }
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cardio" => Ok(ActivityType::Cardio),
            "strength" => Ok(ActivityType::Strength),
            "flexibility" => Ok(ActivityType::Flexibility),
            "sports" => Ok(ActivityType::Sports),
            _ => Err(format!(
                "Invalid activity type '{}'. Valid options: cardio, strength, flexibility, sports",
                s
            )),
        }
    }
}

/// A logged exercise entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseEntry {
    pub id: String,
    pub name: String,
    /// Always >= 1
    pub duration_minutes: u32,
    /// Derived from the catalog rate and the chosen duration
    pub calories_burned: u32,
    pub activity_type: ActivityType,
    /// Local time of day the entry was logged, `HH:MM`
    pub time: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_type_from_str() {
        assert_eq!(ActivityType::from_str("cardio").unwrap(), ActivityType::Cardio);
        assert_eq!(ActivityType::from_str("Strength").unwrap(), ActivityType::Strength);
        assert_eq!(
            ActivityType::from_str("FLEXIBILITY").unwrap(),
            ActivityType::Flexibility
        );
        assert_eq!(ActivityType::from_str("sports").unwrap(), ActivityType::Sports);
        assert!(ActivityType::from_str("swimming").is_err());
    }

    #[test]
    fn test_activity_type_display_matches_serde() {
        for t in [
            ActivityType::Cardio,
            ActivityType::Strength,
            ActivityType::Flexibility,
            ActivityType::Sports,
        ] {
            let json = serde_json::to_string(&t).unwrap();
            assert_eq!(json, format!("\"{}\"", t));
        }
    }
}
