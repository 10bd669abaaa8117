//! Either kind of logged entry, as handed to the entry store

use serde::{Deserialize, Serialize};

use super::{ExerciseEntry, FoodEntry};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Entry {
    Food(FoodEntry),
    Exercise(ExerciseEntry),
}

impl Entry {
    pub fn id(&self) -> &str {
        match self {
            Entry::Food(f) => &f.id,
            Entry::Exercise(e) => &e.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Entry::Food(f) => &f.name,
            Entry::Exercise(e) => &e.name,
        }
    }
}

impl From<FoodEntry> for Entry {
    fn from(entry: FoodEntry) -> Self {
        Entry::Food(entry)
    }
}

impl From<ExerciseEntry> for Entry {
    fn from(entry: ExerciseEntry) -> Self {
        Entry::Exercise(entry)
    }
}
