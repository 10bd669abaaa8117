//! Entry store
//!
//! Owns the authoritative food and exercise lists for the day. The diary core
//! never touches a store; callers take a [`DaySnapshot`] and pass its lists in.

use std::cell::RefCell;

use rusqlite::{params, Connection, ErrorCode, Row};
use serde::Serialize;
use tracing::{debug, info, warn};

use super::connection::{Database, DbError, DbResult};
use crate::models::{Entry, ExerciseEntry, FoodEntry, Nutrition};

/// One consistent read of both lists, each in insertion order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DaySnapshot {
    pub foods: Vec<FoodEntry>,
    pub exercises: Vec<ExerciseEntry>,
}

pub trait EntryStore {
    /// Append an entry to the end of its list
    fn append(&self, entry: &Entry) -> DbResult<()>;

    /// Remove the entry with `id` from whichever list holds it.
    /// Returns `false`, leaving both lists untouched, when no entry matches.
    fn remove_by_id(&self, id: &str) -> DbResult<bool>;

    fn snapshot(&self) -> DbResult<DaySnapshot>;
}

// ============================================================================
// SQLite
// ============================================================================

/// Store backed by the SQLite database
#[derive(Clone)]
pub struct SqliteEntryStore {
    database: Database,
}

/// Outcome of decoding one stored row
enum Decoded<T> {
    Valid(T),
    Malformed { id: String, reason: String },
}

impl SqliteEntryStore {
    /// Wrap an already migrated database
    pub fn new(database: Database) -> Self {
        Self { database }
    }

    fn food_from_row(row: &Row) -> rusqlite::Result<Decoded<FoodEntry>> {
        let id: String = row.get("id")?;
        let meal_str: String = row.get("meal")?;
        let nutrition = Nutrition::new(
            row.get("calories")?,
            row.get("protein")?,
            row.get("carbs")?,
            row.get("fat")?,
        );

        let meal = match meal_str.parse() {
            Ok(meal) => meal,
            Err(reason) => return Ok(Decoded::Malformed { id, reason }),
        };
        if !nutrition.is_valid() {
            return Ok(Decoded::Malformed {
                id,
                reason: "negative or non-finite nutrition value".to_string(),
            });
        }

        Ok(Decoded::Valid(FoodEntry {
            id,
            name: row.get("name")?,
            nutrition,
            serving: row.get("serving")?,
            time: row.get("time")?,
            meal,
        }))
    }

    fn exercise_from_row(row: &Row) -> rusqlite::Result<Decoded<ExerciseEntry>> {
        let id: String = row.get("id")?;
        let type_str: String = row.get("activity_type")?;
        let duration: i64 = row.get("duration_minutes")?;
        let calories: i64 = row.get("calories_burned")?;

        let activity_type = match type_str.parse() {
            Ok(t) => t,
            Err(reason) => return Ok(Decoded::Malformed { id, reason }),
        };
        let duration_minutes = match u32::try_from(duration) {
            Ok(d) if d >= 1 => d,
            _ => {
                return Ok(Decoded::Malformed {
                    id,
                    reason: format!("invalid duration {}", duration),
                })
            }
        };
        let Ok(calories_burned) = u32::try_from(calories) else {
            return Ok(Decoded::Malformed {
                id,
                reason: format!("invalid calories burned {}", calories),
            });
        };

        Ok(Decoded::Valid(ExerciseEntry {
            id,
            name: row.get("name")?,
            duration_minutes,
            calories_burned,
            activity_type,
            time: row.get("time")?,
        }))
    }

    /// Run `sql` and decode each row, dropping rows that do not decode
    fn load<T>(
        conn: &Connection,
        table: &str,
        sql: &str,
        decode: fn(&Row) -> rusqlite::Result<Decoded<T>>,
    ) -> DbResult<Vec<T>> {
        let mut stmt = conn.prepare(sql)?;
        let rows = stmt.query_map([], decode)?;

        let mut entries = Vec::new();
        for row in rows {
            match row {
                Ok(Decoded::Valid(entry)) => entries.push(entry),
                Ok(Decoded::Malformed { id, reason }) => {
                    warn!(table, id = %id, %reason, "Dropping malformed entry");
                }
                Err(
                    e @ (rusqlite::Error::InvalidColumnType(..)
                    | rusqlite::Error::FromSqlConversionFailure(..)
                    | rusqlite::Error::IntegralValueOutOfRange(..)),
                ) => {
                    warn!(table, error = %e, "Dropping undecodable entry");
                }
                Err(e) => return Err(e.into()),
            }
        }
        Ok(entries)
    }

    fn insert_food(conn: &Connection, entry: &FoodEntry) -> rusqlite::Result<usize> {
        conn.execute(
            r#"
            INSERT INTO food_entries (id, name, calories, protein, carbs, fat, serving, time, meal)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
            "#,
            params![
                entry.id,
                entry.name,
                entry.nutrition.calories,
                entry.nutrition.protein,
                entry.nutrition.carbs,
                entry.nutrition.fat,
                entry.serving,
                entry.time,
                entry.meal.as_str(),
            ],
        )
    }

    fn insert_exercise(conn: &Connection, entry: &ExerciseEntry) -> rusqlite::Result<usize> {
        conn.execute(
            r#"
            INSERT INTO exercise_entries (id, name, duration_minutes, calories_burned, activity_type, time)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
            params![
                entry.id,
                entry.name,
                entry.duration_minutes,
                entry.calories_burned,
                entry.activity_type.as_str(),
                entry.time,
            ],
        )
    }
}

impl EntryStore for SqliteEntryStore {
    fn append(&self, entry: &Entry) -> DbResult<()> {
        self.database.with_conn(|conn| {
            let taken: bool = conn.query_row(
                "SELECT EXISTS(SELECT 1 FROM food_entries WHERE id = ?1)
                     OR EXISTS(SELECT 1 FROM exercise_entries WHERE id = ?1)",
                [entry.id()],
                |row| row.get(0),
            )?;
            if taken {
                return Err(DbError::DuplicateId(entry.id().to_string()));
            }

            let result = match entry {
                Entry::Food(food) => Self::insert_food(conn, food),
                Entry::Exercise(exercise) => Self::insert_exercise(conn, exercise),
            };
            match result {
                Ok(_) => {
                    debug!(id = entry.id(), name = entry.name(), "Appended entry");
                    Ok(())
                }
                Err(rusqlite::Error::SqliteFailure(e, _))
                    if e.code == ErrorCode::ConstraintViolation =>
                {
                    Err(DbError::DuplicateId(entry.id().to_string()))
                }
                Err(e) => Err(e.into()),
            }
        })
    }

    fn remove_by_id(&self, id: &str) -> DbResult<bool> {
        self.database.with_conn(|conn| {
            let mut rows = conn.execute("DELETE FROM food_entries WHERE id = ?1", [id])?;
            if rows == 0 {
                rows = conn.execute("DELETE FROM exercise_entries WHERE id = ?1", [id])?;
            }
            if rows > 0 {
                info!(id, "Removed entry");
            }
            Ok(rows > 0)
        })
    }

    fn snapshot(&self) -> DbResult<DaySnapshot> {
        self.database.with_conn(|conn| {
            let tx = conn.unchecked_transaction()?;
            let foods = Self::load(
                &tx,
                "food_entries",
                "SELECT * FROM food_entries ORDER BY seq",
                Self::food_from_row,
            )?;
            let exercises = Self::load(
                &tx,
                "exercise_entries",
                "SELECT * FROM exercise_entries ORDER BY seq",
                Self::exercise_from_row,
            )?;
            tx.commit()?;

            Ok(DaySnapshot { foods, exercises })
        })
    }
}

// ============================================================================
// In-memory
// ============================================================================

/// Store that lives only as long as the process; single-threaded
#[derive(Debug, Default)]
pub struct MemoryEntryStore {
    day: RefCell<DaySnapshot>,
}

impl MemoryEntryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn contains(day: &DaySnapshot, id: &str) -> bool {
        day.foods.iter().any(|f| f.id == id) || day.exercises.iter().any(|e| e.id == id)
    }
}

impl EntryStore for MemoryEntryStore {
    fn append(&self, entry: &Entry) -> DbResult<()> {
        let mut day = self.day.borrow_mut();
        if Self::contains(&day, entry.id()) {
            return Err(DbError::DuplicateId(entry.id().to_string()));
        }
        match entry {
            Entry::Food(food) => day.foods.push(food.clone()),
            Entry::Exercise(exercise) => day.exercises.push(exercise.clone()),
        }
        Ok(())
    }

    fn remove_by_id(&self, id: &str) -> DbResult<bool> {
        let mut day = self.day.borrow_mut();
        let before = day.foods.len() + day.exercises.len();
        day.foods.retain(|f| f.id != id);
        day.exercises.retain(|e| e.id != id);
        Ok(day.foods.len() + day.exercises.len() < before)
    }

    fn snapshot(&self) -> DbResult<DaySnapshot> {
        Ok(self.day.borrow().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActivityType, MealSlot};

    fn sqlite_store() -> SqliteEntryStore {
        SqliteEntryStore::new(Database::open_in_memory().unwrap())
    }

    fn food(id: &str, meal: MealSlot) -> Entry {
        Entry::Food(FoodEntry {
            id: id.to_string(),
            name: "Arroz Branco".to_string(),
            nutrition: Nutrition::new(130.0, 2.7, 28.0, 0.3),
            serving: "100g".to_string(),
            time: "12:30".to_string(),
            meal,
        })
    }

    fn exercise(id: &str) -> Entry {
        Entry::Exercise(ExerciseEntry {
            id: id.to_string(),
            name: "Corrida".to_string(),
            duration_minutes: 45,
            calories_burned: 450,
            activity_type: ActivityType::Cardio,
            time: "07:00".to_string(),
        })
    }

    fn check_append_and_remove(store: &dyn EntryStore) {
        store.append(&food("f1", MealSlot::Breakfast)).unwrap();
        store.append(&exercise("e1")).unwrap();
        store.append(&food("f2", MealSlot::Lunch)).unwrap();

        let day = store.snapshot().unwrap();
        let ids: Vec<&str> = day.foods.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["f1", "f2"]);
        assert_eq!(day.exercises.len(), 1);
        assert_eq!(Entry::Food(day.foods[0].clone()), food("f1", MealSlot::Breakfast));
        assert_eq!(Entry::Exercise(day.exercises[0].clone()), exercise("e1"));

        assert!(store.remove_by_id("f1").unwrap());
        assert!(store.remove_by_id("e1").unwrap());

        let day = store.snapshot().unwrap();
        assert_eq!(day.foods.len(), 1);
        assert_eq!(day.foods[0].id, "f2");
        assert!(day.exercises.is_empty());
    }

    fn check_remove_unknown_is_noop(store: &dyn EntryStore) {
        store.append(&food("f1", MealSlot::Dinner)).unwrap();
        let before = store.snapshot().unwrap();

        assert!(!store.remove_by_id("missing").unwrap());
        assert_eq!(store.snapshot().unwrap(), before);
    }

    fn check_duplicate_id_rejected(store: &dyn EntryStore) {
        store.append(&food("same", MealSlot::Snack)).unwrap();
        let err = store.append(&exercise("same")).unwrap_err();
        assert!(matches!(err, DbError::DuplicateId(id) if id == "same"));
    }

    #[test]
    fn test_sqlite_append_and_remove() {
        check_append_and_remove(&sqlite_store());
    }

    #[test]
    fn test_sqlite_remove_unknown_is_noop() {
        check_remove_unknown_is_noop(&sqlite_store());
    }

    #[test]
    fn test_sqlite_duplicate_id_rejected() {
        check_duplicate_id_rejected(&sqlite_store());
    }

    #[test]
    fn test_memory_append_and_remove() {
        check_append_and_remove(&MemoryEntryStore::new());
    }

    #[test]
    fn test_memory_remove_unknown_is_noop() {
        check_remove_unknown_is_noop(&MemoryEntryStore::new());
    }

    #[test]
    fn test_memory_duplicate_id_rejected() {
        check_duplicate_id_rejected(&MemoryEntryStore::new());
    }

    #[test]
    fn test_sqlite_drops_malformed_rows() {
        let store = sqlite_store();
        store.append(&food("good", MealSlot::Lunch)).unwrap();
        store.append(&exercise("run")).unwrap();

        store
            .database
            .with_conn(|conn| {
                conn.execute_batch(
                    r#"
                    INSERT INTO food_entries (id, name, calories, serving, time, meal)
                    VALUES ('bad-meal', 'X', 10, '100g', '10:00', 'brunch');
                    INSERT INTO food_entries (id, name, calories, serving, time, meal)
                    VALUES ('bad-cal', 'X', -10, '100g', '10:00', 'lunch');
                    INSERT INTO food_entries (id, name, calories, serving, time, meal)
                    VALUES ('bad-type', 'X', 'lots', '100g', '10:00', 'lunch');
                    INSERT INTO exercise_entries (id, name, duration_minutes, calories_burned, activity_type, time)
                    VALUES ('bad-duration', 'Y', 0, 10, 'cardio', '10:00');
                    INSERT INTO exercise_entries (id, name, duration_minutes, calories_burned, activity_type, time)
                    VALUES ('bad-kind', 'Y', 10, 10, 'dancing', '10:00');
                    "#,
                )?;
                Ok(())
            })
            .unwrap();

        let day = store.snapshot().unwrap();
        let food_ids: Vec<&str> = day.foods.iter().map(|f| f.id.as_str()).collect();
        let exercise_ids: Vec<&str> = day.exercises.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(food_ids, vec!["good"]);
        assert_eq!(exercise_ids, vec!["run"]);
    }

    #[test]
    fn test_sqlite_persists_across_reopen() {
        let dir = std::env::temp_dir().join(format!("fittracker-{}", uuid::Uuid::new_v4()));
        let path = dir.join("diary.db");

        {
            SqliteEntryStore::new(Database::open(&path).unwrap())
                .append(&food("kept", MealSlot::Breakfast))
                .unwrap();
        }

        let day = SqliteEntryStore::new(Database::open(&path).unwrap())
            .snapshot()
            .unwrap();
        assert_eq!(day.foods.len(), 1);
        assert_eq!(day.foods[0].id, "kept");

        std::fs::remove_dir_all(&dir).ok();
    }
}
