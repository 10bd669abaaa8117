//! Print the stored day's totals and goal progress
//! Usage: cargo run --bin daily_summary

use fittracker::build_info;
use fittracker::config::Config;
use fittracker::db::{Database, SqliteEntryStore};
use fittracker::diary::GoalProgress;
use fittracker::tools::diary;

fn print_progress(label: &str, unit: &str, progress: &GoalProgress) {
    let status = if progress.is_reached() {
        "goal reached".to_string()
    } else {
        format!("{:.0} {} to go", progress.remaining, unit)
    };
    println!(
        "  {:<10} {:>7.0} / {:<5} {} ({:>3.0}%) - {}",
        label, progress.current, progress.goal, unit, progress.percentage, status
    );
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", build_info::banner());
    let config = Config::from_env()?;
    println!("Database: {}", config.database_path.display());

    if !config.database_path.exists() {
        println!("No diary found");
        return Ok(());
    }

    let store = SqliteEntryStore::new(Database::open(&config.database_path)?);

    let meals = diary::list_meals(&store)?;
    for group in &meals.meals {
        println!("\n{} ({:.0} kcal)", group.label, group.total_calories);
        for entry in &group.entries {
            println!(
                "  {}  {:<18} {:>6.0} kcal  {}",
                entry.time, entry.name, entry.nutrition.calories, entry.serving
            );
        }
    }

    let exercises = diary::list_exercises(&store)?;
    if !exercises.exercises.is_empty() {
        println!("\nExercícios");
        for entry in &exercises.exercises {
            println!(
                "  {}  {:<18} {:>3} min {:>6} kcal  {}",
                entry.time,
                entry.name,
                entry.duration_minutes,
                entry.calories_burned,
                entry.activity_type.label()
            );
        }
    }

    let summary = diary::get_daily_summary(&store, &config.goals)?;
    let stats = &summary.stats;
    println!(
        "\nConsumed {:.0} kcal, burned {} kcal, net {:.0} kcal, {:.0} kcal remaining",
        stats.calories_consumed, stats.calories_burned, stats.net_calories, summary.calories_remaining
    );
    print_progress("Calories", "kcal", &summary.progress.calories);
    print_progress("Protein", "g", &summary.progress.protein);
    print_progress("Carbs", "g", &summary.progress.carbs);
    print_progress("Fat", "g", &summary.progress.fat);
    print_progress("Exercise", "min", &summary.progress.exercise_minutes);

    Ok(())
}
