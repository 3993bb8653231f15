pub mod aggregate;
pub mod config;
pub mod difficulty;
pub mod duration;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod loader;
pub mod model;
pub mod output;

use std::path::Path;

use log::{info, warn};
use serde_json::Value;

pub use crate::config::EtlConfig;
pub use crate::error::EtlError;
pub use crate::fetch::FetchOutcome;
pub use crate::model::{AggregateRow, ClassifiedRecipe, Difficulty, Recipe};

/// Rates every recipe from its `cookTime`/`prepTime` fields.
///
/// A field that is present as a string goes through the ISO-8601 parser and
/// a malformed value is an error; a field that is absent (or not a string)
/// counts as unknown, which makes the recipe `Unknown Difficulty`.
pub fn classify_recipes(recipes: Vec<Recipe>) -> Result<Vec<ClassifiedRecipe>, EtlError> {
    let mut classified = Vec::with_capacity(recipes.len());
    for recipe in recipes {
        let cook = minutes_field(&recipe, "cookTime")?;
        let prep = minutes_field(&recipe, "prepTime")?;
        let (difficulty, total_time) = difficulty::classify(cook, prep);
        classified.push(ClassifiedRecipe { recipe, difficulty, total_time });
    }
    Ok(classified)
}

fn minutes_field(recipe: &Recipe, key: &str) -> Result<Option<f64>, EtlError> {
    match recipe.fields.get(key) {
        Some(Value::String(raw)) => duration::duration_to_minutes(raw).map(Some),
        _ => Ok(None),
    }
}

/// Runs the whole batch: fetch, load, filter, classify, aggregate, write.
///
/// When no recipe contains a chili ingredient the run stops early and no
/// output file is written, not even an empty one.
pub fn run_etl(config: &EtlConfig) -> Result<(), EtlError> {
    info!("Starting recipes ETL");

    let save_path = Path::new(&config.save_file_path);
    let outcome = fetch::fetch_source(&config.source_file_url, save_path);
    if outcome.is_success() {
        info!("{outcome}");
    } else {
        // The load below is attempted regardless and fails on the missing
        // file; the download outcome itself never aborts the run.
        warn!("{outcome}");
    }

    let records = loader::read_records(save_path)?;
    info!("Loaded {} records from {}", records.len(), save_path.display());

    let matched = extract::extract_chili_recipes(records);
    if matched.is_empty() {
        info!("No recipes with a chili ingredient; skipping output");
        return Ok(());
    }
    info!("{} recipes contain a chili ingredient", matched.len());

    let classified = classify_recipes(matched)?;
    let rated: Vec<ClassifiedRecipe> = classified
        .into_iter()
        .filter(|recipe| recipe.difficulty != Difficulty::Unknown)
        .collect();

    let summary = aggregate::average_time_by_difficulty(&rated);
    output::write_summary(Path::new(&config.result_output_file_path), &summary)?;
    output::write_filtered_recipes(Path::new(&config.chile_output_file_path), &rated)?;

    info!(
        "Wrote {} filtered recipes and {} summary rows",
        rated.len(),
        summary.len()
    );
    Ok(())
}
