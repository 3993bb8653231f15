use std::collections::HashSet;
use std::path::Path;

use csv::WriterBuilder;
use serde_json::Value;

use crate::aggregate::AVERAGE_TOTAL_TIME_REMARK;
use crate::error::EtlError;
use crate::model::{AggregateRow, ClassifiedRecipe};

/// Writes the filtered recipes as a `|`-delimited table with a header row.
///
/// Columns are every original field in first-seen order plus `difficulty`;
/// the minute helper values derived during classification are not written.
/// Rows identical in every column collapse to one, first occurrence wins.
pub fn write_filtered_recipes(path: &Path, recipes: &[ClassifiedRecipe]) -> Result<(), EtlError> {
    let mut columns: Vec<String> = Vec::new();
    for classified in recipes {
        for key in classified.recipe.fields.keys() {
            if !columns.iter().any(|c| c == key) {
                columns.push(key.clone());
            }
        }
    }

    let mut writer = WriterBuilder::new().delimiter(b'|').from_path(path)?;

    let mut header = columns.clone();
    header.push("difficulty".to_string());
    writer.write_record(&header)?;

    let mut seen: HashSet<Vec<String>> = HashSet::new();
    for classified in recipes {
        let mut row: Vec<String> = columns
            .iter()
            .map(|column| cell_text(classified.recipe.fields.get(column)))
            .collect();
        row.push(classified.difficulty.to_string());

        if seen.insert(row.clone()) {
            writer.write_record(&row)?;
        }
    }

    writer.flush()?;
    Ok(())
}

/// Writes the per-difficulty summary, headerless:
/// `difficulty|average_total_time|mean minutes`.
pub fn write_summary(path: &Path, rows: &[AggregateRow]) -> Result<(), EtlError> {
    let mut writer = WriterBuilder::new().delimiter(b'|').from_path(path)?;
    for row in rows {
        writer.write_record(&[
            row.difficulty.to_string(),
            AVERAGE_TOTAL_TIME_REMARK.to_string(),
            format_minutes(row.average_total_time),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

fn cell_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}

/// Whole-number means keep one decimal place (`15.0`), fractional means use
/// their shortest form.
fn format_minutes(minutes: f64) -> String {
    if minutes.fract() == 0.0 {
        format!("{minutes:.1}")
    } else {
        minutes.to_string()
    }
}
