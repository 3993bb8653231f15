use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::error;
use serde_json::{Map, Value};

use crate::error::EtlError;
use crate::model::Recipe;

/// Reads a JSON Lines file into recipe records, one per line.
///
/// A line that does not parse as a JSON object is logged and skipped; the
/// rest of the file still loads. Failing to open or read the file itself is
/// fatal. Input order and duplicates are preserved.
pub fn read_records(path: &Path) -> Result<Vec<Recipe>, EtlError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut records = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        match serde_json::from_str::<Map<String, Value>>(trimmed) {
            Ok(mut fields) => {
                strip_line_breaks(&mut fields);
                records.push(Recipe::new(fields));
            }
            Err(err) => {
                error!("Skipping line that is not a JSON object: {trimmed}");
                error!("Error: {err}");
            }
        }
    }
    Ok(records)
}

/// Replaces every line break in top-level string fields with a single space,
/// so the delimited outputs stay one row per recipe. CRLF collapses to one
/// space; nested values are left alone.
fn strip_line_breaks(fields: &mut Map<String, Value>) {
    for value in fields.values_mut() {
        if let Value::String(text) = value {
            if text.contains(['\n', '\r']) {
                *text = text.replace("\r\n", " ").replace(['\n', '\r'], " ");
            }
        }
    }
}
