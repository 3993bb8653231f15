use std::fmt;

use serde_json::{Map, Value};

/// One recipe row loaded from the source file.
///
/// Only `ingredients`, `cookTime` and `prepTime` are interpreted by the
/// pipeline; every other field is carried through to the output untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct Recipe {
    pub fields: Map<String, Value>,
}

impl Recipe {
    pub fn new(fields: Map<String, Value>) -> Self {
        Recipe { fields }
    }

    /// Returns the field value if it is present and a string.
    pub fn string_field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }
}

/// Difficulty rating derived from total cook+prep time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Unknown,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Hard => write!(f, "Hard"),
            Difficulty::Unknown => write!(f, "Unknown Difficulty"),
        }
    }
}

/// A recipe together with its derived difficulty.
///
/// `total_time` is the cook+prep sum in minutes, or `None` when either
/// duration is unknown. It feeds the aggregate output only; the filtered
/// recipe output carries just the difficulty label.
#[derive(Debug, Clone)]
pub struct ClassifiedRecipe {
    pub recipe: Recipe,
    pub difficulty: Difficulty,
    pub total_time: Option<f64>,
}

/// One row of the per-difficulty summary output.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateRow {
    pub difficulty: Difficulty,
    pub average_total_time: f64,
}
