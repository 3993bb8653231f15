use thiserror::Error;

/// Errors that can occur while running the recipes ETL
#[derive(Error, Debug)]
pub enum EtlError {
    /// Failed to read the source file or write an output file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A cookTime/prepTime value is not a valid ISO-8601 duration
    #[error("Invalid duration format")]
    InvalidDuration,

    /// Failed to write a delimited output row
    #[error("Failed to write output: {0}")]
    Csv(#[from] csv::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
