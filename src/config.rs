use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Where the pipeline reads from and writes to.
///
/// Built once at process start and passed into [`crate::run_etl`]; nothing
/// reads configuration globally. The aliases keep the original camelCase
/// key names working regardless of how the config source normalizes case.
#[derive(Debug, Deserialize, Clone)]
pub struct EtlConfig {
    /// URL of the recipes dataset to download
    #[serde(alias = "sourceFileUrl", alias = "sourcefileurl")]
    pub source_file_url: String,
    /// Where the downloaded dataset is saved locally
    #[serde(alias = "saveFilePath", alias = "savefilepath")]
    pub save_file_path: String,
    /// Output path for the filtered chili recipes
    #[serde(alias = "chileOutputFilePath", alias = "chileoutputfilepath")]
    pub chile_output_file_path: String,
    /// Output path for the per-difficulty averages
    #[serde(alias = "resultOutputFilePath", alias = "resultoutputfilepath")]
    pub result_output_file_path: String,
}

impl EtlConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPES_ETL prefix
    /// 2. The named config file (extension resolved by the config crate)
    ///
    /// Environment variable format: RECIPES_ETL__SAVE_FILE_PATH
    pub fn load(name: &str) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name(name))
            .add_source(
                Environment::with_prefix("RECIPES_ETL")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
