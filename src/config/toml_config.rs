use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, StandingsError};
use crate::utils::validation::{
    validate_file_extensions, validate_non_empty_string, validate_path, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

const DEFAULT_STORE_PATH: &str = "./store";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub pipeline: PipelineConfig,
    pub source: SourceConfig,
    pub load: LoadConfig,
    pub store: Option<StoreConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub input_files: Vec<String>,
    pub tournament: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadConfig {
    pub output_path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    pub path: Option<String>,
}

impl TomlConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| StandingsError::ConfigError {
            message: format!("Failed to parse {}: {}", path.display(), e),
        })
    }
}

impl ConfigProvider for TomlConfig {
    fn input_files(&self) -> &[String] {
        &self.source.input_files
    }

    fn output_path(&self) -> &str {
        &self.load.output_path
    }

    fn store_path(&self) -> &str {
        self.store
            .as_ref()
            .and_then(|s| s.path.as_deref())
            .unwrap_or(DEFAULT_STORE_PATH)
    }

    fn tournament_filter(&self) -> Option<&str> {
        self.source.tournament.as_deref()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("pipeline.name", &self.pipeline.name)?;
        validate_path("load.output_path", &self.load.output_path)?;
        validate_file_extensions("source.input_files", &self.source.input_files, &["csv"])?;
        if let Some(tournament) = &self.source.tournament {
            validate_non_empty_string("source.tournament", tournament)?;
        }
        Ok(())
    }
}
