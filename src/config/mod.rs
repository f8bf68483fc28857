pub mod cli;
pub mod toml_config;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_file_extensions, validate_non_empty_string, validate_path, Validate,
};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "standings-tracker")]
#[command(about = "Computes league tables and team position trends from match schedules")]
pub struct CliConfig {
    /// Schedule CSV files to ingest; when omitted, previously stored
    /// tournaments are recomputed instead
    #[arg(long, value_delimiter = ',')]
    pub input_files: Vec<String>,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    /// Where the tournament store (tournaments.json) lives
    #[arg(long, default_value = "./store")]
    pub store_path: String,

    /// Only compute standings for the named tournament
    #[arg(long)]
    pub tournament: Option<String>,

    /// Delete the tournament store before running
    #[arg(long)]
    pub clear_store: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn input_files(&self) -> &[String] {
        &self.input_files
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn store_path(&self) -> &str {
        &self.store_path
    }

    fn tournament_filter(&self) -> Option<&str> {
        self.tournament.as_deref()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("output_path", &self.output_path)?;
        validate_path("store_path", &self.store_path)?;
        validate_file_extensions("input_files", &self.input_files, &["csv"])?;
        if let Some(tournament) = &self.tournament {
            validate_non_empty_string("tournament", tournament)?;
        }
        Ok(())
    }
}
