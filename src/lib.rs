pub mod config;
pub mod core;
pub mod domain;
pub mod ingest;
pub mod utils;

pub use config::{cli::LocalStorage, CliConfig};
pub use core::pipeline::TablePipeline;
pub use core::store::TournamentStore;
pub use core::{compute_standings, extract_team_series, StandingsEngine};
pub use domain::model::{
    Match, RoundStandings, TeamPositionData, TeamSeasonData, TeamStanding, Tournament,
};
pub use utils::error::{Result, StandingsError};
