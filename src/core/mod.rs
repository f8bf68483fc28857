pub mod engine;
pub mod pipeline;
pub mod season;
pub mod standings;
pub mod store;

pub use crate::domain::model::{
    Match, RoundStandings, TableResult, TeamPositionData, TeamSeasonData, TeamStanding, Tournament,
};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
pub use engine::StandingsEngine;
pub use season::extract_team_series;
pub use standings::compute_standings;
