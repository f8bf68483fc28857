use crate::core::store::{slugify, TournamentStore};
use crate::core::{compute_standings, extract_team_series};
use crate::domain::model::{Match, RoundStandings, TableResult, Tournament, TournamentTables};
use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
use crate::ingest::schedule::ScheduleParser;
use crate::utils::error::{Result, StandingsError};
use std::collections::BTreeMap;
use std::io::Write;
use zip::write::{FileOptions, ZipWriter};

const DEFAULT_TOURNAMENT_NAME: &str = "Tournament";

pub struct TablePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    store: TournamentStore<S>,
    config: C,
    parser: ScheduleParser,
}

impl<S: Storage, C: ConfigProvider> TablePipeline<S, C> {
    pub fn new(storage: S, store: TournamentStore<S>, config: C) -> Self {
        Self {
            storage,
            store,
            config,
            parser: ScheduleParser::new(),
        }
    }

    async fn matches_from_store(&self) -> Result<Vec<Match>> {
        let tournaments =
            self.store
                .load()
                .await?
                .ok_or_else(|| StandingsError::ProcessingError {
                    message: "No input files given and the tournament store is empty".to_string(),
                })?;

        tracing::debug!("Loaded {} tournaments from store", tournaments.len());

        let mut matches = Vec::new();
        for tournament in tournaments {
            for mut m in tournament.matches {
                // stored matches inherit their tournament's name when
                // the original row had no label
                if m.tournament.is_none() {
                    m.tournament = Some(tournament.name.clone());
                }
                matches.push(m);
            }
        }
        Ok(matches)
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for TablePipeline<S, C> {
    async fn extract(&self) -> Result<Vec<Match>> {
        if self.config.input_files().is_empty() {
            tracing::debug!("No input files, falling back to the tournament store");
            return self.matches_from_store().await;
        }

        let matches = self.parser.parse_files(self.config.input_files())?;
        tracing::debug!(
            "Parsed {} matches from {} files",
            matches.len(),
            self.config.input_files().len()
        );

        // persist what was ingested so later runs can recompute
        // without the source files
        let tournaments = group_into_tournaments(&matches);
        self.store.save(&tournaments).await?;

        Ok(matches)
    }

    async fn transform(&self, matches: Vec<Match>) -> Result<TableResult> {
        let mut tournaments = group_into_tournaments(&matches);

        if let Some(filter) = self.config.tournament_filter() {
            tournaments.retain(|t| t.name == filter);
            if tournaments.is_empty() {
                return Err(StandingsError::ProcessingError {
                    message: format!("No matches found for tournament '{}'", filter),
                });
            }
        }

        let mut results = Vec::with_capacity(tournaments.len());
        for tournament in tournaments {
            let rounds = compute_standings(&tournament.matches);
            let series = extract_team_series(&rounds);

            tracing::debug!(
                "Tournament '{}': {} matches, {} rounds, {} teams",
                tournament.name,
                tournament.matches.len(),
                rounds.len(),
                series.len()
            );

            let standings_csv = render_standings_csv(&rounds);
            let final_table_csv = render_final_table_csv(&rounds);
            let series_json = serde_json::to_string_pretty(&series)?;

            results.push(TournamentTables {
                tournament,
                rounds,
                series,
                standings_csv,
                final_table_csv,
                series_json,
            });
        }

        Ok(TableResult {
            tournaments: results,
        })
    }

    async fn load(&self, result: TableResult) -> Result<String> {
        let output_path = format!("{}/standings.zip", self.config.output_path());

        tracing::debug!(
            "Creating ZIP bundle for {} tournaments",
            result.tournaments.len()
        );

        let zip_data = {
            let mut zip = ZipWriter::new(std::io::Cursor::new(Vec::new()));

            for tables in &result.tournaments {
                let prefix = &tables.tournament.id;

                zip.start_file::<_, ()>(
                    format!("{}/standings.csv", prefix),
                    FileOptions::default(),
                )?;
                zip.write_all(tables.standings_csv.as_bytes())?;

                zip.start_file::<_, ()>(
                    format!("{}/final_table.csv", prefix),
                    FileOptions::default(),
                )?;
                zip.write_all(tables.final_table_csv.as_bytes())?;

                if !tables.series.is_empty() {
                    zip.start_file::<_, ()>(
                        format!("{}/season.json", prefix),
                        FileOptions::default(),
                    )?;
                    zip.write_all(tables.series_json.as_bytes())?;
                }
            }

            let cursor = zip.finish()?;
            cursor.into_inner()
        };

        tracing::debug!("Writing ZIP bundle ({} bytes) to storage", zip_data.len());
        self.storage.write_file("standings.zip", &zip_data).await?;

        Ok(output_path)
    }
}

/// Group matches into tournaments by label, sorted by name. Unlabeled
/// matches form one tournament under a default name.
fn group_into_tournaments(matches: &[Match]) -> Vec<Tournament> {
    let mut groups: BTreeMap<String, Vec<Match>> = BTreeMap::new();
    for m in matches {
        let name = m
            .tournament
            .clone()
            .unwrap_or_else(|| DEFAULT_TOURNAMENT_NAME.to_string());
        groups.entry(name).or_default().push(m.clone());
    }

    groups
        .into_iter()
        .map(|(name, matches)| Tournament {
            id: slugify(&name),
            name,
            matches,
        })
        .collect()
}

const TABLE_HEADER: &str =
    "position,team,played,won,drawn,lost,goals_for,goals_against,goal_difference,points";

fn render_standings_csv(rounds: &[RoundStandings]) -> String {
    let mut lines = vec![format!("round,{}", TABLE_HEADER)];
    for round in rounds {
        for s in &round.standings {
            lines.push(format!(
                "{},{},{},{},{},{},{},{},{},{},{}",
                round.round,
                s.position,
                s.team,
                s.played,
                s.won,
                s.drawn,
                s.lost,
                s.goals_for,
                s.goals_against,
                s.goal_difference,
                s.points
            ));
        }
    }
    lines.join("\n")
}

/// The headline table: the last round only.
fn render_final_table_csv(rounds: &[RoundStandings]) -> String {
    let mut lines = vec![TABLE_HEADER.to_string()];
    if let Some(last) = rounds.last() {
        for s in &last.standings {
            lines.push(format!(
                "{},{},{},{},{},{},{},{},{},{}",
                s.position,
                s.team,
                s.played,
                s.won,
                s.drawn,
                s.lost,
                s.goals_for,
                s.goals_against,
                s.goal_difference,
                s.points
            ));
        }
    }
    lines.join("\n")
}
