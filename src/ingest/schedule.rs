use crate::domain::model::Match;
use crate::utils::error::Result;
use chrono::NaiveDate;
use regex::Regex;
use std::io::Read;
use std::path::Path;

// Fixed column layout of the exported schedule sheets. The header row
// is skipped; cells are addressed by position, not by header name.
const COL_ROUND: usize = 0;
const COL_DATE: usize = 1;
const COL_HOME_TEAM: usize = 4;
const COL_RESULT: usize = 5;
const COL_AWAY_TEAM: usize = 6;
const COL_TOURNAMENT: usize = 8;

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d.%m.%Y", "%d/%m/%Y"];

/// Parses schedule CSV exports into `Match` values.
///
/// A row is kept only when the round is a positive integer, both team
/// cells are non-empty and the result cell looks like "2-1" or "2:1".
/// Anything else (header leftovers, fixtures not yet played, stray
/// notes) is dropped without an error; the engine downstream never
/// sees malformed rows.
pub struct ScheduleParser {
    result_re: Regex,
}

impl ScheduleParser {
    pub fn new() -> Self {
        Self {
            result_re: Regex::new(r"^(\d+)\s*[-:]\s*(\d+)$").unwrap(),
        }
    }

    /// Parse several files and concatenate the results, sorted by round.
    pub fn parse_files(&self, paths: &[String]) -> Result<Vec<Match>> {
        let mut matches = Vec::new();
        for path in paths {
            matches.extend(self.parse_file(path)?);
        }
        matches.sort_by_key(|m| m.round);
        Ok(matches)
    }

    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<Vec<Match>> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let matches = self.parse_reader(file, &path.display().to_string())?;
        Ok(matches)
    }

    pub fn parse_reader<R: Read>(&self, reader: R, source: &str) -> Result<Vec<Match>> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let mut matches = Vec::new();
        let mut dropped = 0usize;
        let mut first_date: Option<NaiveDate> = None;
        let mut last_date: Option<NaiveDate> = None;

        for record in csv_reader.records() {
            let record = record?;
            match self.parse_row(&record) {
                Some(m) => {
                    if let Some(date) = parse_date(record.get(COL_DATE).unwrap_or_default()) {
                        first_date = Some(first_date.map_or(date, |d| d.min(date)));
                        last_date = Some(last_date.map_or(date, |d| d.max(date)));
                    }
                    matches.push(m);
                }
                None => dropped += 1,
            }
        }

        tracing::debug!(
            "Parsed {}: {} matches, {} rows dropped",
            source,
            matches.len(),
            dropped
        );
        if let (Some(first), Some(last)) = (first_date, last_date) {
            tracing::debug!("Schedule {} spans {} to {}", source, first, last);
        }

        Ok(matches)
    }

    fn parse_row(&self, record: &csv::StringRecord) -> Option<Match> {
        let cell = |index: usize| record.get(index).unwrap_or_default().trim();

        let round: u32 = cell(COL_ROUND).parse().ok().filter(|r| *r > 0)?;
        let home_team = cell(COL_HOME_TEAM);
        let away_team = cell(COL_AWAY_TEAM);
        if home_team.is_empty() || away_team.is_empty() {
            return None;
        }

        let (home_score, away_score) = self.parse_result(cell(COL_RESULT))?;

        let tournament = match cell(COL_TOURNAMENT) {
            "" => None,
            name => Some(name.to_string()),
        };

        Some(Match {
            round,
            home_team: home_team.to_string(),
            away_team: away_team.to_string(),
            home_score,
            away_score,
            tournament,
        })
    }

    fn parse_result(&self, result: &str) -> Option<(u32, u32)> {
        let captures = self.result_re.captures(result)?;
        let home = captures[1].parse().ok()?;
        let away = captures[2].parse().ok()?;
        Some((home, away))
    }
}

impl Default for ScheduleParser {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_date(cell: &str) -> Option<NaiveDate> {
    let cell = cell.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(cell, format).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Round,Date,Day,Time,Home,Result,Away,Location,Tournament,MatchId,Format\n";

    fn parse(rows: &str) -> Vec<Match> {
        let data = format!("{HEADER}{rows}");
        ScheduleParser::new()
            .parse_reader(data.as_bytes(), "test")
            .unwrap()
    }

    #[test]
    fn parses_a_well_formed_row() {
        let matches = parse("1,2023-09-02,Sat,14:00,Ajax,2-1,Feyenoord,Amsterdam,Eredivisie,M1,11v11\n");
        assert_eq!(matches.len(), 1);
        let m = &matches[0];
        assert_eq!(m.round, 1);
        assert_eq!(m.home_team, "Ajax");
        assert_eq!(m.away_team, "Feyenoord");
        assert_eq!((m.home_score, m.away_score), (2, 1));
        assert_eq!(m.tournament.as_deref(), Some("Eredivisie"));
    }

    #[test]
    fn accepts_colon_separated_results_with_spaces() {
        let matches = parse("3,,,,A,0 : 0,B,,,,\n");
        assert_eq!((matches[0].home_score, matches[0].away_score), (0, 0));
    }

    #[test]
    fn drops_rows_with_unparseable_results() {
        let matches = parse(
            "1,,,,A,2-1,B,,,,\n\
             2,,,,A,postponed,B,,,,\n\
             3,,,,A,2-,B,,,,\n\
             4,,,,A,-1,B,,,,\n",
        );
        assert_eq!(matches.len(), 1);
    }

    #[test]
    fn drops_rows_with_missing_teams_or_bad_rounds() {
        let matches = parse(
            "1,,,,,2-1,B,,,,\n\
             1,,,,A,2-1,,,,,\n\
             0,,,,A,2-1,B,,,,\n\
             x,,,,A,2-1,B,,,,\n",
        );
        assert!(matches.is_empty());
    }

    #[test]
    fn missing_tournament_cell_becomes_none() {
        let matches = parse("1,,,,A,1-0,B,,,,\n");
        assert_eq!(matches[0].tournament, None);
    }

    #[test]
    fn short_rows_are_tolerated() {
        // flexible CSV: a row cut off after the away team still parses
        let matches = parse("2,,,,A,1-1,B\n");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].tournament, None);
    }
}
