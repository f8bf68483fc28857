use crate::domain::model::{RoundStandings, TeamPositionData, TeamSeasonData};
use std::collections::BTreeMap;

/// Reshape per-round tables into one position series per team.
///
/// Output is sorted ascending by team identifier so downstream
/// selection UIs get a stable default ordering. The input is expected
/// ascending by round already; each collected series is re-sorted by
/// round anyway so out-of-order input cannot corrupt a trajectory.
pub fn extract_team_series(rounds: &[RoundStandings]) -> Vec<TeamSeasonData> {
    if rounds.is_empty() {
        return Vec::new();
    }

    let mut teams: BTreeMap<String, Vec<TeamPositionData>> = BTreeMap::new();

    for round in rounds {
        for standing in &round.standings {
            teams
                .entry(standing.team.clone())
                .or_default()
                .push(TeamPositionData {
                    round: round.round,
                    position: standing.position,
                    points: standing.points,
                    goals_for: standing.goals_for,
                    goals_against: standing.goals_against,
                    goal_difference: standing.goal_difference,
                    played: standing.played,
                    won: standing.won,
                    drawn: standing.drawn,
                    lost: standing.lost,
                });
        }
    }

    teams
        .into_iter()
        .map(|(team, mut positions)| {
            positions.sort_by_key(|p| p.round);
            TeamSeasonData { team, positions }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::TeamStanding;

    fn round(number: u32, teams: &[(&str, u32)]) -> RoundStandings {
        RoundStandings {
            round: number,
            standings: teams
                .iter()
                .enumerate()
                .map(|(i, (team, points))| TeamStanding {
                    points: *points,
                    position: i as u32 + 1,
                    ..TeamStanding::new(team)
                })
                .collect(),
        }
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(extract_team_series(&[]).is_empty());
    }

    #[test]
    fn teams_come_out_alphabetical() {
        let series = extract_team_series(&[round(1, &[("Zebra", 3), ("Aardvark", 0)])]);
        let names: Vec<&str> = series.iter().map(|s| s.team.as_str()).collect();
        assert_eq!(names, vec!["Aardvark", "Zebra"]);
    }

    #[test]
    fn positions_are_ordered_by_round_even_for_shuffled_input() {
        let series = extract_team_series(&[
            round(3, &[("A", 5)]),
            round(1, &[("A", 1)]),
            round(2, &[("A", 4)]),
        ]);
        let rounds: Vec<u32> = series[0].positions.iter().map(|p| p.round).collect();
        assert_eq!(rounds, vec![1, 2, 3]);
    }

    #[test]
    fn series_carries_the_full_statistic_set() {
        let table = RoundStandings {
            round: 2,
            standings: vec![TeamStanding {
                team: "A".to_string(),
                played: 2,
                won: 1,
                drawn: 1,
                lost: 0,
                goals_for: 3,
                goals_against: 1,
                goal_difference: 2,
                points: 4,
                position: 1,
            }],
        };
        let series = extract_team_series(&[table]);
        let p = &series[0].positions[0];
        assert_eq!((p.round, p.position, p.points), (2, 1, 4));
        assert_eq!((p.played, p.won, p.drawn, p.lost), (2, 1, 1, 0));
        assert_eq!(
            (p.goals_for, p.goals_against, p.goal_difference),
            (3, 1, 2)
        );
    }
}
