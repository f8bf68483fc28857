use crate::domain::model::{Match, RoundStandings, TeamStanding};
use std::cmp::Ordering;
use std::collections::{BTreeSet, HashMap};

/// Compute a ranked table for every round present in `matches`.
///
/// Stats are cumulative: each round's table reflects every match of
/// that round and all earlier rounds. The team universe is fixed up
/// front from the whole input, so a team whose first match comes late
/// still appears (zero-valued) in the earlier tables. The input order
/// does not matter; rounds are processed in ascending numeric order
/// and each emitted table is an independent snapshot.
pub fn compute_standings(matches: &[Match]) -> Vec<RoundStandings> {
    if matches.is_empty() {
        return Vec::new();
    }

    let rounds: BTreeSet<u32> = matches.iter().map(|m| m.round).collect();

    let mut stats: HashMap<String, TeamStanding> = HashMap::new();
    for m in matches {
        for team in [&m.home_team, &m.away_team] {
            stats
                .entry(team.clone())
                .or_insert_with(|| TeamStanding::new(team));
        }
    }

    let mut round_standings = Vec::with_capacity(rounds.len());

    for round in rounds {
        for m in matches.iter().filter(|m| m.round == round) {
            apply_match(&mut stats, m);
        }
        round_standings.push(RoundStandings {
            round,
            standings: ranked_snapshot(&stats),
        });
    }

    round_standings
}

fn apply_match(stats: &mut HashMap<String, TeamStanding>, m: &Match) {
    {
        let home = stats.get_mut(&m.home_team).unwrap();
        home.played += 1;
        home.goals_for += m.home_score;
        home.goals_against += m.away_score;
        home.goal_difference = home.goals_for as i32 - home.goals_against as i32;
    }
    {
        let away = stats.get_mut(&m.away_team).unwrap();
        away.played += 1;
        away.goals_for += m.away_score;
        away.goals_against += m.home_score;
        away.goal_difference = away.goals_for as i32 - away.goals_against as i32;
    }

    match m.home_score.cmp(&m.away_score) {
        Ordering::Greater => {
            let home = stats.get_mut(&m.home_team).unwrap();
            home.won += 1;
            home.points += 3;
            stats.get_mut(&m.away_team).unwrap().lost += 1;
        }
        Ordering::Less => {
            let away = stats.get_mut(&m.away_team).unwrap();
            away.won += 1;
            away.points += 3;
            stats.get_mut(&m.home_team).unwrap().lost += 1;
        }
        Ordering::Equal => {
            let home = stats.get_mut(&m.home_team).unwrap();
            home.drawn += 1;
            home.points += 1;
            let away = stats.get_mut(&m.away_team).unwrap();
            away.drawn += 1;
            away.points += 1;
        }
    }
}

/// Clone the accumulator, order by the tie-break chain and assign
/// dense 1-based positions. The chain ends at the team identifier,
/// so the order (and therefore the whole output) is total and
/// deterministic.
fn ranked_snapshot(stats: &HashMap<String, TeamStanding>) -> Vec<TeamStanding> {
    let mut table: Vec<TeamStanding> = stats.values().cloned().collect();
    table.sort_by(compare_standings);
    for (index, entry) in table.iter_mut().enumerate() {
        entry.position = index as u32 + 1;
    }
    table
}

/// Tie-break chain: points, goal difference, goals scored (all
/// descending), then team identifier ascending.
fn compare_standings(a: &TeamStanding, b: &TeamStanding) -> Ordering {
    b.points
        .cmp(&a.points)
        .then_with(|| b.goal_difference.cmp(&a.goal_difference))
        .then_with(|| b.goals_for.cmp(&a.goals_for))
        .then_with(|| a.team.cmp(&b.team))
}
