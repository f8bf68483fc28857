use standings_tracker::{compute_standings, extract_team_series, Match, RoundStandings};

fn fixture(round: u32, home: &str, away: &str, hs: u32, aws: u32) -> Match {
    Match {
        round,
        home_team: home.to_string(),
        away_team: away.to_string(),
        home_score: hs,
        away_score: aws,
        tournament: None,
    }
}

fn sample_matches() -> Vec<Match> {
    vec![
        fixture(1, "A", "B", 2, 1),
        fixture(1, "C", "D", 0, 0),
        fixture(2, "A", "C", 1, 1),
    ]
}

fn team<'a>(rounds: &'a [RoundStandings], round_index: usize, name: &str) -> &'a standings_tracker::TeamStanding {
    rounds[round_index]
        .standings
        .iter()
        .find(|s| s.team == name)
        .unwrap()
}

#[test]
fn points_invariant_holds_in_every_round() {
    let rounds = compute_standings(&sample_matches());
    for round in &rounds {
        for s in &round.standings {
            assert_eq!(s.points, 3 * s.won + s.drawn);
            assert_eq!(s.played, s.won + s.drawn + s.lost);
        }
    }
}

#[test]
fn goal_difference_invariant_holds_in_every_round() {
    let rounds = compute_standings(&sample_matches());
    for round in &rounds {
        for s in &round.standings {
            assert_eq!(s.goal_difference, s.goals_for as i32 - s.goals_against as i32);
        }
    }
}

#[test]
fn positions_are_dense_and_unique() {
    let rounds = compute_standings(&sample_matches());
    for round in &rounds {
        let mut positions: Vec<u32> = round.standings.iter().map(|s| s.position).collect();
        positions.sort_unstable();
        let expected: Vec<u32> = (1..=round.standings.len() as u32).collect();
        assert_eq!(positions, expected);
    }
}

#[test]
fn played_counts_are_cumulative_and_monotonic() {
    let matches = sample_matches();
    let rounds = compute_standings(&matches);
    let series = extract_team_series(&rounds);

    for team_data in &series {
        let mut previous = 0;
        for point in &team_data.positions {
            assert!(point.played >= previous);
            previous = point.played;

            let expected = matches
                .iter()
                .filter(|m| {
                    m.round <= point.round
                        && (m.home_team == team_data.team || m.away_team == team_data.team)
                })
                .count() as u32;
            assert_eq!(point.played, expected);
        }
    }
}

#[test]
fn input_order_does_not_matter() {
    let matches = sample_matches();
    let baseline = compute_standings(&matches);

    let mut reversed = matches.clone();
    reversed.reverse();
    assert_eq!(compute_standings(&reversed), baseline);

    // rounds interleaved out of order
    let scrambled = vec![
        matches[2].clone(),
        matches[0].clone(),
        matches[1].clone(),
    ];
    assert_eq!(compute_standings(&scrambled), baseline);
}

#[test]
fn fully_level_teams_rank_alphabetically() {
    // C and D drew 0-0: identical points, difference and goals
    let rounds = compute_standings(&sample_matches());
    let c = team(&rounds, 0, "C");
    let d = team(&rounds, 0, "D");
    assert_eq!(c.points, d.points);
    assert_eq!(c.goal_difference, d.goal_difference);
    assert_eq!(c.goals_for, d.goals_for);
    assert!(c.position < d.position);
}

#[test]
fn three_match_scenario_produces_expected_tables() {
    let rounds = compute_standings(&sample_matches());
    assert_eq!(rounds.len(), 2);

    // round 1: A wins, C/D draw, B loses
    assert_eq!(team(&rounds, 0, "A").points, 3);
    assert_eq!(team(&rounds, 0, "A").position, 1);
    assert_eq!(team(&rounds, 0, "C").position, 2);
    assert_eq!(team(&rounds, 0, "D").position, 3);
    assert_eq!(team(&rounds, 0, "B").position, 4);

    // round 2: A draws C; D and B keep their round-1 records
    let a = team(&rounds, 1, "A");
    assert_eq!((a.points, a.played, a.position), (4, 2, 1));
    let c = team(&rounds, 1, "C");
    assert_eq!((c.points, c.position), (2, 2));
    assert_eq!(team(&rounds, 1, "D").points, 1);
    assert_eq!(team(&rounds, 1, "D").position, 3);
    assert_eq!(team(&rounds, 1, "B").points, 0);
    assert_eq!(team(&rounds, 1, "B").position, 4);
}

#[test]
fn empty_input_yields_empty_output() {
    assert!(compute_standings(&[]).is_empty());
    assert!(extract_team_series(&[]).is_empty());
}

#[test]
fn series_covers_every_emitted_round() {
    // rounds 3..5 only; the late joiner plays round 3 and then sits out
    let matches = vec![
        fixture(3, "A", "Late", 1, 2),
        fixture(4, "A", "B", 0, 0),
        fixture(5, "B", "A", 1, 0),
    ];
    let rounds = compute_standings(&matches);
    let series = extract_team_series(&rounds);

    let late = series.iter().find(|s| s.team == "Late").unwrap();
    let entry_rounds: Vec<u32> = late.positions.iter().map(|p| p.round).collect();
    assert_eq!(entry_rounds, vec![3, 4, 5]);

    // stats stay frozen after its only match
    for point in &late.positions {
        assert_eq!(point.played, 1);
        assert_eq!(point.points, 3);
        assert_eq!(point.goal_difference, 1);
    }
}

#[test]
fn late_joiner_appears_zero_valued_from_the_first_round() {
    let matches = vec![
        fixture(1, "A", "B", 1, 0),
        fixture(2, "B", "A", 2, 2),
        fixture(3, "A", "Late", 0, 1),
    ];
    let rounds = compute_standings(&matches);
    let series = extract_team_series(&rounds);

    let late = series.iter().find(|s| s.team == "Late").unwrap();
    assert_eq!(late.positions.len(), 3);
    assert_eq!(late.positions[0].played, 0);
    assert_eq!(late.positions[0].points, 0);
    assert_eq!(late.positions[1].played, 0);
    assert_eq!(late.positions[2].played, 1);
}

#[test]
fn recomputation_is_idempotent() {
    let matches = sample_matches();
    assert_eq!(compute_standings(&matches), compute_standings(&matches));
}
