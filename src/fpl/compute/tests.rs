use super::*;

fn team(id: u32, name: &str) -> Team {
    Team {
        id,
        name: name.to_string(),
        short_name: name[..3.min(name.len())].to_uppercase(),
        strength: 3,
        strength_overall_home: 1100,
        strength_overall_away: 1100,
    }
}

fn fixture(id: u64, event: Option<u32>, team_h: u32, team_a: u32) -> Fixture {
    Fixture {
        id,
        event,
        team_h,
        team_a,
        team_h_difficulty: 3,
        team_a_difficulty: 3,
        kickoff_time: None,
        finished: false,
    }
}

fn league() -> Vec<Team> {
    vec![
        team(1, "Arsenal"),
        team(2, "Liverpool"),
        team(3, "Chelsea"),
        team(4, "Everton"),
    ]
}

#[test]
fn test_full_coverage_produces_no_blanks() {
    let fixtures = vec![fixture(1, Some(10), 1, 2), fixture(2, Some(10), 3, 4)];
    let reports = blank_gameweeks(&fixtures, &league(), 10, 1);
    assert!(reports.is_empty());
}

#[test]
fn test_blank_teams_listed_in_league_order() {
    // Only Liverpool and Chelsea play in gameweek 12.
    let fixtures = vec![fixture(1, Some(12), 3, 2)];
    let reports = blank_gameweeks(&fixtures, &league(), 12, 1);

    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].gameweek, 12);
    assert_eq!(reports[0].teams, vec!["Arsenal", "Everton"]);
    assert_eq!(reports[0].count, 2);
}

#[test]
fn test_gameweek_with_no_fixtures_blanks_everyone() {
    let fixtures = vec![fixture(1, Some(10), 1, 2), fixture(2, Some(10), 3, 4)];
    let reports = blank_gameweeks(&fixtures, &league(), 10, 2);

    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].gameweek, 11);
    assert_eq!(reports[0].count, 4);
}

#[test]
fn test_double_gameweek_detected_in_first_appearance_order() {
    let fixtures = vec![
        fixture(1, Some(20), 2, 1),
        fixture(2, Some(20), 3, 4),
        fixture(3, Some(20), 1, 3),
    ];
    let reports = double_gameweeks(&fixtures, &league(), 20, 1);

    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].gameweek, 20);
    // Liverpool appears before Arsenal in the fixture list.
    assert_eq!(reports[0].teams, vec!["Liverpool", "Arsenal", "Chelsea"]);
    assert_eq!(reports[0].count, 3);
}

#[test]
fn test_single_fixture_teams_are_not_doubles() {
    let fixtures = vec![fixture(1, Some(21), 1, 2), fixture(2, Some(21), 1, 3)];
    let reports = double_gameweeks(&fixtures, &league(), 21, 1);

    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].teams, vec!["Arsenal"]);
}

#[test]
fn test_window_clamps_at_season_end() {
    // Fixtures exist only up to gameweek 38; scanning past it must not
    // report phantom gameweeks 39+.
    let fixtures = vec![fixture(1, Some(37), 1, 2), fixture(2, Some(38), 3, 4)];
    let reports = blank_gameweeks(&fixtures, &league(), 36, 10);

    assert_eq!(
        reports.iter().map(|r| r.gameweek).collect::<Vec<_>>(),
        vec![36, 37, 38]
    );
}

#[test]
fn test_oversized_count_saturates_at_season_end() {
    // No fixtures at all, so every scanned gameweek blanks the league;
    // the scan must still stop at 38.
    let reports = blank_gameweeks(&[], &league(), 8, u32::MAX);

    assert_eq!(reports.len(), 31);
    assert_eq!(reports[0].gameweek, 8);
    assert_eq!(reports[30].gameweek, 38);
    assert!(reports.iter().all(|r| r.count == 4));
}

#[test]
fn test_unscheduled_fixtures_are_ignored() {
    let fixtures = vec![fixture(1, None, 1, 2), fixture(2, None, 1, 3)];
    let reports = double_gameweeks(&fixtures, &league(), 1, 5);
    assert!(reports.is_empty());
}

#[test]
fn test_average_difficulty_defaults_to_neutral() {
    assert_eq!(average_difficulty(&[]), 3.0);
    assert_eq!(average_difficulty(&[2, 3, 4]), 3.0);
    assert_eq!(average_difficulty(&[5, 4]), 4.5);
}

#[test]
fn test_difficulty_score_scale() {
    assert_eq!(difficulty_score(2.0), 8.0);
    assert_eq!(difficulty_score(3.0), 6.0);
    assert_eq!(difficulty_score(4.5), 3.0);
    // One decimal place.
    assert_eq!(difficulty_score(3.33), 5.3);
}

#[test]
fn test_difficulty_rating_bands() {
    assert_eq!(difficulty_rating(1.5), "Excellent");
    assert_eq!(difficulty_rating(2.0), "Excellent");
    assert_eq!(difficulty_rating(2.5), "Good");
    assert_eq!(difficulty_rating(3.0), "Good");
    assert_eq!(difficulty_rating(3.8), "Average");
    assert_eq!(difficulty_rating(4.0), "Average");
    assert_eq!(difficulty_rating(4.1), "Difficult");
}

#[test]
fn test_round_to_places() {
    assert_eq!(round_to(3.14159, 2), 3.14);
    assert_eq!(round_to(2.675, 1), 2.7);
    assert_eq!(round_to(5.0, 2), 5.0);
}

#[test]
fn test_numeric_parses_with_zero_fallback() {
    assert_eq!(numeric("7.5"), 7.5);
    assert_eq!(numeric(" 12.0 "), 12.0);
    assert_eq!(numeric(""), 0.0);
    assert_eq!(numeric("n/a"), 0.0);
}
