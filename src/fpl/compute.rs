#[cfg(test)]
mod tests;

use std::collections::HashSet;
use std::ops::Range;

use serde::Serialize;

use crate::fpl::types::{Fixture, Team};

/// Final gameweek of a Premier League season.
pub const LAST_GAMEWEEK: u32 = 38;

/// One classified gameweek with the affected team names.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameweekReport {
    pub gameweek: u32,
    pub teams: Vec<String>,
    pub count: usize,
}

/// Gameweek ids `start..start + count`, clamped to the end of the season.
/// An oversized count saturates, it never wraps the window shut.
fn gameweek_window(start: u32, count: u32) -> Range<u32> {
    start..start.saturating_add(count).min(LAST_GAMEWEEK + 1)
}

/// Teams with no fixture in each scanned gameweek.
///
/// Only gameweeks where at least one team blanks produce a report; team
/// order inside a report follows the `teams` slice.
pub fn blank_gameweeks(
    fixtures: &[Fixture],
    teams: &[Team],
    start: u32,
    count: u32,
) -> Vec<GameweekReport> {
    let mut reports = Vec::new();
    for gameweek in gameweek_window(start, count) {
        let mut playing = HashSet::new();
        for fixture in fixtures.iter().filter(|f| f.event == Some(gameweek)) {
            playing.insert(fixture.team_h);
            playing.insert(fixture.team_a);
        }
        let blanks: Vec<String> = teams
            .iter()
            .filter(|t| !playing.contains(&t.id))
            .map(|t| t.name.clone())
            .collect();
        if !blanks.is_empty() {
            reports.push(GameweekReport {
                gameweek,
                count: blanks.len(),
                teams: blanks,
            });
        }
    }
    reports
}

/// Teams with two or more fixtures in a scanned gameweek, listed in the
/// order the fixture list first mentions them.
pub fn double_gameweeks(
    fixtures: &[Fixture],
    teams: &[Team],
    start: u32,
    count: u32,
) -> Vec<GameweekReport> {
    let mut reports = Vec::new();
    for gameweek in gameweek_window(start, count) {
        // A Vec keeps first-appearance order; per-gameweek tallies are tiny.
        let mut tally: Vec<(u32, u32)> = Vec::new();
        for fixture in fixtures.iter().filter(|f| f.event == Some(gameweek)) {
            for team_id in [fixture.team_h, fixture.team_a] {
                match tally.iter_mut().find(|(id, _)| *id == team_id) {
                    Some((_, appearances)) => *appearances += 1,
                    None => tally.push((team_id, 1)),
                }
            }
        }
        let doubles: Vec<String> = tally
            .iter()
            .filter(|(_, appearances)| *appearances >= 2)
            .filter_map(|(id, _)| team_name(teams, *id))
            .collect();
        if !doubles.is_empty() {
            reports.push(GameweekReport {
                gameweek,
                count: doubles.len(),
                teams: doubles,
            });
        }
    }
    reports
}

fn team_name(teams: &[Team], id: u32) -> Option<String> {
    teams.iter().find(|t| t.id == id).map(|t| t.name.clone())
}

/// Mean fixture difficulty, defaulting to the neutral 3 when no fixtures
/// are scheduled.
pub fn average_difficulty(difficulties: &[u8]) -> f64 {
    if difficulties.is_empty() {
        return 3.0;
    }
    let total: u32 = difficulties.iter().map(|d| u32::from(*d)).sum();
    f64::from(total) / difficulties.len() as f64
}

/// Attractiveness score derived from an average difficulty: lower
/// difficulty scores higher, one decimal place.
pub fn difficulty_score(average: f64) -> f64 {
    round_to((6.0 - average) * 2.0, 1)
}

/// Plain-English band for an average difficulty.
pub fn difficulty_rating(average: f64) -> &'static str {
    if average <= 2.0 {
        "Excellent"
    } else if average <= 3.0 {
        "Good"
    } else if average <= 4.0 {
        "Average"
    } else {
        "Difficult"
    }
}

/// Round to `decimals` places.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Parse one of the API's string-typed numerics, treating junk as 0.
pub fn numeric(value: &str) -> f64 {
    value.trim().parse().unwrap_or(0.0)
}
