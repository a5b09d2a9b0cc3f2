//! Plain-text snapshot of the board, overwritten each cycle. The kiosk
//! analog of pointing a picture frame at an exported image: anything that
//! can read a file can mirror the display.

use chrono::{DateTime, Local};
use scoreboard_api::{DisplayRecord, StatusMode, TeamLine};
use std::fmt::Write as _;
use std::path::Path;

pub fn write_snapshot(
    path: &Path,
    team: &str,
    record: Option<&DisplayRecord>,
    updated: Option<DateTime<Local>>,
) -> std::io::Result<()> {
    std::fs::write(path, render_snapshot(team, record, updated))
}

pub fn render_snapshot(
    team: &str,
    record: Option<&DisplayRecord>,
    updated: Option<DateTime<Local>>,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "==== {team} SCOREBOARD ====");

    match record {
        None => {
            let _ = writeln!(out, "No game today for {team}.");
        }
        Some(record) => match record.mode {
            StatusMode::Scheduled => {
                let start = record.start_time.as_deref().unwrap_or(&record.detail);
                for team in [&record.away, &record.home] {
                    let _ = writeln!(
                        out,
                        "{:<5} {:<16} {:>6}",
                        team.abbrev,
                        starter_text(team),
                        odds_text(team)
                    );
                }
                let _ = writeln!(out, "First pitch/tip: {start}");
            }
            StatusMode::Live | StatusMode::Final => {
                render_linescore(&mut out, record);
                let _ = writeln!(out, "{}", record.detail);
                if let Some(sit) = record.situation.as_ref() {
                    let _ = writeln!(out, "{}", sit.summary());
                }
                if let Some(winner) = record.winner_abbrev() {
                    let _ = writeln!(out, "{winner} WIN!");
                }
            }
            StatusMode::Unknown => {
                let _ = writeln!(out, "{:<5} {:>4}", record.away.abbrev, record.away.score);
                let _ = writeln!(out, "{:<5} {:>4}", record.home.abbrev, record.home.score);
                let _ = writeln!(out, "{}", record.detail);
            }
        },
    }

    if let Some(updated) = updated {
        let _ = writeln!(out, "Last updated {}", updated.format("%H:%M:%S"));
    }
    out
}

fn render_linescore(out: &mut String, record: &DisplayRecord) {
    let periods = record
        .away
        .linescores
        .len()
        .max(record.home.linescores.len());
    let show_hits_errors = record.away.hits.is_some() || record.home.hits.is_some();

    let _ = write!(out, "{:<5}", "");
    for p in 1..=periods {
        let _ = write!(out, " {p:>2}");
    }
    let _ = write!(out, "  {:>3}", "R");
    if show_hits_errors {
        let _ = write!(out, " {:>2} {:>2}", "H", "E");
    }
    let _ = writeln!(out);

    for team in [&record.away, &record.home] {
        render_team_row(out, team, periods, show_hits_errors);
    }
}

fn render_team_row(out: &mut String, team: &TeamLine, periods: usize, show_hits_errors: bool) {
    let _ = write!(out, "{:<5}", team.abbrev);
    for idx in 0..periods {
        let cell = team
            .linescores
            .get(idx)
            .copied()
            .flatten()
            .map(|v| v.to_string())
            .unwrap_or_default();
        let _ = write!(out, " {cell:>2}");
    }
    let _ = write!(out, "  {:>3}", team.score);
    if show_hits_errors {
        let _ = write!(
            out,
            " {:>2} {:>2}",
            count_text(team.hits),
            count_text(team.errors)
        );
    }
    let _ = writeln!(out);
}

fn odds_text(team: &TeamLine) -> String {
    team.moneyline.clone().unwrap_or_else(|| "N/A".to_owned())
}

fn starter_text(team: &TeamLine) -> String {
    team.starter.clone().unwrap_or_default()
}

fn count_text(value: Option<u32>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use scoreboard_api::{Side, TeamLine};

    fn team(abbrev: &str, score: &str) -> TeamLine {
        TeamLine {
            abbrev: abbrev.to_owned(),
            score: score.to_owned(),
            ..TeamLine::missing()
        }
    }

    #[test]
    fn no_game_snapshot_names_the_team() {
        let text = render_snapshot("WSH", None, None);
        assert!(text.contains("No game today for WSH."));
    }

    #[test]
    fn scheduled_snapshot_shows_starters_odds_and_start() {
        let mut away = team("NYY", "");
        away.moneyline = Some("-150".to_owned());
        away.starter = Some("G. Cole".to_owned());
        let record = DisplayRecord {
            away,
            home: team("BAL", ""),
            mode: StatusMode::Scheduled,
            detail: "Tue, 7:05 PM EST".to_owned(),
            start_time: Some("7:05 PM".to_owned()),
            ..Default::default()
        };
        let text = render_snapshot("NYY", Some(&record), None);
        assert!(text.contains("G. Cole"));
        assert!(text.contains("-150"));
        assert!(text.contains("First pitch/tip: 7:05 PM"));
        assert!(text.contains("N/A"), "missing odds fall back to N/A");
    }

    #[test]
    fn live_snapshot_blanks_unplayed_innings() {
        let mut away = team("NYY", "4");
        away.linescores = vec![Some(1), None, Some(3)];
        away.hits = Some(8);
        away.errors = Some(0);
        let mut home = team("BAL", "2");
        home.linescores = vec![Some(2)];
        home.hits = Some(5);
        home.errors = Some(1);
        let record = DisplayRecord {
            away,
            home,
            mode: StatusMode::Live,
            detail: "Top 4th".to_owned(),
            ..Default::default()
        };
        let text = render_snapshot("NYY", Some(&record), None);
        assert!(text.contains("NYY    1     3    4  8  0"));
        assert!(text.contains("Top 4th"));
    }

    #[test]
    fn final_snapshot_carries_winner_banner() {
        let record = DisplayRecord {
            away: team("NYY", "5"),
            home: team("BAL", "3"),
            mode: StatusMode::Final,
            detail: "Final".to_owned(),
            winner: Some(Side::Away),
            ..Default::default()
        };
        let text = render_snapshot("NYY", Some(&record), None);
        assert!(text.contains("NYY WIN!"));
    }
}
