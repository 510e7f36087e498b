//! CLI output formatting.
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects.
//!
//! # Output Format
//!
//! ## Standings
//!
//! ```text
//! 1st  B      00:55.0  (Runner3)
//! 2nd  A      01:10.0  (Runner1)
//! 3rd  alice  --:--.-  (Runner4)
//! ```
//!
//! ## Update
//!
//! ```text
//! <standings>
//!
//! Wrote leaderboard/leaderboard.html (replaced previous page)
//! ```

use crate::generate::UpdateReport;
use crate::ordinal::ordinal;
use crate::rank::Standing;
use crate::types::{Entry, RaceTime};

/// Shown in place of the sentinel so unfinished runners stand out.
const UNSET_DISPLAY: &str = "--:--.-";

/// Return `text` right-padded to `width` characters.
fn pad(text: &str, width: usize) -> String {
    format!("{:<width$}", text, width = width)
}

fn display_time(entry: &Entry) -> &str {
    match entry.race_time() {
        RaceTime::Unset => UNSET_DISPLAY,
        RaceTime::Timed(_) | RaceTime::Malformed => &entry.time,
    }
}

fn column_width<'a>(values: impl Iterator<Item = &'a str>) -> usize {
    values.map(|v| v.chars().count()).max().unwrap_or(0)
}

// ============================================================================
// Standings
// ============================================================================

/// Format standings as aligned columns: rank, nickname, time, roster name.
pub fn format_standings(standings: &[Standing]) -> Vec<String> {
    if standings.is_empty() {
        return vec!["(no runners)".to_string()];
    }
    let ranks: Vec<String> = standings.iter().map(|s| ordinal(s.rank)).collect();
    let rank_w = column_width(ranks.iter().map(String::as_str));
    let nick_w = column_width(standings.iter().map(|s| s.entry.nickname.as_str()));
    let time_w = column_width(standings.iter().map(|s| display_time(&s.entry)));

    standings
        .iter()
        .zip(&ranks)
        .map(|(standing, rank)| {
            format!(
                "{}  {}  {}  ({})",
                pad(rank, rank_w),
                pad(&standing.entry.nickname, nick_w),
                pad(display_time(&standing.entry), time_w),
                standing.entry.name
            )
        })
        .collect()
}

pub fn print_standings(standings: &[Standing]) {
    for line in format_standings(standings) {
        println!("{}", line);
    }
}

// ============================================================================
// Update
// ============================================================================

/// Format the result of an update cycle: standings, then the written path.
pub fn format_update_output(report: &UpdateReport) -> Vec<String> {
    let mut lines = format_standings(&report.standings);
    lines.push(String::new());
    let note = if report.replaced {
        " (replaced previous page)"
    } else {
        ""
    };
    lines.push(format!("Wrote {}{}", report.path.display(), note));
    lines
}

pub fn print_update_output(report: &UpdateReport) {
    for line in format_update_output(report) {
        println!("{}", line);
    }
}

// ============================================================================
// Roster
// ============================================================================

/// Format the configured roster with each field's current default.
///
/// ```text
/// 001 Runner1
///     Time: 00:00.0
///     Nickname: Nick1
/// ```
pub fn format_roster(runners: &[Entry]) -> Vec<String> {
    let mut lines = Vec::new();
    for (i, runner) in runners.iter().enumerate() {
        lines.push(format!("{:0>3} {}", i + 1, runner.name));
        lines.push(format!("    Time: {}", runner.time));
        lines.push(format!("    Nickname: {}", runner.nickname));
    }
    lines
}

pub fn print_roster(runners: &[Entry]) {
    for line in format_roster(runners) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================
