//! Shared types passed from the input collector to the leaderboard generator.
//!
//! An [`Entry`] is the raw triple a runner's form fields produce. Times stay
//! as the strings the user typed so the leaderboard shows them verbatim;
//! [`RaceTime`] is the parsed view used for ranking.

use serde::{Deserialize, Serialize};

/// Time value of a field that was never filled in.
pub const UNSET_TIME: &str = "00:00.0";

fn default_time() -> String {
    UNSET_TIME.to_string()
}

/// One runner's submitted data for a single update cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Entry {
    /// Fixed roster label (`Runner1`, ...). Not edited by the user.
    pub name: String,
    /// Elapsed time as typed, expected as `MM:SS.t`.
    #[serde(default = "default_time")]
    pub time: String,
    /// Display name shown on the leaderboard.
    #[serde(default)]
    pub nickname: String,
}

impl Entry {
    pub fn new(
        name: impl Into<String>,
        time: impl Into<String>,
        nickname: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            time: time.into(),
            nickname: nickname.into(),
        }
    }

    pub fn race_time(&self) -> RaceTime {
        RaceTime::parse(&self.time)
    }
}

/// Parsed form of an entry's time field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RaceTime {
    /// A valid `minutes:seconds.fraction` time, in total seconds.
    Timed(f64),
    /// Filled in, but not in `MM:SS.t` form.
    Malformed,
    /// The field still holds [`UNSET_TIME`].
    Unset,
}

impl RaceTime {
    /// Parse a time string.
    ///
    /// - `"00:00.0"` → `Unset`
    /// - `"01:23.4"` → `Timed(83.4)`
    /// - `"123:05.25"` → `Timed(7385.25)` (minutes are unbounded, any fraction length)
    /// - `"1:2"`, `"abc"`, `"01:23.4.5"`, `""` → `Malformed`
    pub fn parse(time: &str) -> Self {
        if time == UNSET_TIME {
            return RaceTime::Unset;
        }
        parse_seconds(time).map_or(RaceTime::Malformed, RaceTime::Timed)
    }

    /// Sort key within the timed group: malformed times compare after every valid one.
    pub fn sort_key(&self) -> f64 {
        match self {
            RaceTime::Timed(seconds) => *seconds,
            RaceTime::Malformed | RaceTime::Unset => f64::INFINITY,
        }
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, RaceTime::Unset)
    }
}

fn parse_seconds(time: &str) -> Option<f64> {
    let (minutes, rest) = time.split_once(':')?;
    let (seconds, fraction) = rest.split_once('.')?;
    if ![minutes, seconds, fraction].iter().all(|part| is_digits(part)) {
        return None;
    }
    let minutes: u64 = minutes.parse().ok()?;
    let seconds: f64 = format!("{seconds}.{fraction}").parse().ok()?;
    Some(minutes as f64 * 60.0 + seconds)
}

fn is_digits(part: &str) -> bool {
    !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_is_unset() {
        assert_eq!(RaceTime::parse("00:00.0"), RaceTime::Unset);
    }

    #[test]
    fn other_zero_spellings_are_timed() {
        // Only the exact sentinel means "never filled in"
        assert_eq!(RaceTime::parse("0:00.0"), RaceTime::Timed(0.0));
        assert_eq!(RaceTime::parse("00:00.00"), RaceTime::Timed(0.0));
    }

    #[test]
    fn parses_minutes_and_tenths() {
        match RaceTime::parse("01:23.4") {
            RaceTime::Timed(seconds) => assert!((seconds - 83.4).abs() < 1e-9),
            other => panic!("expected a timed value, got {other:?}"),
        }
        assert_eq!(RaceTime::parse("00:59.0"), RaceTime::Timed(59.0));
    }

    #[test]
    fn parses_long_minutes_and_fractions() {
        assert_eq!(RaceTime::parse("123:05.25"), RaceTime::Timed(7385.25));
    }

    #[test]
    fn rejects_wrong_shapes() {
        for bad in ["", "abc", "1:2", "01:23", "01:23.4.5", "1:2:3.4", ":23.4", "01:.4", "01:23."] {
            assert_eq!(RaceTime::parse(bad), RaceTime::Malformed, "{bad:?}");
        }
    }

    #[test]
    fn rejects_signs_and_whitespace() {
        for bad in ["-1:00.0", "+1:00.0", " 01:00.0", "01:00.0 ", "01: 00.0"] {
            assert_eq!(RaceTime::parse(bad), RaceTime::Malformed, "{bad:?}");
        }
    }

    #[test]
    fn malformed_sorts_after_any_valid_time() {
        let slow = RaceTime::parse("999:59.9").sort_key();
        assert!(RaceTime::Malformed.sort_key() > slow);
    }

    #[test]
    fn entry_deserializes_with_defaults() {
        let entry: Entry = serde_json::from_str(r#"{"name": "Runner1"}"#).unwrap();
        assert_eq!(entry.time, UNSET_TIME);
        assert_eq!(entry.nickname, "");
        assert!(entry.race_time().is_unset());
    }

    #[test]
    fn entry_rejects_unknown_fields() {
        let result: Result<Entry, _> =
            serde_json::from_str(r#"{"name": "Runner1", "place": 1}"#);
        assert!(result.is_err());
    }
}
