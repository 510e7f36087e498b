//! Classification and ordering of entries into leaderboard standings.
//!
//! Entries split into two groups by their [`RaceTime`]:
//!
//! ```text
//! timed    (Timed, Malformed)  →  ascending seconds, malformed last
//! untimed  (Unset)             →  nickname, case-insensitive
//! ```
//!
//! Standings are the timed group followed by the untimed group, numbered
//! 1..n across the whole sequence. Both sorts are stable, so ties keep the
//! order the collector produced them in.

use crate::types::{Entry, RaceTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RankError {
    #[error("{name}: time {time:?} is not in MM:SS.t form")]
    MalformedTime { name: String, time: String },
}

/// What to do with a time that is neither the unset sentinel nor `MM:SS.t`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedTimePolicy {
    /// Rank it after every valid time, still ahead of unset entries.
    #[default]
    Demote,
    /// Refuse the whole update.
    Reject,
}

/// One ranked row of the leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Standing {
    /// 1-based position.
    pub rank: usize,
    #[serde(flatten)]
    pub entry: Entry,
}

/// Rank entries, demoting malformed times.
pub fn rank(entries: &[Entry]) -> Vec<Standing> {
    let (mut timed, mut untimed): (Vec<(RaceTime, &Entry)>, Vec<(RaceTime, &Entry)>) = entries
        .iter()
        .map(|entry| (entry.race_time(), entry))
        .partition(|(time, _)| !time.is_unset());

    timed.sort_by(|(a, _), (b, _)| a.sort_key().total_cmp(&b.sort_key()));
    untimed.sort_by_cached_key(|(_, entry)| entry.nickname.to_lowercase());

    timed
        .into_iter()
        .chain(untimed)
        .enumerate()
        .map(|(idx, (_, entry))| Standing {
            rank: idx + 1,
            entry: entry.clone(),
        })
        .collect()
}

/// Rank entries under the given policy.
///
/// With [`MalformedTimePolicy::Reject`] the first malformed time in input
/// order is reported and nothing is ranked.
pub fn rank_with_policy(
    entries: &[Entry],
    policy: MalformedTimePolicy,
) -> Result<Vec<Standing>, RankError> {
    for entry in entries {
        if entry.race_time() != RaceTime::Malformed {
            continue;
        }
        match policy {
            MalformedTimePolicy::Reject => {
                return Err(RankError::MalformedTime {
                    name: entry.name.clone(),
                    time: entry.time.clone(),
                });
            }
            MalformedTimePolicy::Demote => {
                log::warn!(
                    "{}: time {:?} is not in MM:SS.t form, ranking it after valid times",
                    entry.name,
                    entry.time
                );
            }
        }
    }
    Ok(rank(entries))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::UNSET_TIME;

    fn entry(time: &str, nickname: &str) -> Entry {
        Entry::new(format!("Runner-{nickname}"), time, nickname)
    }

    fn nicknames(standings: &[Standing]) -> Vec<&str> {
        standings.iter().map(|s| s.entry.nickname.as_str()).collect()
    }

    #[test]
    fn mixed_scenario() {
        let entries = vec![
            entry("01:10.0", "A"),
            entry(UNSET_TIME, "Zed"),
            entry("00:55.0", "B"),
            entry(UNSET_TIME, "alice"),
        ];
        let standings = rank(&entries);
        assert_eq!(nicknames(&standings), vec!["B", "A", "alice", "Zed"]);
        let ranks: Vec<usize> = standings.iter().map(|s| s.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3, 4]);
    }

    #[test]
    fn comparison_is_numeric_not_lexicographic() {
        let entries = vec![entry("01:05.0", "slow"), entry("00:59.0", "fast")];
        assert_eq!(nicknames(&rank(&entries)), vec!["fast", "slow"]);

        // "9:00.0" sorts after "10:00.0" as text but is faster
        let entries = vec![entry("10:00.0", "ten"), entry("9:00.0", "nine")];
        assert_eq!(nicknames(&rank(&entries)), vec!["nine", "ten"]);
    }

    #[test]
    fn unset_ranks_after_every_timed_entry() {
        let entries = vec![
            entry(UNSET_TIME, "aaa"),
            entry("99:59.9", "slowest"),
            entry("not a time", "broken"),
        ];
        let standings = rank(&entries);
        assert_eq!(nicknames(&standings), vec!["slowest", "broken", "aaa"]);
    }

    #[test]
    fn unset_sorted_case_insensitively() {
        let entries = vec![
            entry(UNSET_TIME, "Zed"),
            entry(UNSET_TIME, "bob"),
            entry(UNSET_TIME, "Alice"),
        ];
        assert_eq!(nicknames(&rank(&entries)), vec!["Alice", "bob", "Zed"]);
    }

    #[test]
    fn malformed_times_keep_input_order() {
        let entries = vec![
            entry("x", "second-bad"),
            entry("00:10.0", "ok"),
            entry("y", "first-bad"),
        ];
        assert_eq!(
            nicknames(&rank(&entries)),
            vec!["ok", "second-bad", "first-bad"]
        );
    }

    #[test]
    fn equal_times_keep_input_order() {
        let entries = vec![entry("00:30.0", "first"), entry("00:30.0", "second")];
        assert_eq!(nicknames(&rank(&entries)), vec!["first", "second"]);
    }

    #[test]
    fn duplicates_are_all_ranked() {
        let entries = vec![entry("00:30.0", "same"), entry("00:30.0", "same")];
        let standings = rank(&entries);
        assert_eq!(standings.len(), 2);
        assert_eq!(standings[1].rank, 2);
    }

    #[test]
    fn empty_input_ranks_nothing() {
        assert!(rank(&[]).is_empty());
    }

    #[test]
    fn reject_policy_names_the_runner() {
        let entries = vec![entry("00:30.0", "ok"), Entry::new("Runner4", "1:2", "bad")];
        let err = rank_with_policy(&entries, MalformedTimePolicy::Reject).unwrap_err();
        let RankError::MalformedTime { name, time } = err;
        assert_eq!(name, "Runner4");
        assert_eq!(time, "1:2");
    }

    #[test]
    fn demote_policy_ranks_malformed_last_among_timed() {
        let entries = vec![entry("1:2", "bad"), entry("00:30.0", "ok")];
        let standings = rank_with_policy(&entries, MalformedTimePolicy::Demote).unwrap();
        assert_eq!(nicknames(&standings), vec!["ok", "bad"]);
    }

    #[test]
    fn reject_policy_accepts_valid_and_unset() {
        let entries = vec![entry(UNSET_TIME, "idle"), entry("00:30.0", "ok")];
        let standings = rank_with_policy(&entries, MalformedTimePolicy::Reject).unwrap();
        assert_eq!(nicknames(&standings), vec!["ok", "idle"]);
    }

    #[test]
    fn standing_serializes_flat() {
        let standings = rank(&[Entry::new("Runner1", "00:55.0", "B")]);
        let json = serde_json::to_value(&standings[0]).unwrap();
        assert_eq!(json["rank"], 1);
        assert_eq!(json["nickname"], "B");
        assert_eq!(json["time"], "00:55.0");
    }
}
