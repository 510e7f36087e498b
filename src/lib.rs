//! # StreamTexts Leaderboard
//!
//! Collects race times for a fixed roster of runners, ranks them, and writes
//! a static HTML leaderboard that reloads itself, ready to be shown in a
//! browser tab or a streaming overlay.
//!
//! # Data Flow
//!
//! ```text
//! form (roster fields) → entries → rank → render → leaderboard/leaderboard.html
//! ```
//!
//! Data flows one way. Each update regenerates the page from scratch; there
//! is no state between updates beyond the file itself.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`types`] | `Entry` triple and the parsed `RaceTime` |
//! | [`form`] | Input collector: roster-driven fields, `--set` assignments, terminal prompt |
//! | [`rank`] | Timed/untimed classification and ordering |
//! | [`ordinal`] | 1st / 2nd / 3rd / Nth labels |
//! | [`generate`] | Maud rendering and the delete-then-write update cycle |
//! | [`config`] | `leaderboard.toml` loading, merging, validation, and CSS generation |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Explicit Unset Times
//!
//! A runner whose time field still reads `00:00.0` has not finished. Rather
//! than comparing against that string throughout, the time is parsed once
//! into [`types::RaceTime`] (`Timed`, `Malformed` or `Unset`) and ranking
//! works on the variant.
//!
//! ## Malformed Times
//!
//! A time that is neither the sentinel nor `MM:SS.t` ranks after every valid
//! time by default. Setting `malformed_times = "reject"` makes the update
//! fail instead, leaving the previous page in place.
//!
//! ## Maud Over String Templates
//!
//! The page is built with [Maud](https://maud.lambda.xyz/). Nicknames are
//! free text typed during a live event, so auto-escaping matters.

pub mod config;
pub mod form;
pub mod generate;
pub mod ordinal;
pub mod output;
pub mod rank;
pub mod types;
