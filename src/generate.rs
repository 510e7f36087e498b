//! HTML leaderboard generation.
//!
//! Takes the collected entries, ranks them, and writes a single
//! self-contained page:
//!
//! ```text
//! <root>/
//! └── leaderboard/
//!     └── leaderboard.html    # regenerated wholesale on every update
//! ```
//!
//! ## Update Cycle
//!
//! 1. Apply the malformed-time policy (may refuse the update)
//! 2. Delete the previous page, if any
//! 3. Rank entries ([`crate::rank`])
//! 4. Render with maud and write the new page
//!
//! There is no atomic rename and no backup: the page is disposable output
//! that the next update regenerates from scratch.
//!
//! ## Auto-Reload
//!
//! The last element of `<body>` is a short script that reloads the page, so
//! a browser tab or streaming overlay pointed at the file shows each update
//! without user action.
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! Nicknames and times are auto-escaped.

use crate::config::{self, LeaderboardConfig};
use crate::ordinal::ordinal;
use crate::rank::{self, RankError, Standing};
use crate::types::Entry;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Rank(#[from] RankError),
}

/// Result of one update cycle.
#[derive(Debug)]
pub struct UpdateReport {
    /// Page that was written.
    pub path: PathBuf,
    /// Standings in the order they were rendered.
    pub standings: Vec<Standing>,
    /// Whether a page from an earlier update was removed first.
    pub replaced: bool,
}

/// Writer for the leaderboard page at a fixed location.
#[derive(Debug)]
pub struct Leaderboard {
    config: LeaderboardConfig,
    html_file: PathBuf,
}

impl Leaderboard {
    /// Resolve the output location under `root` and create its directory.
    pub fn open(root: &Path, config: LeaderboardConfig) -> Result<Self, GenerateError> {
        let output_dir = root.join(&config.output_dir);
        fs::create_dir_all(&output_dir)?;
        let html_file = output_dir.join(&config.output_file);
        log::debug!("leaderboard page at {}", html_file.display());
        Ok(Self { config, html_file })
    }

    pub fn html_path(&self) -> &Path {
        &self.html_file
    }

    /// Run one full update cycle, replacing any previous page.
    pub fn update(&self, entries: &[Entry]) -> Result<UpdateReport, GenerateError> {
        let standings = rank::rank_with_policy(entries, self.config.malformed_times)?;
        let replaced = remove_if_exists(&self.html_file)?;
        let page = render_leaderboard(&standings, &self.config);
        fs::write(&self.html_file, page.into_string())?;
        log::info!(
            "wrote {} standings to {}",
            standings.len(),
            self.html_file.display()
        );
        Ok(UpdateReport {
            path: self.html_file.clone(),
            standings,
            replaced,
        })
    }

    /// Rank and render without touching the filesystem.
    pub fn preview(&self, entries: &[Entry]) -> Result<String, GenerateError> {
        let standings = rank::rank_with_policy(entries, self.config.malformed_times)?;
        Ok(render_leaderboard(&standings, &self.config).into_string())
    }
}

/// Delete `path`, treating a missing file as success. Returns whether a file was removed.
fn remove_if_exists(path: &Path) -> io::Result<bool> {
    match fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e),
    }
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the complete leaderboard page.
pub fn render_leaderboard(standings: &[Standing], config: &LeaderboardConfig) -> Markup {
    let css = config::generate_css(&config.theme);
    let content = html! {
        div.leaderboard {
            @for standing in standings {
                (render_position(standing))
            }
        }
        (reload_script(config.reload_delay_ms))
    };
    base_document(&config.title, &config.theme.font_url, &css, content)
}

/// Renders the base HTML document structure
fn base_document(title: &str, font_url: &str, css: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                title { (title) }
                @if !font_url.is_empty() {
                    link href=(font_url) rel="stylesheet";
                }
                style { (PreEscaped(css)) }
            }
            body {
                (content)
            }
        }
    }
}

/// One column of the leaderboard row: "1st - Nick" over the time.
fn render_position(standing: &Standing) -> Markup {
    html! {
        div.position {
            div.placement-name { (ordinal(standing.rank)) " - " (standing.entry.nickname) }
            div.perf-time { (standing.entry.time) }
        }
    }
}

fn reload_script(delay_ms: u64) -> Markup {
    let js = if delay_ms == 0 {
        "window.location.reload();".to_string()
    } else {
        format!("setTimeout(function () {{ window.location.reload(); }}, {delay_ms});")
    };
    html! {
        script { (PreEscaped(js)) }
    }
}

// ============================================================================
// Tests
// ============================================================================
