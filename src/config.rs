//! Leaderboard configuration module.
//!
//! Handles loading, validating, and merging `leaderboard.toml`. Stock
//! defaults reproduce the classic seven-runner overlay; a user file in the
//! working directory overrides any subset of them.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! title = "Leaderboard"            # <title> of the generated page
//! output_dir = "leaderboard"       # Created on startup, relative to the working directory
//! output_file = "leaderboard.html"
//! reload_delay_ms = 1000           # 0 reloads as soon as the page has loaded
//! malformed_times = "demote"       # or "reject"
//!
//! [theme]
//! font_family = "Montserrat"
//! font_url = "https://fonts.googleapis.com/css2?family=Montserrat:wght@400;700&display=swap"
//! text_color = "#fff"
//! divider = "2px solid #fff"
//! name_size = "14px"
//! time_size = "16px"
//!
//! [[runners]]
//! name = "Runner1"
//! time = "00:00.0"
//! nickname = "Nick1"
//! ```
//!
//! ## Partial Configuration
//!
//! Tables merge key by key, so a file holding only
//!
//! ```toml
//! [theme]
//! text_color = "#ffd700"
//! ```
//!
//! keeps every other default. Arrays replace wholesale: a `[[runners]]` list
//! in the user file is the complete roster.
//!
//! Unknown keys are rejected to catch typos early.

use crate::rank::MalformedTimePolicy;
use crate::types::{Entry, UNSET_TIME};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// File name looked up in the root directory.
pub const CONFIG_FILE: &str = "leaderboard.toml";

/// Number of runners in the stock roster.
const STOCK_RUNNERS: usize = 7;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Leaderboard configuration loaded from `leaderboard.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LeaderboardConfig {
    /// Page title.
    pub title: String,
    /// Output directory, relative to the root.
    pub output_dir: String,
    /// File name of the generated page inside `output_dir`.
    pub output_file: String,
    /// Delay before the page reloads itself, in milliseconds.
    pub reload_delay_ms: u64,
    /// Handling of times that are neither unset nor `MM:SS.t`.
    pub malformed_times: MalformedTimePolicy,
    /// Inline stylesheet settings.
    pub theme: ThemeConfig,
    /// Form fields, one per runner, in display order.
    pub runners: Vec<Entry>,
}

impl Default for LeaderboardConfig {
    fn default() -> Self {
        Self {
            title: "Leaderboard".to_string(),
            output_dir: "leaderboard".to_string(),
            output_file: "leaderboard.html".to_string(),
            reload_delay_ms: 1000,
            malformed_times: MalformedTimePolicy::default(),
            theme: ThemeConfig::default(),
            runners: stock_roster(),
        }
    }
}

fn stock_roster() -> Vec<Entry> {
    (1..=STOCK_RUNNERS)
        .map(|n| Entry::new(format!("Runner{n}"), UNSET_TIME, format!("Nick{n}")))
        .collect()
}

impl LeaderboardConfig {
    /// Validate config values are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.output_dir.trim().is_empty() {
            return Err(ConfigError::Validation(
                "output_dir must not be empty".into(),
            ));
        }
        if self.output_file.trim().is_empty() {
            return Err(ConfigError::Validation(
                "output_file must not be empty".into(),
            ));
        }
        if self.output_file.contains(['/', '\\']) {
            return Err(ConfigError::Validation(
                "output_file must be a file name, not a path".into(),
            ));
        }
        if let Some(pos) = self.runners.iter().position(|r| r.name.trim().is_empty()) {
            return Err(ConfigError::Validation(format!(
                "runners[{pos}].name must not be empty"
            )));
        }
        Ok(())
    }
}

/// Inline stylesheet settings for the generated page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// CSS font family applied to every element.
    pub font_family: String,
    /// Remote stylesheet providing the font. Empty to skip the `<link>`.
    pub font_url: String,
    /// Text color.
    pub text_color: String,
    /// Border between positions and under the row (CSS `border` value).
    pub divider: String,
    /// Font size of the "1st - Nick" line.
    pub name_size: String,
    /// Font size of the time line.
    pub time_size: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            font_family: "Montserrat".to_string(),
            font_url: "https://fonts.googleapis.com/css2?family=Montserrat:wght@400;700&display=swap"
                .to_string(),
            text_color: "#fff".to_string(),
            divider: "2px solid #fff".to_string(),
            name_size: "14px".to_string(),
            time_size: "16px".to_string(),
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(LeaderboardConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay, arrays included, replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `leaderboard.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
pub fn load_raw_config(root: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = root.join(CONFIG_FILE);
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto the stock defaults, then deserialize and validate.
pub fn resolve_config(overlay: Option<toml::Value>) -> Result<LeaderboardConfig, ConfigError> {
    let base = stock_defaults_value();
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: LeaderboardConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `leaderboard.toml` in the given directory.
pub fn load_config(root: &Path) -> Result<LeaderboardConfig, ConfigError> {
    let overlay = load_raw_config(root)?;
    if overlay.is_none() {
        log::debug!("no {} in {}, using stock config", CONFIG_FILE, root.display());
    }
    resolve_config(overlay)
}

/// Returns a fully-commented stock `leaderboard.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# StreamTexts Leaderboard Configuration
# =====================================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
# Unknown keys will cause an error.

# <title> of the generated page.
title = "Leaderboard"

# Directory (relative to the working directory) that receives the page.
# Created on startup if missing.
output_dir = "leaderboard"
output_file = "leaderboard.html"

# The page reloads itself after this many milliseconds so a browser tab or
# streaming overlay picks up each update. 0 reloads immediately.
reload_delay_ms = 1000

# Times that are neither "00:00.0" (not run yet) nor MM:SS.t:
#   "demote" ranks them after every valid time
#   "reject" refuses the update
malformed_times = "demote"

# ---------------------------------------------------------------------------
# Theme
# ---------------------------------------------------------------------------
[theme]
font_family = "Montserrat"
# Remote font stylesheet. Set to "" to rely on locally installed fonts.
font_url = "https://fonts.googleapis.com/css2?family=Montserrat:wght@400;700&display=swap"
text_color = "#fff"
# CSS border drawn between positions and under the row.
divider = "2px solid #fff"
name_size = "14px"
time_size = "16px"

# ---------------------------------------------------------------------------
# Runners
# ---------------------------------------------------------------------------
# One form entry per runner, in display order. A runners list here replaces
# the whole stock roster. time defaults to "00:00.0", nickname to "".
[[runners]]
name = "Runner1"
time = "00:00.0"
nickname = "Nick1"

[[runners]]
name = "Runner2"
time = "00:00.0"
nickname = "Nick2"

[[runners]]
name = "Runner3"
time = "00:00.0"
nickname = "Nick3"

[[runners]]
name = "Runner4"
time = "00:00.0"
nickname = "Nick4"

[[runners]]
name = "Runner5"
time = "00:00.0"
nickname = "Nick5"

[[runners]]
name = "Runner6"
time = "00:00.0"
nickname = "Nick6"

[[runners]]
name = "Runner7"
time = "00:00.0"
nickname = "Nick7"
"##
}

/// Generate the inline stylesheet from theme config.
pub fn generate_css(theme: &ThemeConfig) -> String {
    format!(
        r#"* {{
  box-sizing: border-box;
  margin: 0;
  padding: 0;
  font-family: '{font_family}', sans-serif;
}}
body {{ color: {text_color}; }}
.leaderboard {{ display: flex; width: 100%; border-bottom: {divider}; }}
.leaderboard .position {{ flex: 1; display: flex; flex-direction: column;
  align-items: center; justify-content: center; border-left: {divider};
  padding: 4px; white-space: nowrap; }}
.leaderboard .position:first-of-type {{ border-left: none; }}
.placement-name {{ font-size: {name_size}; font-weight: 700; }}
.perf-time {{ font-size: {time_size}; margin-top: 4px; }}"#,
        font_family = theme.font_family,
        text_color = theme.text_color,
        divider = theme.divider,
        name_size = theme.name_size,
        time_size = theme.time_size,
    )
}
