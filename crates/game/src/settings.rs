//! Match settings: who plays, how deep, how long.

use std::path::Path;

use serde::{Deserialize, Serialize};

use minimax_player::SmartPlayer;

/// Which strategy plays a side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerKind {
    Human,
    Random,
    Smart,
}

impl PlayerKind {
    /// Parses a player spec string: `human`, `random`, `smart`, or
    /// `smart:<depth>`. The depth, when present, is returned separately.
    pub fn parse(spec: &str) -> Result<(PlayerKind, Option<u8>), String> {
        let mut parts = spec.splitn(2, ':');
        let kind = match parts.next().unwrap_or(spec).to_lowercase().as_str() {
            "human" => PlayerKind::Human,
            "random" => PlayerKind::Random,
            "smart" => PlayerKind::Smart,
            other => return Err(format!("unknown player kind '{}'", other)),
        };
        let depth = match parts.next() {
            Some(d) if kind == PlayerKind::Smart => Some(
                d.parse()
                    .map_err(|_| format!("invalid depth in spec '{}'", spec))?,
            ),
            Some(_) => return Err(format!("only smart takes a depth: '{}'", spec)),
            None => None,
        };
        Ok((kind, depth))
    }
}

/// Settings for one match, loadable from a TOML file and overridable from
/// the command line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchSettings {
    pub white: PlayerKind,
    pub black: PlayerKind,
    /// Plies the smart player looks ahead.
    pub depth: u8,
    /// Turn cutoff so engine matches terminate.
    pub max_turns: u32,
    pub verbose: bool,
    /// Where to write the JSON game record (None = don't).
    pub record: Option<String>,
}

impl Default for MatchSettings {
    fn default() -> Self {
        Self {
            white: PlayerKind::Human,
            black: PlayerKind::Smart,
            depth: SmartPlayer::DEFAULT_DEPTH,
            max_turns: 200,
            verbose: true,
            record: None,
        }
    }
}

impl MatchSettings {
    /// Load settings from a TOML file.
    pub fn load(path: &Path) -> Result<Self, String> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
        toml::from_str(&contents).map_err(|e| format!("Failed to parse {}: {}", path.display(), e))
    }

    /// Save settings to a TOML file.
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let contents =
            toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize: {}", e))?;
        std::fs::write(path, contents).map_err(|e| format!("Failed to write: {}", e))
    }
}

#[cfg(test)]
#[path = "settings_tests.rs"]
mod settings_tests;
