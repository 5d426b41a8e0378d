//! Bracket configuration models.

use log::debug;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};
use thiserror::Error;

/// Smallest bracket that can be built. Smaller requests are clamped up.
pub const MIN_PLAYERS: usize = 2;

/// Player count used when nothing else is configured.
pub const DEFAULT_PLAYER_COUNT: usize = 8;

/// Errors that can occur while loading a configuration document
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file could not be read
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration document is not valid JSON for a bracket config
    #[error("Invalid config document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Tournament format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TournamentType {
    /// Players are eliminated after a single loss
    #[default]
    SingleElimination,
}

impl TournamentType {
    /// Every format the builder knows how to lay out
    pub const ALL: [TournamentType; 1] = [TournamentType::SingleElimination];

    /// Human readable name
    pub fn name(&self) -> &'static str {
        match self {
            TournamentType::SingleElimination => "Single Elimination",
        }
    }

    /// Short description shown next to the name
    pub fn description(&self) -> &'static str {
        match self {
            TournamentType::SingleElimination => "Players are eliminated after a single loss",
        }
    }
}

impl std::fmt::Display for TournamentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentType::SingleElimination => write!(f, "single-elimination"),
        }
    }
}

/// Display names used for the last three played rounds, plus the label
/// prefix for every earlier round ("Round 1", "Round 2", ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RoundNames {
    pub finals: String,
    pub semi_finals: String,
    pub quarter_finals: String,
    pub default: String,
}

impl Default for RoundNames {
    fn default() -> Self {
        Self {
            finals: "Finals".to_string(),
            semi_finals: "Semi-Finals".to_string(),
            quarter_finals: "Quarter-Finals".to_string(),
            default: "Round".to_string(),
        }
    }
}

/// Bracket configuration
///
/// A configuration is taken as-is from the caller and reconciled by
/// [`BracketConfig::normalized`] before the builder sees it, so a short
/// name list or an undersized player count is never an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BracketConfig {
    /// Tournament format
    #[serde(rename = "type")]
    pub tournament_type: TournamentType,

    /// Requested number of players (clamped to at least 2)
    pub player_count: usize,

    /// Player names in seed order
    pub player_names: Vec<String>,

    /// Round display names
    pub round_names: RoundNames,
}

impl Default for BracketConfig {
    fn default() -> Self {
        Self::new(DEFAULT_PLAYER_COUNT)
    }
}

impl BracketConfig {
    /// Create a configuration for `player_count` players with synthesized names
    pub fn new(player_count: usize) -> Self {
        Self {
            tournament_type: TournamentType::SingleElimination,
            player_count,
            player_names: Vec::new(),
            round_names: RoundNames::default(),
        }
    }

    /// Create a configuration from an explicit name list; the player count
    /// follows the list length.
    pub fn with_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let player_names: Vec<String> = names.into_iter().map(Into::into).collect();
        Self {
            player_count: player_names.len(),
            player_names,
            ..Self::new(DEFAULT_PLAYER_COUNT)
        }
    }

    /// Replace the round display names
    pub fn round_names(mut self, round_names: RoundNames) -> Self {
        self.round_names = round_names;
        self
    }

    /// Parse a JSON configuration document. Missing fields take defaults.
    pub fn from_json(document: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(document)?)
    }

    /// Read and parse a JSON configuration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let document = fs::read_to_string(path)?;
        Self::from_json(&document)
    }

    /// Clamp the player count and reconcile the name list with it.
    ///
    /// Missing names are synthesized as `Player N` (1-based); extra names are
    /// dropped.
    pub fn normalized(mut self) -> Self {
        if self.player_count < MIN_PLAYERS {
            debug!(
                "Clamping player count {} to {}",
                self.player_count, MIN_PLAYERS
            );
            self.player_count = MIN_PLAYERS;
        }

        if self.player_names.len() > self.player_count {
            self.player_names.truncate(self.player_count);
        } else {
            let start = self.player_names.len();
            self.player_names
                .extend((start..self.player_count).map(default_player_name));
        }

        self
    }
}

/// Name used for the player at a 0-based seed index when none was given
pub fn default_player_name(index: usize) -> String {
    format!("Player {}", index + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BracketConfig::default();
        assert_eq!(config.player_count, 8);
        assert!(config.player_names.is_empty());
        assert_eq!(config.round_names.finals, "Finals");
        assert_eq!(config.tournament_type, TournamentType::SingleElimination);
    }

    #[test]
    fn test_normalized_synthesizes_names() {
        let config = BracketConfig::new(3).normalized();
        assert_eq!(config.player_names, vec!["Player 1", "Player 2", "Player 3"]);
    }

    #[test]
    fn test_normalized_clamps_player_count() {
        let config = BracketConfig::new(0).normalized();
        assert_eq!(config.player_count, 2);
        assert_eq!(config.player_names.len(), 2);

        let config = BracketConfig::with_names(["Solo"]).normalized();
        assert_eq!(config.player_count, 2);
        assert_eq!(config.player_names, vec!["Solo", "Player 2"]);
    }

    #[test]
    fn test_normalized_pads_partial_names() {
        let mut config = BracketConfig::new(4);
        config.player_names = vec!["Ada".to_string(), "Brook".to_string()];
        let config = config.normalized();
        assert_eq!(config.player_names, vec!["Ada", "Brook", "Player 3", "Player 4"]);
    }

    #[test]
    fn test_normalized_truncates_extra_names() {
        let mut config = BracketConfig::with_names(["a", "b", "c", "d"]);
        config.player_count = 2;
        let config = config.normalized();
        assert_eq!(config.player_names, vec!["a", "b"]);
    }

    #[test]
    fn test_from_json_partial_document() {
        let config = BracketConfig::from_json(
            r#"{ "playerCount": 5, "roundNames": { "finals": "Grand Final" } }"#,
        )
        .unwrap();
        assert_eq!(config.player_count, 5);
        assert_eq!(config.round_names.finals, "Grand Final");
        assert_eq!(config.round_names.semi_finals, "Semi-Finals");
        assert_eq!(config.tournament_type, TournamentType::SingleElimination);
    }

    #[test]
    fn test_from_json_tournament_type() {
        let config = BracketConfig::from_json(r#"{ "type": "single-elimination" }"#).unwrap();
        assert_eq!(config.tournament_type, TournamentType::SingleElimination);

        let result = BracketConfig::from_json(r#"{ "type": "round-robin" }"#);
        assert!(matches!(result, Err(ConfigError::Json(_))));
    }

    #[test]
    fn test_from_file_missing() {
        let result = BracketConfig::from_file("/nonexistent/bracket.json");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_tournament_type_metadata() {
        assert_eq!(TournamentType::ALL.len(), 1);
        assert_eq!(TournamentType::SingleElimination.name(), "Single Elimination");
        assert_eq!(
            TournamentType::SingleElimination.to_string(),
            "single-elimination"
        );
    }
}
