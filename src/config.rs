//! Runtime configuration, passed from JS as an optional JSON string.

use serde::Deserialize;

use crate::clock::ROUND_SECONDS;
use crate::error::GameError;

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Seconds per round before time runs out.
    pub round_seconds: u32,
    /// Pause after a correct guess before the next puzzle appears.
    pub advance_delay_ms: u32,
    /// Entries shown in the top-scores banner.
    pub banner_size: usize,
    /// Entries shown on the leaderboard screen.
    pub leaderboard_size: usize,
    pub banner_refresh_ms: u32,
    pub toast_ms: u32,
    /// Remote leaderboard; the game falls back to an in-memory board when absent.
    pub firestore: Option<FirestoreConfig>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FirestoreConfig {
    pub project_id: String,
    pub api_key: String,
    #[serde(default = "default_database")]
    pub database: String,
}

fn default_database() -> String {
    "(default)".to_string()
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            round_seconds: ROUND_SECONDS,
            advance_delay_ms: 1500,
            banner_size: 3,
            leaderboard_size: 10,
            banner_refresh_ms: 1000,
            toast_ms: 3000,
            firestore: None,
        }
    }
}

impl GameConfig {
    /// Parses `json`; `None` or a blank string yields the defaults.
    pub fn from_json(json: Option<&str>) -> Result<Self, GameError> {
        let mut config: GameConfig = match json.map(str::trim) {
            None | Some("") => GameConfig::default(),
            Some(text) => serde_json::from_str(text)?,
        };
        // A zero-length round would never report expiry.
        config.round_seconds = config.round_seconds.max(1);
        config.banner_size = config.banner_size.max(1);
        config.leaderboard_size = config.leaderboard_size.max(1);
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_config_uses_defaults() {
        assert_eq!(GameConfig::from_json(None).unwrap(), GameConfig::default());
        assert_eq!(GameConfig::from_json(Some("  ")).unwrap(), GameConfig::default());
    }

    #[test]
    fn partial_config_keeps_other_defaults() {
        let cfg = GameConfig::from_json(Some(r#"{"round_seconds": 45}"#)).unwrap();
        assert_eq!(cfg.round_seconds, 45);
        assert_eq!(cfg.leaderboard_size, 10);
        assert!(cfg.firestore.is_none());
    }

    #[test]
    fn firestore_section_parses() {
        let cfg = GameConfig::from_json(Some(
            r#"{"firestore": {"project_id": "emoji-guess", "api_key": "k"}}"#,
        ))
        .unwrap();
        let fs = cfg.firestore.unwrap();
        assert_eq!(fs.project_id, "emoji-guess");
        assert_eq!(fs.database, "(default)");
    }

    #[test]
    fn zero_round_length_is_clamped() {
        let cfg = GameConfig::from_json(Some(r#"{"round_seconds": 0}"#)).unwrap();
        assert_eq!(cfg.round_seconds, 1);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = GameConfig::from_json(Some(r#"{"round_secs": 10}"#)).unwrap_err();
        assert!(matches!(err, GameError::Config(_)));
    }
}
