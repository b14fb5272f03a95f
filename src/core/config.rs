//! Game configuration with documented constants
//!
//! Every tunable number of the progression loop lives here. The config is
//! built once at startup and handed to the pool builder and battle session
//! by reference.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::error::{KotobaError, Result};

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub player: PlayerConfig,
    pub encounter: EncounterConfig,
    pub ingestion: IngestionConfig,
}

/// Player survivability
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Starting and maximum hit points
    ///
    /// A tier 3 enemy hits for 7, so 30 hp survives four misses in a row
    /// against the hardest enemy.
    pub max_hp: i32,

    /// Hit points restored by a heal, capped at `max_hp`
    pub heal_amount: i32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            max_hp: 30,
            heal_amount: 10,
        }
    }
}

/// Encounter generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncounterConfig {
    /// Maximum number of words sampled into one enemy's vocabulary
    ///
    /// Large enough that words rarely repeat within an encounter.
    pub vocabulary_cap: usize,

    /// Tier weights over [1, 2] once tier 2 is unlocked
    pub two_tier_weights: [f64; 2],

    /// Tier weights over [1, 2, 3] once tier 3 is unlocked
    ///
    /// Heavily favors common words even at high levels.
    pub three_tier_weights: [f64; 3],
}

impl Default for EncounterConfig {
    fn default() -> Self {
        Self {
            vocabulary_cap: 25,
            two_tier_weights: [0.85, 0.15],
            three_tier_weights: [0.75, 0.20, 0.05],
        }
    }
}

/// Filters applied while building the word pool
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestionConfig {
    /// Reject records whose surface is longer than this many characters
    pub max_surface_len: Option<usize>,
}

impl GameConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a TOML document; missing keys fall back to defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: GameConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.player.max_hp <= 0 {
            return Err(KotobaError::InvalidConfig(format!(
                "player.max_hp ({}) must be positive",
                self.player.max_hp
            )));
        }

        if self.player.heal_amount < 0 {
            return Err(KotobaError::InvalidConfig(format!(
                "player.heal_amount ({}) must not be negative",
                self.player.heal_amount
            )));
        }

        if self.encounter.vocabulary_cap == 0 {
            return Err(KotobaError::InvalidConfig(
                "encounter.vocabulary_cap must be at least 1".into(),
            ));
        }

        check_weights("encounter.two_tier_weights", &self.encounter.two_tier_weights)?;
        check_weights("encounter.three_tier_weights", &self.encounter.three_tier_weights)?;

        if self.ingestion.max_surface_len == Some(0) {
            return Err(KotobaError::InvalidConfig(
                "ingestion.max_surface_len must be at least 1 when set".into(),
            ));
        }

        Ok(())
    }
}

fn check_weights(name: &str, weights: &[f64]) -> Result<()> {
    if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
        return Err(KotobaError::InvalidConfig(format!(
            "{name} must be finite and non-negative: {weights:?}"
        )));
    }
    if weights.iter().sum::<f64>() <= 0.0 {
        return Err(KotobaError::InvalidConfig(format!(
            "{name} must have a positive sum: {weights:?}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = GameConfig::from_toml_str(
            r#"
            [player]
            max_hp = 40

            [ingestion]
            max_surface_len = 3
            "#,
        )
        .unwrap();

        assert_eq!(config.player.max_hp, 40);
        assert_eq!(config.player.heal_amount, 10);
        assert_eq!(config.encounter.vocabulary_cap, 25);
        assert_eq!(config.ingestion.max_surface_len, Some(3));
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = GameConfig::from_toml_str("").unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_rejects_zero_cap() {
        let err = GameConfig::from_toml_str("[encounter]\nvocabulary_cap = 0\n").unwrap_err();
        assert!(matches!(err, KotobaError::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_negative_weight() {
        let mut config = GameConfig::default();
        config.encounter.three_tier_weights = [0.5, -0.1, 0.6];
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_all_zero_weights() {
        let mut config = GameConfig::default();
        config.encounter.two_tier_weights = [0.0, 0.0];
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let err = GameConfig::from_toml_str("[player\nmax_hp = ").unwrap_err();
        assert!(matches!(err, KotobaError::ConfigParse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game.toml");
        std::fs::write(&path, "[player]\nheal_amount = 5\n").unwrap();

        let config = GameConfig::load(&path).unwrap();
        assert_eq!(config.player.heal_amount, 5);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = GameConfig::load(Path::new("/nonexistent/game.toml")).unwrap_err();
        assert!(matches!(err, KotobaError::Io(_)));
    }
}
