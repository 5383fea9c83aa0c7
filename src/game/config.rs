use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Cards in a full deck.
pub const DECK_SIZE: usize = 52;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Could not parse rules config: {0}")]
    Parse(String),

    #[error("Invalid rules config: {0}")]
    Invalid(String),
}

/// Numeric parameters of the UpAndDown rules.
///
/// The defaults are the standard game. Fields missing from a JSON document
/// fall back to their default values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Cards dealt to each hand at the start of a game.
    pub initial_hand_size: usize,
    /// Drawing is allowed only while the hand holds fewer cards than this.
    pub max_hand_size: usize,
    /// Smallest hand that may be swapped against the draw pile.
    pub min_hand_size_for_swap: usize,
    /// Cards taken back into the hand after a swap.
    pub swap_redraw_count: usize,
    /// Longest accepted player name, in characters.
    pub max_name_length: usize,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            initial_hand_size: 5,
            max_hand_size: 10,
            min_hand_size_for_swap: 8,
            swap_redraw_count: 5,
            max_name_length: 20,
        }
    }
}

impl RulesConfig {
    /// Parse and validate a config from JSON.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: RulesConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.initial_hand_size == 0 {
            return Err(ConfigError::Invalid(
                "initial_hand_size must be at least 1".to_string(),
            ));
        }

        // Each draw pile must keep at least one card after seeding its center pile
        if self.initial_hand_size > (DECK_SIZE - 4) / 2 {
            return Err(ConfigError::Invalid(format!(
                "initial_hand_size {} leaves too few cards for the draw piles",
                self.initial_hand_size
            )));
        }

        if self.max_hand_size == 0 {
            return Err(ConfigError::Invalid(
                "max_hand_size must be at least 1".to_string(),
            ));
        }

        if self.swap_redraw_count == 0 {
            return Err(ConfigError::Invalid(
                "swap_redraw_count must be at least 1".to_string(),
            ));
        }

        if self.swap_redraw_count > self.min_hand_size_for_swap {
            return Err(ConfigError::Invalid(format!(
                "swap_redraw_count {} exceeds min_hand_size_for_swap {}",
                self.swap_redraw_count, self.min_hand_size_for_swap
            )));
        }

        if self.max_name_length == 0 {
            return Err(ConfigError::Invalid(
                "max_name_length must be at least 1".to_string(),
            ));
        }

        Ok(())
    }

    /// Size of each player's draw pile straight after dealing, before the
    /// center piles are seeded.
    pub fn dealt_draw_pile_size(&self) -> usize {
        (DECK_SIZE - self.initial_hand_size * 2) / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = RulesConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.dealt_draw_pile_size(), 21);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = RulesConfig::from_json_str(r#"{ "max_name_length": 12 }"#).unwrap();
        assert_eq!(config.max_name_length, 12);
        assert_eq!(config.initial_hand_size, 5);
        assert_eq!(config.max_hand_size, 10);
    }

    #[test]
    fn test_empty_json_is_default() {
        assert_eq!(RulesConfig::from_json_str("{}").unwrap(), RulesConfig::default());
    }

    #[test]
    fn test_malformed_json_is_a_parse_error() {
        let result = RulesConfig::from_json_str("{ initial_hand_size: ");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_rejects_hand_too_large_to_deal() {
        let result = RulesConfig::from_json_str(r#"{ "initial_hand_size": 25 }"#);
        assert!(matches!(result, Err(ConfigError::Invalid(_))));

        let largest = RulesConfig::from_json_str(r#"{ "initial_hand_size": 24 }"#).unwrap();
        assert_eq!(largest.dealt_draw_pile_size(), 2);
    }

    #[test]
    fn test_rejects_huge_hand_size_without_overflow() {
        let result = RulesConfig::from_json_str(r#"{ "initial_hand_size": 18446744073709551615 }"#);
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_rejects_swap_redraw_above_swap_threshold() {
        let config = RulesConfig {
            swap_redraw_count: 9,
            ..RulesConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_rejects_zero_values() {
        for config in [
            RulesConfig {
                initial_hand_size: 0,
                ..RulesConfig::default()
            },
            RulesConfig {
                max_hand_size: 0,
                ..RulesConfig::default()
            },
            RulesConfig {
                swap_redraw_count: 0,
                ..RulesConfig::default()
            },
            RulesConfig {
                max_name_length: 0,
                ..RulesConfig::default()
            },
        ] {
            assert!(config.validate().is_err(), "{config:?}");
        }
    }
}
