//! # Rules configuration
//!
//! Tunable match rules. Board size is fixed and not part of the config.
//!
//! ```rust
//! use jb_core::config::RulesConfig;
//!
//! let config = RulesConfig::default();
//! assert_eq!(config.actions_per_turn, 2);
//! let quick = RulesConfig::sudden_death();
//! assert_eq!(quick.goals_to_win, 1);
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::{env, fs};

use crate::error::{CoreError, Result};
use crate::models::{ACTIONS_PER_TURN, GOALS_TO_WIN};

/// Environment variable naming a JSON rules file.
pub const RULES_CONFIG_PATH_ENV: &str = "JB_RULES_CONFIG_PATH";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Moves granted per turn (default: 2)
    #[serde(default = "default_actions_per_turn")]
    pub actions_per_turn: u8,
    /// Goals that end the match (default: 2)
    #[serde(default = "default_goals_to_win")]
    pub goals_to_win: u32,
}

fn default_actions_per_turn() -> u8 {
    ACTIONS_PER_TURN
}

fn default_goals_to_win() -> u32 {
    GOALS_TO_WIN
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            actions_per_turn: ACTIONS_PER_TURN,
            goals_to_win: GOALS_TO_WIN,
        }
    }
}

impl RulesConfig {
    /// First goal wins.
    pub fn sudden_death() -> Self {
        Self {
            goals_to_win: 1,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.actions_per_turn == 0 {
            return Err(CoreError::InvalidConfig("actions_per_turn must be at least 1".into()));
        }
        if self.goals_to_win == 0 {
            return Err(CoreError::InvalidConfig("goals_to_win must be at least 1".into()));
        }
        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: RulesConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Load from the file named by `JB_RULES_CONFIG_PATH`, or the defaults
    /// when the variable is unset or blank.
    pub fn from_env() -> Result<Self> {
        Self::from_env_var(RULES_CONFIG_PATH_ENV)
    }

    fn from_env_var(name: &str) -> Result<Self> {
        let Ok(path) = env::var(name) else {
            return Ok(Self::default());
        };

        let path = path.trim();
        if path.is_empty() {
            return Ok(Self::default());
        }

        log::info!("loading rules config from {name}='{path}'");
        Self::from_path(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = RulesConfig::default();
        assert_eq!(config.actions_per_turn, 2);
        assert_eq!(config.goals_to_win, 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_fills_missing_fields() {
        let config = RulesConfig::from_json(r#"{"goals_to_win": 3}"#).unwrap();
        assert_eq!(config.actions_per_turn, 2);
        assert_eq!(config.goals_to_win, 3);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let zero_actions = r#"{"actions_per_turn": 0}"#;
        let err = RulesConfig::from_json(zero_actions).unwrap_err();
        assert!(matches!(err, CoreError::InvalidConfig(_)));
        assert!(RulesConfig::from_json("not json").is_err());
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let json = r#"{"actions_per_turn": 3, "goals_to_win": 1}"#;
        file.write_all(json.as_bytes()).unwrap();

        let config = RulesConfig::from_path(file.path()).unwrap();
        let expected = RulesConfig {
            actions_per_turn: 3,
            goals_to_win: 1,
        };
        assert_eq!(config, expected);
    }

    #[test]
    fn test_from_env_var() {
        let var = "JB_RULES_CONFIG_PATH_TEST_ONLY";
        env::remove_var(var);
        let unset = RulesConfig::from_env_var(var).unwrap();
        assert_eq!(unset, RulesConfig::default());

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"goals_to_win": 5}}"#).unwrap();
        env::set_var(var, file.path());
        assert_eq!(RulesConfig::from_env_var(var).unwrap().goals_to_win, 5);

        env::set_var(var, "/definitely/not/here.json");
        assert!(matches!(RulesConfig::from_env_var(var), Err(CoreError::Io(_))));
        env::remove_var(var);
    }
}
