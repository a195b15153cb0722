use std::path::Path;

use log::info;
use serde::Deserialize;

use crate::core::{CONFIG_ENV_VAR, Result};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Ignore moves once the puzzle is solved, until reset or undo.
    pub lock_after_win: bool,
    /// Oldest undo entries are dropped past this many. `None` keeps everything.
    pub undo_limit: Option<usize>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            lock_after_win: false,
            undo_limit: None,
        }
    }
}

impl EngineConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Reads the file named by the config environment variable, or falls back to defaults.
    pub fn from_env() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => {
                info!("loading engine config from {}", Path::new(&path).display());
                Self::from_file(path)
            }
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let config = EngineConfig::from_json(r#"{ "undo_limit": 3 }"#).unwrap();
        assert_eq!(EngineConfig { lock_after_win: false, undo_limit: Some(3) }, config);
    }

    #[test]
    fn empty_object_is_default() {
        assert_eq!(EngineConfig::default(), EngineConfig::from_json("{}").unwrap());
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = EngineConfig::from_json("{ lock_after_win: ").unwrap_err();
        assert!(matches!(err, crate::core::Error::Json(_)));
    }
}
