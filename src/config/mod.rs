mod corpus;
mod generator;
mod history;

use serde::Deserialize;
use std::fs;
use std::path::Path;
use crate::error::Error;

pub use self::generator::{GeneratorConfig, DEFAULT_SEPARATOR};
pub use self::corpus::CorpusConfig;
pub use self::history::HistoryConfig;

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub generator: GeneratorConfig,
    pub corpus: CorpusConfig,
    pub history: HistoryConfig,
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let content = fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    pub fn from_str(content: &str) -> Result<Self, Error> {
        // An empty document deserializes to unit, not to an empty mapping.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), Error> {
        if self.generator.count == 0 {
            return Err(Error::Config("generator.count must be at least 1".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_config_parsing() {
        let config = Config::from_str(include_str!("../../test_data/config.yml")).unwrap();

        assert_eq!(config.generator.separator, "_");
        assert_eq!(config.generator.prefix, "GSV");
        assert_eq!(config.generator.count, 3);

        assert_eq!(config.corpus.path.as_deref(), Some("test_data/ships.txt"));

        assert_eq!(config.history.directory.as_deref(), Some("logs"));
        assert_eq!(config.history.prefix, "ships_");
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.generator.separator, DEFAULT_SEPARATOR);
        assert!(config.generator.prefix.is_empty());
        assert!(config.corpus.path.is_none());
        assert!(config.history.directory.is_none());
    }

    #[test]
    fn test_partial_config() {
        let config = Config::from_str("history:\n  directory: out\n").unwrap();
        assert_eq!(config.history.directory.as_deref(), Some("out"));
        assert_eq!(config.history.prefix, "names_");
        assert_eq!(config.generator, GeneratorConfig::default());
    }

    #[test]
    fn test_zero_count_rejected() {
        let result = Config::from_str("generator:\n  count: 0\n");
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = Config::from_file("nonexistent.yml");
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_yaml() {
        let result = Config::from_str("invalid: yaml: [");
        assert!(result.is_err());
    }
}
