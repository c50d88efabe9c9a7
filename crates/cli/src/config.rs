//! Configuration handling for plonk-verify CLI
//!
//! Priority: CLI flags > environment variables > config file > defaults

use crate::{CommonArgs, OutputFormat};
use anyhow::{Context, Result};
use plonk_verifier_core::MAX_POWER;
use serde::Deserialize;
use std::{fs, path::Path, path::PathBuf};

/// Resolved configuration for CLI commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub quiet: bool,
    pub json_output: bool,
    pub max_power: u32,
}

impl Config {
    /// Load configuration from file, environment, and CLI args
    pub fn load(common: &CommonArgs) -> Result<Self> {
        let file_config = match &common.config {
            // An explicitly named file must exist and parse
            Some(path) => Some(ConfigFile::load_from(path)?),
            None => match config_file_path() {
                Some(path) if path.exists() => match ConfigFile::load_from(&path) {
                    Ok(config) => Some(config),
                    Err(e) => {
                        log::warn!("Ignoring config file: {:#}", e);
                        None
                    }
                },
                _ => None,
            },
        };

        Ok(Self::resolve(common, file_config.as_ref()))
    }

    /// Merge CLI/env values over the config file and defaults
    pub fn resolve(common: &CommonArgs, file_config: Option<&ConfigFile>) -> Self {
        let defaults = file_config.and_then(|c| c.default.as_ref());

        let output = common
            .output
            .or_else(|| defaults.and_then(|d| d.output))
            .unwrap_or(OutputFormat::Human);

        let max_power = common
            .max_power
            .or_else(|| defaults.and_then(|d| d.max_power))
            .unwrap_or(MAX_POWER);

        if max_power > MAX_POWER {
            log::warn!(
                "max_power {} is above the supported ceiling, using {}",
                max_power,
                MAX_POWER
            );
        }

        Self {
            quiet: common.quiet,
            json_output: output == OutputFormat::Json,
            max_power: max_power.min(MAX_POWER),
        }
    }

    /// Whether human-readable progress lines should be printed
    pub fn chatty(&self) -> bool {
        !self.quiet && !self.json_output
    }
}

/// Configuration file structure
#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
    default: Option<DefaultConfig>,
}

#[derive(Debug, Default, Deserialize)]
struct DefaultConfig {
    output: Option<OutputFormat>,
    max_power: Option<u32>,
}

impl ConfigFile {
    fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        Self::parse(&content).with_context(|| format!("Invalid config file: {:?}", path))
    }

    fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

/// Get config file path
fn config_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("plonk-verifier").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_file() {
        let config = Config::resolve(&CommonArgs::default(), None);
        assert_eq!(
            config,
            Config {
                quiet: false,
                json_output: false,
                max_power: MAX_POWER,
            }
        );
        assert!(config.chatty());
    }

    #[test]
    fn test_file_values_apply() {
        let file = ConfigFile::parse(
            r#"
            [default]
            output = "json"
            max_power = 20
            "#,
        )
        .unwrap();
        let config = Config::resolve(&CommonArgs::default(), Some(&file));
        assert!(config.json_output);
        assert_eq!(config.max_power, 20);
        assert!(!config.chatty());
    }

    #[test]
    fn test_flags_override_file() {
        let file = ConfigFile::parse("[default]\noutput = \"json\"\nmax_power = 20\n").unwrap();
        let common = CommonArgs {
            output: Some(OutputFormat::Human),
            max_power: Some(12),
            quiet: true,
            ..Default::default()
        };
        let config = Config::resolve(&common, Some(&file));
        assert!(!config.json_output);
        assert_eq!(config.max_power, 12);
        assert!(config.quiet);
    }

    #[test]
    fn test_max_power_clamped() {
        let common = CommonArgs {
            max_power: Some(64),
            ..Default::default()
        };
        assert_eq!(Config::resolve(&common, None).max_power, MAX_POWER);
    }

    #[test]
    fn test_empty_file_is_valid() {
        let file = ConfigFile::parse("").unwrap();
        assert_eq!(
            Config::resolve(&CommonArgs::default(), Some(&file)).max_power,
            MAX_POWER
        );
    }

    #[test]
    fn test_malformed_file_rejected() {
        assert!(ConfigFile::parse("[default]\nmax_power = \"lots\"\n").is_err());
        assert!(ConfigFile::parse("[default]\noutput = \"xml\"\n").is_err());
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let common = CommonArgs {
            config: Some(PathBuf::from("/nonexistent/plonk-verifier/config.toml")),
            ..Default::default()
        };
        assert!(Config::load(&common).is_err());
    }
}
