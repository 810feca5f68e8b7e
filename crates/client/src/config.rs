//! Client configuration.
//!
//! Rule, learning and training settings come from an optional TOML file.
//! Paths and the RNG seed come from environment variables (a `.env` file is
//! honoured).
//!
//! # Environment Variables
//!
//! - `SKIRMISH_TABLE`: value table path (default: platform data directory)
//! - `SKIRMISH_SEED`: RNG seed (default: random)
//! - `SKIRMISH_LOG_DIR`: also write logs to `skirmish.log` in this directory

use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use runtime::RuntimeConfig;

use crate::dirs;

#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub runtime: RuntimeConfig,
    pub table_path: PathBuf,
    pub seed: Option<u64>,
    pub log_dir: Option<PathBuf>,
}

impl ClientConfig {
    /// Load from the environment and an optional TOML file.
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        let runtime = match config_file {
            Some(path) => load_runtime_config(path)?,
            None => RuntimeConfig::default(),
        };
        runtime.validate().context("Invalid runtime configuration")?;

        Ok(Self {
            runtime,
            table_path: read_env::<PathBuf>("SKIRMISH_TABLE")?
                .unwrap_or_else(dirs::default_table_path),
            seed: read_env("SKIRMISH_SEED")?,
            log_dir: read_env("SKIRMISH_LOG_DIR")?,
        })
    }

    /// The configured seed, or a fresh random one.
    pub fn seed_or_random(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}

/// Parse a [`RuntimeConfig`] from a TOML file.
pub fn load_runtime_config(path: &Path) -> Result<RuntimeConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    parse_runtime_config(&text)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

fn parse_runtime_config(text: &str) -> Result<RuntimeConfig> {
    Ok(toml::from_str(text)?)
}

fn read_env<T>(key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(value) if value.trim().is_empty() => Ok(None),
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|err| anyhow::anyhow!("Invalid {key}={value}: {err}")),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let config = parse_runtime_config(
            r#"
            [rules]
            grid_size = 12

            [trainer]
            episodes = 5
            max_turns = 200
            "#,
        )
        .unwrap();

        assert_eq!(config.rules.grid_size, 12);
        assert_eq!(config.rules.victory_score, 500);
        assert_eq!(config.trainer.episodes, 5);
        assert_eq!(config.trainer.max_turns, Some(200));
        assert_eq!(config.learning, runtime::LearningConfig::default());
    }

    #[test]
    fn empty_file_is_default() {
        assert_eq!(parse_runtime_config("").unwrap(), RuntimeConfig::default());
    }

    #[test]
    fn unknown_types_are_rejected() {
        assert!(parse_runtime_config("[rules]\ngrid_size = \"big\"").is_err());
    }

    #[test]
    fn reads_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("skirmish.toml");
        std::fs::write(&path, "[learning]\nepsilon = 0.25\n").unwrap();

        let config = load_runtime_config(&path).unwrap();
        assert_eq!(config.learning.epsilon, 0.25);
        assert!(load_runtime_config(&dir.path().join("missing.toml")).is_err());
    }
}
