//! Application configuration.
//!
//! Settings are layered: built-in defaults, then an optional TOML file under
//! the user's config directory, then `MARINA_`-prefixed environment variables.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;

use crate::fleet::DEFAULT_CAPACITY;

/// Directory under the user's config directory holding `config.toml`.
pub const CONFIG_DIR: &str = "marina";

const DEFAULT_CONFIG: &str = r#"# Marina fleet manager settings.

# Maximum number of boats the marina holds.
capacity = 120

# Directory for log files.
# log_dir = "/var/log/marina"
"#;

/// Runtime settings for the fleet manager.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Maximum number of boats held in the fleet.
    pub capacity: usize,
    /// Directory where log files are written.
    pub log_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            log_dir: default_log_dir(),
        }
    }
}

impl AppConfig {
    fn build(path: Option<&Path>, environment: Environment) -> Result<Self> {
        let defaults = Self::default();
        let mut builder = Config::builder()
            .set_default("capacity", defaults.capacity as i64)?
            .set_default("log_dir", defaults.log_dir.to_string_lossy().into_owned())?;

        if let Some(path) = path {
            let file = File::from(path).format(FileFormat::Toml).required(false);
            builder = builder.add_source(file);
        }

        let settings = builder
            .add_source(environment.try_parsing(true))
            .build()
            .context("failed to build configuration")?;
        settings
            .try_deserialize()
            .context("failed to parse configuration")
    }

    /// Load settings from the default config file and the environment.
    ///
    /// When the settings cannot be read the defaults are used instead, and the
    /// error is handed back so the caller can report it.
    pub fn load_or_default() -> (Self, Option<anyhow::Error>) {
        Self::build_or_default(config_path().as_deref(), Environment::with_prefix("MARINA"))
    }

    fn build_or_default(
        path: Option<&Path>,
        environment: Environment,
    ) -> (Self, Option<anyhow::Error>) {
        match Self::build(path, environment) {
            Ok(config) => (config, None),
            Err(err) => (Self::default(), Some(err)),
        }
    }
}

/// Path of the user config file, if a config directory is known.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join("config.toml"))
}

/// Write a commented default config file when none exists yet.
pub fn ensure_default_config() -> Result<()> {
    match config_path() {
        Some(path) => write_default_config(&path),
        None => Ok(()),
    }
}

fn write_default_config(path: &Path) -> Result<()> {
    if path.exists() {
        return Ok(());
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(path, DEFAULT_CONFIG)
        .with_context(|| format!("failed to write {}", path.display()))
}

fn default_log_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|dir| dir.join(CONFIG_DIR).join("logs"))
        .unwrap_or_else(|| PathBuf::from("logs"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::tempdir;

    fn no_env() -> Environment {
        Environment::with_prefix("MARINA").source(Some(HashMap::new()))
    }

    #[test]
    fn defaults_apply_without_file() -> Result<()> {
        let config = AppConfig::build(None, no_env())?;
        assert_eq!(config.capacity, DEFAULT_CAPACITY);
        assert_eq!(config.log_dir, default_log_dir());
        Ok(())
    }

    #[test]
    fn file_overrides_defaults() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("config.toml");
        fs::write(&path, "capacity = 3\nlog_dir = \"/tmp/marina-logs\"\n")?;

        let config = AppConfig::build(Some(&path), no_env())?;
        assert_eq!(config.capacity, 3);
        assert_eq!(config.log_dir, PathBuf::from("/tmp/marina-logs"));
        Ok(())
    }

    #[test]
    fn environment_overrides_file() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("config.toml");
        fs::write(&path, "capacity = 3\n")?;

        let env = HashMap::from([("MARINA_CAPACITY".to_string(), "7".to_string())]);
        let environment = Environment::with_prefix("MARINA").source(Some(env));
        let config = AppConfig::build(Some(&path), environment)?;
        assert_eq!(config.capacity, 7);
        Ok(())
    }

    #[test]
    fn invalid_environment_falls_back_to_defaults() {
        let env = HashMap::from([("MARINA_CAPACITY".to_string(), "abc".to_string())]);
        let environment = Environment::with_prefix("MARINA").source(Some(env));

        let (config, err) = AppConfig::build_or_default(None, environment);
        assert_eq!(config.capacity, DEFAULT_CAPACITY);
        assert!(err.is_some());
    }

    #[test]
    fn malformed_file_falls_back_to_defaults() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("config.toml");
        fs::write(&path, "capacity = [not toml\n")?;

        let (config, err) = AppConfig::build_or_default(Some(&path), no_env());
        assert_eq!(config.capacity, DEFAULT_CAPACITY);
        assert!(err.is_some());
        Ok(())
    }

    #[test]
    fn default_config_is_written_once_and_parses() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("nested").join("config.toml");

        write_default_config(&path)?;
        assert_eq!(fs::read_to_string(&path)?, DEFAULT_CONFIG);

        fs::write(&path, "capacity = 5\n")?;
        write_default_config(&path)?;
        assert_eq!(fs::read_to_string(&path)?, "capacity = 5\n");

        fs::write(&path, DEFAULT_CONFIG)?;
        let config = AppConfig::build(Some(&path), no_env())?;
        assert_eq!(config.capacity, 120);
        Ok(())
    }
}
