use anyhow::{Context, Result};
use pybrew_version::Version;
use serde::Deserialize;
use std::path::Path;

pub const CONFIG_FILE: &str = "pybrew.toml";

/// The pybrew configuration file structure (pybrew.toml)
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PybrewConfig {
    /// Python runtime configuration
    pub python: PythonConfig,
}

/// Python-specific configuration
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PythonConfig {
    /// Preferred version (e.g., "3.12", "3.11.9")
    pub version: Option<String>,

    /// Oldest acceptable version, used by `pybrew check` when --min is omitted
    pub minimum: Option<String>,
}

impl PybrewConfig {
    /// Load configuration from pybrew.toml, searching upward from the given directory
    pub fn load(start_dir: &Path) -> Result<Option<Self>> {
        let mut current = start_dir.to_path_buf();

        loop {
            let config_path = current.join(CONFIG_FILE);

            if config_path.exists() {
                log::debug!("Reading {}", config_path.display());
                let content = std::fs::read_to_string(&config_path)
                    .with_context(|| format!("Failed to read {}", config_path.display()))?;
                let config: PybrewConfig = toml::from_str(&content)
                    .with_context(|| format!("Failed to parse {}", config_path.display()))?;
                return Ok(Some(config));
            }

            if !current.pop() {
                return Ok(None);
            }
        }
    }

    /// Load configuration by searching upward from the current working directory
    pub fn load_from_cwd() -> Result<Option<Self>> {
        let cwd = std::env::current_dir()?;
        Self::load(&cwd)
    }

    pub fn preferred_version(&self) -> Result<Option<Version>> {
        parse_setting("python.version", self.python.version.as_deref())
    }

    pub fn minimum_version(&self) -> Result<Option<Version>> {
        parse_setting("python.minimum", self.python.minimum.as_deref())
    }
}

fn parse_setting(key: &str, value: Option<&str>) -> Result<Option<Version>> {
    value
        .map(|v| {
            Version::parse(v).with_context(|| format!("Invalid {} in {}: {:?}", key, CONFIG_FILE, v))
        })
        .transpose()
}
