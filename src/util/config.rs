//! Configuration file support for pypkg.
//!
//! pypkg reads two configuration file locations:
//! - Global: `~/.pypkg/config.toml` - User-wide defaults
//! - Project: `.pypkg/config.toml` - Overrides for the current directory
//!
//! Project config takes precedence over global config. Values given on the
//! command line take precedence over both.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// pypkg configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Package metadata defaults
    pub package: PackageDefaults,

    /// Python settings
    pub python: PythonConfig,
}

/// Defaults for package metadata not given on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PackageDefaults {
    /// Default version for new packages
    pub version: Option<String>,

    /// User qualifier appended to every distribution name
    pub user: Option<String>,

    /// Author name
    pub author: Option<String>,

    /// Author email
    pub email: Option<String>,

    /// Project url
    pub url: Option<String>,
}

/// Python-related configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PythonConfig {
    /// Interpreter used in the generated Makefile (e.g., /usr/bin/python3)
    pub interpreter: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// Load configuration with fallback to defaults if file doesn't exist.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            Self::load(path).unwrap_or_else(|e| {
                tracing::warn!("Failed to load config from {}: {:#}", path.display(), e);
                Self::default()
            })
        } else {
            Self::default()
        }
    }

    /// Merge another config into this one (other takes precedence).
    pub fn merge(&mut self, other: Config) {
        let Config { package, python } = other;

        if package.version.is_some() {
            self.package.version = package.version;
        }
        if package.user.is_some() {
            self.package.user = package.user;
        }
        if package.author.is_some() {
            self.package.author = package.author;
        }
        if package.email.is_some() {
            self.package.email = package.email;
        }
        if package.url.is_some() {
            self.package.url = package.url;
        }

        if python.interpreter.is_some() {
            self.python.interpreter = python.interpreter;
        }
    }
}

/// Load merged configuration from global and project locations.
///
/// Order of precedence (highest to lowest):
/// 1. Project config (.pypkg/config.toml)
/// 2. Global config (~/.pypkg/config.toml)
/// 3. Defaults
pub fn load_config(global_path: Option<&Path>, project_path: &Path) -> Config {
    let mut config = Config::default();

    if let Some(global_path) = global_path {
        config.merge(Config::load_or_default(global_path));
    }

    config.merge(Config::load_or_default(project_path));

    config
}

/// Get the global pypkg config directory (~/.pypkg).
pub fn global_config_dir() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|b| b.home_dir().join(".pypkg"))
}

/// Get the global config path (~/.pypkg/config.toml).
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("config.toml"))
}

/// Get the project config path (.pypkg/config.toml).
pub fn project_config_path(project_root: &Path) -> PathBuf {
    project_root.join(".pypkg").join("config.toml")
}
