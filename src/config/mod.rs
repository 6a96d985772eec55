// src/config/mod.rs
//! Loading and validation of `orgcheck.toml`.
//!
//! Every setting is required. Each one is checked on its own so the error
//! names the offending key.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

pub use self::types::{ReportingConfig, SourceConfig};
use self::types::{OrgCheckToml, RawReporting, RawSource};

pub const DEFAULT_CONFIG_FILE: &str = "orgcheck.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration file not found: {path}")]
    NotFound {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed configuration: {0}")]
    Malformed(#[from] toml::de::Error),

    #[error("no value found for the property {0}")]
    Missing(&'static str),

    #[error("invalid value for the property {key}: expected {expected}, got {found}")]
    WrongType {
        key: &'static str,
        expected: &'static str,
        found: String,
    },

    #[error("found value {value} for the property {key} while it must be greater than zero")]
    NotPositive { key: &'static str, value: f64 },
}

/// Validated settings for one analysis run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Config {
    pub reporting: ReportingConfig,
    pub source: SourceConfig,
}

impl Config {
    /// Reads and validates a configuration file.
    ///
    /// # Errors
    /// Returns error if the file cannot be read or any setting is invalid.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::NotFound {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse_toml(&content)?;
        tracing::debug!(path = %path.display(), ?config, "configuration loaded");
        Ok(config)
    }

    /// Parses and validates configuration text.
    ///
    /// # Errors
    /// Returns error on malformed TOML or any missing, mistyped or
    /// non-positive setting.
    pub fn parse_toml(content: &str) -> Result<Self, ConfigError> {
        let raw: OrgCheckToml = toml::from_str(content)?;
        Ok(Self {
            reporting: parse_reporting(&raw.reporting)?,
            source: parse_source(&raw.source)?,
        })
    }

    /// The settings as they would appear in `orgcheck.toml`.
    ///
    /// # Errors
    /// Returns error if serialization fails.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

fn parse_reporting(raw: &RawReporting) -> Result<ReportingConfig, ConfigError> {
    Ok(ReportingConfig {
        max_managers_to_root: positive_count(
            raw.max_managers_to_root.as_ref(),
            "reporting.max_managers_to_root",
        )?,
        min_salary_factor: positive_factor(
            raw.min_salary_factor.as_ref(),
            "reporting.min_salary_factor",
        )?,
        max_salary_factor: positive_factor(
            raw.max_salary_factor.as_ref(),
            "reporting.max_salary_factor",
        )?,
    })
}

fn parse_source(raw: &RawSource) -> Result<SourceConfig, ConfigError> {
    Ok(SourceConfig {
        max_record_count: positive_count(raw.max_record_count.as_ref(), "source.max_record_count")?,
        default_location: text(raw.default_location.as_ref(), "source.default_location")?,
    })
}

#[allow(clippy::cast_precision_loss)]
fn positive_count(value: Option<&toml::Value>, key: &'static str) -> Result<usize, ConfigError> {
    let value = value.ok_or(ConfigError::Missing(key))?;
    let n = value.as_integer().ok_or_else(|| wrong_type(key, "an integer", value))?;
    if n <= 0 {
        return Err(ConfigError::NotPositive { key, value: n as f64 });
    }
    usize::try_from(n).map_err(|_| wrong_type(key, "an integer in range", value))
}

#[allow(clippy::cast_precision_loss)]
fn positive_factor(value: Option<&toml::Value>, key: &'static str) -> Result<f64, ConfigError> {
    let value = value.ok_or(ConfigError::Missing(key))?;
    let n = match value {
        toml::Value::Float(f) => *f,
        toml::Value::Integer(i) => *i as f64,
        other => return Err(wrong_type(key, "a number", other)),
    };
    if !n.is_finite() {
        return Err(wrong_type(key, "a finite number", value));
    }
    if n <= 0.0 {
        return Err(ConfigError::NotPositive { key, value: n });
    }
    Ok(n)
}

fn text(value: Option<&toml::Value>, key: &'static str) -> Result<String, ConfigError> {
    let value = value.ok_or(ConfigError::Missing(key))?;
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| wrong_type(key, "a string", value))
}

fn wrong_type(key: &'static str, expected: &'static str, found: &toml::Value) -> ConfigError {
    ConfigError::WrongType {
        key,
        expected,
        found: found.to_string(),
    }
}
