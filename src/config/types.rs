// src/config/types.rs
use serde::{Deserialize, Serialize};

/// Thresholds used by the analyzers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportingConfig {
    /// Managers allowed between an employee and the root before the line
    /// counts as too long.
    pub max_managers_to_root: usize,
    /// A manager earning less than this multiple of the direct-report
    /// average is underpaid.
    pub min_salary_factor: f64,
    /// A manager earning more than this multiple of the direct-report
    /// average is overpaid.
    pub max_salary_factor: f64,
}

impl Default for ReportingConfig {
    fn default() -> Self {
        Self {
            max_managers_to_root: 4,
            min_salary_factor: 1.2,
            max_salary_factor: 1.5,
        }
    }
}

/// Where employee records come from and how many are accepted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourceConfig {
    pub max_record_count: usize,
    pub default_location: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            max_record_count: 1000,
            default_location: "employees.csv".to_string(),
        }
    }
}

/// `orgcheck.toml` as written on disk. Every key is optional here so that
/// a missing one can be reported by name.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct OrgCheckToml {
    #[serde(default)]
    pub reporting: RawReporting,
    #[serde(default)]
    pub source: RawSource,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawReporting {
    pub max_managers_to_root: Option<toml::Value>,
    pub min_salary_factor: Option<toml::Value>,
    pub max_salary_factor: Option<toml::Value>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawSource {
    pub max_record_count: Option<toml::Value>,
    pub default_location: Option<toml::Value>,
}
