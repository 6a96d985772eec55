// src/error.rs
use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;
use crate::model::EmployeeId;

#[derive(Debug, Error)]
pub enum OrgError {
    #[error("employee source is missing or unreadable: {source} (path: {path})")]
    SourceUnavailable {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("employee source is too large: contains {count} records, while the allowed max is {max}")]
    SourceTooLarge { count: usize, max: usize },

    #[error("error parsing employee record on line {line_no}: {cause} (line: {line:?})")]
    RecordParse {
        line_no: usize,
        line: String,
        #[source]
        cause: RecordError,
    },

    #[error("duplicate employee id: {id}")]
    DuplicateEmployee { id: EmployeeId },

    #[error("the hierarchy must have exactly one root, but instead has the following: {candidates:?}")]
    InvalidRoot { candidates: Vec<EmployeeId> },

    #[error("bad manager id [{manager_id}] specified for employee [{employee_id}]")]
    UnresolvedManager {
        manager_id: EmployeeId,
        employee_id: EmployeeId,
    },

    #[error("circular reference detected in hierarchy for employee [{employee_id}]; the path: {path:?}")]
    CycleDetected {
        employee_id: EmployeeId,
        path: Vec<EmployeeId>,
    },

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to write report: {0}")]
    Report(#[from] std::io::Error),
}

/// Why a single employee record was rejected.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("expected 4 or 5 fields, found {0}")]
    FieldCount(usize),

    #[error("invalid {field}: {source}")]
    InvalidNumber {
        field: &'static str,
        source: ParseIntError,
    },

    #[error("id must be positive, got {0}")]
    NonPositiveId(i64),

    #[error("salary must be non-negative, got {0}")]
    NegativeSalary(i64),
}

pub type Result<T> = std::result::Result<T, OrgError>;

impl OrgError {
    /// True for errors that describe a broken hierarchy rather than bad input.
    #[must_use]
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            Self::InvalidRoot { .. } | Self::UnresolvedManager { .. } | Self::CycleDetected { .. }
        )
    }
}
