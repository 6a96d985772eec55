// src/exit.rs
//! Standardized process exit codes for `orgcheck`.
//!
//! Provides a stable contract for scripts and automation.

use crate::error::OrgError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum OrgCheckExit {
    /// All three reports were produced.
    Success = 0,
    /// Generic error (source unavailable, report write failure).
    Error = 1,
    /// Input validation failed (malformed record, duplicate id, too many records).
    InvalidInput = 2,
    /// The hierarchy is not a single rooted tree (root, manager reference, cycle).
    InvalidHierarchy = 3,
    /// A required setting is missing or invalid.
    ConfigError = 4,
}

impl OrgCheckExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn exit(self) -> ! {
        std::process::exit(self.code())
    }

    /// Picks the exit code for a failed run.
    #[must_use]
    pub fn for_error(err: &anyhow::Error) -> Self {
        match err.downcast_ref::<OrgError>() {
            Some(e) => Self::from(e),
            None => Self::Error,
        }
    }
}

impl From<&OrgError> for OrgCheckExit {
    fn from(err: &OrgError) -> Self {
        match err {
            OrgError::SourceUnavailable { .. } | OrgError::Report(_) => Self::Error,
            OrgError::SourceTooLarge { .. }
            | OrgError::RecordParse { .. }
            | OrgError::DuplicateEmployee { .. } => Self::InvalidInput,
            OrgError::InvalidRoot { .. }
            | OrgError::UnresolvedManager { .. }
            | OrgError::CycleDetected { .. } => Self::InvalidHierarchy,
            OrgError::Config(_) => Self::ConfigError,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_distinct_and_nonzero_on_failure() {
        let failures = [
            OrgCheckExit::Error,
            OrgCheckExit::InvalidInput,
            OrgCheckExit::InvalidHierarchy,
            OrgCheckExit::ConfigError,
        ];
        assert_eq!(OrgCheckExit::Success.code(), 0);
        for (i, a) in failures.iter().enumerate() {
            assert_ne!(a.code(), 0);
            for b in &failures[i + 1..] {
                assert_ne!(a.code(), b.code());
            }
        }
    }

    #[test]
    fn test_structural_errors_map_to_hierarchy_code() {
        let err = anyhow::Error::new(OrgError::CycleDetected {
            employee_id: 3,
            path: vec![2, 3],
        });
        assert_eq!(OrgCheckExit::for_error(&err), OrgCheckExit::InvalidHierarchy);

        let other = anyhow::anyhow!("something else");
        assert_eq!(OrgCheckExit::for_error(&other), OrgCheckExit::Error);
    }
}
