// src/source/mod.rs
//! Record sources: where employee records come from.

pub mod csv;

use crate::error::{OrgError, Result};
use crate::model::Employee;

pub use self::csv::CsvSource;

/// Supplies the employee records for one analysis run.
pub trait RecordSource {
    /// Human-readable location, used in logs.
    fn describe(&self) -> String;

    /// Reads and parses every record.
    ///
    /// # Errors
    /// Returns error if the backing source is unavailable, too large, or
    /// contains a malformed record.
    fn records(&self) -> Result<Vec<Employee>>;
}

/// Records already in memory, bounded like any other source.
#[derive(Debug, Clone)]
pub struct MemorySource {
    employees: Vec<Employee>,
    max_records: usize,
}

impl MemorySource {
    #[must_use]
    pub fn new(employees: Vec<Employee>, max_records: usize) -> Self {
        Self { employees, max_records }
    }
}

impl RecordSource for MemorySource {
    fn describe(&self) -> String {
        format!("<memory: {} records>", self.employees.len())
    }

    fn records(&self) -> Result<Vec<Employee>> {
        check_size(self.employees.len(), self.max_records)?;
        Ok(self.employees.clone())
    }
}

pub(crate) fn check_size(count: usize, max: usize) -> Result<()> {
    if count > max {
        return Err(OrgError::SourceTooLarge { count, max });
    }
    Ok(())
}
