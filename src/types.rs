// src/types.rs
use std::collections::BTreeMap;

use crate::hierarchy::ReportingChain;
use crate::model::{Employee, EmployeeId};

/// Aggregated results of one analysis run, handed to a report sink whole.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalysisReport {
    pub root: EmployeeId,
    pub employee_count: usize,
    /// Employees whose reporting line is too long, with their full chain.
    pub long_reporting_lines: BTreeMap<Employee, ReportingChain>,
    /// Managers paid below the minimum, with the shortfall.
    pub underpaid: BTreeMap<Employee, f64>,
    /// Managers paid above the maximum, with the excess.
    pub overpaid: BTreeMap<Employee, f64>,
}

impl AnalysisReport {
    /// Returns true if any employee was flagged.
    #[must_use]
    pub fn has_findings(&self) -> bool {
        self.finding_count() > 0
    }

    /// Total number of flagged entries across all three results.
    #[must_use]
    pub fn finding_count(&self) -> usize {
        self.long_reporting_lines.len() + self.underpaid.len() + self.overpaid.len()
    }
}
