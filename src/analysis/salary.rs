// src/analysis/salary.rs
//! Manager pay measured against the average salary of direct reports.

use std::collections::{BTreeMap, HashMap};

use crate::config::ReportingConfig;
use crate::model::{Employee, EmployeeId, Organization};

/// Flagged managers and how far outside the allowed band they are paid.
/// Only flagged managers are present; every amount is positive.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SalaryAnomalies {
    pub underpaid: BTreeMap<Employee, f64>,
    pub overpaid: BTreeMap<Employee, f64>,
}

/// Running total of direct-report salaries for one manager.
#[derive(Debug, Clone, Copy, Default)]
struct ReportTotals {
    sum: u128,
    count: usize,
}

impl ReportTotals {
    #[allow(clippy::cast_precision_loss)]
    fn average(self) -> f64 {
        self.sum as f64 / self.count as f64
    }
}

/// Average direct-report salary for every employee with at least one
/// direct report. The root is never a direct report.
#[must_use]
pub fn direct_report_averages(org: &Organization) -> HashMap<EmployeeId, f64> {
    let mut totals: HashMap<EmployeeId, ReportTotals> = HashMap::new();
    for employee in org.employees() {
        if let Some(manager_id) = employee.manager_id() {
            let t = totals.entry(manager_id).or_default();
            t.sum += u128::from(employee.salary());
            t.count += 1;
        }
    }
    totals.into_iter().map(|(id, t)| (id, t.average())).collect()
}

pub struct SalaryAnalyzer<'a> {
    config: &'a ReportingConfig,
}

impl<'a> SalaryAnalyzer<'a> {
    #[must_use]
    pub fn new(config: &'a ReportingConfig) -> Self {
        Self { config }
    }

    /// Runs both pay tests over every manager in the organization.
    ///
    /// A manager paid exactly at a boundary is compliant. The factors are
    /// used as given; if `min > max` a manager could show up in both maps.
    #[must_use]
    pub fn analyze(&self, org: &Organization) -> SalaryAnomalies {
        let mut anomalies = SalaryAnomalies::default();

        for (manager_id, avg) in direct_report_averages(org) {
            let Some(manager) = org.get(manager_id) else {
                continue;
            };
            #[allow(clippy::cast_precision_loss)]
            let salary = manager.salary() as f64;

            let deficit = self.config.min_salary_factor * avg - salary;
            if deficit > 0.0 {
                anomalies.underpaid.insert(manager.clone(), deficit);
            }

            let excess = salary - self.config.max_salary_factor * avg;
            if excess > 0.0 {
                anomalies.overpaid.insert(manager.clone(), excess);
            }
        }

        tracing::debug!(
            underpaid = anomalies.underpaid.len(),
            overpaid = anomalies.overpaid.len(),
            "salary analysis complete"
        );
        anomalies
    }
}
