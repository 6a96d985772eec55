//! Main execution logic for the analysis run.
//! Load, resolve, then analyze and report. Any failure aborts the run
//! before the sink sees anything.

use crate::config::ReportingConfig;
use crate::error::Result;
use crate::hierarchy::Hierarchy;
use crate::model::Organization;
use crate::reporting::ReportSink;
use crate::source::RecordSource;
use crate::types::AnalysisReport;

use super::reporting_line::long_reporting_lines;
use super::salary::SalaryAnalyzer;

/// The analysis engine. Holds only configuration; every run starts fresh.
pub struct Engine {
    config: ReportingConfig,
}

impl Engine {
    #[must_use]
    pub fn new(config: ReportingConfig) -> Self {
        Self { config }
    }

    /// Load stage: reads every record and builds the snapshot.
    ///
    /// # Errors
    /// Returns source, parse or duplicate-id errors.
    pub fn load(&self, source: &dyn RecordSource) -> Result<Organization> {
        let location = source.describe();
        tracing::info!(source = %location, "loading employee records");

        let org = Organization::from_employees(source.records()?)?;
        tracing::info!(employees = org.len(), "organization loaded");
        tracing::debug!("{org}");
        Ok(org)
    }

    /// Resolve and analyze stages over an already loaded snapshot.
    ///
    /// # Errors
    /// Returns a structural error if the hierarchy is not a single rooted tree.
    pub fn analyze(&self, org: &Organization) -> Result<AnalysisReport> {
        let hierarchy = Hierarchy::resolve(org)?;

        let long_reporting_lines =
            long_reporting_lines(&hierarchy, self.config.max_managers_to_root);
        let salary = SalaryAnalyzer::new(&self.config).analyze(org);

        let report = AnalysisReport {
            root: hierarchy.root(),
            employee_count: org.len(),
            long_reporting_lines,
            underpaid: salary.underpaid,
            overpaid: salary.overpaid,
        };
        tracing::info!(
            long_lines = report.long_reporting_lines.len(),
            underpaid = report.underpaid.len(),
            overpaid = report.overpaid.len(),
            "analysis complete"
        );
        Ok(report)
    }

    /// Full run: load, resolve, analyze, then deliver to the sink.
    ///
    /// # Errors
    /// Returns the first fatal error of any stage, or a write failure from
    /// the sink.
    pub fn run(
        &self,
        source: &dyn RecordSource,
        sink: &mut dyn ReportSink,
    ) -> Result<AnalysisReport> {
        let org = self.load(source)?;
        let report = self.analyze(&org)?;
        sink.deliver(&report)?;
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Employee;
    use crate::reporting::MemorySink;
    use crate::source::MemorySource;

    fn engine() -> Engine {
        Engine::new(ReportingConfig {
            max_managers_to_root: 1,
            min_salary_factor: 1.2,
            max_salary_factor: 1.5,
        })
    }

    fn emp(id: i64, salary: u64, manager: Option<i64>) -> Employee {
        Employee::new(id, "F", "L", salary, manager).unwrap()
    }

    #[test]
    fn test_structural_failure_reaches_no_sink() {
        let source = MemorySource::new(vec![emp(1, 10, None), emp(2, 10, None)], 10);
        let mut sink = MemorySink::default();
        assert!(engine().run(&source, &mut sink).is_err());
        assert!(sink.reports.is_empty());
    }

    #[test]
    fn test_successful_run_delivers_once() {
        let source = MemorySource::new(
            vec![emp(1, 100_000, None), emp(2, 72_000, Some(1)), emp(3, 40_000, Some(2))],
            10,
        );
        let mut sink = MemorySink::default();
        let report = engine().run(&source, &mut sink).unwrap();
        assert_eq!(sink.reports.len(), 1);
        assert_eq!(sink.reports[0], report);
        assert_eq!(report.root, 1);
        assert_eq!(report.employee_count, 3);
    }
}
