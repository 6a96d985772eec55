// src/reporting/mod.rs
//! Report sinks: where the results of a run end up.

pub mod console;
pub mod json;

use std::io;

use crate::types::AnalysisReport;

pub use self::console::ConsoleReport;
pub use self::json::JsonReport;

/// Receives the three result maps of one run, all at once.
pub trait ReportSink {
    /// Presents a complete report.
    ///
    /// # Errors
    /// Returns error if the underlying writer fails.
    fn deliver(&mut self, report: &AnalysisReport) -> io::Result<()>;
}

/// Keeps delivered reports in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub reports: Vec<AnalysisReport>,
}

impl ReportSink for MemorySink {
    fn deliver(&mut self, report: &AnalysisReport) -> io::Result<()> {
        self.reports.push(report.clone());
        Ok(())
    }
}

/// Output formats selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
