// src/reporting/json.rs
use std::collections::BTreeMap;
use std::io::{self, Write};

use serde::Serialize;

use super::ReportSink;
use crate::hierarchy::ReportingChain;
use crate::model::{Employee, EmployeeId};
use crate::types::AnalysisReport;

/// Writes the report as a single JSON document for machine consumption.
pub struct JsonReport<W: Write> {
    out: W,
}

impl<W: Write> JsonReport<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl JsonReport<io::Stdout> {
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

#[derive(Serialize)]
struct JsonDocument<'a> {
    root: EmployeeId,
    employee_count: usize,
    long_reporting_lines: Vec<ChainEntry<'a>>,
    underpaid_managers: Vec<AmountEntry<'a>>,
    overpaid_managers: Vec<AmountEntry<'a>>,
}

#[derive(Serialize)]
struct ChainEntry<'a> {
    employee: &'a Employee,
    chain: &'a ReportingChain,
}

#[derive(Serialize)]
struct AmountEntry<'a> {
    employee: &'a Employee,
    amount: f64,
}

impl<'a> JsonDocument<'a> {
    fn from_report(report: &'a AnalysisReport) -> Self {
        let amounts = |map: &'a BTreeMap<Employee, f64>| -> Vec<AmountEntry<'a>> {
            map.iter()
                .map(|(employee, amount)| AmountEntry { employee, amount: *amount })
                .collect()
        };
        Self {
            root: report.root,
            employee_count: report.employee_count,
            long_reporting_lines: report
                .long_reporting_lines
                .iter()
                .map(|(employee, chain)| ChainEntry { employee, chain })
                .collect(),
            underpaid_managers: amounts(&report.underpaid),
            overpaid_managers: amounts(&report.overpaid),
        }
    }
}

impl<W: Write> ReportSink for JsonReport<W> {
    fn deliver(&mut self, report: &AnalysisReport) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut self.out, &JsonDocument::from_report(report))?;
        writeln!(self.out)?;
        self.out.flush()
    }
}
