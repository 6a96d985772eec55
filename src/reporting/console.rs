// src/reporting/console.rs
//! Human-readable report output.

use std::collections::BTreeMap;
use std::fmt::Display;
use std::io::{self, Write};

use colored::Colorize;

use super::ReportSink;
use crate::model::Employee;
use crate::types::AnalysisReport;

/// Writes the three report sections as plain text, ordered by employee id.
pub struct ConsoleReport<W: Write> {
    out: W,
}

impl ConsoleReport<io::Stdout> {
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleReport<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn section<V, F>(
        &mut self,
        title: &str,
        entries: &BTreeMap<Employee, V>,
        line: F,
    ) -> io::Result<()>
    where
        F: Fn(&Employee, &V) -> String,
    {
        writeln!(self.out, "{} ({})", title.cyan().bold(), format_count(entries.len()))?;
        if entries.is_empty() {
            writeln!(self.out, "  {}", "none".dimmed())?;
        }
        for (employee, value) in entries {
            writeln!(self.out, "  {}", line(employee, value))?;
        }
        Ok(())
    }
}

impl<W: Write> ReportSink for ConsoleReport<W> {
    fn deliver(&mut self, report: &AnalysisReport) -> io::Result<()> {
        self.section("Too long reporting lines", &report.long_reporting_lines, |e, chain| {
            format!("{e} reports to {chain}")
        })?;
        self.section("Underpaid managers", &report.underpaid, |e, amount| {
            format!("{e} earns less than intended by {}", money(*amount))
        })?;
        self.section("Overpaid managers", &report.overpaid, |e, amount| {
            format!("{e} earns more than intended by {}", money(*amount))
        })?;
        writeln!(
            self.out,
            "\n{} {} employees | root {} | {} findings",
            "ORG CHECK".cyan().bold(),
            report.employee_count,
            report.root,
            format_count(report.finding_count()),
        )?;
        self.out.flush()
    }
}

fn money(amount: f64) -> impl Display {
    format!("{amount:.2}")
}

fn format_count(n: usize) -> String {
    if n == 0 {
        n.to_string().green().to_string()
    } else {
        n.to_string().red().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hierarchy::ReportingChain;

    fn emp(id: i64, first: &str) -> Employee {
        Employee::new(id, first, "Doe", 1000, Some(1)).unwrap()
    }

    #[test]
    fn test_sections_rendered() {
        colored::control::set_override(false);

        let mut report = AnalysisReport {
            root: 1,
            employee_count: 5,
            ..AnalysisReport::default()
        };
        report
            .long_reporting_lines
            .insert(emp(5, "Deep"), ReportingChain::from(vec![4, 3, 2, 1]));
        report.overpaid.insert(emp(2, "Rich"), 12000.0);

        let mut sink = ConsoleReport::new(Vec::new());
        sink.deliver(&report).unwrap();
        let text = String::from_utf8(sink.into_inner()).unwrap();

        assert!(text.contains("Deep Doe (id 5) reports to [4, 3, 2, 1]"));
        assert!(text.contains("Underpaid managers (0)\n  none"));
        assert!(text.contains("Rich Doe (id 2) earns more than intended by 12000.00"));
        assert!(text.contains("5 employees | root 1 | 2 findings"));
    }
}
