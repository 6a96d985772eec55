// src/source/csv.rs
//! Comma-separated employee records.
//!
//! Layout: a header line, then `id,firstName,lastName,salary[,managerId]`
//! per line. Blank lines are skipped and every field is trimmed.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

use super::{check_size, RecordSource};
use crate::error::{OrgError, RecordError, Result};
use crate::model::{Employee, EmployeeId};

/// Reading from this location means stdin.
pub const STDIN_LOCATION: &str = "-";

/// A CSV file (or stdin) holding employee records.
#[derive(Debug, Clone)]
pub struct CsvSource {
    location: PathBuf,
    max_records: usize,
}

impl CsvSource {
    #[must_use]
    pub fn new(location: impl Into<PathBuf>, max_records: usize) -> Self {
        Self { location: location.into(), max_records }
    }

    #[must_use]
    pub fn location(&self) -> &Path {
        &self.location
    }

    fn is_stdin(&self) -> bool {
        self.location.as_os_str() == STDIN_LOCATION
    }

    fn read_lines(&self) -> Result<Vec<String>> {
        let unavailable = |source: io::Error| OrgError::SourceUnavailable {
            source,
            path: self.location.clone(),
        };
        if self.is_stdin() {
            return read_all(io::stdin().lock()).map_err(unavailable);
        }
        let file = File::open(&self.location).map_err(unavailable)?;
        read_all(file).map_err(unavailable)
    }
}

impl RecordSource for CsvSource {
    fn describe(&self) -> String {
        self.location.display().to_string()
    }

    fn records(&self) -> Result<Vec<Employee>> {
        let lines = self.read_lines()?;
        parse_lines(&lines, self.max_records)
    }
}

fn read_all(reader: impl Read) -> io::Result<Vec<String>> {
    BufReader::new(reader).lines().collect()
}

/// Parses CSV text held in memory.
///
/// # Errors
/// Returns `SourceTooLarge` before parsing anything when the record count
/// exceeds `max_records`, otherwise the first `RecordParse` failure.
pub fn parse_str(text: &str, max_records: usize) -> Result<Vec<Employee>> {
    let lines: Vec<&str> = text.lines().collect();
    parse_lines(&lines, max_records)
}

fn parse_lines<S: AsRef<str>>(lines: &[S], max_records: usize) -> Result<Vec<Employee>> {
    // Line numbers are 1-based and count the header.
    let records: Vec<(usize, &str)> = lines
        .iter()
        .enumerate()
        .skip(1)
        .map(|(i, l)| (i + 1, l.as_ref()))
        .filter(|(_, l)| !l.trim().is_empty())
        .collect();

    check_size(records.len(), max_records)?;

    records
        .into_iter()
        .map(|(line_no, line)| {
            parse_record(line).map_err(|cause| OrgError::RecordParse {
                line_no,
                line: line.to_string(),
                cause,
            })
        })
        .collect()
}

/// Parses a single `id,firstName,lastName,salary[,managerId]` record.
///
/// # Errors
/// Returns the specific reason the record was rejected.
pub fn parse_record(line: &str) -> std::result::Result<Employee, RecordError> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    let [id, first, last, salary, rest @ ..] = fields.as_slice() else {
        return Err(RecordError::FieldCount(fields.len()));
    };
    if rest.len() > 1 {
        return Err(RecordError::FieldCount(fields.len()));
    }

    let id = parse_int(id, "id")?;
    let salary = parse_int(salary, "salary")?;
    let salary = u64::try_from(salary).map_err(|_| RecordError::NegativeSalary(salary))?;
    let manager_id = match rest.first() {
        Some(m) if !m.is_empty() => Some(parse_int(m, "manager id")?),
        _ => None,
    };

    Employee::new(id, *first, *last, salary, manager_id)
}

fn parse_int(field: &str, name: &'static str) -> std::result::Result<EmployeeId, RecordError> {
    field
        .parse::<i64>()
        .map_err(|source| RecordError::InvalidNumber { field: name, source })
}
