// src/analysis/mod.rs
//! Organizational-health analysis over a resolved hierarchy.

pub mod engine;
pub mod reporting_line;
pub mod salary;

pub use engine::Engine;
pub use reporting_line::long_reporting_lines;
pub use salary::{SalaryAnalyzer, SalaryAnomalies};
