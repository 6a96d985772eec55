// src/cli/handlers.rs
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use colored::Colorize;

use crate::analysis::Engine;
use crate::config::Config;
use crate::error::OrgError;
use crate::exit::OrgCheckExit;
use crate::reporting::{ConsoleReport, JsonReport, OutputFormat, ReportSink};
use crate::source::CsvSource;

#[derive(Debug, Clone)]
pub struct AnalyzeArgs {
    pub config: PathBuf,
    pub source: Option<PathBuf>,
    pub format: OutputFormat,
}

/// Handles the analyze command.
///
/// Configuration is validated before any record is read.
///
/// # Errors
/// Returns the first fatal error of the run; no report is printed then.
pub fn handle_analyze(args: &AnalyzeArgs) -> Result<OrgCheckExit> {
    let config = Config::load(&args.config).map_err(OrgError::from)?;

    let location = args
        .source
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.source.default_location));
    let source = CsvSource::new(location, config.source.max_record_count);

    let mut sink: Box<dyn ReportSink> = match args.format {
        OutputFormat::Text => Box::new(ConsoleReport::stdout()),
        OutputFormat::Json => Box::new(JsonReport::stdout()),
    };

    Engine::new(config.reporting).run(&source, sink.as_mut())?;
    Ok(OrgCheckExit::Success)
}

/// Handles the init command: writes the default configuration.
///
/// # Errors
/// Returns error if the file exists (without `force`) or cannot be written.
pub fn handle_init(path: &Path, force: bool) -> Result<OrgCheckExit> {
    if path.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }
    let content = Config::default()
        .to_toml()
        .context("failed to serialize default configuration")?;
    fs::write(path, content)
        .with_context(|| format!("failed to write {}", path.display()))?;
    eprintln!("{}", format!("Created {}", path.display()).dimmed());
    Ok(OrgCheckExit::Success)
}
