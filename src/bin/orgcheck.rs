// src/bin/orgcheck.rs
use std::io;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use tracing::Level;

use orgcheck_core::cli::{self, AnalyzeArgs, Cli, Commands};
use orgcheck_core::exit::OrgCheckExit;
use orgcheck_core::reporting::OutputFormat;

fn main() {
    let cli = Cli::parse();
    init_logging(&cli);

    match run(&cli) {
        Ok(code) => code.exit(),
        Err(e) => {
            eprintln!("{} {e}", "error:".red().bold());
            OrgCheckExit::for_error(&e).exit();
        }
    }
}

fn run(cli: &Cli) -> Result<OrgCheckExit> {
    match &cli.command {
        Some(Commands::Analyze { source, format }) => cli::handle_analyze(&AnalyzeArgs {
            config: cli.config.clone(),
            source: source.clone(),
            format: *format,
        }),
        Some(Commands::Init { force }) => cli::handle_init(&cli.config, *force),
        None => cli::handle_analyze(&AnalyzeArgs {
            config: cli.config.clone(),
            source: None,
            format: OutputFormat::Text,
        }),
    }
}

fn init_logging(cli: &Cli) {
    let level = if cli.verbose {
        Level::DEBUG
    } else if cli.quiet {
        Level::ERROR
    } else {
        Level::INFO
    };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}
