// tests/cli_exit.rs - Exit code tests
use std::fs;
use std::path::PathBuf;

use orgcheck_core::cli::{handle_analyze, handle_init, AnalyzeArgs};
use orgcheck_core::config::Config;
use orgcheck_core::exit::OrgCheckExit;
use orgcheck_core::reporting::OutputFormat;
use tempfile::TempDir;

fn workspace(csv: &str) -> (TempDir, PathBuf) {
    let d = tempfile::tempdir().unwrap();
    let config = d.path().join("orgcheck.toml");
    let mut c = Config::default();
    c.source.default_location = d.path().join("employees.csv").display().to_string();
    fs::write(&config, c.to_toml().unwrap()).unwrap();
    fs::write(d.path().join("employees.csv"), csv).unwrap();
    (d, config)
}

fn analyze(config: PathBuf) -> OrgCheckExit {
    let args = AnalyzeArgs {
        config,
        source: None,
        format: OutputFormat::Json,
    };
    match handle_analyze(&args) {
        Ok(code) => code,
        Err(e) => OrgCheckExit::for_error(&e),
    }
}

#[test]
fn test_exit_0_clean() {
    let (_d, config) = workspace("Id,first,last,salary,manager\n1,A,B,100000,\n2,C,D,70000,1\n");
    assert_eq!(analyze(config), OrgCheckExit::Success);
}

#[test]
fn test_exit_0_with_findings() {
    let (_d, config) = workspace("Id,first,last,salary,manager\n1,A,B,900000,\n2,C,D,70000,1\n");
    assert_eq!(analyze(config), OrgCheckExit::Success);
}

#[test]
fn test_exit_invalid_input() {
    let (_d, config) = workspace("Id,first,last,salary,manager\n1,A,B,lots,\n");
    assert_eq!(analyze(config), OrgCheckExit::InvalidInput);
}

#[test]
fn test_exit_invalid_hierarchy() {
    let (_d, config) = workspace("Id,first,last,salary,manager\n1,A,B,100,\n2,C,D,100,\n");
    assert_eq!(analyze(config), OrgCheckExit::InvalidHierarchy);
}

#[test]
fn test_exit_missing_source() {
    let (d, config) = workspace("");
    fs::remove_file(d.path().join("employees.csv")).unwrap();
    assert_eq!(analyze(config), OrgCheckExit::Error);
}

#[test]
fn test_exit_config_error_before_load() {
    let (d, config) = workspace("not even read");
    let text = Config::default().to_toml().unwrap().replace("max_record_count = 1000", "");
    fs::write(&config, text).unwrap();
    assert_eq!(analyze(config), OrgCheckExit::ConfigError);

    let absent = d.path().join("missing.toml");
    assert_eq!(analyze(absent), OrgCheckExit::ConfigError);
}

#[test]
fn test_init_writes_loadable_config() {
    let d = tempfile::tempdir().unwrap();
    let path = d.path().join("orgcheck.toml");
    assert_eq!(handle_init(&path, false).unwrap(), OrgCheckExit::Success);
    assert_eq!(Config::load(&path).unwrap(), Config::default());

    assert!(handle_init(&path, false).is_err(), "must not overwrite");
    assert!(handle_init(&path, true).is_ok());
}
