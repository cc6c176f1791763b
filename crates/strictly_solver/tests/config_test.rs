//! Loading solver configuration from disk.

use std::io::Write;
use strictly_solver::SolverConfig;
use tempfile::NamedTempFile;

#[test]
fn test_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "start_position = \"x...o....\"").unwrap();
    writeln!(file, "prompt = \"> \"").unwrap();

    let config = SolverConfig::from_file(file.path()).unwrap();
    assert_eq!(config.start_position(), "x...o....");
    assert_eq!(config.prompt(), "> ");
    assert_eq!(config.log_filter(), SolverConfig::default().log_filter());
    assert!(!*config.json_pretty());
}

#[test]
fn test_malformed_file_is_an_error() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "prompt = [not toml").unwrap();

    let err = SolverConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");

    assert!(SolverConfig::from_file(&path).is_err());
    assert_eq!(
        SolverConfig::load_or_default(&path).unwrap(),
        SolverConfig::default()
    );
}
