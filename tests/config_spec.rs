use std::path::PathBuf;

use log::LevelFilter;
use puz_reader::Direction;
use puz_reader::config::{CliOverrides, ConfigError, DEFAULT_LOG_LEVEL, PuzConfig};

#[test]
fn empty_file_resolves_to_defaults() {
    let config = PuzConfig::from_toml_str("").expect("parse");
    let resolved = config.resolve(&CliOverrides::default());
    assert_eq!(resolved.log_level, DEFAULT_LOG_LEVEL);
    assert_eq!(resolved.start_direction, Direction::Across);
    assert!(!resolved.autosave);
}

#[test]
fn file_values_apply() {
    let config = PuzConfig::from_toml_str(
        r#"
[general]
log_level = "debug"
start_direction = "down"

[state]
autosave = true
dir = "/tmp/puz-state"
"#,
    )
    .expect("parse");
    let resolved = config.resolve(&CliOverrides::default());
    assert_eq!(resolved.log_level, LevelFilter::Debug);
    assert_eq!(resolved.start_direction, Direction::Down);
    assert!(resolved.autosave);
    assert_eq!(resolved.state_dir, Some(PathBuf::from("/tmp/puz-state")));
}

#[test]
fn sparse_file_keeps_other_defaults() {
    let config = PuzConfig::from_toml_str("[state]\nautosave = true\n").expect("parse");
    let resolved = config.resolve(&CliOverrides::default());
    assert!(resolved.autosave);
    assert_eq!(resolved.log_level, DEFAULT_LOG_LEVEL);
    assert_eq!(resolved.start_direction, Direction::Across);
}

#[test]
fn cli_overrides_win() {
    let config = PuzConfig::from_toml_str(
        "[general]\nlog_level = \"debug\"\nstart_direction = \"down\"\n[state]\nautosave = true\ndir = \"/from/file\"\n",
    )
    .expect("parse");
    let cli = CliOverrides {
        log_level: Some(LevelFilter::Trace),
        start_direction: Some(Direction::Across),
        autosave: Some(false),
        state_dir: Some(PathBuf::from("/from/cli")),
    };
    let resolved = config.resolve(&cli);
    assert_eq!(resolved.log_level, LevelFilter::Trace);
    assert_eq!(resolved.start_direction, Direction::Across);
    assert!(!resolved.autosave);
    assert_eq!(resolved.state_dir, Some(PathBuf::from("/from/cli")));
}

#[test]
fn unknown_start_direction_falls_back_to_across() {
    let config = PuzConfig::from_toml_str("[general]\nstart_direction = \"unknown\"\n").expect("parse");
    assert_eq!(config.general.start_direction, Some(Direction::Unknown));
    assert_eq!(config.resolve(&CliOverrides::default()).start_direction, Direction::Across);
}

#[test]
fn unparsable_log_level_is_ignored() {
    let config = PuzConfig::from_toml_str("[general]\nlog_level = \"chatty\"\n").expect("parse");
    assert_eq!(config.resolve(&CliOverrides::default()).log_level, DEFAULT_LOG_LEVEL);
}

#[test]
fn malformed_toml_is_parse_error() {
    assert!(matches!(
        PuzConfig::from_toml_str("[general\nlog_level = "),
        Err(ConfigError::Parse(_))
    ));
    assert!(matches!(
        PuzConfig::from_toml_str("[state]\nautosave = \"sometimes\"\n"),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn load_from_missing_file_is_default() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = PuzConfig::load_from(&dir.path().join("config.toml")).expect("load");
    assert!(config.general.log_level.is_none());
    assert!(config.state.autosave.is_none());
}

#[test]
fn load_from_reads_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[general]\nlog_level = \"info\"\n").expect("write");
    let config = PuzConfig::load_from(&path).expect("load");
    assert_eq!(config.general.log_level.as_deref(), Some("info"));
    assert_eq!(config.resolve(&CliOverrides::default()).log_level, LevelFilter::Info);
}
