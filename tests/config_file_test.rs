//! Loading the registry from a configuration file.

use std::io::Write;
use strictly_rooms::{Config, GameError, Registry, RoomId, ScoringMode};

#[test]
fn test_registry_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
[tic-tac-toe]
name = "tic-tac-toe"
version = "1.0.0"
groupNums = [123456, 654321]
scoring = "fresh"
"#
    )
    .unwrap();

    let config = Config::from_file(file.path()).unwrap();
    assert_eq!(config.tic_tac_toe().scoring(), &ScoringMode::Fresh);

    let registry = Registry::from_config(config.tic_tac_toe());
    assert_eq!(registry.label(), "tic-tac-toe@1.0.0");
    assert_eq!(
        registry.eligible_rooms(),
        vec![RoomId::from(123456), RoomId::from(654321)]
    );
    assert!(registry.start_game(RoomId::from(123456)).is_ok());
    assert_eq!(
        registry.start_game(RoomId::from(1)),
        Err(GameError::RoomNotEligible(RoomId::from(1)))
    );
}

#[test]
fn test_missing_file_is_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::from_file(dir.path().join("missing.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}
