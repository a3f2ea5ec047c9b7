use super::*;

#[test]
fn test_empty_config_uses_defaults() {
    let config = TournamentConfig::from_toml_str("").unwrap();
    assert_eq!(config, TournamentConfig::default());
    assert_eq!(config.trials, 10);
    assert_eq!(config.max_moves, 1000);
    assert_eq!(config.depth, 2);
}

#[test]
fn test_overrides_from_toml() {
    let config = TournamentConfig::from_toml_str(
        r#"
trials = 3
max_moves = 40
depth = 1
seed = 7
start_fen = "k7/8/8/8/8/8/8/K6R w - - 0 1"
output = "results.json"
"#,
    )
    .unwrap();

    assert_eq!(config.trials, 3);
    assert_eq!(config.max_moves, 40);
    assert_eq!(config.depth, 1);
    assert_eq!(config.seed, Some(7));
    assert_eq!(config.output, Some(PathBuf::from("results.json")));
    assert!(config.start_board().is_ok());
}

#[test]
fn test_unknown_key_is_rejected() {
    let err = TournamentConfig::from_toml_str("trails = 3").unwrap_err();
    assert!(matches!(err, TournamentError::Parse(_)));
}

#[test]
fn test_wrong_type_is_rejected() {
    assert!(TournamentConfig::from_toml_str("depth = \"deep\"").is_err());
}

#[test]
fn test_bad_start_fen_is_reported() {
    let config = TournamentConfig {
        start_fen: Some("nonsense".to_string()),
        ..Default::default()
    };
    assert!(matches!(config.start_board(), Err(TournamentError::Board(_))));
}

#[test]
fn test_missing_file_is_a_read_error() {
    let err = TournamentConfig::load(Path::new("/nonexistent/tournament.toml")).unwrap_err();
    assert!(matches!(err, TournamentError::Read { .. }));
    assert!(err.to_string().contains("tournament.toml"));
}
