use super::*;

#[test]
fn test_defaults() {
    let settings = MatchSettings::default();
    assert_eq!(settings.white, PlayerKind::Human);
    assert_eq!(settings.black, PlayerKind::Smart);
    assert_eq!(settings.depth, SmartPlayer::DEFAULT_DEPTH);
    assert_eq!(settings.max_turns, 200);
    assert!(settings.verbose);
    assert_eq!(settings.record, None);
}

#[test]
fn test_parse_player_specs() {
    assert_eq!(PlayerKind::parse("human"), Ok((PlayerKind::Human, None)));
    assert_eq!(PlayerKind::parse("RANDOM"), Ok((PlayerKind::Random, None)));
    assert_eq!(PlayerKind::parse("smart"), Ok((PlayerKind::Smart, None)));
    assert_eq!(PlayerKind::parse("smart:5"), Ok((PlayerKind::Smart, Some(5))));

    assert!(PlayerKind::parse("neural").is_err());
    assert!(PlayerKind::parse("smart:deep").is_err());
    assert!(PlayerKind::parse("random:2").is_err());
}

#[test]
fn test_toml_round_trip() {
    let settings = MatchSettings {
        white: PlayerKind::Smart,
        black: PlayerKind::Random,
        depth: 4,
        max_turns: 50,
        verbose: false,
        record: Some("game.json".to_string()),
    };

    let text = toml::to_string_pretty(&settings).unwrap();
    let parsed: MatchSettings = toml::from_str(&text).unwrap();
    assert_eq!(parsed, settings);
}

#[test]
fn test_partial_toml_falls_back_to_defaults() {
    let parsed: MatchSettings = toml::from_str("white = \"random\"\ndepth = 2\n").unwrap();
    assert_eq!(parsed.white, PlayerKind::Random);
    assert_eq!(parsed.depth, 2);
    assert_eq!(parsed.black, PlayerKind::Smart);
    assert_eq!(parsed.max_turns, 200);
}
