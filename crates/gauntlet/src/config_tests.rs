use super::*;

#[test]
fn test_display_name_defaults_to_base_name() {
    let engine = EngineConfig {
        cmd: "./builds/e1".to_string(),
        ..Default::default()
    };
    assert_eq!(engine.display_name(), "e1");

    let named = EngineConfig {
        cmd: "./builds/e1".to_string(),
        name: Some("My Engine".to_string()),
        ..Default::default()
    };
    assert_eq!(named.display_name(), "My Engine");
}

#[test]
fn test_descriptor_token_order() {
    let engine = EngineConfig {
        cmd: "./e1".to_string(),
        arg: Some("--uci".to_string()),
        name: None,
        options: vec![
            ("Hash".to_string(), "16".to_string()),
            ("Threads".to_string(), "2".to_string()),
        ],
    };
    assert_eq!(
        engine.descriptor_tokens(&[], false),
        vec![
            "cmd=./e1",
            "name=e1",
            "proto=uci",
            "arg=--uci",
            "option.Hash=16",
            "option.Threads=2",
        ]
    );
}

#[test]
fn test_empty_startup_arg_is_omitted() {
    let engine = EngineConfig {
        cmd: "./e1".to_string(),
        arg: Some(String::new()),
        ..Default::default()
    };
    let tokens = engine.descriptor_tokens(&[], false);
    assert!(!tokens.iter().any(|t| t.starts_with("arg=")));
}

#[test]
fn test_ponder_appends_after_options_without_dedup() {
    let engine = EngineConfig {
        cmd: "./e1".to_string(),
        options: vec![("Ponder".to_string(), "false".to_string())],
        ..Default::default()
    };
    let tokens = engine.descriptor_tokens(&[], true);
    // Both the user-supplied and the auto-appended Ponder option survive;
    // cutechess-cli applies the last value.
    assert_eq!(tokens[tokens.len() - 2], "option.Ponder=false");
    assert_eq!(tokens[tokens.len() - 1], "option.Ponder=true");
}

#[test]
fn test_strength_options_zero_disables() {
    let capped = MatchConfig {
        elo: Some(2200),
        ..Default::default()
    };
    assert_eq!(
        capped.strength_options(),
        vec![
            ("UCI_LimitStrength".to_string(), "true".to_string()),
            ("UCI_Elo".to_string(), "2200".to_string()),
        ]
    );

    let uncapped = MatchConfig {
        elo: Some(0),
        ..Default::default()
    };
    assert!(uncapped.strength_options().is_empty());

    let unset = MatchConfig::default();
    assert!(unset.strength_options().is_empty());
}
