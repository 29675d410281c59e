use mindsupport_chat::config::{
    ChatConfig, DEFAULT_HELPLINE, load_config, load_or_default, parse_config, save_config,
};
use mindsupport_chat::error::ChatError;
use mindsupport_chat::responder::Responder;

#[test]
fn defaults_use_builtin_keywords() {
    let config = ChatConfig::default();
    assert_eq!(config.helpline, DEFAULT_HELPLINE);
    assert!(config.crisis_keywords.iter().any(|k| k == "suicide"));
    assert_eq!(config.config_version, 1);
}

#[test]
fn unversioned_config_gains_helpline() {
    let config = parse_config(r#"{ "crisis_keywords": ["give up"] }"#).unwrap();
    assert_eq!(config.config_version, 1);
    assert_eq!(config.helpline, "988");
    assert_eq!(config.crisis_keywords, ["give up"]);
}

#[test]
fn missing_keywords_fall_back_to_defaults() {
    let config = parse_config(r#"{ "config_version": 1, "helpline": "116 123" }"#).unwrap();
    assert_eq!(config.helpline, "116 123");
    assert_eq!(config.crisis_keywords, ChatConfig::default().crisis_keywords);
}

#[test]
fn newer_version_is_rejected() {
    let err = parse_config(r#"{ "config_version": 9, "helpline": "988" }"#).unwrap_err();
    assert!(matches!(err, ChatError::Config(ref msg) if msg.contains("newer")));
}

#[test]
fn version_beyond_u32_is_rejected_as_newer() {
    for version in ["4294967296", "4294967297", "18446744073709551615"] {
        let json = format!(
            r#"{{ "config_version": {version}, "crisis_keywords": ["x"], "helpline": "1" }}"#
        );
        let err = parse_config(&json).unwrap_err();
        assert!(
            matches!(err, ChatError::Config(ref msg) if msg.contains("newer")),
            "{version}: {err}"
        );
    }
}

#[test]
fn non_integer_version_is_rejected() {
    for version in ["-1", "\"1\"", "1.5"] {
        let json = format!(r#"{{ "config_version": {version}, "helpline": "988" }}"#);
        assert!(matches!(parse_config(&json), Err(ChatError::Config(_))), "{version}");
    }
}

#[test]
fn null_version_is_treated_as_unversioned() {
    let config = parse_config(r#"{ "config_version": null }"#).unwrap();
    assert_eq!(config.config_version, 1);
    assert_eq!(config.helpline, DEFAULT_HELPLINE);
}

#[test]
fn non_object_is_rejected() {
    assert!(matches!(parse_config("[1, 2]"), Err(ChatError::Config(_))));
    assert!(matches!(parse_config("{"), Err(ChatError::Serialization(_))));
}

#[test]
fn save_then_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.json");
    let config = ChatConfig {
        config_version: 0,
        crisis_keywords: vec!["give up".to_string()],
        helpline: "116 123".to_string(),
    };

    save_config(&path, &config).unwrap();
    let loaded = load_config(&path).unwrap();
    assert_eq!(loaded.config_version, 1);
    assert_eq!(loaded.crisis_keywords, config.crisis_keywords);
    assert!(Responder::from_config(&loaded).detector().detect("I GIVE UP"));
}

#[test]
fn missing_file_means_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");
    assert_eq!(load_or_default(&path).unwrap(), ChatConfig::default());
    assert!(matches!(load_config(&path), Err(ChatError::Config(_))));
}
