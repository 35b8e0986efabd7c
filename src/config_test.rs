use super::*;

#[test]
fn default_preset_matches_page_constants() {
    let config = PageConfig::default();
    assert_eq!(config.storage_key, "theme");
    assert_eq!(config.tilt_max_deg, 10.0);
    assert_eq!(config.skill_threshold, 0.5);
    assert_eq!(config.skill_delay_ms, 200);
    assert!(!config.skill_bars_once);
    assert_eq!(config.avatar.size_px, 240);
    assert_eq!(config.scroll_var, "--scroll-y");
}

#[test]
fn warm_preset_differs_only_cosmetically() {
    let base = PageConfig::default();
    let warm = PageConfig::warm();
    assert_ne!(warm.avatar.background, base.avatar.background);
    assert_ne!(warm.avatar.initials, base.avatar.initials);
    assert_eq!(warm.nav.border, None);
    assert_eq!(warm.storage_key, base.storage_key);
    assert_eq!(warm.skill_delay_ms, base.skill_delay_ms);
    assert_eq!(warm.tilt_max_deg, base.tilt_max_deg);
    assert_eq!(warm.avatar.size_px, base.avatar.size_px);
}

#[test]
fn empty_json_is_default() {
    assert_eq!(PageConfig::from_json("{}").unwrap(), PageConfig::default());
}

#[test]
fn partial_json_keeps_other_defaults() {
    let config = PageConfig::from_json(r#"{"skill_bars_once": true, "avatar": {"initials": "AL"}}"#).unwrap();
    assert!(config.skill_bars_once);
    assert_eq!(config.avatar.initials, "AL");
    assert_eq!(config.avatar.background, "#1c1f23");
    assert_eq!(config.storage_key, "theme");
}

#[test]
fn json_null_border_disables_border() {
    let config = PageConfig::from_json(r#"{"nav": {"border": null}}"#).unwrap();
    assert_eq!(config.nav.border, None);
    assert_eq!(config.nav.padding, "0.7rem");
}

#[test]
fn malformed_json_is_config_error() {
    let err = PageConfig::from_json("{ not json").unwrap_err();
    assert!(matches!(err, EnhanceError::Config(_)));
}

#[test]
fn wrong_field_type_is_config_error() {
    let err = PageConfig::from_json(r#"{"skill_delay_ms": "soon"}"#).unwrap_err();
    assert!(err.to_string().starts_with("invalid config"));
}

#[test]
fn preset_field_selects_warm_base() {
    assert_eq!(PageConfig::from_json(r#"{"preset": "warm"}"#).unwrap(), PageConfig::warm());
}

#[test]
fn explicit_default_preset_is_default() {
    assert_eq!(PageConfig::from_json(r#"{"preset": "default"}"#).unwrap(), PageConfig::default());
}

#[test]
fn overrides_apply_on_top_of_preset() {
    let config = PageConfig::from_json(r#"{"preset": "warm", "avatar": {"initials": "AL"}}"#).unwrap();
    let warm = PageConfig::warm();
    assert_eq!(config.avatar.initials, "AL");
    assert_eq!(config.avatar.background, warm.avatar.background);
    assert_eq!(config.nav, warm.nav);
}

#[test]
fn unknown_preset_is_config_error() {
    let err = PageConfig::from_json(r#"{"preset": "neon"}"#).unwrap_err();
    assert!(matches!(err, EnhanceError::Config(_)));
}

#[test]
fn non_object_json_is_config_error() {
    let err = PageConfig::from_json("[1, 2]").unwrap_err();
    assert!(matches!(err, EnhanceError::Config(_)));
}

#[test]
fn log_level_parses_or_defaults() {
    let mut config = PageConfig::default();
    assert_eq!(config.level(), log::Level::Info);
    config.log_level = "debug".to_owned();
    assert_eq!(config.level(), log::Level::Debug);
    config.log_level = "chatty".to_owned();
    assert_eq!(config.level(), log::Level::Info);
}
