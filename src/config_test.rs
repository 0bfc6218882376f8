use super::*;

#[test]
fn default_config_matches_page_conventions() {
    let cfg = ThemeConfig::default();
    assert_eq!(cfg.control_id, "themeBtn");
    assert_eq!(cfg.storage_key, "theme");
    assert_eq!(cfg.attribute, "data-theme");
    assert_eq!(cfg.default_mode, Mode::Dark);
}

#[test]
fn from_json_empty_object_is_default() {
    let cfg = ThemeConfig::from_json("{}").unwrap();
    assert_eq!(cfg, ThemeConfig::default());
}

#[test]
fn from_json_keeps_defaults_for_missing_fields() {
    let cfg = ThemeConfig::from_json(r#"{"control_id":"mode-switch","default_mode":"light"}"#).unwrap();
    assert_eq!(cfg.control_id, "mode-switch");
    assert_eq!(cfg.default_mode, Mode::Light);
    assert_eq!(cfg.storage_key, DEFAULT_STORAGE_KEY);
    assert_eq!(cfg.attribute, DEFAULT_ATTRIBUTE);
}

#[test]
fn from_json_rejects_malformed_input() {
    let err = ThemeConfig::from_json("{not json").unwrap_err();
    assert!(matches!(err, ThemeError::InvalidConfig(_)));
}

#[test]
fn from_json_rejects_unknown_mode() {
    let err = ThemeConfig::from_json(r#"{"default_mode":"sepia"}"#).unwrap_err();
    assert!(matches!(err, ThemeError::InvalidConfig(_)));
}
