use super::*;

// =============================================================
// Flipping
// =============================================================

#[test]
fn default_mode_is_dark() {
    assert_eq!(Mode::default(), Mode::Dark);
}

#[test]
fn flipped_swaps_variants() {
    assert_eq!(Mode::Dark.flipped(), Mode::Light);
    assert_eq!(Mode::Light.flipped(), Mode::Dark);
}

#[test]
fn flipped_twice_is_identity() {
    for mode in [Mode::Dark, Mode::Light] {
        assert_eq!(mode.flipped().flipped(), mode);
    }
}

// =============================================================
// Presentation
// =============================================================

#[test]
fn glyph_shows_current_mode() {
    assert_eq!(Mode::Dark.glyph(), "🌙");
    assert_eq!(Mode::Light.glyph(), "🌞");
}

#[test]
fn description_announces_next_action() {
    assert_eq!(Mode::Dark.toggle_description(), "Switch to light theme");
    assert_eq!(Mode::Light.toggle_description(), "Switch to dark theme");
}

#[test]
fn display_matches_as_str() {
    assert_eq!(Mode::Dark.to_string(), "dark");
    assert_eq!(Mode::Light.to_string(), "light");
}

// =============================================================
// Parsing
// =============================================================

#[test]
fn from_str_accepts_known_values() {
    assert_eq!("dark".parse::<Mode>(), Ok(Mode::Dark));
    assert_eq!("light".parse::<Mode>(), Ok(Mode::Light));
    assert_eq!(" Light\n".parse::<Mode>(), Ok(Mode::Light));
    assert_eq!("DARK".parse::<Mode>(), Ok(Mode::Dark));
}

#[test]
fn from_str_rejects_unknown_values() {
    let err = "sepia".parse::<Mode>().unwrap_err();
    assert_eq!(err, UnknownMode("sepia".into()));
    assert!("".parse::<Mode>().is_err());
}

#[test]
fn parse_stored_treats_garbage_as_absent() {
    assert_eq!(Mode::parse_stored(None), None);
    assert_eq!(Mode::parse_stored(Some("blue")), None);
    assert_eq!(Mode::parse_stored(Some("light")), Some(Mode::Light));
}

#[test]
fn serde_uses_lowercase_names() {
    assert_eq!(serde_json::to_string(&Mode::Light).unwrap(), "\"light\"");
    let mode: Mode = serde_json::from_str("\"dark\"").unwrap();
    assert_eq!(mode, Mode::Dark);
}
