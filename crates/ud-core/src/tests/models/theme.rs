use crate::Theme;

use std::str::FromStr;

#[test]
fn test_theme_as_str() {
    assert_eq!(Theme::Light.as_str(), "light");
    assert_eq!(Theme::Dark.as_str(), "dark");
}

#[test]
fn test_theme_from_str() {
    assert_eq!(Theme::from_str("light").unwrap(), Theme::Light);
    assert_eq!(Theme::from_str("dark").unwrap(), Theme::Dark);
    assert!(Theme::from_str("sepia").is_err());
}

#[test]
fn test_theme_default_is_light() {
    assert_eq!(Theme::default(), Theme::Light);
}

#[test]
fn test_theme_toggled_flips() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
}

#[test]
fn given_unknown_stored_value_when_from_stored_then_light() {
    assert_eq!(Theme::from_stored("dark"), Theme::Dark);
    assert_eq!(Theme::from_stored("light"), Theme::Light);
    assert_eq!(Theme::from_stored("DARK"), Theme::Light);
    assert_eq!(Theme::from_stored("garbage"), Theme::Light);
}

#[test]
fn test_theme_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
}
