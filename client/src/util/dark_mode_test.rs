#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn read_preference_is_light_in_native_tests() {
    assert_eq!(read_preference(), Theme::Light);
}

#[test]
fn toggle_flips_theme() {
    assert_eq!(toggle(Theme::Light), Theme::Dark);
    assert_eq!(toggle(Theme::Dark), Theme::Light);
}

#[test]
fn apply_is_noop_but_callable() {
    apply(Theme::Light);
    apply(Theme::Dark);
}

#[test]
fn storage_values_parse_back() {
    assert_eq!(parse_storage_value(storage_value(Theme::Dark)), Some(Theme::Dark));
    assert_eq!(parse_storage_value(storage_value(Theme::Light)), Some(Theme::Light));
    assert_eq!(parse_storage_value("true"), None);
}
