use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn from_lookup_defaults_when_unset() {
    let cfg = AppConfig::from_lookup(|_| None);
    assert_eq!(cfg.app_name, DEFAULT_APP_NAME);
    assert_eq!(cfg.api_host, DEFAULT_API_HOST);
}

#[test]
fn from_lookup_reads_overrides() {
    let cfg = AppConfig::from_lookup(lookup_from(&[("APP_NAME", "VaultLab"), ("API_HOST", "https://api.example.test/v2/")]));
    assert_eq!(cfg.app_name, "VaultLab");
    assert_eq!(cfg.api_host, "https://api.example.test/v2/");
}

#[test]
fn from_lookup_adds_missing_trailing_slash() {
    let cfg = AppConfig::from_lookup(lookup_from(&[("API_HOST", "http://127.0.0.1:9000/v1")]));
    assert_eq!(cfg.api_host, "http://127.0.0.1:9000/v1/");
}

#[test]
fn from_lookup_collapses_repeated_trailing_slashes() {
    let cfg = AppConfig::from_lookup(lookup_from(&[("API_HOST", "http://127.0.0.1:9000/v1///")]));
    assert_eq!(cfg.api_host, "http://127.0.0.1:9000/v1/");
}

#[test]
fn from_lookup_treats_blank_values_as_unset() {
    let cfg = AppConfig::from_lookup(lookup_from(&[("APP_NAME", "   "), ("API_HOST", "")]));
    assert_eq!(cfg, AppConfig::default());
}

#[test]
fn sign_out_settle_is_half_a_second() {
    assert_eq!(SIGN_OUT_SETTLE, Duration::from_millis(500));
    assert_eq!(NOTICE_DURATION, Duration::from_secs(5));
}
