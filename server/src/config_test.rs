use std::collections::HashMap;

use super::*;

fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_unset() {
    let cfg = ServerConfig::from_vars(vars(&[])).unwrap();
    assert_eq!(cfg, ServerConfig::default());
    assert_eq!(cfg.port, 3000);
    assert_eq!(cfg.contact_rate_limit, 5);
    assert_eq!(cfg.contact_rate_window, Duration::from_secs(600));
}

#[test]
fn parses_overrides() {
    let cfg = ServerConfig::from_vars(vars(&[
        ("PORT", "8080"),
        ("CONTACT_RATE_LIMIT", "2"),
        ("CONTACT_RATE_WINDOW_SECS", "60"),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.contact_rate_limit, 2);
    assert_eq!(cfg.contact_rate_window, Duration::from_secs(60));
}

#[test]
fn invalid_port_is_an_error() {
    let err = ServerConfig::from_vars(vars(&[("PORT", "http")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "PORT", value: "http".into() });
}

#[test]
fn malformed_rate_values_fall_back_to_defaults() {
    let cfg = ServerConfig::from_vars(vars(&[("CONTACT_RATE_LIMIT", "lots"), ("CONTACT_RATE_WINDOW_SECS", "-1")])).unwrap();
    assert_eq!(cfg.contact_rate_limit, DEFAULT_CONTACT_RATE_LIMIT);
    assert_eq!(cfg.contact_rate_window, Duration::from_secs(DEFAULT_CONTACT_RATE_WINDOW_SECS));
}

#[test]
fn zero_limits_are_raised_to_one() {
    let cfg = ServerConfig::from_vars(vars(&[("CONTACT_RATE_LIMIT", "0"), ("CONTACT_RATE_WINDOW_SECS", "0")])).unwrap();
    assert_eq!(cfg.contact_rate_limit, 1);
    assert_eq!(cfg.contact_rate_window, Duration::from_secs(1));
}
