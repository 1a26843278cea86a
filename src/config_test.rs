use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_nothing_set() {
    let cfg = HostConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg.addr, "0.0.0.0:3000".parse().unwrap());
    assert_eq!(cfg.log_filter, DEFAULT_LOG_FILTER);
}

#[test]
fn port_overrides_default_port() {
    let cfg = HostConfig::from_lookup(lookup(&[("PORT", "8080")])).unwrap();
    assert_eq!(cfg.addr, "0.0.0.0:8080".parse().unwrap());
}

#[test]
fn addr_wins_over_port() {
    let cfg = HostConfig::from_lookup(lookup(&[("KEYSTONE_ADDR", "127.0.0.1:4000"), ("PORT", "8080")])).unwrap();
    assert_eq!(cfg.addr, "127.0.0.1:4000".parse().unwrap());
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = HostConfig::from_lookup(lookup(&[("KEYSTONE_ADDR", " "), ("PORT", ""), ("KEYSTONE_LOG", "  ")])).unwrap();
    assert_eq!(cfg.addr.port(), DEFAULT_PORT);
    assert_eq!(cfg.log_filter, DEFAULT_LOG_FILTER);
}

#[test]
fn log_filter_is_passed_through() {
    let cfg = HostConfig::from_lookup(lookup(&[("KEYSTONE_LOG", "keystone=debug,tower_http=info")])).unwrap();
    assert_eq!(cfg.log_filter, "keystone=debug,tower_http=info");
}

#[test]
fn invalid_port_is_an_error() {
    let err = HostConfig::from_lookup(lookup(&[("PORT", "70000")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "PORT", value: "70000".to_owned() });
    assert_eq!(err.to_string(), "invalid PORT: \"70000\"");
}

#[test]
fn invalid_addr_is_an_error() {
    let err = HostConfig::from_lookup(lookup(&[("KEYSTONE_ADDR", "localhost")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "KEYSTONE_ADDR", .. }));
}
