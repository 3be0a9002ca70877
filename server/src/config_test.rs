use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_apply_when_nothing_is_set() {
    let cfg = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg.addr, "0.0.0.0:3000".parse().unwrap());
    assert_eq!(cfg.api_base_url, DEFAULT_API_BASE_URL);
}

#[test]
fn overrides_are_parsed_and_trimmed() {
    let cfg = ServerConfig::from_lookup(lookup(&[
        ("PORT", " 8080 "),
        ("SITE_ADDR", "127.0.0.1"),
        ("SCHOOL_API_BASE_URL", "https://school.example/api/"),
    ]))
    .unwrap();
    assert_eq!(cfg.addr, "127.0.0.1:8080".parse().unwrap());
    assert_eq!(cfg.api_base_url, "https://school.example/api");
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = ServerConfig::from_lookup(lookup(&[("PORT", ""), ("SITE_ADDR", "  ")])).unwrap();
    assert_eq!(cfg.addr.port(), DEFAULT_PORT);
}

#[test]
fn invalid_values_are_rejected() {
    assert_eq!(
        ServerConfig::from_lookup(lookup(&[("PORT", "0")])),
        Err(ConfigError::InvalidPort("0".to_owned()))
    );
    assert_eq!(
        ServerConfig::from_lookup(lookup(&[("PORT", "http")])),
        Err(ConfigError::InvalidPort("http".to_owned()))
    );
    assert_eq!(
        ServerConfig::from_lookup(lookup(&[("SITE_ADDR", "localhost")])),
        Err(ConfigError::InvalidSiteAddr("localhost".to_owned()))
    );
    assert!(matches!(
        ServerConfig::from_lookup(lookup(&[("SCHOOL_API_BASE_URL", "school.example")])),
        Err(ConfigError::InvalidApiBaseUrl(_))
    ));
}

#[test]
fn from_env_reads_process_environment() {
    unsafe {
        std::env::set_var("PORT", "4100");
        std::env::remove_var("SITE_ADDR");
        std::env::remove_var("SCHOOL_API_BASE_URL");
    }
    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.addr.port(), 4100);
    unsafe { std::env::remove_var("PORT") };
}
