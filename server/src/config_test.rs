use super::*;
use std::collections::HashMap;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn defaults_when_unset() {
    let config = ServerConfig::from_lookup(lookup(&[]));
    assert_eq!(config, ServerConfig::default());
    assert_eq!(config.max_tokens, None);
}

#[test]
fn reads_port_and_max_tokens() {
    let config = ServerConfig::from_lookup(lookup(&[("PORT", "8080"), ("GENERATION_MAX_TOKENS", "4096")]));
    assert_eq!(config.port, 8080);
    assert_eq!(config.max_tokens, Some(4096));
}

#[test]
fn invalid_values_fall_back() {
    let config = ServerConfig::from_lookup(lookup(&[("PORT", "99999"), ("GENERATION_MAX_TOKENS", "lots")]));
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.max_tokens, None);
}

#[test]
fn zero_max_tokens_means_no_limit() {
    let config = ServerConfig::from_lookup(lookup(&[("GENERATION_MAX_TOKENS", "0")]));
    assert_eq!(config.max_tokens, None);
}
