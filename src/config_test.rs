use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_unset() {
    let cfg = HostConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(
        cfg,
        HostConfig {
            port: DEFAULT_PORT,
            backend_url: DEFAULT_BACKEND_URL.to_owned(),
            upstream_timeout_secs: DEFAULT_UPSTREAM_TIMEOUT_SECS,
        }
    );
}

#[test]
fn overrides_are_parsed_and_url_trimmed() {
    let cfg = HostConfig::from_lookup(lookup_from(&[
        ("PORT", "8080"),
        ("BACKEND_URL", " https://api.example.test/ "),
        ("UPSTREAM_TIMEOUT_SECS", "5"),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.backend_url, "https://api.example.test");
    assert_eq!(cfg.upstream_timeout_secs, 5);
}

#[test]
fn invalid_port_is_rejected() {
    let err = HostConfig::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort("eighty".to_owned()));
}

#[test]
fn backend_url_without_scheme_is_rejected() {
    let err = HostConfig::from_lookup(lookup_from(&[("BACKEND_URL", "localhost:8000")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidBackendUrl(_)));
}

#[test]
fn blank_backend_url_falls_back_to_default() {
    let cfg = HostConfig::from_lookup(lookup_from(&[("BACKEND_URL", "  ")])).unwrap();
    assert_eq!(cfg.backend_url, DEFAULT_BACKEND_URL);
}

#[test]
fn unparsable_timeout_uses_default() {
    let cfg = HostConfig::from_lookup(lookup_from(&[("UPSTREAM_TIMEOUT_SECS", "soon")])).unwrap();
    assert_eq!(cfg.upstream_timeout_secs, DEFAULT_UPSTREAM_TIMEOUT_SECS);
}
