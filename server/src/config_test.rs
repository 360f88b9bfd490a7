use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn from_lookup_applies_defaults() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://localhost/app")])).unwrap();
    assert_eq!(cfg.database_url, "postgres://localhost/app");
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert!(!cfg.production);
    assert_eq!(cfg.client_url, DEFAULT_CLIENT_URL);
    assert_eq!(cfg.db_max_connections, DEFAULT_DB_MAX_CONNECTIONS);
}

#[test]
fn from_lookup_missing_database_url_errors() {
    let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "8080")])).unwrap_err();
    assert_eq!(err, ConfigError::Missing { var: "DATABASE_URL" });
    assert_eq!(err.to_string(), "DATABASE_URL is not defined in environment variables");
}

#[test]
fn from_lookup_blank_database_url_counts_as_missing() {
    let err = ServerConfig::from_lookup(lookup_from(&[("DATABASE_URL", "   ")])).unwrap_err();
    assert_eq!(err, ConfigError::Missing { var: "DATABASE_URL" });
}

#[test]
fn from_lookup_parses_overrides() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[
        ("DATABASE_URL", "postgres://db/app"),
        ("PORT", " 8080 "),
        ("APP_ENV", "Production"),
        ("CLIENT_URL", "https://app.example.test/"),
        ("DB_MAX_CONNECTIONS", "12"),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert!(cfg.production);
    assert_eq!(cfg.client_url, "https://app.example.test");
    assert_eq!(cfg.db_max_connections, 12);
}

#[test]
fn from_lookup_invalid_port_errors() {
    let err = ServerConfig::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://db/app"), ("PORT", "http")]))
        .unwrap_err()
        .to_string();
    assert!(err.starts_with("invalid PORT"), "unexpected error: {err}");
}

#[test]
fn from_lookup_zero_max_connections_falls_back_to_default() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[
        ("DATABASE_URL", "postgres://db/app"),
        ("DB_MAX_CONNECTIONS", "0"),
    ]))
    .unwrap();
    assert_eq!(cfg.db_max_connections, DEFAULT_DB_MAX_CONNECTIONS);
}

#[test]
fn non_production_env_mirrors_any_origin() {
    for env in ["development", "test", ""] {
        let cfg =
            ServerConfig::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://db/app"), ("APP_ENV", env)])).unwrap();
        assert_eq!(cfg.cors_policy(), CorsPolicy::MirrorAny, "APP_ENV={env:?}");
    }
}

#[test]
fn production_env_restricts_to_client_url() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[
        ("DATABASE_URL", "postgres://db/app"),
        ("APP_ENV", "production"),
        ("CLIENT_URL", "https://app.example.test"),
    ]))
    .unwrap();
    assert_eq!(cfg.cors_policy(), CorsPolicy::Only(HeaderValue::from_static("https://app.example.test")));
}

#[test]
fn from_env_reads_process_environment() {
    // Only asserts shape; DATABASE_URL may or may not be set on the host.
    match ServerConfig::from_env() {
        Ok(cfg) => assert!(!cfg.database_url.is_empty()),
        Err(err) => assert!(matches!(err, ConfigError::Missing { .. } | ConfigError::Invalid { .. })),
    }
}

#[test]
fn from_lookup_blank_port_uses_default() {
    for blank in ["", "  "] {
        let cfg = ServerConfig::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://db/app"), ("PORT", blank)]))
            .unwrap();
        assert_eq!(cfg.port, DEFAULT_PORT, "PORT={blank:?}");
    }
}

#[test]
fn from_lookup_blank_client_url_uses_default_origin() {
    for blank in ["", " / "] {
        let cfg = ServerConfig::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://db/app"),
            ("APP_ENV", "production"),
            ("CLIENT_URL", blank),
        ]))
        .unwrap();
        assert_eq!(cfg.client_url, DEFAULT_CLIENT_URL, "CLIENT_URL={blank:?}");
        assert_eq!(cfg.cors_policy(), CorsPolicy::Only(HeaderValue::from_static(DEFAULT_CLIENT_URL)));
    }
}
