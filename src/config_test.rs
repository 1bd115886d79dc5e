use super::*;

#[test]
fn from_vars_defaults_without_provider() {
    let cfg = ServerConfig::from_vars(None, None, None, None, None).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.auth, None);
}

#[test]
fn from_vars_enables_provider_with_url_and_key() {
    let cfg = ServerConfig::from_vars(
        Some("8080"),
        Some("https://auth.example.test/"),
        Some("anon-key"),
        Some("30"),
        None,
    )
    .unwrap();
    assert_eq!(cfg.port, 8080);
    let auth = cfg.auth.unwrap();
    assert_eq!(auth.base_url, "https://auth.example.test");
    assert_eq!(auth.api_key, "anon-key");
    assert_eq!(
        auth.timeouts,
        AuthTimeouts { request_secs: 30, connect_secs: DEFAULT_AUTH_CONNECT_TIMEOUT_SECS }
    );
}

#[test]
fn provider_requires_both_url_and_key() {
    assert_eq!(parse_provider(Some("https://a.test"), None), None);
    assert_eq!(parse_provider(None, Some("key")), None);
    assert_eq!(parse_provider(Some("  "), Some("key")), None);
}

#[test]
fn parse_port_rejects_garbage() {
    assert_eq!(parse_port(Some("http")), Err(ConfigError::InvalidPort("http".to_owned())));
    assert_eq!(parse_port(Some("70000")), Err(ConfigError::InvalidPort("70000".to_owned())));
}

#[test]
fn parse_port_blank_uses_default() {
    assert_eq!(parse_port(Some("   ")), Ok(DEFAULT_PORT));
}

#[test]
fn parse_secs_reports_offending_key() {
    let err = parse_secs("AUTH_CONNECT_TIMEOUT_SECS", Some("soon"), 5).unwrap_err();
    assert_eq!(err.to_string(), "invalid AUTH_CONNECT_TIMEOUT_SECS: soon");
}

#[test]
fn provider_config_debug_hides_api_key() {
    let cfg = AuthProviderConfig {
        base_url: "https://a.test".to_owned(),
        api_key: "service-role-secret".to_owned(),
        timeouts: AuthTimeouts { request_secs: 1, connect_secs: 1 },
    };
    assert!(!format!("{cfg:?}").contains("service-role-secret"));
}
