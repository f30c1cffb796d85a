use super::*;

#[test]
fn from_raw_defaults_when_nothing_set() {
    let cfg = ClientConfig::from_raw(&RawClientConfig::default()).unwrap();
    assert_eq!(cfg, ClientConfig::default());
    assert_eq!(cfg.sign_up_url(), "/api/auth/signup");
    assert_eq!(cfg.sign_in_href, "/");
    assert_eq!(cfg.after_sign_up_href, "/dashboard");
}

#[test]
fn from_raw_blank_values_take_defaults() {
    let raw = RawClientConfig {
        api_base_url: Some("   "),
        sign_up_path: Some(""),
        sign_in_href: None,
        after_sign_up_href: Some(" "),
    };
    assert_eq!(ClientConfig::from_raw(&raw).unwrap(), ClientConfig::default());
}

#[test]
fn from_raw_parses_overrides_and_trims_base_slash() {
    let raw = RawClientConfig {
        api_base_url: Some("https://api.timos.test/"),
        sign_up_path: Some("/v2/signup"),
        sign_in_href: Some("/entrar"),
        after_sign_up_href: Some("/painel"),
    };
    let cfg = ClientConfig::from_raw(&raw).unwrap();
    assert_eq!(cfg.api_base_url, "https://api.timos.test");
    assert_eq!(cfg.sign_up_url(), "https://api.timos.test/v2/signup");
    assert_eq!(cfg.sign_in_href, "/entrar");
    assert_eq!(cfg.after_sign_up_href, "/painel");
}

#[test]
fn from_raw_rejects_relative_path() {
    let raw = RawClientConfig { sign_up_path: Some("api/signup"), ..RawClientConfig::default() };
    assert_eq!(
        ClientConfig::from_raw(&raw),
        Err(ConfigError::RelativePath { key: "TIMOS_SIGN_UP_PATH", value: "api/signup".to_owned() })
    );
}

#[test]
fn from_raw_rejects_non_http_base_url() {
    let raw = RawClientConfig { api_base_url: Some("ftp://example.test"), ..RawClientConfig::default() };
    let err = ClientConfig::from_raw(&raw).unwrap_err();
    assert_eq!(err.to_string(), "TIMOS_API_BASE_URL must be an http(s) URL: ftp://example.test");
}
