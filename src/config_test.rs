use super::*;

#[test]
fn from_env_defaults_to_localhost() {
    unsafe { std::env::remove_var("YOGA_API_BASE_URL") };
    let cfg = ClientConfig::from_env().unwrap();
    assert_eq!(cfg.base_url, DEFAULT_API_BASE_URL);
}

#[test]
fn with_base_url_trims_trailing_slashes() {
    let cfg = ClientConfig::with_base_url("https://yoga.example.test/ ").unwrap();
    assert_eq!(cfg.base_url, "https://yoga.example.test");
    assert_eq!(cfg.url("api/session"), "https://yoga.example.test/api/session");
}

#[test]
fn with_base_url_rejects_other_schemes() {
    assert_eq!(
        ClientConfig::with_base_url("ftp://yoga.test"),
        Err(ConfigError::InvalidBaseUrl("ftp://yoga.test".to_owned()))
    );
    assert!(ClientConfig::with_base_url("localhost:8080").is_err());
    assert!(ClientConfig::with_base_url("http://").is_err());
}

#[test]
fn same_origin_builds_relative_urls() {
    let cfg = ClientConfig::same_origin();
    assert_eq!(cfg.url("api/teacher/3"), "/api/teacher/3");
    assert_eq!(cfg.url("/api/teacher"), "/api/teacher");
}
