use super::*;

#[test]
fn explicit_base_url_is_used() {
    let config = api_config(Some("https://api.studio.test/"));
    assert_eq!(config.url("api/session"), "https://api.studio.test/api/session");
}

#[test]
fn missing_base_url_means_same_origin() {
    assert_eq!(api_config(None).url("api/session"), "/api/session");
}

#[test]
fn malformed_base_url_falls_back_to_same_origin() {
    assert_eq!(api_config(Some("ftp://nope")), ClientConfig::same_origin());
}
