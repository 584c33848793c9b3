use super::*;
use yoga::transport::Method;

#[test]
fn bearer_header_uses_bearer_scheme() {
    assert_eq!(bearer_header("abc"), "Bearer abc");
}

#[test]
fn unavailable_names_the_request() {
    let request = HttpRequest {
        method: Method::Delete,
        url: "/api/session/3".to_owned(),
        bearer: None,
        body: None,
    };
    let err = unavailable(&request);
    assert!(matches!(err, ApiError::Transport(ref msg) if msg == "no browser transport for DELETE /api/session/3"));
}
