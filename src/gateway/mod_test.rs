use super::testing::{MockTransport, client, session_info};
use super::*;

#[tokio::test]
async fn execute_joins_base_url_and_attaches_token() {
    let transport = MockTransport::new();
    let store = SessionStore::new();
    store.log_in(session_info(3, false));

    client(&transport, &store)
        .execute(Method::Get, "/api/session", None)
        .await
        .unwrap();

    let request = &transport.requests()[0];
    assert_eq!(request.url, "http://api.test/api/session");
    assert_eq!(request.bearer.as_deref(), Some("token-3"));
}

#[tokio::test]
async fn execute_maps_non_success_to_status_error() {
    let transport = MockTransport::new();
    transport.push_raw(500, "boom");

    let err = client(&transport, &SessionStore::new())
        .execute(Method::Get, "api/teacher", None)
        .await
        .unwrap_err();
    match err {
        ApiError::Status { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "boom");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn token_follows_store_after_logout() {
    let transport = MockTransport::new();
    let store = SessionStore::new();
    let api = client(&transport, &store);

    store.log_in(session_info(1, false));
    api.execute(Method::Get, "api/session", None).await.unwrap();
    store.log_out();
    api.execute(Method::Get, "api/session", None).await.unwrap();

    let requests = transport.requests();
    assert_eq!(requests[0].bearer.as_deref(), Some("token-1"));
    assert_eq!(requests[1].bearer, None);
}

#[test]
fn debug_hides_transport_and_token() {
    let transport = MockTransport::new();
    let store = SessionStore::new();
    store.log_in(session_info(1, false));
    let rendered = format!("{:?}", client(&transport, &store));
    assert!(rendered.contains("http://api.test"));
    assert!(!rendered.contains("token-1"));
}
