use super::super::testing::{MockTransport, client, session_info, session_json};
use super::*;
use crate::store::SessionStore;
use time::macros::date;

fn logged_in() -> SessionStore {
    let store = SessionStore::new();
    store.log_in(session_info(5, true));
    store
}

#[tokio::test]
async fn list_gets_collection_with_bearer_token() {
    let transport = MockTransport::new();
    transport.push_json(200, serde_json::json!([session_json(1, 10, &[]), session_json(2, 10, &[5])]));
    let gateway = client(&transport, &logged_in()).sessions();

    let sessions = gateway.list().await.unwrap();

    assert_eq!(sessions.len(), 2);
    assert!(sessions[1].has_participant(5));
    let requests = transport.requests();
    assert_eq!((requests[0].method, requests[0].url.as_str()), (Method::Get, "http://api.test/api/session"));
    assert_eq!(requests[0].bearer.as_deref(), Some("token-5"));
}

#[tokio::test]
async fn anonymous_requests_carry_no_token() {
    let transport = MockTransport::new();
    transport.push_json(200, serde_json::json!([]));
    let gateway = client(&transport, &SessionStore::new()).sessions();

    gateway.list().await.unwrap();
    assert_eq!(transport.requests()[0].bearer, None);
}

#[tokio::test]
async fn detail_gets_single_session() {
    let transport = MockTransport::new();
    transport.push_json(200, session_json(3, 10, &[1, 2]));
    let gateway = client(&transport, &logged_in()).sessions();

    let session = gateway.detail(3).await.unwrap();
    assert_eq!(session.id, 3);
    assert_eq!(session.date, date!(2025 - 01 - 01));
    assert_eq!(transport.calls(), vec![(Method::Get, "http://api.test/api/session/3".to_owned())]);
}

#[tokio::test]
async fn create_and_update_send_form_payload() {
    let transport = MockTransport::new();
    transport.push_json(200, session_json(9, 1, &[]));
    transport.push_json(200, session_json(9, 1, &[]));
    let gateway = client(&transport, &logged_in()).sessions();
    let payload = SessionPayload {
        name: "Test Session".into(),
        date: date!(2024 - 02 - 15),
        teacher_id: 1,
        description: "Test description".into(),
    };

    gateway.create(&payload).await.unwrap();
    gateway.update(9, &payload).await.unwrap();

    let requests = transport.requests();
    assert_eq!((requests[0].method, requests[0].url.as_str()), (Method::Post, "http://api.test/api/session"));
    assert_eq!((requests[1].method, requests[1].url.as_str()), (Method::Put, "http://api.test/api/session/9"));
    assert_eq!(requests[1].body.as_ref().unwrap()["date"], "2024-02-15");
}

#[tokio::test]
async fn delete_issues_delete_and_ignores_body() {
    let transport = MockTransport::new();
    transport.push_json(200, serde_json::json!({}));
    let gateway = client(&transport, &logged_in()).sessions();

    gateway.delete(4).await.unwrap();
    assert_eq!(transport.calls(), vec![(Method::Delete, "http://api.test/api/session/4".to_owned())]);
}

#[tokio::test]
async fn participation_toggles_hit_same_path_with_different_verbs() {
    let transport = MockTransport::new();
    transport.push_raw(200, "");
    transport.push_raw(200, "");
    let gateway = client(&transport, &logged_in()).sessions();

    gateway.participate(1, 5).await.unwrap();
    gateway.un_participate(1, 5).await.unwrap();

    assert_eq!(
        transport.calls(),
        vec![
            (Method::Post, "http://api.test/api/session/1/participate/5".to_owned()),
            (Method::Delete, "http://api.test/api/session/1/participate/5".to_owned()),
        ]
    );
}

#[tokio::test]
async fn errors_are_forwarded_without_retry() {
    let transport = MockTransport::new();
    transport.push_error("connection refused");
    let gateway = client(&transport, &logged_in()).sessions();

    assert!(matches!(gateway.detail(1).await, Err(ApiError::Transport(_))));
    assert_eq!(transport.requests().len(), 1);
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let transport = MockTransport::new();
    transport.push_json(200, serde_json::json!({ "unexpected": true }));
    let gateway = client(&transport, &logged_in()).sessions();

    assert!(matches!(gateway.detail(1).await, Err(ApiError::Decode(_))));
}
