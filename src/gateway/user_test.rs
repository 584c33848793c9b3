use super::super::testing::{MockTransport, client, session_info};
use super::*;
use crate::store::SessionStore;

#[tokio::test]
async fn detail_decodes_user() {
    let transport = MockTransport::new();
    transport.push_json(
        200,
        serde_json::json!({
            "id": 1,
            "email": "yoga@studio.com",
            "firstName": "Admin",
            "lastName": "Admin",
            "admin": true,
            "createdAt": "2024-01-01T08:00:00",
            "updatedAt": "2024-01-02T08:00:00",
        }),
    );
    let store = SessionStore::new();
    store.log_in(session_info(1, true));
    let gateway = client(&transport, &store).users();

    let user = gateway.detail(1).await.unwrap();
    assert_eq!(user.email, "yoga@studio.com");
    assert!(user.admin);
    assert_eq!(transport.calls(), vec![(Method::Get, "http://api.test/api/user/1".to_owned())]);
    assert_eq!(transport.requests()[0].bearer.as_deref(), Some("token-1"));
}

#[tokio::test]
async fn delete_issues_delete() {
    let transport = MockTransport::new();
    transport.push_raw(200, "");
    let gateway = client(&transport, &SessionStore::new()).users();

    gateway.delete(2).await.unwrap();
    assert_eq!(transport.calls(), vec![(Method::Delete, "http://api.test/api/user/2".to_owned())]);
}

#[tokio::test]
async fn delete_forwards_unauthorized() {
    let transport = MockTransport::new();
    transport.push_raw(401, "");
    let gateway = client(&transport, &SessionStore::new()).users();

    assert!(gateway.delete(3).await.unwrap_err().is_unauthorized());
}
