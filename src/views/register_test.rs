use super::*;
use crate::gateway::testing::{MockTransport, client};
use crate::store::SessionStore;
use crate::transport::Method;

fn filled() -> RegisterView {
    let mut view = RegisterView::new();
    view.form.set("email", "test@example.com");
    view.form.set("firstName", "John");
    view.form.set("lastName", "Doe");
    view.form.set("password", "password123");
    view
}

#[test]
fn starts_empty_and_invalid() {
    let view = RegisterView::new();
    for field in ["email", "firstName", "lastName", "password"] {
        assert_eq!(view.form.get(field), "");
    }
    assert!(!view.on_error);
    assert!(!view.can_submit());
}

#[tokio::test]
async fn success_navigates_to_login() {
    let transport = MockTransport::new();
    transport.push_raw(200, "");
    let mut view = filled();

    let outcome = view.submit(&client(&transport, &SessionStore::new())).await;

    assert_eq!(outcome.route(), Some(Route::Login));
    assert!(!view.on_error);
    let requests = transport.requests();
    assert_eq!(requests[0].method, Method::Post);
    assert_eq!(
        requests[0].body,
        Some(serde_json::json!({
            "email": "test@example.com",
            "firstName": "John",
            "lastName": "Doe",
            "password": "password123",
        }))
    );
}

#[tokio::test]
async fn failure_sets_error_without_navigation() {
    let transport = MockTransport::new();
    transport.push_raw(400, "Email is already taken");
    let mut view = filled();

    let outcome = view.submit(&client(&transport, &SessionStore::new())).await;
    assert_eq!(outcome, Outcome::none());
    assert!(view.on_error);
}

#[tokio::test]
async fn short_first_name_blocks_submission() {
    let transport = MockTransport::new();
    let mut view = filled();
    view.form.set("firstName", "J");

    view.submit(&client(&transport, &SessionStore::new())).await;
    assert!(transport.requests().is_empty());
}
