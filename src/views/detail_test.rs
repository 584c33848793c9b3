use super::*;
use crate::gateway::testing::{MockTransport, client, session_info, session_json, teacher_json};
use crate::transport::Method;

fn logged_in(id: u64, admin: bool) -> SessionStore {
    let store = SessionStore::new();
    store.log_in(session_info(id, admin));
    store
}

#[test]
fn requires_logged_in_user() {
    assert!(DetailView::new(1, &SessionStore::new()).is_none());
    let view = DetailView::new(1, &logged_in(7, true)).unwrap();
    assert_eq!((view.user_id, view.is_admin), (7, true));
}

#[tokio::test]
async fn fetch_loads_session_then_teacher_from_its_id() {
    let transport = MockTransport::new();
    transport.push_json(200, session_json(1, 42, &[2]));
    transport.push_json(200, teacher_json(42));
    let store = logged_in(2, false);
    let mut view = DetailView::new(1, &store).unwrap();

    view.fetch(&client(&transport, &store)).await;

    assert_eq!(
        transport.calls(),
        vec![
            (Method::Get, "http://api.test/api/session/1".to_owned()),
            (Method::Get, "http://api.test/api/teacher/42".to_owned()),
        ]
    );
    assert!(view.is_participate);
    assert_eq!(view.teacher.as_ref().map(|t| t.id), Some(42));
    assert!(!view.on_error);
}

#[tokio::test]
async fn failed_session_fetch_skips_teacher() {
    let transport = MockTransport::new();
    transport.push_raw(404, "");
    let store = logged_in(2, false);
    let mut view = DetailView::new(1, &store).unwrap();

    view.fetch(&client(&transport, &store)).await;

    assert_eq!(transport.requests().len(), 1);
    assert!(view.on_error);
    assert!(view.session.is_none());
}

#[tokio::test]
async fn participate_then_refetch_flips_flag() {
    let transport = MockTransport::new();
    transport.push_json(200, session_json(1, 1, &[]));
    transport.push_json(200, teacher_json(1));
    transport.push_raw(200, "");
    transport.push_json(200, session_json(1, 1, &[2]));
    transport.push_json(200, teacher_json(1));
    let store = logged_in(2, false);
    let api = client(&transport, &store);
    let mut view = DetailView::new(1, &store).unwrap();

    view.fetch(&api).await;
    assert!(!view.is_participate);
    view.participate(&api).await;

    assert!(view.is_participate);
    assert_eq!(view.session.as_ref().map(Session::participant_count), Some(1));
    assert_eq!(
        transport.calls()[2],
        (Method::Post, "http://api.test/api/session/1/participate/2".to_owned())
    );
}

#[tokio::test]
async fn un_participate_then_refetch_clears_flag() {
    let transport = MockTransport::new();
    transport.push_json(200, session_json(1, 1, &[2]));
    transport.push_json(200, teacher_json(1));
    transport.push_raw(200, "");
    transport.push_json(200, session_json(1, 1, &[]));
    transport.push_json(200, teacher_json(1));
    let store = logged_in(2, false);
    let api = client(&transport, &store);
    let mut view = DetailView::new(1, &store).unwrap();

    view.fetch(&api).await;
    assert!(view.is_participate);
    view.un_participate(&api).await;

    assert!(!view.is_participate);
    assert_eq!(transport.calls()[2].0, Method::Delete);
}

#[tokio::test]
async fn rejected_toggle_does_not_refetch() {
    let transport = MockTransport::new();
    transport.push_raw(400, "");
    let store = logged_in(2, false);
    let mut view = DetailView::new(1, &store).unwrap();

    view.participate(&client(&transport, &store)).await;

    assert_eq!(transport.requests().len(), 1);
    assert!(view.on_error);
    assert!(!view.is_participate);
}

#[tokio::test]
async fn delete_navigates_to_list_with_notice() {
    let transport = MockTransport::new();
    transport.push_raw(200, "");
    let store = logged_in(1, true);
    let mut view = DetailView::new(1, &store).unwrap();

    let outcome = view.delete(&client(&transport, &store)).await;

    assert_eq!(transport.calls(), vec![(Method::Delete, "http://api.test/api/session/1".to_owned())]);
    assert_eq!(outcome.route(), Some(Route::Sessions));
    let notice = outcome.notice.unwrap();
    assert_eq!(notice.message, "Session deleted !");
    assert_eq!(notice.duration, std::time::Duration::from_millis(3000));
}

#[tokio::test]
async fn non_admin_delete_issues_no_request() {
    let transport = MockTransport::new();
    let store = logged_in(5, false);
    let mut view = DetailView::new(1, &store).unwrap();

    let outcome = view.delete(&client(&transport, &store)).await;

    assert!(transport.requests().is_empty());
    assert_eq!(outcome, Outcome::none());
    assert!(!view.on_error);
}

#[tokio::test]
async fn failed_delete_stays() {
    let transport = MockTransport::new();
    transport.push_raw(403, "");
    let store = logged_in(1, true);
    let mut view = DetailView::new(1, &store).unwrap();

    let outcome = view.delete(&client(&transport, &store)).await;
    assert_eq!(outcome, Outcome::none());
    assert!(view.on_error);
}

#[test]
fn back_goes_back() {
    let view = DetailView::new(1, &logged_in(1, false)).unwrap();
    assert_eq!(view.back().navigation, Some(super::super::Navigation::Back));
}
