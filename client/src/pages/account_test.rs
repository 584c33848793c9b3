use super::*;
use yoga::types::User;

fn user(admin: bool) -> User {
    User {
        id: 1,
        email: "yoga@studio.com".to_owned(),
        first_name: "Admin".to_owned(),
        last_name: "Admin".to_owned(),
        admin,
        created_at: None,
        updated_at: None,
    }
}

#[test]
fn delete_hidden_until_profile_loads() {
    assert!(!can_delete(&AccountView::new()));
}

#[test]
fn delete_hidden_after_load_error() {
    let account = AccountView { user: None, on_error: true };
    assert!(!can_delete(&account));
}

#[test]
fn delete_offered_to_members_only() {
    assert!(can_delete(&AccountView { user: Some(user(false)), on_error: false }));
    assert!(!can_delete(&AccountView { user: Some(user(true)), on_error: false }));
}
