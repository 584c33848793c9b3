use super::*;

#[test]
fn field_message_capitalizes_first_error() {
    let errors = [ValidationError::Required, ValidationError::Email];
    assert_eq!(field_message(&errors).as_deref(), Some("This field is required"));
}

#[test]
fn field_message_is_none_without_errors() {
    assert_eq!(field_message(&[]), None);
}

#[test]
fn login_view_exposes_its_form() {
    let mut view = LoginView::new();
    view.form_mut().set("email", "yoga@studio.com");
    assert_eq!(view.form().get("email"), "yoga@studio.com");
}
