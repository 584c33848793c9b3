use super::*;

// =============================================================
// Validator
// =============================================================

#[test]
fn required_rejects_only_empty_values() {
    assert_eq!(Validator::Required.check(""), Some(ValidationError::Required));
    assert_eq!(Validator::Required.check(" "), None);
}

#[test]
fn length_and_email_skip_empty_values() {
    assert_eq!(Validator::MinLength(3).check(""), None);
    assert_eq!(Validator::MaxLength(3).check(""), None);
    assert_eq!(Validator::Email.check(""), None);
}

#[test]
fn min_length_counts_characters() {
    assert_eq!(
        Validator::MinLength(3).check("J"),
        Some(ValidationError::MinLength { required: 3, actual: 1 })
    );
    assert_eq!(Validator::MinLength(3).check("Zoé"), None);
}

#[test]
fn lengths_count_utf16_units_for_astral_characters() {
    assert_eq!(Validator::MinLength(2).check("🧘"), None);
    assert_eq!(
        Validator::MaxLength(3).check("Al🧘"),
        Some(ValidationError::MaxLength { required: 3, actual: 4 })
    );
}

#[test]
fn max_length_reports_actual_length() {
    let long = "a".repeat(41);
    assert_eq!(
        Validator::MaxLength(40).check(&long),
        Some(ValidationError::MaxLength { required: 40, actual: 41 })
    );
    assert_eq!(Validator::MaxLength(40).check(&"a".repeat(40)), None);
}

#[test]
fn email_accepts_common_addresses() {
    for ok in ["yoga@studio.com", "first.last+tag@sub.example.org", "a@b"] {
        assert_eq!(Validator::Email.check(ok), None, "expected {ok:?} to pass");
    }
}

#[test]
fn email_rejects_malformed_addresses() {
    for bad in ["invalid-email", "@studio.com", "yoga@", "yo ga@studio.com", "yoga@-studio.com", "a..b@c.com"] {
        assert_eq!(Validator::Email.check(bad), Some(ValidationError::Email), "expected {bad:?} to fail");
    }
}

#[test]
fn email_rejects_oversized_local_part() {
    let local = "a".repeat(65);
    assert_eq!(Validator::Email.check(&format!("{local}@studio.com")), Some(ValidationError::Email));
}

// =============================================================
// FormState
// =============================================================

#[test]
fn new_form_starts_empty_and_invalid() {
    let form = FormState::new(LOGIN_FORM);
    assert_eq!(form.get("email"), "");
    assert_eq!(form.get("password"), "");
    assert!(!form.is_valid());
    assert!(form.has_error("email", ErrorKind::Required));
}

#[test]
fn login_form_validates_email_and_password() {
    let form = FormState::new(LOGIN_FORM).with("email", "invalid-email").with("password", "ab");
    assert!(form.has_error("email", ErrorKind::Email));
    assert!(form.has_error("password", ErrorKind::MinLength));

    let form = form.with("email", "yoga@studio.com").with("password", "test!1234");
    assert!(form.is_valid());
}

#[test]
fn register_form_enforces_name_bounds() {
    let form = FormState::new(REGISTER_FORM)
        .with("email", "test@example.com")
        .with("firstName", "J")
        .with("lastName", "a".repeat(96))
        .with("password", "password123");
    assert!(form.has_error("firstName", ErrorKind::MinLength));
    assert!(form.has_error("lastName", ErrorKind::MaxLength));
    assert!(!form.is_valid());

    let form = form.with("firstName", "John").with("lastName", "Doe");
    assert!(form.is_valid());
}

#[test]
fn session_form_requires_every_field() {
    let mut form = FormState::new(SESSION_FORM);
    for field in ["name", "date", "teacher_id", "description"] {
        assert!(form.has_error(field, ErrorKind::Required), "{field} should be required");
    }
    form.set("name", "Test Session");
    form.set("date", "2024-02-15");
    form.set("teacher_id", "1");
    form.set("description", "Valid description");
    assert!(form.is_valid());

    form.set("description", "x".repeat(2001));
    assert!(form.has_error("description", ErrorKind::MaxLength));
}

#[test]
fn undeclared_fields_are_ignored() {
    let mut form = FormState::new(LOGIN_FORM);
    form.set("nickname", "zen");
    assert_eq!(form.get("nickname"), "");
    assert!(form.errors("nickname").is_empty());
}

#[test]
fn reset_clears_values() {
    let mut form = FormState::new(LOGIN_FORM).with("email", "yoga@studio.com");
    form.reset();
    assert_eq!(form.get("email"), "");
}

#[test]
fn validation_errors_render_user_facing_messages() {
    assert_eq!(ValidationError::Required.to_string(), "this field is required");
    let err = Validator::MinLength(3).check("ab").unwrap();
    assert_eq!(err.to_string(), "must be at least 3 characters");
}
