use super::*;

fn filled_register_form() -> RegisterForm {
    RegisterForm {
        username: "alice".to_owned(),
        email: "alice@example.com".to_owned(),
        first_name: "Alice".to_owned(),
        last_name: "Liddell".to_owned(),
        password: "secret1".to_owned(),
        confirm_password: "secret1".to_owned(),
    }
}

// =============================================================
// Email syntax
// =============================================================

#[test]
fn accepts_common_addresses() {
    for email in [
        "a@x.com",
        "first.last@sub.example.org",
        "user+tag@example.co.uk",
        "o'brien@example.ie",
        "x@localhost",
    ] {
        assert!(is_valid_email(email), "{email} should be valid");
    }
}

#[test]
fn rejects_malformed_addresses() {
    for email in [
        "",
        "plainaddress",
        "@example.com",
        "user@",
        "user@@example.com",
        "user@example..com",
        ".user@example.com",
        "user.@example.com",
        "user@-example.com",
        "user@example-.com",
        "user name@example.com",
        "user@exa mple.com",
    ] {
        assert!(!is_valid_email(email), "{email} should be invalid");
    }
}

#[test]
fn rejects_overlong_local_part() {
    let email = format!("{}@example.com", "a".repeat(65));
    assert!(!is_valid_email(&email));
    let email = format!("{}@example.com", "a".repeat(64));
    assert!(is_valid_email(&email));
}

// =============================================================
// Login form
// =============================================================

#[test]
fn login_requires_both_fields() {
    let errors = LoginForm::default().validate().expect_err("empty form");
    assert_eq!(errors.get(Field::Username), Some(FieldError::Required));
    assert_eq!(errors.get(Field::Password), Some(FieldError::Required));
    assert_eq!(errors.message(Field::Username).as_deref(), Some("Username is required"));
    assert_eq!(errors.message(Field::Password).as_deref(), Some("Password is required"));
}

#[test]
fn login_treats_whitespace_username_as_missing() {
    let form = LoginForm {
        username: "   ".to_owned(),
        password: "secret".to_owned(),
    };
    let errors = form.validate().expect_err("blank username");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.get(Field::Username), Some(FieldError::Required));
}

#[test]
fn login_trims_username_but_not_password() {
    let form = LoginForm {
        username: "  alice ".to_owned(),
        password: " secret ".to_owned(),
    };
    let request = form.validate().expect("valid");
    assert_eq!(request.username, "alice");
    assert_eq!(request.password, " secret ");
}

// =============================================================
// Registration form
// =============================================================

#[test]
fn register_accepts_complete_form() {
    let request = filled_register_form().validate().expect("valid");
    assert_eq!(request.username, "alice");
    assert_eq!(request.email, "alice@example.com");
    assert_eq!(request.first_name, "Alice");
    assert_eq!(request.last_name, "Liddell");
    assert_eq!(request.password, "secret1");
}

#[test]
fn register_rejects_malformed_email() {
    let mut form = filled_register_form();
    form.email = "alice.example.com".to_owned();
    let errors = form.validate().expect_err("bad email");
    assert_eq!(errors.get(Field::Email), Some(FieldError::InvalidEmail));
    assert_eq!(
        errors.message(Field::Email).as_deref(),
        Some("Email must be a valid email address")
    );
}

#[test]
fn register_reports_required_before_email_format() {
    let mut form = filled_register_form();
    form.email = String::new();
    let errors = form.validate().expect_err("missing email");
    assert_eq!(errors.get(Field::Email), Some(FieldError::Required));
}

#[test]
fn register_enforces_min_password_length() {
    let mut form = filled_register_form();
    form.password = "abc".to_owned();
    form.confirm_password = "abc".to_owned();
    let errors = form.validate().expect_err("short password");
    assert_eq!(
        errors.get(Field::Password),
        Some(FieldError::TooShort { min: MIN_PASSWORD_LEN })
    );
    assert_eq!(
        errors.message(Field::Password).as_deref(),
        Some("Password must be at least 6 characters")
    );
}

#[test]
fn register_mismatch_marks_confirmation_only() {
    let mut form = filled_register_form();
    form.confirm_password = "secret2".to_owned();
    let errors = form.validate().expect_err("mismatch");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.get(Field::ConfirmPassword), Some(FieldError::MustMatch));
    assert_eq!(errors.message(Field::ConfirmPassword).as_deref(), Some("Passwords must match"));
}

#[test]
fn register_mismatch_clears_once_equal_again() {
    let mut form = filled_register_form();
    form.confirm_password = "secret2".to_owned();
    assert!(form.validate().is_err());
    form.confirm_password = "secret1".to_owned();
    assert!(form.validate().is_ok());
}

#[test]
fn register_empty_confirmation_is_required_not_mismatch() {
    let mut form = filled_register_form();
    form.confirm_password = String::new();
    let errors = form.validate().expect_err("missing confirmation");
    assert_eq!(errors.get(Field::ConfirmPassword), Some(FieldError::Required));
    assert_eq!(
        errors.message(Field::ConfirmPassword).as_deref(),
        Some("Confirm Password is required")
    );
}

#[test]
fn register_requires_names() {
    let mut form = filled_register_form();
    form.first_name = String::new();
    form.last_name = " ".to_owned();
    let errors = form.validate().expect_err("missing names");
    assert_eq!(errors.message(Field::FirstName).as_deref(), Some("First name is required"));
    assert_eq!(errors.message(Field::LastName).as_deref(), Some("Last name is required"));
}

#[test]
fn field_errors_display_joins_in_field_order() {
    let errors = LoginForm::default().validate().expect_err("empty form");
    assert_eq!(errors.to_string(), "Username is required; Password is required");
}

// =============================================================
// Password change and profile forms
// =============================================================

#[test]
fn password_change_requires_matching_new_password() {
    let form = PasswordChangeForm {
        current_password: "old-secret".to_owned(),
        new_password: "new-secret".to_owned(),
        confirm_password: "new-secrte".to_owned(),
    };
    let errors = form.validate().expect_err("mismatch");
    assert_eq!(errors.get(Field::ConfirmPassword), Some(FieldError::MustMatch));
}

#[test]
fn password_change_builds_request() {
    let form = PasswordChangeForm {
        current_password: "old-secret".to_owned(),
        new_password: "new-secret".to_owned(),
        confirm_password: "new-secret".to_owned(),
    };
    let change = form.validate().expect("valid");
    assert_eq!(change.current_password, "old-secret");
    assert_eq!(change.new_password, "new-secret");
}

#[test]
fn password_change_checks_new_password_length() {
    let form = PasswordChangeForm {
        current_password: "old-secret".to_owned(),
        new_password: "short".to_owned(),
        confirm_password: "short".to_owned(),
    };
    let errors = form.validate().expect_err("short");
    assert_eq!(
        errors.message(Field::NewPassword).as_deref(),
        Some("New password must be at least 6 characters")
    );
    assert_eq!(errors.get(Field::CurrentPassword), None);
}

#[test]
fn profile_form_drops_blank_fields() {
    let form = ProfileForm {
        first_name: " Alice ".to_owned(),
        last_name: String::new(),
        email: "  ".to_owned(),
    };
    let update = form.validate().expect("valid");
    assert_eq!(update.first_name.as_deref(), Some("Alice"));
    assert_eq!(update.last_name, None);
    assert_eq!(update.email, None);
}

#[test]
fn profile_form_rejects_malformed_email() {
    let form = ProfileForm {
        email: "nope".to_owned(),
        ..ProfileForm::default()
    };
    let errors = form.validate().expect_err("bad email");
    assert_eq!(errors.get(Field::Email), Some(FieldError::InvalidEmail));
}

// =============================================================
// SubmitState
// =============================================================

#[test]
fn attempt_marks_submitted_even_if_validation_fails_later() {
    let mut state = SubmitState::default();
    assert!(!state.show_errors());
    assert!(state.attempt());
    assert!(state.show_errors());
    assert!(!state.busy);
}

#[test]
fn attempt_is_refused_while_busy() {
    let mut state = SubmitState::default();
    assert!(state.attempt());
    state.start();
    assert!(!state.attempt());
    state.fail("Login failed.".to_owned());
    assert!(state.attempt());
}

#[test]
fn start_clears_previous_messages() {
    let mut state = SubmitState {
        error: Some("old".to_owned()),
        success: Some("older".to_owned()),
        ..SubmitState::default()
    };
    state.start();
    assert!(state.busy);
    assert_eq!(state.error, None);
    assert_eq!(state.success, None);
}

#[test]
fn succeed_records_message_and_releases_busy() {
    let mut state = SubmitState::default();
    state.start();
    state.succeed(Some("Saved".to_owned()));
    assert!(!state.busy);
    assert_eq!(state.success.as_deref(), Some("Saved"));
}
