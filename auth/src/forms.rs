//! Client-side form validation and submit bookkeeping.
//!
//! Validation runs on every submit attempt. A form that fails validation
//! never produces a request DTO, so no network call can be issued for it.
//! Text identifiers (username, email, names) are trimmed; passwords are
//! compared and sent exactly as typed.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::types::{LoginRequest, PasswordChange, RegisterRequest, UserUpdate};

/// Minimum accepted length for a new password.
pub const MIN_PASSWORD_LEN: usize = 6;

const MAX_EMAIL_LEN: usize = 254;
const MAX_EMAIL_LOCAL_LEN: usize = 64;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)*$",
    )
    .expect("email pattern is valid")
});

/// Standard email syntax check. Does not decide whether the address exists.
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    if value.len() > MAX_EMAIL_LEN {
        return false;
    }
    let Some((local, _)) = value.split_once('@') else {
        return false;
    };
    local.len() <= MAX_EMAIL_LOCAL_LEN && EMAIL_PATTERN.is_match(value)
}

/// Input field that can carry a validation error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Username,
    Email,
    FirstName,
    LastName,
    Password,
    ConfirmPassword,
    CurrentPassword,
    NewPassword,
}

impl Field {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Username => "Username",
            Self::Email => "Email",
            Self::FirstName => "First name",
            Self::LastName => "Last name",
            Self::Password => "Password",
            Self::ConfirmPassword => "Confirm Password",
            Self::CurrentPassword => "Current password",
            Self::NewPassword => "New password",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldError {
    Required,
    InvalidEmail,
    TooShort { min: usize },
    MustMatch,
}

impl FieldError {
    #[must_use]
    pub fn message(self, field: Field) -> String {
        match self {
            Self::Required => format!("{} is required", field.label()),
            Self::InvalidEmail => "Email must be a valid email address".to_owned(),
            Self::TooShort { min } => format!("{} must be at least {min} characters", field.label()),
            Self::MustMatch => "Passwords must match".to_owned(),
        }
    }
}

/// At most one error per field, in field order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, FieldError>);

impl FieldErrors {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn get(&self, field: Field) -> Option<FieldError> {
        self.0.get(&field).copied()
    }

    /// Inline message for `field`, if it has an error.
    #[must_use]
    pub fn message(&self, field: Field) -> Option<String> {
        self.get(field).map(|error| error.message(field))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, FieldError)> + '_ {
        self.0.iter().map(|(field, error)| (*field, *error))
    }

    fn insert(&mut self, field: Field, error: FieldError) {
        self.0.entry(field).or_insert(error);
    }

    fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.iter().map(|(field, error)| error.message(field)).collect();
        f.write_str(&messages.join("; "))
    }
}

fn require(errors: &mut FieldErrors, field: Field, value: &str) -> bool {
    if value.trim().is_empty() {
        errors.insert(field, FieldError::Required);
        false
    } else {
        true
    }
}

fn require_email(errors: &mut FieldErrors, value: &str) {
    if require(errors, Field::Email, value) && !is_valid_email(value.trim()) {
        errors.insert(Field::Email, FieldError::InvalidEmail);
    }
}

fn require_new_password(errors: &mut FieldErrors, field: Field, value: &str) {
    if require(errors, field, value) && value.chars().count() < MIN_PASSWORD_LEN {
        errors.insert(field, FieldError::TooShort { min: MIN_PASSWORD_LEN });
    }
}

/// The confirmation only reports a mismatch once it has a value of its own.
fn require_match(errors: &mut FieldErrors, password: &str, confirmation: &str) {
    if require(errors, Field::ConfirmPassword, confirmation) && password != confirmation {
        errors.insert(Field::ConfirmPassword, FieldError::MustMatch);
    }
}

fn optional_trimmed(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    /// # Errors
    ///
    /// Returns the per-field errors when a required field is empty.
    pub fn validate(&self) -> Result<LoginRequest, FieldErrors> {
        let mut errors = FieldErrors::default();
        require(&mut errors, Field::Username, &self.username);
        require(&mut errors, Field::Password, &self.password);
        errors.into_result(LoginRequest {
            username: self.username.trim().to_owned(),
            password: self.password.clone(),
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterForm {
    /// # Errors
    ///
    /// Returns the per-field errors for missing fields, a malformed email, a
    /// short password, or a confirmation that differs from the password.
    pub fn validate(&self) -> Result<RegisterRequest, FieldErrors> {
        let mut errors = FieldErrors::default();
        require(&mut errors, Field::Username, &self.username);
        require_email(&mut errors, &self.email);
        require(&mut errors, Field::FirstName, &self.first_name);
        require(&mut errors, Field::LastName, &self.last_name);
        require_new_password(&mut errors, Field::Password, &self.password);
        require_match(&mut errors, &self.password, &self.confirm_password);
        errors.into_result(RegisterRequest {
            username: self.username.trim().to_owned(),
            email: self.email.trim().to_owned(),
            password: self.password.clone(),
            first_name: self.first_name.trim().to_owned(),
            last_name: self.last_name.trim().to_owned(),
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PasswordChangeForm {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

impl PasswordChangeForm {
    /// # Errors
    ///
    /// Returns the per-field errors for missing fields, a short new password,
    /// or a mismatched confirmation.
    pub fn validate(&self) -> Result<PasswordChange, FieldErrors> {
        let mut errors = FieldErrors::default();
        require(&mut errors, Field::CurrentPassword, &self.current_password);
        require_new_password(&mut errors, Field::NewPassword, &self.new_password);
        require_match(&mut errors, &self.new_password, &self.confirm_password);
        errors.into_result(PasswordChange {
            current_password: self.current_password.clone(),
            new_password: self.new_password.clone(),
        })
    }
}

/// Profile edit form. Blank fields are left unchanged on the server.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl ProfileForm {
    /// # Errors
    ///
    /// Returns an email error when a non-blank email is malformed.
    pub fn validate(&self) -> Result<UserUpdate, FieldErrors> {
        let mut errors = FieldErrors::default();
        let email = optional_trimmed(&self.email);
        if email.as_deref().is_some_and(|email| !is_valid_email(email)) {
            errors.insert(Field::Email, FieldError::InvalidEmail);
        }
        errors.into_result(UserUpdate {
            first_name: optional_trimmed(&self.first_name),
            last_name: optional_trimmed(&self.last_name),
            email,
        })
    }
}

/// Per-form submit lifecycle.
///
/// `submitted` turns on at the first attempt and stays on, so inline errors
/// remain visible. `busy` is the in-flight guard: a second submit is refused
/// until the first completes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubmitState {
    pub submitted: bool,
    pub busy: bool,
    pub error: Option<String>,
    pub success: Option<String>,
}

impl SubmitState {
    /// Record a submit attempt. Returns `false` while a request is in flight.
    pub fn attempt(&mut self) -> bool {
        if self.busy {
            return false;
        }
        self.submitted = true;
        true
    }

    /// Validation passed and the request is being dispatched.
    pub fn start(&mut self) {
        self.busy = true;
        self.error = None;
        self.success = None;
    }

    pub fn succeed(&mut self, message: Option<String>) {
        self.busy = false;
        self.success = message;
    }

    pub fn fail(&mut self, message: String) {
        self.busy = false;
        self.error = Some(message);
    }

    /// Whether inline field errors should be rendered.
    #[must_use]
    pub fn show_errors(&self) -> bool {
        self.submitted
    }
}
