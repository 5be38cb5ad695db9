//! Synchronous form checks for the auth, profile and dashboard forms.
//!
//! Every check collects all failing fields at once so the views can render
//! each message next to its input.

use once_cell::sync::Lazy;
use regex::Regex;

pub const MIN_SIGNUP_PASSWORD_LEN: usize = 8;
pub const MIN_PHONE_LEN: usize = 10;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    // non-whitespace, '@', non-whitespace, '.', non-whitespace
    Regex::new(r"\S+@\S+\.\S+").expect("email pattern compiles")
});

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Name is required")]
    NameRequired,
    #[error("Email is required")]
    EmailRequired,
    #[error("Email address is invalid")]
    EmailInvalid,
    #[error("Password is required")]
    PasswordRequired,
    #[error("Password must be at least 8 characters")]
    PasswordTooShort,
    #[error("Please confirm your password")]
    ConfirmationRequired,
    #[error("Passwords don't match")]
    PasswordMismatch,
    #[error("You must accept the terms and conditions")]
    TermsNotAccepted,
    #[error("New password and confirmation don't match.")]
    NewPasswordMismatch,
    #[error("Password must be at least 8 characters long.")]
    NewPasswordTooShort,
    #[error("Please enter a valid phone number")]
    PhoneInvalid,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Password,
    ConfirmPassword,
    AcceptTerms,
    NewPassword,
    Phone,
}

/// Failing fields in the order they were checked.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    entries: Vec<(Field, ValidationError)>,
}

impl FieldErrors {
    pub fn push(&mut self, field: Field, error: ValidationError) {
        self.entries.retain(|(existing, _)| *existing != field);
        self.entries.push((field, error));
    }

    pub fn get(&self, field: Field) -> Option<ValidationError> {
        self.entries
            .iter()
            .find(|(existing, _)| *existing == field)
            .map(|(_, error)| *error)
    }

    /// Message for `field`, ready to render.
    pub fn message(&self, field: Field) -> Option<String> {
        self.get(field).map(|error| error.to_string())
    }

    /// Forget the error on `field`, typically because the user edited it.
    pub fn clear(&mut self, field: Field) {
        self.entries.retain(|(existing, _)| *existing != field);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub accept_terms: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PasswordChangeForm {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

fn check_email(email: &str, errors: &mut FieldErrors) {
    if email.is_empty() {
        errors.push(Field::Email, ValidationError::EmailRequired);
    } else if !is_valid_email(email) {
        errors.push(Field::Email, ValidationError::EmailInvalid);
    }
}

pub fn validate_login(form: &LoginForm) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();
    check_email(&form.email, &mut errors);
    if form.password.is_empty() {
        errors.push(Field::Password, ValidationError::PasswordRequired);
    }
    errors.into_result()
}

pub fn validate_signup(form: &SignupForm) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();

    if form.name.trim().is_empty() {
        errors.push(Field::Name, ValidationError::NameRequired);
    }

    check_email(&form.email, &mut errors);

    if form.password.is_empty() {
        errors.push(Field::Password, ValidationError::PasswordRequired);
    } else if form.password.chars().count() < MIN_SIGNUP_PASSWORD_LEN {
        errors.push(Field::Password, ValidationError::PasswordTooShort);
    }

    if form.confirm_password.is_empty() {
        errors.push(Field::ConfirmPassword, ValidationError::ConfirmationRequired);
    } else if form.confirm_password != form.password {
        errors.push(Field::ConfirmPassword, ValidationError::PasswordMismatch);
    }

    if !form.accept_terms {
        errors.push(Field::AcceptTerms, ValidationError::TermsNotAccepted);
    }

    errors.into_result()
}

/// Profile password change. Reports only the first failure, mismatch before
/// length.
pub fn validate_password_change(form: &PasswordChangeForm) -> Result<(), ValidationError> {
    if form.new_password != form.confirm_password {
        return Err(ValidationError::NewPasswordMismatch);
    }
    if form.new_password.chars().count() < MIN_SIGNUP_PASSWORD_LEN {
        return Err(ValidationError::NewPasswordTooShort);
    }
    Ok(())
}

/// Call-back number on the dashboard overview.
pub fn validate_phone(number: &str) -> Result<(), ValidationError> {
    if number.chars().count() < MIN_PHONE_LEN {
        return Err(ValidationError::PhoneInvalid);
    }
    Ok(())
}
