//! Authentication context shared by every screen.
//!
//! The root component provides a `Signal<Session>` through Dioxus context.
//! Login and signup flip it on, logout flips it off. Route guards read it on
//! every navigation.

use crate::validation::{FieldErrors, LoginForm, SignupForm, validate_login, validate_signup};

pub const DEMO_EMAIL: &str = "demo@example.com";
pub const DEMO_PASSWORD: &str = "password";

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum AuthError {
    #[error("form has {} invalid field(s)", .0.len())]
    Invalid(FieldErrors),

    #[error("Invalid email or password. Try demo@example.com / password")]
    InvalidCredentials,
}

impl AuthError {
    /// Field errors to render inline, if this failure came from validation.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            AuthError::Invalid(errors) => Some(errors),
            AuthError::InvalidCredentials => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    authenticated: bool,
    user: Option<String>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Email or provider name of whoever signed in.
    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    /// Validate the form, then require the demo credential pair.
    pub fn login(&mut self, form: &LoginForm) -> Result<(), AuthError> {
        validate_login(form).map_err(AuthError::Invalid)?;
        check_credentials(form)?;
        self.sign_in(form.email.clone());
        Ok(())
    }

    /// Validate the form. A valid signup always signs the user in.
    pub fn signup(&mut self, form: &SignupForm) -> Result<(), AuthError> {
        validate_signup(form).map_err(AuthError::Invalid)?;
        self.sign_in(form.email.clone());
        Ok(())
    }

    /// Third-party sign-in shortcut. There is nothing to verify.
    pub fn sign_in_with_provider(&mut self, provider: &str) {
        self.sign_in(format!("{provider} user"));
    }

    pub fn logout(&mut self) {
        if self.authenticated {
            tracing::info!(user = ?self.user, "signed out");
        }
        self.authenticated = false;
        self.user = None;
    }

    fn sign_in(&mut self, user: String) {
        tracing::info!(%user, "signed in");
        self.authenticated = true;
        self.user = Some(user);
    }
}

/// Literal comparison against the demo pair.
pub fn check_credentials(form: &LoginForm) -> Result<(), AuthError> {
    if form.email == DEMO_EMAIL && form.password == DEMO_PASSWORD {
        Ok(())
    } else {
        tracing::debug!(email = %form.email, "credential mismatch");
        Err(AuthError::InvalidCredentials)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_signed_out() {
        let session = Session::default();
        assert!(!session.is_authenticated());
        assert_eq!(session.user(), None);
    }

    #[test]
    fn test_invalid_credentials_message() {
        assert_eq!(
            AuthError::InvalidCredentials.to_string(),
            "Invalid email or password. Try demo@example.com / password"
        );
    }

    #[test]
    fn test_provider_sign_in_and_logout() {
        let mut session = Session::default();
        session.sign_in_with_provider("Google");
        assert!(session.is_authenticated());
        assert_eq!(session.user(), Some("Google user"));

        session.logout();
        assert_eq!(session, Session::default());
    }
}
