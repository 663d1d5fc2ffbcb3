//! Admin login gate.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Inline message shown after a failed login.
pub const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// The fixed username/password pair that unlocks the admin view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}

impl Default for Credentials {
    fn default() -> Self {
        Self::new("admin", "admin")
    }
}

/// Proof of a successful login. Only [`LoginForm::submit`] can mint one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminSession {
    username: String,
}

impl AdminSession {
    pub fn username(&self) -> &str {
        &self.username
    }
}

/// Login form state.
#[derive(Debug, Clone)]
pub struct LoginForm {
    credentials: Credentials,
    username: String,
    password: String,
    error: Option<String>,
}

impl LoginForm {
    /// Create an empty form checked against `credentials`.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            username: String::new(),
            password: String::new(),
            error: None,
        }
    }

    pub fn set_username(&mut self, username: impl Into<String>) {
        self.username = username.into();
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    /// Inline error from the last submission.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Check the typed credentials.
    ///
    /// On success the form is cleared. On failure the typed values are kept
    /// and the inline error is set.
    pub fn submit(&mut self) -> Result<AdminSession, CommerceError> {
        if !self.credentials.matches(&self.username, &self.password) {
            warn!(username = %self.username, "admin login rejected");
            self.error = Some(INVALID_CREDENTIALS.to_string());
            return Err(CommerceError::InvalidCredentials);
        }

        let session = AdminSession {
            username: std::mem::take(&mut self.username),
        };
        self.password.clear();
        self.error = None;
        info!(username = %session.username, "admin logged in");
        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_credentials_keep_form() {
        let mut form = LoginForm::new(Credentials::default());
        form.set_username("wrong");
        form.set_password("creds");

        assert_eq!(form.submit(), Err(CommerceError::InvalidCredentials));
        assert_eq!(form.error(), Some("Invalid credentials"));
        assert_eq!(form.username(), "wrong");
        assert_eq!(form.password(), "creds");
    }

    #[test]
    fn test_valid_credentials_clear_form() {
        let mut form = LoginForm::new(Credentials::default());
        form.set_username("admin");
        form.set_password("admin");

        let session = form.submit().unwrap();
        assert_eq!(session.username(), "admin");
        assert_eq!(form.username(), "");
        assert_eq!(form.password(), "");
        assert!(form.error().is_none());
    }

    #[test]
    fn test_custom_credentials() {
        let mut form = LoginForm::new(Credentials::new("owner", "s3cret"));
        form.set_username("admin");
        form.set_password("admin");
        assert!(form.submit().is_err());

        form.set_username("owner");
        form.set_password("s3cret");
        assert!(form.submit().is_ok());
    }
}
