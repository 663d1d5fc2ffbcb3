//! Admin login page.

use crate::admin::{AdminSession, Credentials, LoginForm};
use crate::error::CommerceError;
use crate::pages::layout::render_layout;

pub const HEADING: &str = "Admin Login";

#[derive(Debug, Clone)]
pub struct LoginPage {
    form: LoginForm,
}

impl LoginPage {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            form: LoginForm::new(credentials),
        }
    }

    pub fn form(&self) -> &LoginForm {
        &self.form
    }

    /// Fill in the form and submit it.
    ///
    /// A returned session is what unlocks the admin route.
    pub fn login(
        &mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<AdminSession, CommerceError> {
        self.form.set_username(username);
        self.form.set_password(password);
        self.form.submit()
    }

    pub fn render(&self) -> String {
        let masked = "*".repeat(self.form.password().chars().count());
        let mut body = format!(
            "{HEADING}\nUsername: {}\nPassword: {masked}\n",
            self.form.username()
        );
        if let Some(error) = self.form.error() {
            body.push_str(&format!("{error}\n"));
        }
        body.push_str("[Login]\n");
        render_layout(&body)
    }
}
