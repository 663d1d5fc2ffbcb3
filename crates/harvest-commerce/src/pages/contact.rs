//! Contact form.

use crate::error::CommerceError;
use crate::pages::layout::render_layout;
use crate::validate::validate_email;
use tracing::debug;

pub const HEADING: &str = "Contact Us";
pub const THANK_YOU: &str = "Thank you for your message.";

/// Contact form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub request: String,
}

impl ContactForm {
    /// Every field filled in and a well-formed email.
    pub fn validate(&self) -> Result<(), CommerceError> {
        for (field, value) in [
            ("name", &self.name),
            ("email", &self.email),
            ("request", &self.request),
        ] {
            if value.trim().is_empty() {
                return Err(CommerceError::ValidationError(format!("{field} is required")));
            }
        }
        if !validate_email(self.email.trim()) {
            return Err(CommerceError::ValidationError(
                "email is not a valid address".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct ContactPage {
    form: ContactForm,
    submitted: bool,
}

impl ContactPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ContactForm {
        &mut self.form
    }

    /// Whether the thank-you dialog is showing.
    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn submit(&mut self) -> Result<(), CommerceError> {
        self.form.validate()?;
        debug!(email = %self.form.email, "contact request submitted");
        self.submitted = true;
        Ok(())
    }

    /// Dismiss the thank-you dialog and reset the form.
    pub fn continue_browsing(&mut self) {
        self.submitted = false;
        self.form = ContactForm::default();
    }

    pub fn render(&self) -> String {
        let mut body = format!(
            "{HEADING}\nYour name: {}\nYour email: {}\nYour request: {}\n[Submit]\n",
            self.form.name, self.form.email, self.form.request
        );
        if self.submitted {
            body.push_str(&format!("\n{THANK_YOU}\n[Continue]\n"));
        }
        render_layout(&body)
    }
}
