//! Admin page for the store-wide sale.

use crate::admin::{AdminSession, Sale, SaleConsole};
use crate::error::CommerceError;
use crate::pages::layout::render_layout;

pub const HEADING: &str = "Welcome to the admin portal.";
pub const SALE_LABEL: &str = "Set Sale Percent (% off for all items):";

/// Admin view. Can only be built from an [`AdminSession`].
#[derive(Debug, Clone)]
pub struct AdminPage {
    console: SaleConsole,
}

impl AdminPage {
    pub fn new(session: AdminSession) -> Self {
        Self {
            console: SaleConsole::new(session),
        }
    }

    /// Resume with a sale that is already running.
    pub fn with_sale(mut self, sale: Sale) -> Self {
        self.console = self.console.with_sale(sale);
        self
    }

    pub fn console(&self) -> &SaleConsole {
        &self.console
    }

    /// Type a percent and submit it.
    pub fn set_sale(&mut self, input: impl Into<String>) -> Result<Sale, CommerceError> {
        self.console.set_input(input);
        self.console.submit()
    }

    pub fn end_sale(&mut self) {
        self.console.end_sale();
    }

    pub fn render(&self) -> String {
        let mut body = format!("{HEADING}\n{SALE_LABEL} {}\n", self.console.input());
        if let Some(error) = self.console.error() {
            body.push_str(&format!("{error}\n"));
        }
        body.push_str(&format!("[Submit] [End Sale]\n{}\n", self.console.sale().message()));
        render_layout(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::admin::{Credentials, LoginForm};

    fn page() -> AdminPage {
        let mut form = LoginForm::new(Credentials::default());
        form.set_username("admin");
        form.set_password("admin");
        AdminPage::new(form.submit().unwrap())
    }

    #[test]
    fn test_no_sale_by_default() {
        assert!(page().render().contains("No sale active."));
    }

    #[test]
    fn test_invalid_input_shown() {
        let mut page = page();
        assert!(page.set_sale("abc").is_err());
        let rendered = page.render();
        assert!(rendered.contains("Invalid input. Please enter a valid number."));
        assert!(rendered.contains("No sale active."));
    }

    #[test]
    fn test_sale_then_end() {
        let mut page = page();
        page.set_sale("15").unwrap();
        assert!(page.render().contains("All products are 15% off!"));

        page.end_sale();
        let rendered = page.render();
        assert!(rendered.contains("No sale active."));
        assert!(rendered.contains("Set Sale Percent (% off for all items): 0"));
    }
}
