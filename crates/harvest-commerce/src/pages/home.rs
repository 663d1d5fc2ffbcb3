//! Landing page.

use crate::pages::layout::render_layout;

pub const WELCOME: &str = "Welcome to the The Daily Harvest!";
pub const GUIDANCE: &str = "Check out our products page for some great deals.";

/// Static landing page.
#[derive(Debug, Clone, Copy, Default)]
pub struct HomePage;

impl HomePage {
    pub fn render(&self) -> String {
        render_layout(&format!("{WELCOME}\n{GUIDANCE}\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_page_text() {
        let page = HomePage.render();
        assert!(page.contains("Welcome to the The Daily Harvest!"));
        assert!(page.contains("Check out our products page for some great deals."));
    }
}
