//! Header and footer shared by every page.

/// Store name shown in the header.
pub const STORE_NAME: &str = "The Daily Harvest";

/// Primary navigation as (label, path) pairs.
pub const NAV_LINKS: [(&str, &str); 5] = [
    ("Home", "/"),
    ("Products", "/products"),
    ("Cart", "/cart"),
    ("Contact Us", "/contact"),
    ("Admin Login", "/login"),
];

pub const FOOTER_TEXT: &str = "© 2025 The Daily Harvest. All rights reserved.";

/// Render the header with its navigation bar.
pub fn render_header() -> String {
    let nav = NAV_LINKS
        .iter()
        .map(|(label, path)| format!("{label} [{path}]"))
        .collect::<Vec<_>>()
        .join(" | ");
    format!("{STORE_NAME}\n{nav}\n")
}

pub fn render_footer() -> String {
    format!("{FOOTER_TEXT}\n")
}

/// Place a page body between the header and footer.
pub fn render_layout(body: &str) -> String {
    format!("{}\n{}\n{}", render_header(), body.trim_end(), render_footer())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_lists_navigation() {
        let header = render_header();
        assert!(header.starts_with("The Daily Harvest\n"));
        assert!(header.contains("Home [/]"));
        assert!(header.contains("Products [/products]"));
        assert!(header.contains("Cart [/cart]"));
        assert!(header.contains("Contact Us [/contact]"));
        assert!(header.contains("Admin Login [/login]"));
    }

    #[test]
    fn test_layout_wraps_body() {
        let page = render_layout("Body text\n\n");
        assert!(page.contains("The Daily Harvest"));
        assert!(page.contains("Body text\n"));
        assert!(page.ends_with("© 2025 The Daily Harvest. All rights reserved.\n"));
    }
}
