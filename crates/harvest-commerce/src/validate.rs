//! Input validation helpers.

use std::sync::LazyLock;

use regex::Regex;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap_or_else(|e| panic!("invalid email regex: {e}"))
});

/// Returns true iff `s` has the conventional `local@domain.tld` shape.
pub fn validate_email(s: &str) -> bool {
    EMAIL_RE.is_match(s)
}

/// Parse a sale percentage typed into the admin form.
///
/// Returns `None` for anything that is not a finite number.
pub fn parse_percent(input: &str) -> Option<f64> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}
