//! Store-wide sale managed from the admin view.

use crate::admin::AdminSession;
use crate::error::CommerceError;
use crate::money::Money;
use crate::validate::parse_percent;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Shown when no sale is running.
pub const NO_SALE: &str = "No sale active.";

/// Inline error for a non-numeric sale percent.
pub const INVALID_PERCENT: &str = "Invalid input. Please enter a valid number.";

/// A percentage taken off every product price. Zero means no sale.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Sale {
    percent: f64,
}

impl Sale {
    /// A sale of `percent` off.
    pub fn new(percent: f64) -> Self {
        Self { percent }
    }

    pub fn percent(&self) -> f64 {
        self.percent
    }

    pub fn is_active(&self) -> bool {
        self.percent != 0.0
    }

    /// Banner text for the current sale.
    pub fn message(&self) -> String {
        if self.is_active() {
            format!("All products are {}% off!", self.percent)
        } else {
            NO_SALE.to_string()
        }
    }

    /// Price after the sale discount, rounded to the cent.
    ///
    /// The percent is clamped to `0..=100` so a sale never raises a price or
    /// takes it below zero.
    pub fn apply(&self, price: Money) -> Money {
        if !self.is_active() {
            return price;
        }
        let off = price.percentage(self.percent.clamp(0.0, 100.0));
        Money::new(
            price
                .amount_cents
                .saturating_sub(off.amount_cents)
                .clamp(0, price.amount_cents.max(0)),
        )
    }
}

/// Admin sale form. Requires an [`AdminSession`].
#[derive(Debug, Clone)]
pub struct SaleConsole {
    session: AdminSession,
    input: String,
    sale: Sale,
    error: Option<String>,
}

impl SaleConsole {
    pub fn new(session: AdminSession) -> Self {
        Self {
            session,
            input: "0".to_string(),
            sale: Sale::default(),
            error: None,
        }
    }

    /// Start from an already running sale.
    pub fn with_sale(mut self, sale: Sale) -> Self {
        self.input = sale.percent().to_string();
        self.sale = sale;
        self
    }

    pub fn session(&self) -> &AdminSession {
        &self.session
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    /// Current contents of the percent field.
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn sale(&self) -> Sale {
        self.sale
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Store the typed percent as the active sale.
    ///
    /// Non-numeric input sets the inline error and keeps the stored sale.
    pub fn submit(&mut self) -> Result<Sale, CommerceError> {
        let Some(percent) = parse_percent(&self.input) else {
            self.error = Some(INVALID_PERCENT.to_string());
            return Err(CommerceError::ValidationError(INVALID_PERCENT.to_string()));
        };

        self.sale = Sale::new(percent);
        self.error = None;
        info!(percent, admin = %self.session.username(), "sale updated");
        Ok(self.sale)
    }

    /// Reset the sale and the percent field to zero.
    pub fn end_sale(&mut self) {
        self.sale = Sale::default();
        self.input = "0".to_string();
        self.error = None;
        info!(admin = %self.session.username(), "sale ended");
    }
}
