//! Money type for representing USD amounts.
//!
//! Uses a cents-based integer representation to avoid floating-point
//! drift when prices are multiplied and summed. Product data files carry
//! prices as decimal numbers, so the serde form is a plain JSON number.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Currency symbol used for display.
pub const CURRENCY_SYMBOL: &str = "$";

/// A USD amount stored in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money {
    /// Amount in cents.
    pub amount_cents: i64,
}

impl Money {
    /// Create a new Money value from cents.
    pub fn new(amount_cents: i64) -> Self {
        Self { amount_cents }
    }

    /// Create a Money value from a decimal dollar amount.
    ///
    /// ```
    /// use harvest_commerce::money::Money;
    /// let price = Money::from_decimal(29.99);
    /// assert_eq!(price.amount_cents, 2999);
    /// ```
    pub fn from_decimal(amount: f64) -> Self {
        Self::new((amount * 100.0).round() as i64)
    }

    /// Zero dollars.
    pub fn zero() -> Self {
        Self::new(0)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_cents == 0
    }

    /// Convert to a decimal dollar value.
    pub fn to_decimal(&self) -> f64 {
        self.amount_cents as f64 / 100.0
    }

    /// Format as a display string (e.g., "$29.99").
    pub fn display(&self) -> String {
        let sign = if self.amount_cents < 0 { "-" } else { "" };
        let cents = self.amount_cents.unsigned_abs();
        format!("{}{}{}.{:02}", sign, CURRENCY_SYMBOL, cents / 100, cents % 100)
    }

    /// Add another amount, saturating at the numeric bounds.
    pub fn saturating_add(&self, other: Money) -> Money {
        Money::new(self.amount_cents.saturating_add(other.amount_cents))
    }

    /// Multiply by a quantity, saturating at the numeric bounds.
    pub fn saturating_mul(&self, factor: i64) -> Money {
        Money::new(self.amount_cents.saturating_mul(factor))
    }

    /// Calculate a percentage of this amount, rounded to the cent.
    pub fn percentage(&self, percent: f64) -> Money {
        Money::new((self.amount_cents as f64 * percent / 100.0).round() as i64)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.to_decimal())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let amount = f64::deserialize(deserializer)?;
        if !amount.is_finite() || amount < 0.0 {
            return Err(de::Error::custom(format!(
                "price must be a non-negative number, got {amount}"
            )));
        }
        Ok(Money::from_decimal(amount))
    }
}

/// Anything that contributes `unit price * quantity` to a total.
pub trait LineTotal {
    /// Price of a single unit.
    fn unit_price(&self) -> Money;
    /// Number of units.
    fn quantity(&self) -> i64;

    /// `unit_price * quantity`.
    fn line_total(&self) -> Money {
        self.unit_price().saturating_mul(self.quantity())
    }
}

impl LineTotal for (Money, i64) {
    fn unit_price(&self) -> Money {
        self.0
    }

    fn quantity(&self) -> i64 {
        self.1
    }
}

/// Format a decimal dollar amount as a two-decimal USD string.
///
/// ```
/// use harvest_commerce::money::format_price;
/// assert_eq!(format_price(10.0), "$10.00");
/// ```
pub fn format_price(amount: f64) -> String {
    Money::from_decimal(amount).display()
}

/// Sum `price * quantity` over the given lines. Empty input totals zero.
pub fn calculate_total<'a, T, I>(items: I) -> Money
where
    T: LineTotal + 'a,
    I: IntoIterator<Item = &'a T>,
{
    items
        .into_iter()
        .fold(Money::zero(), |acc, item| acc.saturating_add(item.line_total()))
}
