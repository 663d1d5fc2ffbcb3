//! Order snapshot taken at checkout confirmation.

use crate::cart::CartItem;
use crate::ids::OrderId;
use crate::money::{calculate_total, Money};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Frozen copy of the cart at the instant checkout was confirmed.
///
/// Independent of the live cart; clearing the cart never touches it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderSnapshot {
    /// Order identifier.
    pub id: OrderId,
    /// Lines as they were at confirmation.
    pub items: Vec<CartItem>,
    /// Order total.
    pub total: Money,
    /// When checkout was confirmed.
    pub placed_at: DateTime<Utc>,
}

impl OrderSnapshot {
    /// Freeze a list of cart lines.
    pub fn capture(items: Vec<CartItem>) -> Self {
        let total = calculate_total(&items);
        Self {
            id: OrderId::generate(),
            items,
            total,
            placed_at: Utc::now(),
        }
    }

    /// Total units ordered.
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }
}
