//! Cart Item Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::MenuItem;

/// A menu item placed in the cart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    #[serde(flatten)]
    pub item: MenuItem,
    /// Always >= 1 while the entry exists
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl CartItem {
    /// First add of a menu item
    pub fn new(item: MenuItem) -> Self {
        Self {
            item,
            quantity: 1,
            notes: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.item.id
    }

    /// price × quantity, saturating at the `Decimal` bounds
    pub fn line_total(&self) -> Decimal {
        self.item.price.saturating_mul(Decimal::from(self.quantity))
    }
}

/// Sum of quantities, saturating at `u32::MAX`
pub fn total_quantity(items: &[CartItem]) -> u32 {
    items
        .iter()
        .fold(0u32, |acc, c| acc.saturating_add(c.quantity))
}

/// Sum of line totals, saturating at the `Decimal` bounds
pub fn total_amount(items: &[CartItem]) -> Decimal {
    items
        .iter()
        .fold(Decimal::ZERO, |acc, c| acc.saturating_add(c.line_total()))
}
