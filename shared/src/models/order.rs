//! Order Model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{CartItem, total_amount, total_quantity};
use crate::table::TableNumber;

/// Kitchen progress of a confirmed order
///
/// Orders are created as `Pending` and never advanced in-process.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Preparing,
    Ready,
    Delivered,
}

impl OrderStatus {
    pub const fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pendente",
            OrderStatus::Preparing => "Preparando",
            OrderStatus::Ready => "Pronto",
            OrderStatus::Delivered => "Entregue",
        }
    }
}

/// Payment method chosen on the checkout sheet
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    #[default]
    Pix,
    Credit,
    Cash,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 3] = [PaymentMethod::Pix, PaymentMethod::Credit, PaymentMethod::Cash];

    pub const fn id(&self) -> &'static str {
        match self {
            PaymentMethod::Pix => "pix",
            PaymentMethod::Credit => "credit",
            PaymentMethod::Cash => "cash",
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Pix => "PIX",
            PaymentMethod::Credit => "Cartão",
            PaymentMethod::Cash => "Dinheiro",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Error returned when parsing an unknown payment method
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown payment method: {0}")]
pub struct UnknownPaymentMethod(pub String);

impl FromStr for PaymentMethod {
    type Err = UnknownPaymentMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PaymentMethod::ALL
            .into_iter()
            .find(|m| m.id().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownPaymentMethod(s.to_string()))
    }
}

/// Confirmed order (display only, never persisted)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Display token such as `#4821`; not a durable reference
    pub id: String,
    pub table_number: TableNumber,
    /// Cart snapshot at payment time
    pub items: Vec<CartItem>,
    pub total: Decimal,
    pub status: OrderStatus,
    pub payment_method: PaymentMethod,
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Snapshot a cart into a pending order; the total is recomputed from the lines
    pub fn from_cart(
        id: impl Into<String>,
        table_number: TableNumber,
        items: Vec<CartItem>,
        payment_method: PaymentMethod,
    ) -> Self {
        let total = total_amount(&items);
        Self {
            id: id.into(),
            table_number,
            items,
            total,
            status: OrderStatus::Pending,
            payment_method,
            created_at: Utc::now(),
        }
    }

    pub fn item_count(&self) -> u32 {
        total_quantity(&self.items)
    }
}
