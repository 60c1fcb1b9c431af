//! Data models
//!
//! Shared between the kiosk stores and the presentation layer.
//! Prices are `rust_decimal::Decimal` in BRL.

pub mod cart;
pub mod category;
pub mod menu_item;
pub mod order;

// Re-exports
pub use cart::*;
pub use category::*;
pub use menu_item::*;
pub use order::*;
