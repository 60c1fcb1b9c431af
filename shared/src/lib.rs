//! Shared types for the table-side ordering kiosk
//!
//! Domain models, the table-number validator, money formatting and the
//! unified error system used by the `kiosk` crate and its presentation layer.

pub mod error;
pub mod models;
pub mod money;
pub mod table;
pub mod util;

// Re-exports
pub use rust_decimal::Decimal;
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use models::{CartItem, Category, MenuItem, MenuItemUpdate, Order, OrderStatus, PaymentMethod};
pub use table::{TableNumber, TableValidationError, TableValidationResult};
