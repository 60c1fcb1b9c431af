//! Error handling shared by the kiosk crates
//!
//! Every failure that reaches the console is an [`AppError`]: a numeric
//! [`ErrorCode`], a message and optional details. The code's range gives its
//! [`ErrorCategory`].
//!
//! ```
//! use shared::error::{AppError, ErrorCategory, ErrorCode};
//!
//! let err = AppError::new(ErrorCode::TableNumberMissing);
//! assert_eq!(err.code.code(), 7001);
//! assert_eq!(err.code.category(), ErrorCategory::Table);
//!
//! let err = AppError::validation("name must not be empty").with_detail("field", "name");
//! assert!(err.detail("field").is_some());
//! ```

mod category;
mod codes;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult};
