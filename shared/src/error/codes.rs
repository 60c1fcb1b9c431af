//! Error codes
//!
//! A single table below defines each code's variant, numeric value and
//! default message. Values are grouped in ranges (see [`super::ErrorCategory`]):
//! 0xxx general, 4xxx cart and ordering flow, 5xxx payment, 6xxx menu,
//! 7xxx table, 9xxx system.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! error_codes {
    ($( $(#[$meta:meta])* $name:ident = $value:literal => $message:literal, )+) => {
        /// Stable numeric error code, serialized as a bare number
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(into = "u16", try_from = "u16")]
        #[repr(u16)]
        pub enum ErrorCode {
            $( $(#[$meta])* $name = $value, )+
        }

        impl ErrorCode {
            pub const ALL: &'static [ErrorCode] = &[$(ErrorCode::$name),+];

            /// Default developer-facing message
            pub const fn message(&self) -> &'static str {
                match self {
                    $( ErrorCode::$name => $message, )+
                }
            }
        }
    };
}

error_codes! {
    ValidationFailed = 2 => "Validation failed",
    NotFound = 3 => "Resource not found",
    /// Well-formed but not acceptable (e.g. an empty update)
    InvalidRequest = 5 => "Invalid request",

    CartEmpty = 4001 => "Cart is empty",
    /// Flow action not allowed in the current state
    InvalidTransition = 4002 => "Action not allowed in the current step",

    PaymentFailed = 5001 => "Payment failed",
    PaymentCancelled = 5002 => "Payment was cancelled",
    PaymentInProgress = 5003 => "A payment is already being processed",

    MenuItemNotFound = 6001 => "Menu item not found",
    MenuItemInvalidPrice = 6002 => "Menu item price is invalid",

    TableNumberMissing = 7001 => "No table number provided",
    TableNumberInvalid = 7002 => "Invalid table number",

    InternalError = 9001 => "Internal error",
}

impl ErrorCode {
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Numeric value with no matching [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unknown error code {0}")]
pub struct InvalidErrorCode(pub u16);

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        ErrorCode::ALL
            .iter()
            .copied()
            .find(|c| c.code() == value)
            .ok_or(InvalidErrorCode(value))
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
