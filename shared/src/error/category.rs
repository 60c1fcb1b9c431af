//! Error categories

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Domain an [`ErrorCode`] belongs to, derived from its numeric range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// 0xxx
    General,
    /// 4xxx: cart contents and flow transitions
    Ordering,
    /// 5xxx
    Payment,
    /// 6xxx
    Menu,
    /// 7xxx: table parameter
    Table,
    /// Anything else, 9xxx in practice
    System,
}

impl ErrorCategory {
    pub const fn from_code(code: u16) -> Self {
        match code / 1000 {
            0 => Self::General,
            4 => Self::Ordering,
            5 => Self::Payment,
            6 => Self::Menu,
            7 => Self::Table,
            _ => Self::System,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Ordering => "ordering",
            Self::Payment => "payment",
            Self::Menu => "menu",
            Self::Table => "table",
            Self::System => "system",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorCode {
    pub const fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranges() {
        assert_eq!(ErrorCategory::from_code(5), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(999), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(4999), ErrorCategory::Ordering);
        assert_eq!(ErrorCategory::from_code(7002), ErrorCategory::Table);
        assert_eq!(ErrorCategory::from_code(1500), ErrorCategory::System);
        assert_eq!(ErrorCategory::from_code(9001), ErrorCategory::System);
    }

    #[test]
    fn test_every_code_has_its_range_category() {
        use ErrorCategory::*;
        for code in ErrorCode::ALL {
            let expected = match code.code() {
                0..=999 => General,
                4000..=4999 => Ordering,
                5000..=5999 => Payment,
                6000..=6999 => Menu,
                7000..=7999 => Table,
                _ => System,
            };
            assert_eq!(code.category(), expected, "{code:?}");
        }
        assert_eq!(ErrorCode::PaymentInProgress.category().to_string(), "payment");
    }
}
