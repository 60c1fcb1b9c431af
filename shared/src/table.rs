//! Table number validation
//!
//! The kiosk is opened from a per-table QR code carrying `?mesa=N`. The raw
//! parameter is accepted only when it is the canonical decimal form of a
//! positive integer: `^[1-9][0-9]*$`, nothing else.
//!
//! | Input | Result |
//! |---|---|
//! | absent / `""` | missing |
//! | `"0"`, `"-1"`, `"1.5"`, `" 5"`, `"5abc"`, `"007"` | invalid |
//! | `"1"`, `"10"`, `"999"` | valid |

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU32;

use crate::error::{AppError, ErrorCode};

/// Query string key carrying the table number
pub const TABLE_QUERY_KEY: &str = "mesa";

/// A validated, positive table number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TableNumber(NonZeroU32);

impl TableNumber {
    /// `None` for zero
    pub const fn new(n: u32) -> Option<Self> {
        match NonZeroU32::new(n) {
            Some(n) => Some(Self(n)),
            None => None,
        }
    }

    pub const fn get(&self) -> u32 {
        self.0.get()
    }
}

impl fmt::Display for TableNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Why a table parameter was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, thiserror::Error)]
#[serde(rename_all = "lowercase")]
pub enum TableValidationError {
    /// No `mesa` parameter, or an empty one
    #[error("No table number provided")]
    Missing,
    /// Present but not a canonical positive integer
    #[error("Invalid table number")]
    Invalid,
}

impl TableValidationError {
    pub const fn code(&self) -> ErrorCode {
        match self {
            TableValidationError::Missing => ErrorCode::TableNumberMissing,
            TableValidationError::Invalid => ErrorCode::TableNumberInvalid,
        }
    }

    /// pt-BR guidance shown on the validation screen
    pub const fn customer_message(&self) -> &'static str {
        match self {
            TableValidationError::Missing => {
                "Escaneie o QR code da sua mesa para acessar o cardápio."
            }
            TableValidationError::Invalid => {
                "O número da mesa informado é inválido. Por favor, escaneie novamente o QR code."
            }
        }
    }
}

impl From<TableValidationError> for AppError {
    fn from(err: TableValidationError) -> Self {
        AppError::new(err.code())
    }
}

/// Validate the raw value of the table parameter
pub fn validate_table_number(raw: Option<&str>) -> Result<TableNumber, TableValidationError> {
    let raw = match raw {
        None | Some("") => return Err(TableValidationError::Missing),
        Some(raw) => raw,
    };

    let bytes = raw.as_bytes();
    let canonical = matches!(bytes.first(), Some(b'1'..=b'9'))
        && bytes[1..].iter().all(u8::is_ascii_digit);
    if !canonical {
        return Err(TableValidationError::Invalid);
    }

    // Digits-only but wider than u32 is out of range
    raw.parse::<u32>()
        .ok()
        .and_then(TableNumber::new)
        .ok_or(TableValidationError::Invalid)
}

/// Validate the table parameter of a URL query string (`mesa=5&x=y`, leading `?` allowed)
///
/// Values are percent-decoded first; only the first `mesa` key counts.
pub fn validate_query(query: &str) -> Result<TableNumber, TableValidationError> {
    let query = query.strip_prefix('?').unwrap_or(query);
    let value = url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == TABLE_QUERY_KEY)
        .map(|(_, value)| value.into_owned());
    validate_table_number(value.as_deref())
}

/// Flat validation verdict handed to the presentation layer
///
/// Exactly one of `table_number` / `error` is populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableValidationResult {
    pub is_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_number: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<TableValidationError>,
}

impl From<Result<TableNumber, TableValidationError>> for TableValidationResult {
    fn from(result: Result<TableNumber, TableValidationError>) -> Self {
        match result {
            Ok(table) => Self {
                is_valid: true,
                table_number: Some(table.get()),
                error: None,
            },
            Err(error) => Self {
                is_valid: false,
                table_number: None,
                error: Some(error),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(raw: Option<&str>) -> TableValidationResult {
        validate_table_number(raw).into()
    }

    #[test]
    fn test_valid_table_numbers() {
        for (raw, n) in [("1", 1), ("5", 5), ("10", 10), ("100", 100), ("999", 999)] {
            assert_eq!(
                check(Some(raw)),
                TableValidationResult {
                    is_valid: true,
                    table_number: Some(n),
                    error: None,
                },
                "input {:?}",
                raw
            );
        }
    }

    #[test]
    fn test_missing() {
        assert_eq!(validate_table_number(None), Err(TableValidationError::Missing));
        assert_eq!(validate_table_number(Some("")), Err(TableValidationError::Missing));

        let result = check(Some(""));
        assert!(!result.is_valid);
        assert_eq!(result.table_number, None);
        assert_eq!(result.error, Some(TableValidationError::Missing));
    }

    #[test]
    fn test_invalid_inputs() {
        let cases = [
            "0", "00", "007", "-1", "-5", "-100", "+5", "1.5", "2.0", "3.14", " 5", "5 ", "  5",
            "5  ", "   ", "\t5", "5abc", "abc", "invalid", "!@#$", "1e3", "0x10", "١٢",
        ];
        for raw in cases {
            assert_eq!(
                validate_table_number(Some(raw)),
                Err(TableValidationError::Invalid),
                "input {:?}",
                raw
            );
        }
    }

    #[test]
    fn test_out_of_u32_range_is_invalid() {
        assert_eq!(validate_table_number(Some("4294967295")).map(|t| t.get()), Ok(u32::MAX));
        assert_eq!(
            validate_table_number(Some("4294967296")),
            Err(TableValidationError::Invalid)
        );
        assert_eq!(
            validate_table_number(Some("99999999999999999999")),
            Err(TableValidationError::Invalid)
        );
    }

    #[test]
    fn test_every_canonical_number_round_trips() {
        for n in (1u32..2000).chain([65_535, 1_000_000, 4_000_000_000]) {
            let raw = n.to_string();
            assert_eq!(validate_table_number(Some(&raw)).map(|t| t.get()), Ok(n));
        }
    }

    #[test]
    fn test_validate_query() {
        assert_eq!(validate_query("?mesa=5").map(|t| t.get()), Ok(5));
        assert_eq!(validate_query("mesa=12&lang=pt").map(|t| t.get()), Ok(12));
        assert_eq!(validate_query("lang=pt&mesa=3").map(|t| t.get()), Ok(3));
        assert_eq!(validate_query("mesa=4&mesa=abc").map(|t| t.get()), Ok(4));
        assert_eq!(validate_query(""), Err(TableValidationError::Missing));
        assert_eq!(validate_query("?mesa="), Err(TableValidationError::Missing));
        assert_eq!(validate_query("?table=5"), Err(TableValidationError::Missing));
        assert_eq!(validate_query("?mesa=3.14"), Err(TableValidationError::Invalid));
        // Percent-decoded before validation
        assert_eq!(validate_query("?mesa=%205"), Err(TableValidationError::Invalid));
        assert_eq!(validate_query("?mesa=5+"), Err(TableValidationError::Invalid));
        assert_eq!(validate_query("?mesa=%37").map(|t| t.get()), Ok(7));
    }

    #[test]
    fn test_result_serializes_camel_case() {
        let ok = serde_json::to_value(check(Some("5"))).unwrap();
        assert_eq!(ok, serde_json::json!({"isValid": true, "tableNumber": 5}));

        let err = serde_json::to_value(check(Some("3.14"))).unwrap();
        assert_eq!(err, serde_json::json!({"isValid": false, "error": "invalid"}));
    }

    #[test]
    fn test_error_codes() {
        let app: AppError = TableValidationError::Missing.into();
        assert_eq!(app.code, ErrorCode::TableNumberMissing);
        assert_eq!(TableValidationError::Invalid.code(), ErrorCode::TableNumberInvalid);
        assert!(TableValidationError::Invalid.customer_message().contains("inválido"));
    }
}
