//! Money helpers
//!
//! Amounts are kept as `Decimal` end to end and only rounded for display.
//! Display follows the fixed pt-BR convention: `R$ 1.234,56`.

use rust_decimal::prelude::*;

/// Rounding strategy for monetary values (2 decimal places, half-up)
pub const DECIMAL_PLACES: u32 = 2;

/// Upper bound for a single menu price (1,000,000.00)
pub const MAX_PRICE: Decimal = Decimal::from_parts(100_000_000, 0, 0, false, 2);

const CURRENCY_SYMBOL: &str = "R$";

/// Round to cents, half away from zero
#[inline]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Format an amount as Brazilian Real
///
/// ```
/// use shared::money::format_brl;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_brl(Decimal::new(3290, 2)), "R$ 32,90");
/// assert_eq!(format_brl(Decimal::new(123456789, 2)), "R$ 1.234.567,89");
/// ```
pub fn format_brl(amount: Decimal) -> String {
    let rounded = round_money(amount);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    let plain = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

    format!(
        "{sign}{CURRENCY_SYMBOL} {},{frac_part}",
        group_thousands(int_part)
    )
}

/// Insert `.` every three digits from the right
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}
