//! Currency and number formatting.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::CurrencyFormat;

/// Formats an amount as currency: two decimal places rounded half away from
/// zero, grouped thousands, symbol first and a leading minus for negatives.
///
/// # Examples
///
/// ```
/// use pay_package_engine::config::CurrencyFormat;
/// use pay_package_engine::presentation::format_currency;
/// use rust_decimal::Decimal;
///
/// let format = CurrencyFormat::default();
/// assert_eq!(format_currency(Decimal::new(2199600, 2), &format), "$21,996.00");
/// assert_eq!(format_currency(Decimal::new(-1, 0), &format), "-$1.00");
/// ```
pub fn format_currency(amount: Decimal, format: &CurrencyFormat) -> String {
    let (negative, digits) = two_places(amount, format);
    let sign = if negative { "-" } else { "" };
    format!("{}{}{}", sign, format.symbol, digits)
}

/// Formats a plain quantity (hours, multipliers) to two decimal places
/// with the currency's separators but no symbol.
///
/// # Examples
///
/// ```
/// use pay_package_engine::config::CurrencyFormat;
/// use pay_package_engine::presentation::format_number;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_number(Decimal::new(156, 1), &CurrencyFormat::default()), "15.60");
/// ```
pub fn format_number(value: Decimal, format: &CurrencyFormat) -> String {
    let (negative, digits) = two_places(value, format);
    if negative {
        format!("-{}", digits)
    } else {
        digits
    }
}

/// Rounds to two places and renders the magnitude. The returned flag is
/// false for anything that rounds to zero, so `-0.001` never shows as
/// `-0.00`.
fn two_places(value: Decimal, format: &CurrencyFormat) -> (bool, String) {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded < Decimal::ZERO;

    let plain = format!("{:.2}", rounded.abs());
    let (whole, fraction) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

    let digits = format!(
        "{}{}{}",
        group_thousands(whole, &format.thousands_separator),
        format.decimal_separator,
        fraction
    );
    (negative, digits)
}

fn group_thousands(whole: &str, separator: &str) -> String {
    let len = whole.len();
    let mut grouped = String::with_capacity(len + len / 3 * separator.len());
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push_str(separator);
        }
        grouped.push(ch);
    }
    grouped
}
