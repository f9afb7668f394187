//! Guarded division used wherever a rate is spread over hours.

use rust_decimal::Decimal;

/// Largest magnitude a spread rate can take.
///
/// Spreading over a vanishingly small number of hours saturates here so the
/// weekly and contract products built on the rate stay representable.
pub const RATIO_LIMIT: Decimal = Decimal::from_parts(3_567_587_328, 232, 0, false, 0);

/// Divides `numerator` by `divisor`, yielding zero unless the divisor is
/// strictly positive. The quotient saturates at [`RATIO_LIMIT`].
///
/// # Examples
///
/// ```
/// use pay_package_engine::calculation::ratio_or_zero;
/// use rust_decimal::Decimal;
///
/// assert_eq!(ratio_or_zero(Decimal::new(245, 0), Decimal::new(35, 0)), Decimal::new(7, 0));
/// assert_eq!(ratio_or_zero(Decimal::new(245, 0), Decimal::ZERO), Decimal::ZERO);
/// assert_eq!(ratio_or_zero(Decimal::new(245, 0), Decimal::new(-5, 0)), Decimal::ZERO);
/// ```
pub fn ratio_or_zero(numerator: Decimal, divisor: Decimal) -> Decimal {
    if divisor <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    match numerator.checked_div(divisor) {
        Some(quotient) => quotient.clamp(-RATIO_LIMIT, RATIO_LIMIT),
        None if numerator.is_sign_negative() => -RATIO_LIMIT,
        None => RATIO_LIMIT,
    }
}
