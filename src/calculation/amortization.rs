//! Spreading one-time payments over regular contract hours.
//!
//! Bonuses, the background check reimbursement and sick pay are paid once
//! (or accrued once) per contract. To price them against an hourly bill
//! rate each is divided by the contract's regular hours.

use rust_decimal::Decimal;

use super::ratio_or_zero;
use crate::models::AuditStep;

/// One-time payments expressed per regular contract hour.
#[derive(Debug, Clone)]
pub struct OneTimeSpreadResult {
    /// Sign-on bonus per regular hour.
    pub start_bonus_hourly: Decimal,
    /// Completion bonus per regular hour.
    pub complete_bonus_hourly: Decimal,
    /// Background check reimbursement per regular hour.
    pub bcg_hourly: Decimal,
    /// Sick pay per regular hour.
    pub sick_hourly: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// The lump sums a contract pays once.
#[derive(Debug, Clone, Copy, Default)]
pub struct OneTimePayments {
    /// Sign-on bonus.
    pub bonus_start: Decimal,
    /// Completion bonus.
    pub bonus_complete: Decimal,
    /// Background check reimbursement.
    pub bcg_reimbursement: Decimal,
}

/// Spreads each one-time payment, and sick pay, over regular contract hours.
///
/// Every figure is zero when the contract has no regular hours.
///
/// # Examples
///
/// ```
/// use pay_package_engine::calculation::{spread_one_time_payments, OneTimePayments};
/// use rust_decimal::Decimal;
///
/// let payments = OneTimePayments {
///     bonus_start: Decimal::new(1000, 0),
///     bonus_complete: Decimal::new(500, 0),
///     bcg_reimbursement: Decimal::new(100, 0),
/// };
/// let result = spread_one_time_payments(
///     &payments,
///     Decimal::new(15, 0),
///     Decimal::new(30, 0),
///     Decimal::new(500, 0),
///     1,
/// );
///
/// assert_eq!(result.start_bonus_hourly, Decimal::new(2, 0));
/// assert_eq!(result.sick_hourly, Decimal::new(9, 1));
/// ```
pub fn spread_one_time_payments(
    payments: &OneTimePayments,
    sick_hours: Decimal,
    pay_regular: Decimal,
    contract_regular_hours: Decimal,
    step_number: u32,
) -> OneTimeSpreadResult {
    let start_bonus_hourly = ratio_or_zero(payments.bonus_start, contract_regular_hours);
    let complete_bonus_hourly = ratio_or_zero(payments.bonus_complete, contract_regular_hours);
    let bcg_hourly = ratio_or_zero(payments.bcg_reimbursement, contract_regular_hours);
    let sick_pay = sick_hours * pay_regular;
    let sick_hourly = ratio_or_zero(sick_pay, contract_regular_hours);

    let reasoning = if contract_regular_hours > Decimal::ZERO {
        format!(
            "One-time payments spread over {} regular contract hours",
            contract_regular_hours.normalize()
        )
    } else {
        "No regular contract hours, one-time payments not spread".to_string()
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "one_time_spread".to_string(),
        rule_name: "One-Time Payment Spread".to_string(),
        input: serde_json::json!({
            "bonus_start": payments.bonus_start.normalize().to_string(),
            "bonus_complete": payments.bonus_complete.normalize().to_string(),
            "bcg_reimbursement": payments.bcg_reimbursement.normalize().to_string(),
            "sick_pay": sick_pay.normalize().to_string(),
            "contract_regular_hours": contract_regular_hours.normalize().to_string()
        }),
        output: serde_json::json!({
            "start_bonus_hourly": start_bonus_hourly.normalize().to_string(),
            "complete_bonus_hourly": complete_bonus_hourly.normalize().to_string(),
            "bcg_hourly": bcg_hourly.normalize().to_string(),
            "sick_hourly": sick_hourly.normalize().to_string()
        }),
        reasoning,
    };

    OneTimeSpreadResult {
        start_bonus_hourly,
        complete_bonus_hourly,
        bcg_hourly,
        sick_hourly,
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn payments() -> OneTimePayments {
        OneTimePayments {
            bonus_start: dec("1000"),
            bonus_complete: dec("1500"),
            bcg_reimbursement: dec("150"),
        }
    }

    #[test]
    fn test_payments_spread_over_regular_hours() {
        let result = spread_one_time_payments(&payments(), dec("15.6"), dec("30"), dec("468"), 1);

        assert_eq!(result.start_bonus_hourly.round_dp(4), dec("2.1368"));
        assert_eq!(result.complete_bonus_hourly.round_dp(4), dec("3.2051"));
        assert_eq!(result.bcg_hourly.round_dp(4), dec("0.3205"));
        assert_eq!(result.sick_hourly, dec("1"));
    }

    #[test]
    fn test_zero_regular_hours_spreads_nothing() {
        let result = spread_one_time_payments(&payments(), dec("10"), dec("30"), dec("0"), 1);

        assert_eq!(result.start_bonus_hourly, Decimal::ZERO);
        assert_eq!(result.complete_bonus_hourly, Decimal::ZERO);
        assert_eq!(result.bcg_hourly, Decimal::ZERO);
        assert_eq!(result.sick_hourly, Decimal::ZERO);
        assert!(result.audit_step.reasoning.contains("not spread"));
    }

    #[test]
    fn test_no_payments_is_zero() {
        let result = spread_one_time_payments(
            &OneTimePayments::default(),
            dec("0"),
            dec("30"),
            dec("468"),
            1,
        );

        assert_eq!(result.start_bonus_hourly, Decimal::ZERO);
        assert_eq!(result.sick_hourly, Decimal::ZERO);
    }
}
