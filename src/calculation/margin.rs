//! Gross margin.
//!
//! Margin is the after-fee bill rate minus every per-hour cost. W-2 pay and
//! the amortized bonuses, sick pay and non-billable orientation carry the
//! burden multiplier; the stipend and background check reimbursement are
//! pass-through costs and do not.

use rust_decimal::Decimal;

use super::overtime_pay_rate;
use crate::config::EngineConstants;
use crate::models::{AuditStep, GrossMargin};

/// Per-regular-hour costs charged against margin.
#[derive(Debug, Clone, Copy, Default)]
pub struct HourlyCosts {
    /// Candidate W-2 base pay rate.
    pub pay_regular: Decimal,
    /// Stipend hourly rate (NH).
    pub stipend_hourly: Decimal,
    /// Background check reimbursement per hour.
    pub bcg_hourly: Decimal,
    /// Sign-on bonus per hour.
    pub start_bonus_hourly: Decimal,
    /// Completion bonus per hour.
    pub complete_bonus_hourly: Decimal,
    /// Sick pay per hour.
    pub sick_hourly: Decimal,
    /// Non-billable orientation per hour (zero when billable).
    pub orientation_hourly: Decimal,
}

/// The result of calculating gross margin.
#[derive(Debug, Clone)]
pub struct MarginResult {
    /// Margin at every granularity.
    pub margin: GrossMargin,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates hourly, overtime and aggregate gross margin.
///
/// # Examples
///
/// ```
/// use pay_package_engine::calculation::{calculate_margin, HourlyCosts};
/// use pay_package_engine::config::EngineConstants;
/// use rust_decimal::Decimal;
///
/// let costs = HourlyCosts {
///     pay_regular: Decimal::new(30, 0),
///     ..HourlyCosts::default()
/// };
/// let result = calculate_margin(
///     Decimal::new(47, 0),
///     Decimal::ZERO,
///     &costs,
///     Decimal::new(36, 0),
///     Decimal::ZERO,
///     Decimal::new(13, 0),
///     &EngineConstants::default(),
///     1,
/// );
///
/// // 47 - 30 x 1.23
/// assert_eq!(result.margin.hourly, Decimal::new(101, 1));
/// ```
#[allow(clippy::too_many_arguments)]
pub fn calculate_margin(
    hourly_after_fee: Decimal,
    ot_hourly_after_fee: Decimal,
    costs: &HourlyCosts,
    hours_regular: Decimal,
    hours_ot: Decimal,
    contract_weeks: Decimal,
    constants: &EngineConstants,
    step_number: u32,
) -> MarginResult {
    let burden = constants.burden_multiplier;

    let burdened_pay = costs.pay_regular * burden;
    let pass_through = costs.stipend_hourly + costs.bcg_hourly;
    let burdened_one_time =
        (costs.start_bonus_hourly + costs.complete_bonus_hourly + costs.sick_hourly) * burden;
    let burdened_orientation = costs.orientation_hourly * burden;

    let hourly =
        hourly_after_fee - burdened_pay - pass_through - burdened_one_time - burdened_orientation;

    let ot_pay_rate = overtime_pay_rate(costs.pay_regular, constants);
    let overtime_hourly = ot_hourly_after_fee - ot_pay_rate * burden;

    let weekly = hourly * hours_regular + overtime_hourly * hours_ot;
    let margin = GrossMargin {
        hourly,
        overtime_hourly,
        weekly,
        monthly: weekly.saturating_mul(constants.weeks_per_month),
        contract: weekly.saturating_mul(contract_weeks),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "gross_margin".to_string(),
        rule_name: "Gross Margin".to_string(),
        input: serde_json::json!({
            "hourly_after_fee": hourly_after_fee.normalize().to_string(),
            "ot_hourly_after_fee": ot_hourly_after_fee.normalize().to_string(),
            "burden": burden.normalize().to_string(),
            "burdened_pay": burdened_pay.normalize().to_string(),
            "pass_through": pass_through.normalize().to_string(),
            "burdened_one_time": burdened_one_time.normalize().to_string(),
            "burdened_orientation": burdened_orientation.normalize().to_string()
        }),
        output: serde_json::json!({
            "hourly": margin.hourly.normalize().to_string(),
            "overtime_hourly": margin.overtime_hourly.normalize().to_string(),
            "weekly": margin.weekly.normalize().to_string(),
            "monthly": margin.monthly.normalize().to_string(),
            "contract": margin.contract.normalize().to_string()
        }),
        reasoning: format!(
            "${} - ${} burdened pay - ${} pass-through - ${} burdened one-time - ${} burdened orientation = ${}/hr",
            hourly_after_fee.normalize(),
            burdened_pay.round_dp(4).normalize(),
            pass_through.round_dp(4).normalize(),
            burdened_one_time.round_dp(4).normalize(),
            burdened_orientation.round_dp(4).normalize(),
            hourly.round_dp(4).normalize()
        ),
    };

    MarginResult {
        margin,
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

    fn margin_for(costs: HourlyCosts) -> GrossMargin {
        calculate_margin(
            dec("47"),
            dec("70.5"),
            &costs,
            dec("36"),
            dec("0"),
            dec("13"),
            &EngineConstants::default(),
            1,
        )
        .margin
    }

    #[test]
    fn test_pay_is_burdened() {
        let margin = margin_for(HourlyCosts {
            pay_regular: dec("30"),
            ..HourlyCosts::default()
        });
        assert_eq!(margin.hourly, dec("10.1"));
    }

    #[test]
    fn test_stipend_and_bcg_are_not_burdened() {
        let margin = margin_for(HourlyCosts {
            stipend_hourly: dec("5"),
            bcg_hourly: dec("1"),
            ..HourlyCosts::default()
        });
        assert_eq!(margin.hourly, dec("41"));
    }

    #[test]
    fn test_bonuses_sick_and_orientation_are_burdened() {
        let margin = margin_for(HourlyCosts {
            start_bonus_hourly: dec("1"),
            complete_bonus_hourly: dec("1"),
            sick_hourly: dec("1"),
            orientation_hourly: dec("1"),
            ..HourlyCosts::default()
        });
        // 47 - 3 x 1.23 - 1 x 1.23
        assert_eq!(margin.hourly, dec("42.08"));
    }

    #[test]
    fn test_overtime_margin() {
        let margin = margin_for(HourlyCosts {
            pay_regular: dec("30"),
            ..HourlyCosts::default()
        });
        // 70.5 - 45 x 1.23
        assert_eq!(margin.overtime_hourly, dec("15.15"));
    }

    #[test]
    fn test_aggregates() {
        let result = calculate_margin(
            dec("47"),
            dec("70.5"),
            &HourlyCosts {
                pay_regular: dec("30"),
                ..HourlyCosts::default()
            },
            dec("36"),
            dec("4"),
            dec("13"),
            &EngineConstants::default(),
            1,
        );

        // 10.1 x 36 + 15.15 x 4
        assert_eq!(result.margin.weekly, dec("424.2"));
        assert_eq!(result.margin.monthly, dec("1696.8"));
        assert_eq!(result.margin.contract, dec("5514.6"));
        assert_eq!(result.audit_step.rule_id, "gross_margin");
    }
}
