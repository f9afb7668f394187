//! Weekly W-2 taxable pay.
//!
//! When regular hours run past the standard week, the daily overtime hours
//! across the schedule are paid at the blended overtime rate and the rest
//! at the regular rate. Additional overtime hours are always paid at the
//! overtime rate on top.

use rust_decimal::Decimal;

use super::DailyOvertimeDetection;
use crate::config::EngineConstants;
use crate::models::AuditStep;

/// The result of calculating weekly taxable pay.
#[derive(Debug, Clone)]
pub struct WeeklyTaxableResult {
    /// Regular hours paid at the regular rate.
    pub base_hours: Decimal,
    /// Regular hours paid at the blended daily overtime rate.
    pub daily_overtime_hours: Decimal,
    /// Weekly taxable pay for regular hours.
    pub weekly_on_w2_taxable: Decimal,
    /// Weekly taxable pay including additional overtime hours.
    pub weekly_taxable_with_ot: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates weekly taxable pay.
///
/// # Examples
///
/// ```
/// use pay_package_engine::calculation::{calculate_weekly_taxable, detect_daily_overtime};
/// use pay_package_engine::config::EngineConstants;
/// use rust_decimal::Decimal;
///
/// let constants = EngineConstants::default();
/// let hours = Decimal::new(36, 0);
/// let pay = Decimal::new(30, 0);
/// let days = Decimal::new(3, 0);
/// let detection = detect_daily_overtime(hours, days, pay, Decimal::ZERO, &constants, 1);
///
/// let hours_ot = Decimal::new(4, 0);
/// let result =
///     calculate_weekly_taxable(hours, hours_ot, days, pay, &detection, &constants, 2);
///
/// assert_eq!(result.weekly_on_w2_taxable, Decimal::new(1080, 0));
/// assert_eq!(result.weekly_taxable_with_ot, Decimal::new(1260, 0));
/// ```
pub fn calculate_weekly_taxable(
    hours_regular: Decimal,
    hours_ot: Decimal,
    schedule_days: Decimal,
    pay_regular: Decimal,
    detection: &DailyOvertimeDetection,
    constants: &EngineConstants,
    step_number: u32,
) -> WeeklyTaxableResult {
    let standard = constants.standard_weekly_hours;

    let (base_hours, daily_overtime_hours, weekly_on_w2_taxable) = if hours_regular > standard {
        let daily_overtime_hours = detection.daily_excess_hours * schedule_days;
        let base_hours = hours_regular - daily_overtime_hours;
        let pay = base_hours * pay_regular
            + daily_overtime_hours * detection.ot_rate_above_standard;
        (base_hours, daily_overtime_hours, pay)
    } else {
        (hours_regular, Decimal::ZERO, hours_regular * pay_regular)
    };

    let additional_ot_pay = hours_ot * detection.ot_pay_rate;
    let weekly_taxable_with_ot = weekly_on_w2_taxable + additional_ot_pay;

    let reasoning = if daily_overtime_hours != Decimal::ZERO {
        format!(
            "{} hours x ${} + {} daily overtime hours x ${} + {} overtime hours x ${} = ${}",
            base_hours.normalize(),
            pay_regular.normalize(),
            daily_overtime_hours.normalize(),
            detection.ot_rate_above_standard.round_dp(4).normalize(),
            hours_ot.normalize(),
            detection.ot_pay_rate.normalize(),
            weekly_taxable_with_ot.round_dp(2).normalize()
        )
    } else {
        format!(
            "{} hours x ${} + {} overtime hours x ${} = ${}",
            base_hours.normalize(),
            pay_regular.normalize(),
            hours_ot.normalize(),
            detection.ot_pay_rate.normalize(),
            weekly_taxable_with_ot.round_dp(2).normalize()
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "weekly_taxable".to_string(),
        rule_name: "Weekly Taxable Pay".to_string(),
        input: serde_json::json!({
            "hours_regular": hours_regular.normalize().to_string(),
            "hours_ot": hours_ot.normalize().to_string(),
            "schedule_days": schedule_days.normalize().to_string(),
            "pay_regular": pay_regular.normalize().to_string()
        }),
        output: serde_json::json!({
            "base_hours": base_hours.normalize().to_string(),
            "daily_overtime_hours": daily_overtime_hours.normalize().to_string(),
            "weekly_on_w2_taxable": weekly_on_w2_taxable.normalize().to_string(),
            "additional_ot_pay": additional_ot_pay.normalize().to_string(),
            "weekly_taxable_with_ot": weekly_taxable_with_ot.normalize().to_string()
        }),
        reasoning,
    };

    WeeklyTaxableResult {
        base_hours,
        daily_overtime_hours,
        weekly_on_w2_taxable,
        weekly_taxable_with_ot,
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::detect_daily_overtime;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn weekly(
        hours: &str,
        hours_ot: &str,
        days: &str,
        stipend_hourly: &str,
    ) -> WeeklyTaxableResult {
        let constants = EngineConstants::default();
        let detection = detect_daily_overtime(
            dec(hours),
            dec(days),
            dec("30"),
            dec(stipend_hourly),
            &constants,
            1,
        );
        calculate_weekly_taxable(
            dec(hours),
            dec(hours_ot),
            dec(days),
            dec("30"),
            &detection,
            &constants,
            2,
        )
    }

    #[test]
    fn test_36_hours_paid_at_base_rate() {
        let result = weekly("36", "0", "3", "6.805");

        assert_eq!(result.base_hours, dec("36"));
        assert_eq!(result.daily_overtime_hours, Decimal::ZERO);
        assert_eq!(result.weekly_on_w2_taxable, dec("1080"));
        assert_eq!(result.weekly_taxable_with_ot, dec("1080"));
    }

    #[test]
    fn test_45_hours_splits_daily_overtime() {
        // 9 hours/day over 5 days: 1 excess hour/day, 5 hours at 45 + 6.125
        let result = weekly("45", "0", "5", "6.125");

        assert_eq!(result.base_hours, dec("40"));
        assert_eq!(result.daily_overtime_hours, dec("5"));
        assert_eq!(result.weekly_on_w2_taxable, dec("1455.625"));
        assert_eq!(result.audit_step.output["daily_overtime_hours"], "5");
    }

    #[test]
    fn test_additional_overtime_added_on_top() {
        let result = weekly("36", "4", "3", "6.805");

        assert_eq!(result.weekly_on_w2_taxable, dec("1080"));
        assert_eq!(result.weekly_taxable_with_ot, dec("1260"));
        assert_eq!(result.audit_step.output["additional_ot_pay"], "180");
    }

    #[test]
    fn test_48_hours_over_4_days() {
        // 12 hours/day: 4 excess/day x 4 days = 16 hours at 45 + 6.125
        let result = weekly("48", "0", "4", "6.125");

        assert_eq!(result.base_hours, dec("32"));
        assert_eq!(result.daily_overtime_hours, dec("16"));
        assert_eq!(result.weekly_on_w2_taxable, dec("1778"));
    }

    #[test]
    fn test_zero_hours_is_zero_pay() {
        let result = weekly("0", "0", "5", "0");
        assert_eq!(result.weekly_on_w2_taxable, Decimal::ZERO);
        assert_eq!(result.weekly_taxable_with_ot, Decimal::ZERO);
    }
}
