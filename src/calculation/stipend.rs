//! Non-taxable stipend spreading.
//!
//! Housing and meals are paid per day. For pricing they are expressed per
//! worked hour, dividing the weekly total by the regular hours but never by
//! more than the standard full-time week. When regular hours run past the
//! standard week the weekly stipend scales up in proportion.

use rust_decimal::Decimal;

use super::ratio_or_zero;
use crate::config::EngineConstants;
use crate::models::AuditStep;

/// The result of spreading the stipend over regular hours.
#[derive(Debug, Clone)]
pub struct StipendSpreadResult {
    /// Housing plus meals per day.
    pub daily_non_taxable: Decimal,
    /// Housing plus meals per week.
    pub weekly_non_taxable: Decimal,
    /// Weekly stipend per regular hour (NH).
    pub hourly: Decimal,
    /// Weekly housing per regular hour.
    pub housing_hourly: Decimal,
    /// Weekly meals per regular hour.
    pub meals_hourly: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// The weekly non-taxable stipend actually paid.
#[derive(Debug, Clone)]
pub struct WeeklyStipendResult {
    /// The weekly stipend amount.
    pub amount: Decimal,
    /// Whether the stipend was scaled past the standard week.
    pub scaled: bool,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Returns the hours a weekly stipend is spread over.
///
/// The standard week when regular hours exceed it, the regular hours when
/// positive, otherwise zero (which spreads to zero).
pub fn stipend_divisor(hours_regular: Decimal, standard_weekly_hours: Decimal) -> Decimal {
    if hours_regular > standard_weekly_hours {
        standard_weekly_hours
    } else if hours_regular > Decimal::ZERO {
        hours_regular
    } else {
        Decimal::ZERO
    }
}

/// Computes the daily and weekly stipend totals and their hourly spreading.
///
/// # Examples
///
/// ```
/// use pay_package_engine::calculation::spread_stipend;
/// use pay_package_engine::config::EngineConstants;
/// use rust_decimal::Decimal;
///
/// let constants = EngineConstants::default();
/// let (house, meals, hours) = (Decimal::new(20, 0), Decimal::new(15, 0), Decimal::new(35, 0));
/// let result = spread_stipend(house, meals, hours, &constants, 1);
///
/// assert_eq!(result.weekly_non_taxable, Decimal::new(245, 0));
/// assert_eq!(result.hourly, Decimal::new(7, 0));
/// assert_eq!(result.housing_hourly, Decimal::new(4, 0));
/// assert_eq!(result.meals_hourly, Decimal::new(3, 0));
/// ```
pub fn spread_stipend(
    house_daily: Decimal,
    meals_daily: Decimal,
    hours_regular: Decimal,
    constants: &EngineConstants,
    step_number: u32,
) -> StipendSpreadResult {
    let days = constants.days_per_week;
    let daily_non_taxable = house_daily + meals_daily;
    let weekly_non_taxable = daily_non_taxable * days;

    let divisor = stipend_divisor(hours_regular, constants.standard_weekly_hours);
    let hourly = ratio_or_zero(weekly_non_taxable, divisor);
    let housing_hourly = ratio_or_zero(house_daily * days, divisor);
    let meals_hourly = ratio_or_zero(meals_daily * days, divisor);

    let reasoning = if divisor > Decimal::ZERO {
        format!(
            "${}/week spread over {} hours = ${}/hr",
            weekly_non_taxable.normalize(),
            divisor.normalize(),
            hourly.round_dp(4).normalize()
        )
    } else {
        "No regular hours, stipend not spread".to_string()
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "stipend_spread".to_string(),
        rule_name: "Stipend Hourly Spread".to_string(),
        input: serde_json::json!({
            "house_daily": house_daily.normalize().to_string(),
            "meals_daily": meals_daily.normalize().to_string(),
            "hours_regular": hours_regular.normalize().to_string()
        }),
        output: serde_json::json!({
            "daily_non_taxable": daily_non_taxable.normalize().to_string(),
            "weekly_non_taxable": weekly_non_taxable.normalize().to_string(),
            "divisor_hours": divisor.normalize().to_string(),
            "hourly": hourly.normalize().to_string(),
            "housing_hourly": housing_hourly.normalize().to_string(),
            "meals_hourly": meals_hourly.normalize().to_string()
        }),
        reasoning,
    };

    StipendSpreadResult {
        daily_non_taxable,
        weekly_non_taxable,
        hourly,
        housing_hourly,
        meals_hourly,
        audit_step,
    }
}

/// Computes the weekly stipend paid for the scheduled regular hours.
///
/// Up to the standard week the flat weekly total is paid; beyond it the
/// total scales as `hours_regular * weekly / standard`.
pub fn calculate_weekly_stipend(
    hours_regular: Decimal,
    weekly_non_taxable: Decimal,
    constants: &EngineConstants,
    step_number: u32,
) -> WeeklyStipendResult {
    let standard = constants.standard_weekly_hours;
    let scaled = hours_regular > standard;

    let amount = if scaled {
        ratio_or_zero(hours_regular * weekly_non_taxable, standard)
    } else {
        weekly_non_taxable
    };

    let reasoning = if scaled {
        format!(
            "{} hours exceeds {} hour week: {} x ${} / {} = ${}",
            hours_regular.normalize(),
            standard.normalize(),
            hours_regular.normalize(),
            weekly_non_taxable.normalize(),
            standard.normalize(),
            amount.normalize()
        )
    } else {
        format!(
            "{} hours within {} hour week, flat ${} stipend",
            hours_regular.normalize(),
            standard.normalize(),
            weekly_non_taxable.normalize()
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "weekly_stipend".to_string(),
        rule_name: "Weekly Stipend".to_string(),
        input: serde_json::json!({
            "hours_regular": hours_regular.normalize().to_string(),
            "weekly_non_taxable": weekly_non_taxable.normalize().to_string()
        }),
        output: serde_json::json!({
            "weekly_stipend": amount.normalize().to_string(),
            "scaled": scaled
        }),
        reasoning,
    };

    WeeklyStipendResult {
        amount,
        scaled,
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

    fn constants() -> EngineConstants {
        EngineConstants::default()
    }

    #[test]
    fn test_divisor_caps_at_standard_week() {
        assert_eq!(stipend_divisor(dec("48"), dec("40")), dec("40"));
        assert_eq!(stipend_divisor(dec("40"), dec("40")), dec("40"));
        assert_eq!(stipend_divisor(dec("36"), dec("40")), dec("36"));
        assert_eq!(stipend_divisor(dec("0"), dec("40")), dec("0"));
        assert_eq!(stipend_divisor(dec("-4"), dec("40")), dec("0"));
    }

    #[test]
    fn test_spread_over_36_hours() {
        let result = spread_stipend(dec("20"), dec("15"), dec("36"), &constants(), 1);

        assert_eq!(result.daily_non_taxable, dec("35"));
        assert_eq!(result.weekly_non_taxable, dec("245"));
        assert_eq!(result.hourly.round_dp(4), dec("6.8056"));
        assert_eq!(result.housing_hourly.round_dp(4), dec("3.8889"));
        assert_eq!(result.meals_hourly.round_dp(4), dec("2.9167"));
    }

    #[test]
    fn test_spread_caps_at_40_hours() {
        let result = spread_stipend(dec("20"), dec("15"), dec("48"), &constants(), 1);

        assert_eq!(result.hourly, dec("6.125"));
        assert_eq!(result.housing_hourly, dec("3.5"));
        assert_eq!(result.meals_hourly, dec("2.625"));
        assert_eq!(result.audit_step.output["divisor_hours"], "40");
    }

    #[test]
    fn test_zero_hours_spreads_to_zero() {
        let result = spread_stipend(dec("20"), dec("15"), dec("0"), &constants(), 1);

        assert_eq!(result.weekly_non_taxable, dec("245"));
        assert_eq!(result.hourly, Decimal::ZERO);
        assert_eq!(result.housing_hourly, Decimal::ZERO);
        assert_eq!(result.meals_hourly, Decimal::ZERO);
        assert!(result.audit_step.reasoning.contains("not spread"));
    }

    #[test]
    fn test_weekly_stipend_flat_within_standard_week() {
        let result = calculate_weekly_stipend(dec("36"), dec("245"), &constants(), 1);
        assert_eq!(result.amount, dec("245"));
        assert!(!result.scaled);

        let result = calculate_weekly_stipend(dec("40"), dec("245"), &constants(), 1);
        assert_eq!(result.amount, dec("245"));
        assert!(!result.scaled);
    }

    #[test]
    fn test_weekly_stipend_scales_past_standard_week() {
        let result = calculate_weekly_stipend(dec("45"), dec("245"), &constants(), 1);
        assert_eq!(result.amount, dec("275.625"));
        assert!(result.scaled);
        assert_eq!(result.audit_step.output["weekly_stipend"], "275.625");
    }
}
