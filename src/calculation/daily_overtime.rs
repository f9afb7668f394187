//! Overtime pay rate and daily overtime detection.
//!
//! The overtime pay rate is always derived from the regular pay rate. When
//! the weekly regular hours, spread over the scheduled days, put a day past
//! the daily threshold, the excess is daily overtime (California-style).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::EngineConstants;
use crate::models::AuditStep;

/// The result of detecting daily overtime in a weekly schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyOvertimeDetection {
    /// Overtime pay rate (regular rate x overtime multiplier).
    pub ot_pay_rate: Decimal,
    /// Regular hours per scheduled day.
    pub daily_regular_hours: Decimal,
    /// Hours per day above the daily threshold (never negative).
    pub daily_excess_hours: Decimal,
    /// Blended rate for daily overtime hours when the week runs past the
    /// standard week (overtime rate plus stipend hourly); zero otherwise.
    pub ot_rate_above_standard: Decimal,
    /// The audit step recording this detection.
    pub audit_step: AuditStep,
}

/// Returns the overtime pay rate for a regular pay rate.
///
/// # Examples
///
/// ```
/// use pay_package_engine::calculation::overtime_pay_rate;
/// use pay_package_engine::config::EngineConstants;
/// use rust_decimal::Decimal;
///
/// let rate = overtime_pay_rate(Decimal::new(30, 0), &EngineConstants::default());
/// assert_eq!(rate, Decimal::new(45, 0));
/// ```
pub fn overtime_pay_rate(pay_regular: Decimal, constants: &EngineConstants) -> Decimal {
    pay_regular * constants.overtime_multiplier
}

/// Detects daily overtime in a weekly schedule.
///
/// Hours per day are the weekly regular hours divided by the scheduled days
/// (at least one).
///
/// # Examples
///
/// ## Four 12-hour shifts
///
/// ```
/// use pay_package_engine::calculation::detect_daily_overtime;
/// use pay_package_engine::config::EngineConstants;
/// use rust_decimal::Decimal;
///
/// let result = detect_daily_overtime(
///     Decimal::new(48, 0),
///     Decimal::new(4, 0),
///     Decimal::new(30, 0),
///     Decimal::new(6125, 3),
///     &EngineConstants::default(),
///     1,
/// );
///
/// assert_eq!(result.daily_regular_hours, Decimal::new(12, 0));
/// assert_eq!(result.daily_excess_hours, Decimal::new(4, 0));
/// assert_eq!(result.ot_rate_above_standard, Decimal::new(51125, 3));
/// ```
pub fn detect_daily_overtime(
    hours_regular: Decimal,
    schedule_days: Decimal,
    pay_regular: Decimal,
    stipend_hourly: Decimal,
    constants: &EngineConstants,
    step_number: u32,
) -> DailyOvertimeDetection {
    let threshold = constants.daily_overtime_threshold;
    let ot_pay_rate = overtime_pay_rate(pay_regular, constants);

    let daily_regular_hours = hours_regular / schedule_days.max(Decimal::ONE);
    let daily_excess_hours = (daily_regular_hours - threshold).max(Decimal::ZERO);

    let ot_rate_above_standard = if hours_regular > constants.standard_weekly_hours {
        ot_pay_rate + stipend_hourly
    } else {
        Decimal::ZERO
    };

    let reasoning = if daily_excess_hours > Decimal::ZERO {
        format!(
            "{} hours/day exceeds {} hour threshold by {} hours, triggering daily overtime",
            daily_regular_hours.round_dp(4).normalize(),
            threshold.normalize(),
            daily_excess_hours.round_dp(4).normalize()
        )
    } else if daily_regular_hours == threshold {
        format!(
            "{} hours/day equals {} hour threshold, no daily overtime",
            daily_regular_hours.normalize(),
            threshold.normalize()
        )
    } else {
        format!(
            "{} hours/day is under {} hour threshold, no daily overtime",
            daily_regular_hours.round_dp(4).normalize(),
            threshold.normalize()
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "daily_overtime_detection".to_string(),
        rule_name: "Daily Overtime Detection".to_string(),
        input: serde_json::json!({
            "hours_regular": hours_regular.normalize().to_string(),
            "schedule_days": schedule_days.normalize().to_string(),
            "threshold": threshold.normalize().to_string(),
            "pay_regular": pay_regular.normalize().to_string()
        }),
        output: serde_json::json!({
            "ot_pay_rate": ot_pay_rate.normalize().to_string(),
            "daily_regular_hours": daily_regular_hours.normalize().to_string(),
            "daily_excess_hours": daily_excess_hours.normalize().to_string(),
            "ot_rate_above_standard": ot_rate_above_standard.normalize().to_string()
        }),
        reasoning,
    };

    DailyOvertimeDetection {
        ot_pay_rate,
        daily_regular_hours,
        daily_excess_hours,
        ot_rate_above_standard,
        audit_step,
    }
}
