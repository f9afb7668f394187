//! Orientation pay and its cost against margin.
//!
//! Billable orientation is paid at the full pay-plus-stipend rate and billed
//! to the client separately, so it is not charged against regular-hour
//! margin. Non-billable orientation is paid at a fixed low rate and is
//! absorbed by spreading its total over regular contract hours.

use rust_decimal::Decimal;

use super::ratio_or_zero;
use crate::config::EngineConstants;
use crate::models::{AuditStep, OrientationType};

/// The orientation terms of a contract.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrientationTerms {
    /// Billable or non-billable.
    pub orientation_type: OrientationType,
    /// Orientation hours.
    pub hours: Decimal,
    /// Billable-mode pay rate override; ignored unless positive.
    pub pay_override: Decimal,
}

/// The result of pricing orientation.
#[derive(Debug, Clone)]
pub struct OrientationResult {
    /// Hourly rate orientation is paid at.
    pub rate: Decimal,
    /// Total orientation pay.
    pub total_pay: Decimal,
    /// Cost per regular contract hour charged against margin.
    pub hourly: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Prices orientation.
///
/// # Examples
///
/// ```
/// use pay_package_engine::calculation::{calculate_orientation, OrientationTerms};
/// use pay_package_engine::config::EngineConstants;
/// use pay_package_engine::models::OrientationType;
/// use rust_decimal::Decimal;
///
/// let terms = OrientationTerms {
///     orientation_type: OrientationType::NonBillable,
///     hours: Decimal::new(8, 0),
///     pay_override: Decimal::ZERO,
/// };
/// let result = calculate_orientation(
///     &terms,
///     Decimal::new(30, 0),
///     Decimal::ZERO,
///     Decimal::ZERO,
///     Decimal::new(400, 0),
///     &EngineConstants::default(),
///     1,
/// );
///
/// assert_eq!(result.total_pay, Decimal::new(132, 0));
/// assert_eq!(result.hourly, Decimal::new(33, 2));
/// ```
pub fn calculate_orientation(
    terms: &OrientationTerms,
    pay_regular: Decimal,
    housing_hourly: Decimal,
    meals_hourly: Decimal,
    contract_regular_hours: Decimal,
    constants: &EngineConstants,
    step_number: u32,
) -> OrientationResult {
    let (rate, rate_source) = match terms.orientation_type {
        OrientationType::NonBillable => (constants.non_billable_orientation_rate, "fixed"),
        OrientationType::Billable if terms.pay_override > Decimal::ZERO => {
            (terms.pay_override, "override")
        }
        OrientationType::Billable => (
            pay_regular + housing_hourly + meals_hourly,
            "pay_plus_stipend",
        ),
    };

    let total_pay = terms.hours * rate;

    let hourly = match terms.orientation_type {
        OrientationType::NonBillable => ratio_or_zero(total_pay, contract_regular_hours),
        OrientationType::Billable => Decimal::ZERO,
    };

    let reasoning = match terms.orientation_type {
        OrientationType::NonBillable => format!(
            "Non-billable: {} hours x ${} = ${}, absorbed at ${}/regular hour",
            terms.hours.normalize(),
            rate.normalize(),
            total_pay.normalize(),
            hourly.round_dp(4).normalize()
        ),
        OrientationType::Billable => format!(
            "Billable: {} hours x ${} ({}) = ${}, billed separately",
            terms.hours.normalize(),
            rate.round_dp(4).normalize(),
            rate_source,
            total_pay.round_dp(2).normalize()
        ),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "orientation".to_string(),
        rule_name: "Orientation".to_string(),
        input: serde_json::json!({
            "orientation_type": terms.orientation_type.as_str(),
            "orientation_hours": terms.hours.normalize().to_string(),
            "orientation_pay": terms.pay_override.normalize().to_string(),
            "pay_regular": pay_regular.normalize().to_string()
        }),
        output: serde_json::json!({
            "rate": rate.normalize().to_string(),
            "rate_source": rate_source,
            "total_pay": total_pay.normalize().to_string(),
            "hourly": hourly.normalize().to_string()
        }),
        reasoning,
    };

    OrientationResult {
        rate,
        total_pay,
        hourly,
        audit_step,
    }
}
