//! Client billing after fee.

use rust_decimal::Decimal;

use crate::config::EngineConstants;
use crate::models::{AuditStep, ClientBilling};

/// The result of calculating client billing.
#[derive(Debug, Clone)]
pub struct BillingResult {
    /// Billing at weekly, monthly and contract granularity.
    pub billing: ClientBilling,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates what the client is billed after fee.
///
/// # Examples
///
/// ```
/// use pay_package_engine::calculation::calculate_billing;
/// use pay_package_engine::config::EngineConstants;
/// use rust_decimal::Decimal;
///
/// let result = calculate_billing(
///     Decimal::new(36, 0),
///     Decimal::ZERO,
///     Decimal::new(47, 0),
///     Decimal::ZERO,
///     Decimal::new(13, 0),
///     &EngineConstants::default(),
///     1,
/// );
///
/// assert_eq!(result.billing.weekly, Decimal::new(1692, 0));
/// assert_eq!(result.billing.contract, Decimal::new(21996, 0));
/// ```
pub fn calculate_billing(
    hours_regular: Decimal,
    hours_ot: Decimal,
    hourly_after_fee: Decimal,
    ot_hourly_after_fee: Decimal,
    contract_weeks: Decimal,
    constants: &EngineConstants,
    step_number: u32,
) -> BillingResult {
    let weekly = hours_regular * hourly_after_fee + hours_ot * ot_hourly_after_fee;
    let billing = ClientBilling {
        weekly,
        monthly: weekly.saturating_mul(constants.weeks_per_month),
        contract: weekly.saturating_mul(contract_weeks),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "client_billing".to_string(),
        rule_name: "Client Billing".to_string(),
        input: serde_json::json!({
            "hours_regular": hours_regular.normalize().to_string(),
            "hours_ot": hours_ot.normalize().to_string(),
            "hourly_after_fee": hourly_after_fee.normalize().to_string(),
            "ot_hourly_after_fee": ot_hourly_after_fee.normalize().to_string(),
            "contract_weeks": contract_weeks.normalize().to_string()
        }),
        output: serde_json::json!({
            "weekly": billing.weekly.normalize().to_string(),
            "monthly": billing.monthly.normalize().to_string(),
            "contract": billing.contract.normalize().to_string()
        }),
        reasoning: format!(
            "{} hours x ${} + {} overtime hours x ${} = ${}/week",
            hours_regular.normalize(),
            hourly_after_fee.normalize(),
            hours_ot.normalize(),
            ot_hourly_after_fee.normalize(),
            weekly.normalize()
        ),
    };

    BillingResult {
        billing,
        audit_step,
    }
}
