//! Contract hour totals and sick-hour accrual.

use rust_decimal::Decimal;

use super::ratio_or_zero;
use crate::config::EngineConstants;
use crate::models::{AuditStep, SickHours};

/// Contract hour totals and the sick hours they accrue.
#[derive(Debug, Clone)]
pub struct ContractHoursResult {
    /// Regular hours over the contract.
    pub regular: Decimal,
    /// Additional overtime hours over the contract.
    pub overtime: Decimal,
    /// All hours over the contract.
    pub total: Decimal,
    /// Sick-pay hours for the contract.
    pub sick_hours: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Totals contract hours and determines sick hours.
///
/// In [`SickHours::Auto`] mode one hour of sick pay accrues per
/// `sick_accrual_hours` worked (regular plus overtime); in manual mode the
/// entered value is used as is.
///
/// # Examples
///
/// ```
/// use pay_package_engine::calculation::calculate_contract_hours;
/// use pay_package_engine::config::EngineConstants;
/// use pay_package_engine::models::SickHours;
/// use rust_decimal::Decimal;
///
/// let result = calculate_contract_hours(
///     Decimal::new(36, 0),
///     Decimal::ZERO,
///     Decimal::new(13, 0),
///     &SickHours::Auto,
///     &EngineConstants::default(),
///     1,
/// );
///
/// assert_eq!(result.regular, Decimal::new(468, 0));
/// assert_eq!(result.sick_hours, Decimal::new(156, 1));
/// ```
pub fn calculate_contract_hours(
    hours_regular: Decimal,
    hours_ot: Decimal,
    contract_weeks: Decimal,
    sick: &SickHours,
    constants: &EngineConstants,
    step_number: u32,
) -> ContractHoursResult {
    let regular = hours_regular * contract_weeks;
    let overtime = hours_ot * contract_weeks;
    let total = regular + overtime;

    let (sick_hours, reasoning) = match sick {
        SickHours::Auto => {
            let accrued = ratio_or_zero(total, constants.sick_accrual_hours);
            (
                accrued,
                format!(
                    "{} contract hours / {} = {} sick hours",
                    total.normalize(),
                    constants.sick_accrual_hours.normalize(),
                    accrued.round_dp(4).normalize()
                ),
            )
        }
        SickHours::Manual { value } => (
            *value,
            format!("Using entered sick hours {}", value.normalize()),
        ),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "contract_hours".to_string(),
        rule_name: "Contract Hours and Sick Accrual".to_string(),
        input: serde_json::json!({
            "hours_regular": hours_regular.normalize().to_string(),
            "hours_ot": hours_ot.normalize().to_string(),
            "contract_weeks": contract_weeks.normalize().to_string(),
            "sick_mode": if sick.is_auto() { "auto" } else { "manual" }
        }),
        output: serde_json::json!({
            "contract_regular_hours": regular.normalize().to_string(),
            "contract_overtime_hours": overtime.normalize().to_string(),
            "contract_total_hours": total.normalize().to_string(),
            "sick_hours": sick_hours.normalize().to_string()
        }),
        reasoning,
    };

    ContractHoursResult {
        regular,
        overtime,
        total,
        sick_hours,
        audit_step,
    }
}
