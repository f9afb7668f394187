//! Client fee lookup and after-fee billing rates.
//!
//! The agency retains a per-client fee fraction from every billed dollar
//! before margin is computed.

use rust_decimal::Decimal;

use crate::config::FeeSchedule;
use crate::models::AuditStep;

/// The result of applying the client fee, including the audit step.
#[derive(Debug, Clone)]
pub struct ClientFeeResult {
    /// The fee fraction applied (zero for unknown clients).
    pub fee: Decimal,
    /// Whether the client was found in the fee schedule.
    pub known_client: bool,
    /// Regular bill rate after fee.
    pub hourly_after_fee: Decimal,
    /// Overtime bill rate after fee.
    pub ot_hourly_after_fee: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Looks up the client's fee and applies it to both bill rates.
///
/// Unknown clients get a fee of zero. A fee outside `[0, 1]` is clamped.
///
/// # Examples
///
/// ```
/// use pay_package_engine::calculation::apply_client_fee;
/// use pay_package_engine::config::FeeSchedule;
/// use rust_decimal::Decimal;
///
/// let fees = FeeSchedule::sample();
/// let result = apply_client_fee("SimpliFI", Decimal::new(50, 0), Decimal::new(75, 0), &fees, 1);
///
/// assert_eq!(result.hourly_after_fee, Decimal::new(4700, 2));
/// assert_eq!(result.ot_hourly_after_fee, Decimal::new(7050, 2));
/// ```
pub fn apply_client_fee(
    client: &str,
    bill_regular: Decimal,
    bill_ot: Decimal,
    fees: &FeeSchedule,
    step_number: u32,
) -> ClientFeeResult {
    let looked_up = fees.fee_for(client);
    let known_client = looked_up.is_some();
    let fee = looked_up
        .unwrap_or(Decimal::ZERO)
        .clamp(Decimal::ZERO, Decimal::ONE);
    let retained = Decimal::ONE - fee;

    let hourly_after_fee = bill_regular * retained;
    let ot_hourly_after_fee = bill_ot * retained;

    let reasoning = if known_client {
        format!(
            "${} x (1 - {}) = ${}",
            bill_regular.normalize(),
            fee.normalize(),
            hourly_after_fee.normalize()
        )
    } else {
        format!(
            "Client '{}' not in fee schedule, no fee retained from ${}",
            client,
            bill_regular.normalize()
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "client_fee".to_string(),
        rule_name: "Client Fee".to_string(),
        input: serde_json::json!({
            "client": client,
            "bill_regular": bill_regular.normalize().to_string(),
            "bill_ot": bill_ot.normalize().to_string()
        }),
        output: serde_json::json!({
            "fee": fee.normalize().to_string(),
            "known_client": known_client,
            "hourly_after_fee": hourly_after_fee.normalize().to_string(),
            "ot_hourly_after_fee": ot_hourly_after_fee.normalize().to_string()
        }),
        reasoning,
    };

    ClientFeeResult {
        fee,
        known_client,
        hourly_after_fee,
        ot_hourly_after_fee,
        audit_step,
    }
}
