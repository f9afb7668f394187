//! Package breakdown models.
//!
//! This module contains the [`PackageResult`] type and the groups of derived
//! figures it carries: after-fee rates, stipend spreading, contract hours,
//! candidate pay, the package view, client billing, gross margin,
//! orientation and one-time payment costs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{AuditTrace, OrientationType};
use crate::presentation::GaugeReading;

/// A figure expressed at hourly, weekly, monthly and contract granularity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Granular {
    /// Per regular hour.
    pub hourly: Decimal,
    /// Per week.
    pub weekly: Decimal,
    /// Per month (weekly x weeks per month).
    pub monthly: Decimal,
    /// Over the whole contract (weekly x contract weeks).
    pub contract: Decimal,
}

impl Granular {
    /// Sums two figures granularity by granularity.
    pub fn plus(&self, other: &Granular) -> Granular {
        Granular {
            hourly: self.hourly.saturating_add(other.hourly),
            weekly: self.weekly.saturating_add(other.weekly),
            monthly: self.monthly.saturating_add(other.monthly),
            contract: self.contract.saturating_add(other.contract),
        }
    }
}

/// Billing rates after the client's fee is retained.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AfterFeeRates {
    /// The fee fraction applied.
    pub fee: Decimal,
    /// Regular bill rate after fee.
    pub hourly_after_fee: Decimal,
    /// Overtime bill rate after fee.
    pub ot_hourly_after_fee: Decimal,
}

/// Non-taxable stipend totals and their hourly spreading.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StipendBreakdown {
    /// Housing plus meals per day.
    pub daily_non_taxable: Decimal,
    /// Housing plus meals per week.
    pub weekly_non_taxable: Decimal,
    /// Weekly stipend spread per regular hour (NH).
    pub hourly: Decimal,
    /// Housing-only hourly equivalent.
    pub housing_hourly: Decimal,
    /// Meals-only hourly equivalent.
    pub meals_hourly: Decimal,
}

/// Contract hour totals and the daily overtime split.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoursBreakdown {
    /// Regular hours over the contract.
    pub contract_regular: Decimal,
    /// Additional overtime hours over the contract.
    pub contract_overtime: Decimal,
    /// All hours over the contract.
    pub contract_total: Decimal,
    /// Sick-pay hours for the contract.
    pub sick_hours: Decimal,
    /// Regular hours per scheduled day.
    pub daily_regular: Decimal,
    /// Hours per day above the daily overtime threshold.
    pub daily_overtime_excess: Decimal,
}

/// What the candidate is paid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidatePay {
    /// W-2 taxable pay, including additional overtime hours.
    pub taxable: Granular,
    /// Non-taxable stipend.
    pub non_taxable: Granular,
    /// Taxable plus non-taxable.
    pub total: Granular,
}

/// The package breakdown shown to the candidate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageView {
    /// Regular pay rate.
    pub pay_rate: Decimal,
    /// Overtime pay rate, always derived from the regular rate.
    pub ot_pay_rate: Decimal,
    /// Blended daily-overtime rate used when regular hours exceed the standard week.
    pub ot_rate_above_standard: Decimal,
    /// Weekly W-2 pay for regular hours (excludes additional overtime hours).
    pub weekly_on_w2_taxable: Decimal,
    /// Weekly W-2 pay including additional overtime hours.
    pub weekly_taxable_with_ot: Decimal,
    /// Weekly non-taxable stipend.
    pub weekly_stipend_nt: Decimal,
    /// Weekly gross for the package view (excludes additional overtime hours).
    pub weekly_gross: Decimal,
}

/// What the client is billed, after fee.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientBilling {
    /// Per week.
    pub weekly: Decimal,
    /// Per month.
    pub monthly: Decimal,
    /// Over the whole contract.
    pub contract: Decimal,
}

/// Gross margin figures.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrossMargin {
    /// Margin per regular hour.
    pub hourly: Decimal,
    /// Margin per additional overtime hour.
    pub overtime_hourly: Decimal,
    /// Per week.
    pub weekly: Decimal,
    /// Per month.
    pub monthly: Decimal,
    /// Over the whole contract.
    pub contract: Decimal,
}

/// Orientation pay and its amortized cost.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrientationCost {
    /// Billable or non-billable.
    pub orientation_type: OrientationType,
    /// Hourly rate orientation is paid at.
    pub rate: Decimal,
    /// Total orientation pay.
    pub total_pay: Decimal,
    /// Cost per regular hour charged against margin (non-billable only).
    pub hourly: Decimal,
}

/// One-time payments spread per regular contract hour.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OneTimeCosts {
    /// Sign-on bonus per regular hour.
    pub start_bonus_hourly: Decimal,
    /// Completion bonus per regular hour.
    pub complete_bonus_hourly: Decimal,
    /// Background check reimbursement per regular hour.
    pub bcg_hourly: Decimal,
    /// Sick pay per regular hour.
    pub sick_hourly: Decimal,
}

/// Every figure derived from one input record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageBreakdown {
    /// After-fee billing rates.
    pub rates: AfterFeeRates,
    /// Stipend totals and spreading.
    pub stipend: StipendBreakdown,
    /// Contract hours.
    pub hours: HoursBreakdown,
    /// Candidate pay at every granularity.
    pub pay: CandidatePay,
    /// Package view.
    pub package: PackageView,
    /// Client billing.
    pub billing: ClientBilling,
    /// Gross margin.
    pub margin: GrossMargin,
    /// Orientation.
    pub orientation: OrientationCost,
    /// One-time payment spreading.
    pub one_time: OneTimeCosts,
}

/// Derived values the caller writes back into the form's input fields.
///
/// The overtime pay rate is always written; sick hours only when they are
/// accrued automatically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputWriteBack {
    /// Overtime pay rate to show in the `pay_ot` field.
    pub pay_ot: Decimal,
    /// Sick hours to show in the `sick_hours` field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sick_hours: Option<Decimal>,
}

/// The complete result of evaluating one input record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageResult {
    /// All derived figures.
    pub breakdown: PackageBreakdown,
    /// Margin gauge reading.
    pub gauge: GaugeReading,
    /// Values to write back into the input form.
    pub write_back: InputWriteBack,
    /// Audit trace of the rules applied.
    pub audit_trace: AuditTrace,
}
