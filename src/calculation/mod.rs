//! Calculation logic for the pay package engine.
//!
//! This module contains one function per pricing rule: client fee
//! deduction, stipend spreading, contract hours and sick accrual, one-time
//! payment amortization, orientation, daily overtime detection, weekly
//! taxable pay, client billing and gross margin. [`compute`] runs them in
//! order over one input record.

mod amortization;
mod billing;
mod client_fee;
mod contract_hours;
mod daily_overtime;
mod engine;
mod margin;
mod orientation;
mod ratio;
mod stipend;
mod weekly_taxable;

pub use amortization::{OneTimePayments, OneTimeSpreadResult, spread_one_time_payments};
pub use billing::{BillingResult, calculate_billing};
pub use client_fee::{ClientFeeResult, apply_client_fee};
pub use contract_hours::{ContractHoursResult, calculate_contract_hours};
pub use daily_overtime::{DailyOvertimeDetection, detect_daily_overtime, overtime_pay_rate};
pub use engine::compute;
pub use margin::{HourlyCosts, MarginResult, calculate_margin};
pub use orientation::{OrientationResult, OrientationTerms, calculate_orientation};
pub use ratio::{RATIO_LIMIT, ratio_or_zero};
pub use stipend::{
    StipendSpreadResult, WeeklyStipendResult, calculate_weekly_stipend, spread_stipend,
    stipend_divisor,
};
pub use weekly_taxable::{WeeklyTaxableResult, calculate_weekly_taxable};
