//! Core data models for the pay package engine.
//!
//! This module contains the input record, lenient form parsing, the
//! derived breakdown and the audit trace types.

mod audit;
mod breakdown;
mod form;
mod input;

pub use audit::{AuditStep, AuditTrace, AuditWarning};
pub use breakdown::{
    AfterFeeRates, CandidatePay, ClientBilling, Granular, GrossMargin, HoursBreakdown,
    InputWriteBack, OneTimeCosts, OrientationCost, PackageBreakdown, PackageResult, PackageView,
    StipendBreakdown,
};
pub use form::{FormFields, parse_number};
pub use input::{
    INPUT_SCALE, MAX_FIELD_MAGNITUDE, OrientationType, PackageInput, SickHours,
};
