//! The package input record.
//!
//! This module defines [`PackageInput`], the negotiable terms of a contract
//! that the engine prices, together with the orientation and sick-hour
//! policy selectors.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Largest magnitude accepted for any numeric input field.
///
/// Values beyond it saturate at the bound so every derived product stays
/// inside `Decimal`'s range.
pub const MAX_FIELD_MAGNITUDE: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);

/// Decimal places numeric input fields are rounded to before evaluation.
pub const INPUT_SCALE: u32 = 4;

/// Whether orientation time is billed to the client.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrientationType {
    /// Orientation is billed and paid at the full pay-plus-stipend rate.
    Billable,
    /// Orientation is absorbed as an internal cost at a fixed low rate.
    #[default]
    NonBillable,
}

impl OrientationType {
    /// Reads a typed value: `billable` in any case is Billable, anything
    /// else is NonBillable.
    pub fn from_form(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("billable") {
            OrientationType::Billable
        } else {
            OrientationType::NonBillable
        }
    }

    /// Returns the snake_case name used in forms and audit output.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrientationType::Billable => "billable",
            OrientationType::NonBillable => "non_billable",
        }
    }
}

/// How sick-pay hours are determined.
///
/// # Example
///
/// ```
/// use pay_package_engine::models::SickHours;
///
/// let manual: SickHours = serde_json::from_str(r#"{"mode": "manual", "value": "12"}"#).unwrap();
/// assert!(!manual.is_auto());
///
/// let auto: SickHours = serde_json::from_str(r#"{"mode": "auto"}"#).unwrap();
/// assert!(auto.is_auto());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum SickHours {
    /// Accrue sick hours from total contract hours.
    #[default]
    Auto,
    /// Use a recruiter-entered number of sick hours.
    Manual {
        /// The sick hours for the whole contract.
        value: Decimal,
    },
}

impl SickHours {
    /// Returns true when sick hours are accrued automatically.
    pub fn is_auto(&self) -> bool {
        matches!(self, SickHours::Auto)
    }
}

/// The negotiable terms of a single contract.
///
/// Every field defaults when absent so a partially filled form still
/// evaluates. Deserialization never rejects field content: numbers may
/// arrive as JSON numbers or as typed strings (see
/// [`parse_number`](super::parse_number)), and a value that does not parse
/// is zero. An unrecognised `orientation_type` is NonBillable and an
/// unusable `sick_hours` is auto.
///
/// # Example
///
/// ```
/// use pay_package_engine::models::{OrientationType, PackageInput};
///
/// let input: PackageInput = serde_json::from_str(r#"{
///     "client": "SimpliFI",
///     "bill_regular": "50",
///     "pay_regular": "30",
///     "hours_regular": "36",
///     "contract_weeks": "13"
/// }"#).unwrap();
///
/// assert_eq!(input.client, "SimpliFI");
/// assert_eq!(input.orientation_type, OrientationType::NonBillable);
/// assert!(input.schedule_days.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PackageInput {
    /// Client name, used to look up the fee.
    #[serde(deserialize_with = "super::form::lenient_text")]
    pub client: String,
    /// Client bill rate for regular hours ($/hr).
    #[serde(deserialize_with = "super::form::lenient_decimal")]
    pub bill_regular: Decimal,
    /// Client bill rate for overtime hours ($/hr).
    #[serde(deserialize_with = "super::form::lenient_decimal")]
    pub bill_ot: Decimal,
    /// Candidate W-2 base pay rate ($/hr).
    #[serde(deserialize_with = "super::form::lenient_decimal")]
    pub pay_regular: Decimal,
    /// Standard hours per week.
    #[serde(deserialize_with = "super::form::lenient_decimal")]
    pub hours_regular: Decimal,
    /// Additional overtime hours per week.
    #[serde(deserialize_with = "super::form::lenient_decimal")]
    pub hours_ot: Decimal,
    /// Contract duration in weeks.
    #[serde(deserialize_with = "super::form::lenient_decimal")]
    pub contract_weeks: Decimal,
    /// Daily housing allowance.
    #[serde(deserialize_with = "super::form::lenient_decimal")]
    pub house_daily: Decimal,
    /// Daily meals and incidentals allowance.
    #[serde(deserialize_with = "super::form::lenient_decimal")]
    pub meals_daily: Decimal,
    /// Whether orientation is billed to the client.
    #[serde(deserialize_with = "super::form::lenient_orientation")]
    pub orientation_type: OrientationType,
    /// Orientation hours.
    #[serde(deserialize_with = "super::form::lenient_decimal")]
    pub orientation_hours: Decimal,
    /// Billable orientation pay rate override; ignored when not positive.
    #[serde(deserialize_with = "super::form::lenient_decimal")]
    pub orientation_pay: Decimal,
    /// Sign-on bonus, paid once.
    #[serde(deserialize_with = "super::form::lenient_decimal")]
    pub bonus_start: Decimal,
    /// Completion bonus, paid once.
    #[serde(deserialize_with = "super::form::lenient_decimal")]
    pub bonus_complete: Decimal,
    /// Background check reimbursement, paid once.
    #[serde(deserialize_with = "super::form::lenient_decimal")]
    pub bcg_reimbursement: Decimal,
    /// Work days per week; the configured default applies when absent.
    #[serde(deserialize_with = "super::form::lenient_optional_decimal")]
    pub schedule_days: Option<Decimal>,
    /// Sick-hour policy.
    #[serde(deserialize_with = "super::form::lenient_sick_hours")]
    pub sick_hours: SickHours,
}

impl PackageInput {
    /// Returns a copy with every numeric field rounded to [`INPUT_SCALE`]
    /// places and saturated at [`MAX_FIELD_MAGNITUDE`].
    pub fn bounded(&self) -> Self {
        Self {
            client: self.client.clone(),
            bill_regular: bound(self.bill_regular),
            bill_ot: bound(self.bill_ot),
            pay_regular: bound(self.pay_regular),
            hours_regular: bound(self.hours_regular),
            hours_ot: bound(self.hours_ot),
            contract_weeks: bound(self.contract_weeks),
            house_daily: bound(self.house_daily),
            meals_daily: bound(self.meals_daily),
            orientation_type: self.orientation_type,
            orientation_hours: bound(self.orientation_hours),
            orientation_pay: bound(self.orientation_pay),
            bonus_start: bound(self.bonus_start),
            bonus_complete: bound(self.bonus_complete),
            bcg_reimbursement: bound(self.bcg_reimbursement),
            schedule_days: self.schedule_days.map(bound),
            sick_hours: match self.sick_hours {
                SickHours::Auto => SickHours::Auto,
                SickHours::Manual { value } => SickHours::Manual {
                    value: bound(value),
                },
            },
        }
    }
}

fn bound(value: Decimal) -> Decimal {
    value
        .round_dp(INPUT_SCALE)
        .clamp(-MAX_FIELD_MAGNITUDE, MAX_FIELD_MAGNITUDE)
}
