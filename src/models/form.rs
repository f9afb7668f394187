//! Lenient form-field parsing.
//!
//! The calculator is driven from a form whose fields arrive as raw
//! strings. A field that is missing or does not parse is treated as zero
//! (or its stated default) so the calculator always produces a result.

use std::collections::HashMap;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};

use super::input::{INPUT_SCALE, MAX_FIELD_MAGNITUDE, OrientationType, PackageInput, SickHours};

/// Raw form fields keyed by field name.
///
/// # Example
///
/// ```
/// use pay_package_engine::models::FormFields;
/// use rust_decimal::Decimal;
///
/// let form = FormFields::from_pairs([
///     ("client", "SimpliFI"),
///     ("bill_regular", "$1,050.50"),
///     ("hours_regular", "thirty-six"),
/// ]);
/// let input = form.to_input();
///
/// assert_eq!(input.bill_regular, Decimal::new(105050, 2));
/// assert_eq!(input.hours_regular, Decimal::ZERO);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormFields {
    fields: HashMap<String, String>,
}

impl FormFields {
    /// Creates an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a form from `(name, value)` pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            fields: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Sets a field, returning the updated form.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Returns the raw value of a field.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Returns a numeric field, or zero when missing or unparsable.
    pub fn number(&self, name: &str) -> Decimal {
        self.get(name).and_then(parse_number).unwrap_or(Decimal::ZERO)
    }

    /// Converts the form into a typed input record.
    ///
    /// `pay_ot` is ignored: the overtime pay rate is always derived.
    ///
    /// `auto_sick_calc` must be sent explicitly to turn accrual off. When
    /// the field is absent sick hours accrue automatically, so a client
    /// posting an HTML form has to send `"false"` for an unchecked box
    /// rather than omit it.
    pub fn to_input(&self) -> PackageInput {
        let orientation_type = self
            .get("orientation_type")
            .map(OrientationType::from_form)
            .unwrap_or_default();

        let sick_hours = match self.get("auto_sick_calc") {
            Some(flag) if !is_checked(flag) => SickHours::Manual {
                value: self.number("sick_hours"),
            },
            _ => SickHours::Auto,
        };

        PackageInput {
            client: self.get("client").unwrap_or_default().trim().to_string(),
            bill_regular: self.number("bill_regular"),
            bill_ot: self.number("bill_ot"),
            pay_regular: self.number("pay_regular"),
            hours_regular: self.number("hours_regular"),
            hours_ot: self.number("hours_ot"),
            contract_weeks: self.number("contract_weeks"),
            house_daily: self.number("house_daily"),
            meals_daily: self.number("meals_daily"),
            orientation_type,
            orientation_hours: self.number("orientation_hours"),
            orientation_pay: self.number("orientation_pay"),
            bonus_start: self.number("bonus_start"),
            bonus_complete: self.number("bonus_complete"),
            bcg_reimbursement: self.number("bcg_reimbursement"),
            schedule_days: self.get("schedule_days").and_then(parse_number),
            sick_hours,
        }
    }
}

fn is_checked(flag: &str) -> bool {
    matches!(
        flag.trim().to_ascii_lowercase().as_str(),
        "true" | "on" | "1" | "yes" | "checked"
    )
}

/// Parses a user-typed number.
///
/// Currency symbols, thousands separators and whitespace are ignored, and
/// a leading numeric prefix is accepted (`"36 hrs"` parses as 36). A number
/// too large for `Decimal` saturates at [`MAX_FIELD_MAGNITUDE`].
pub fn parse_number(raw: &str) -> Option<Decimal> {
    let cleaned: String = raw
        .chars()
        .filter(|c| !matches!(c, '$' | ',' | '_') && !c.is_whitespace())
        .collect();

    if let Ok(value) = Decimal::from_str(&cleaned) {
        return Some(value);
    }

    let prefix = numeric_prefix(&cleaned);
    if prefix.is_empty() {
        return None;
    }
    Some(Decimal::from_str(prefix).unwrap_or_else(|_| saturate(prefix)))
}

/// Resolves a digit string `Decimal` cannot hold: an oversized whole part
/// saturates, an overlong fraction is truncated to [`INPUT_SCALE`] places.
fn saturate(prefix: &str) -> Decimal {
    let (negative, unsigned) = match prefix.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, prefix.trim_start_matches('+')),
    };
    let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));

    let magnitude = if whole.trim_start_matches('0').is_empty() {
        let kept = &fraction[..fraction.len().min(INPUT_SCALE as usize)];
        Decimal::new(kept.parse().unwrap_or(0), kept.len() as u32)
    } else {
        MAX_FIELD_MAGNITUDE
    };

    if negative { -magnitude } else { magnitude }
}

fn numeric_prefix(s: &str) -> &str {
    let bytes = s.as_bytes();
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_point = false;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }

    while end < bytes.len() {
        match bytes[end] {
            b'0'..=b'9' => seen_digit = true,
            b'.' if !seen_point => seen_point = true,
            _ => break,
        }
        end += 1;
    }

    if !seen_digit {
        return "";
    }
    s[..end].trim_end_matches('.')
}

/// Reads a JSON numeric field leniently.
///
/// Strings go through [`parse_number`], numbers are taken as they are, and
/// anything else (including an unparsable string) is zero.
pub(crate) fn lenient_decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value_number(&value).unwrap_or(Decimal::ZERO))
}

/// Like [`lenient_decimal`], but an unusable value is `None`.
pub(crate) fn lenient_optional_decimal<'de, D>(
    deserializer: D,
) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value_number(&value))
}

pub(crate) fn lenient_orientation<'de, D>(deserializer: D) -> Result<OrientationType, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(raw) => OrientationType::from_form(&raw),
        _ => OrientationType::NonBillable,
    })
}

/// Reads the sick-hour policy; anything other than a manual object is auto.
pub(crate) fn lenient_sick_hours<'de, D>(deserializer: D) -> Result<SickHours, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let manual = value
        .get("mode")
        .and_then(Value::as_str)
        .is_some_and(|mode| mode.trim().eq_ignore_ascii_case("manual"));

    Ok(if manual {
        SickHours::Manual {
            value: value
                .get("value")
                .and_then(value_number)
                .unwrap_or(Decimal::ZERO),
        }
    } else {
        SickHours::Auto
    })
}

pub(crate) fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => text,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    })
}

fn value_number(value: &Value) -> Option<Decimal> {
    match value {
        Value::String(raw) => parse_number(raw),
        Value::Number(n) => json_number(n),
        _ => None,
    }
}

fn json_number(n: &Number) -> Option<Decimal> {
    let text = n.to_string();
    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .ok()
        .or_else(|| {
            n.as_f64().map(|f| {
                if f.abs() < 1.0 {
                    Decimal::ZERO
                } else if f < 0.0 {
                    -MAX_FIELD_MAGNITUDE
                } else {
                    MAX_FIELD_MAGNITUDE
                }
            })
        })
}
