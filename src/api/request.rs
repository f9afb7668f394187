//! Request types for the pay package API.
//!
//! `/calculate` takes a typed [`PackageInput`](crate::models::PackageInput)
//! directly. `/calculate/form` takes the raw field values of the calculator
//! form, defined here.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::FormFields;

/// Request body for the `/calculate/form` endpoint.
///
/// A flat JSON object of form field values. Browsers and scripts send a mix
/// of strings, numbers and booleans, so any scalar is accepted and turned
/// into the string the form would hold; `null`, arrays and objects are
/// treated as empty fields.
///
/// # Example
///
/// ```
/// use pay_package_engine::api::FormRequest;
///
/// let request: FormRequest = serde_json::from_str(
///     r#"{"client": "SimpliFI", "bill_regular": 50, "auto_sick_calc": true}"#,
/// ).unwrap();
/// let fields = request.into_fields();
///
/// assert_eq!(fields.get("bill_regular"), Some("50"));
/// assert_eq!(fields.get("auto_sick_calc"), Some("true"));
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormRequest {
    fields: HashMap<String, Value>,
}

impl FormRequest {
    /// Converts the request into raw form fields.
    pub fn into_fields(self) -> FormFields {
        FormFields::from_pairs(
            self.fields
                .into_iter()
                .filter_map(|(name, value)| field_text(value).map(|text| (name, text))),
        )
    }
}

fn field_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalars_become_strings() {
        let request: FormRequest = serde_json::from_str(
            r#"{"client": "Direct", "hours_regular": 36.5, "auto_sick_calc": false}"#,
        )
        .unwrap();
        let fields = request.into_fields();

        assert_eq!(fields.get("client"), Some("Direct"));
        assert_eq!(fields.get("hours_regular"), Some("36.5"));
        assert_eq!(fields.get("auto_sick_calc"), Some("false"));
    }

    #[test]
    fn test_null_and_nested_values_are_dropped() {
        let request: FormRequest =
            serde_json::from_str(r#"{"bill_regular": null, "meals_daily": [1, 2]}"#).unwrap();
        let fields = request.into_fields();

        assert_eq!(fields.get("bill_regular"), None);
        assert_eq!(fields.get("meals_daily"), None);
    }
}
