//! Audit trace models.
//!
//! Every policy rule the engine applies records an [`AuditStep`] so a
//! recruiter can see why a package prices the way it does.

use serde::{Deserialize, Serialize};

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
///
/// # Example
///
/// ```
/// use pay_package_engine::models::AuditStep;
///
/// let step = AuditStep {
///     step_number: 1,
///     rule_id: "client_fee".to_string(),
///     rule_name: "Client Fee".to_string(),
///     input: serde_json::json!({"client": "SimpliFI", "bill_regular": "50"}),
///     output: serde_json::json!({"fee": "0.06", "hourly_after_fee": "47"}),
///     reasoning: "$50 x (1 - 0.06) = $47".to_string(),
/// };
/// assert_eq!(step.rule_id, "client_fee");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings never stop the calculation; they flag inputs a recruiter
/// probably wants to look at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level ("low", "medium" or "high").
    pub severity: String,
}

impl AuditWarning {
    /// Creates a warning.
    pub fn new(
        code: impl Into<String>,
        message: impl Into<String>,
        severity: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            severity: severity.into(),
        }
    }
}

/// The complete audit trace for a calculation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
}

impl AuditTrace {
    /// Returns the step recorded for a rule, if any.
    pub fn step(&self, rule_id: &str) -> Option<&AuditStep> {
        self.steps.iter().find(|s| s.rule_id == rule_id)
    }

    /// Returns true if a warning with the given code was raised.
    pub fn has_warning(&self, code: &str) -> bool {
        self.warnings.iter().any(|w| w.code == code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_step(rule_id: &str, step_number: u32) -> AuditStep {
        AuditStep {
            step_number,
            rule_id: rule_id.to_string(),
            rule_name: "Sample".to_string(),
            input: serde_json::json!({}),
            output: serde_json::json!({}),
            reasoning: "sample".to_string(),
        }
    }

    #[test]
    fn test_step_lookup_by_rule_id() {
        let trace = AuditTrace {
            steps: vec![sample_step("client_fee", 1), sample_step("gross_margin", 2)],
            warnings: vec![],
        };
        assert_eq!(trace.step("gross_margin").unwrap().step_number, 2);
        assert!(trace.step("missing").is_none());
    }

    #[test]
    fn test_has_warning() {
        let trace = AuditTrace {
            steps: vec![],
            warnings: vec![AuditWarning::new("UNKNOWN_CLIENT", "not found", "low")],
        };
        assert!(trace.has_warning("UNKNOWN_CLIENT"));
        assert!(!trace.has_warning("NEGATIVE_MARGIN"));
    }

    #[test]
    fn test_audit_trace_serialization() {
        let trace = AuditTrace {
            steps: vec![sample_step("client_fee", 1)],
            warnings: vec![],
        };
        let json = serde_json::to_string(&trace).unwrap();
        assert!(json.contains("\"rule_id\":\"client_fee\""));

        let deserialized: AuditTrace = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, trace);
    }
}
