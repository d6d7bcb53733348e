//! Validation outcome entities.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

pub const VALIDATION_FAILED_CODE: &str = "VALIDATION_FAILED";
pub const VALIDATION_FAILED_MESSAGE: &str = "One or more validation rules failed";

/// Aggregate verdict for a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ValidationStatus {
    Pending,
    Passed,
    Failed,
    Error,
}

impl ValidationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationStatus::Pending => "PENDING",
            ValidationStatus::Passed => "PASSED",
            ValidationStatus::Failed => "FAILED",
            ValidationStatus::Error => "ERROR",
        }
    }
}

impl fmt::Display for ValidationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Verdict of a single rule against a single transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RuleStatus {
    Passed,
    Failed,
    Skipped,
}

impl RuleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleStatus::Passed => "PASSED",
            RuleStatus::Failed => "FAILED",
            RuleStatus::Skipped => "SKIPPED",
        }
    }
}

impl fmt::Display for RuleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleResult {
    pub rule_id: String,
    pub rule_name: String,
    pub status: RuleStatus,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,
    pub processed_at: DateTime<Utc>,
}

/// Result of validating one transaction against the rule catalog.
///
/// Built once per call and never mutated after it is handed out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub id: String,
    pub transaction_id: String,
    pub status: ValidationStatus,
    pub rules: Vec<RuleResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    pub processed_at: DateTime<Utc>,
    /// Serialized as whole nanoseconds.
    #[serde(with = "duration_nanos")]
    pub processing_time: Duration,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub metadata: HashMap<String, serde_json::Value>,
}

impl ValidationResult {
    pub fn is_failed(&self) -> bool {
        self.status == ValidationStatus::Failed
    }

    pub fn rule(&self, rule_id: &str) -> Option<&RuleResult> {
        self.rules.iter().find(|rule| rule.rule_id == rule_id)
    }
}

mod duration_nanos {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let nanos = u64::try_from(duration.as_nanos()).unwrap_or(u64::MAX);
        serializer.serialize_u64(nanos)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        u64::deserialize(deserializer).map(Duration::from_nanos)
    }
}
