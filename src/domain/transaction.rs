//! Transaction domain entity.
//! Framework-agnostic description of a transaction submitted for validation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The other party to a transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counterparty {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "type")]
    pub kind: String,
}

impl Counterparty {
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: kind.into(),
        }
    }
}

/// A transaction validation request.
///
/// String fields default to empty when absent from the payload so that the
/// boundary can report which field is missing instead of a serde error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationRequest {
    #[serde(default)]
    pub transaction_id: String,
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub currency: String,
    #[serde(default)]
    pub counterparty: Counterparty,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub metadata: HashMap<String, serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl ValidationRequest {
    pub fn new(
        transaction_id: impl Into<String>,
        kind: impl Into<String>,
        amount: f64,
        currency: impl Into<String>,
        counterparty: Counterparty,
    ) -> Self {
        Self {
            transaction_id: transaction_id.into(),
            kind: kind.into(),
            amount,
            currency: currency.into(),
            counterparty,
            metadata: HashMap::new(),
            timestamp: Some(Utc::now()),
        }
    }
}
