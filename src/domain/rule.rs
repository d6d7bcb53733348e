//! Validation rule definitions.
//!
//! Rules arrive as [`RuleDefinition`]s carrying a free-form JSON config and are
//! parsed once into a [`ValidationRule`] whose [`RuleKind`] holds a typed
//! config. Malformed config values fall back to the documented defaults.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const AMOUNT_LIMIT: &str = "AMOUNT_LIMIT";
pub const CURRENCY_CHECK: &str = "CURRENCY_CHECK";
pub const COUNTERPARTY_CHECK: &str = "COUNTERPARTY_CHECK";

pub const DEFAULT_MAX_AMOUNT: f64 = 1_000_000.0;
pub const DEFAULT_ALLOWED_CURRENCIES: &[&str] = &["USD", "EUR", "GBP", "JPY"];

#[derive(Debug, Clone, PartialEq)]
pub struct AmountLimitConfig {
    pub max_amount: f64,
}

impl AmountLimitConfig {
    pub fn from_config(config: &Map<String, Value>) -> Self {
        let max_amount = config
            .get("max_amount")
            .and_then(Value::as_f64)
            .unwrap_or(DEFAULT_MAX_AMOUNT);

        Self { max_amount }
    }
}

impl Default for AmountLimitConfig {
    fn default() -> Self {
        Self {
            max_amount: DEFAULT_MAX_AMOUNT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyCheckConfig {
    pub allowed_currencies: Vec<String>,
}

impl CurrencyCheckConfig {
    /// A list containing anything other than strings is treated as absent.
    pub fn from_config(config: &Map<String, Value>) -> Self {
        let allowed_currencies = config
            .get("allowed_currencies")
            .and_then(Value::as_array)
            .and_then(|values| {
                values
                    .iter()
                    .map(|value| value.as_str().map(str::to_string))
                    .collect::<Option<Vec<_>>>()
            });

        match allowed_currencies {
            Some(allowed_currencies) => Self { allowed_currencies },
            None => Self::default(),
        }
    }

    pub fn allows(&self, currency: &str) -> bool {
        self.allowed_currencies.iter().any(|allowed| allowed == currency)
    }
}

impl Default for CurrencyCheckConfig {
    fn default() -> Self {
        Self {
            allowed_currencies: DEFAULT_ALLOWED_CURRENCIES
                .iter()
                .map(|code| code.to_string())
                .collect(),
        }
    }
}

/// Rule kind with its typed configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum RuleKind {
    AmountLimit(AmountLimitConfig),
    CurrencyCheck(CurrencyCheckConfig),
    CounterpartyCheck,
    /// Unrecognized type name, kept verbatim for reporting.
    Unknown(String),
}

impl RuleKind {
    pub fn parse(rule_type: &str, config: &Map<String, Value>) -> Self {
        match rule_type {
            AMOUNT_LIMIT => RuleKind::AmountLimit(AmountLimitConfig::from_config(config)),
            CURRENCY_CHECK => RuleKind::CurrencyCheck(CurrencyCheckConfig::from_config(config)),
            COUNTERPARTY_CHECK => RuleKind::CounterpartyCheck,
            other => RuleKind::Unknown(other.to_string()),
        }
    }

    pub fn type_name(&self) -> &str {
        match self {
            RuleKind::AmountLimit(_) => AMOUNT_LIMIT,
            RuleKind::CurrencyCheck(_) => CURRENCY_CHECK,
            RuleKind::CounterpartyCheck => COUNTERPARTY_CHECK,
            RuleKind::Unknown(name) => name.as_str(),
        }
    }

    fn config(&self) -> Map<String, Value> {
        let mut config = Map::new();
        match self {
            RuleKind::AmountLimit(limit) => {
                config.insert("max_amount".to_string(), Value::from(limit.max_amount));
            }
            RuleKind::CurrencyCheck(check) => {
                config.insert(
                    "allowed_currencies".to_string(),
                    Value::from(check.allowed_currencies.clone()),
                );
            }
            RuleKind::CounterpartyCheck | RuleKind::Unknown(_) => {}
        }
        config
    }
}

/// Serialized form of a rule, as found in a rules file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleDefinition {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type")]
    pub rule_type: String,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default)]
    pub priority: i32,
    #[serde(default)]
    pub config: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

fn default_enabled() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValidationRule {
    pub id: String,
    pub name: String,
    pub description: String,
    pub kind: RuleKind,
    pub enabled: bool,
    pub priority: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ValidationRule {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        kind: RuleKind,
        priority: i32,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            kind,
            enabled: true,
            priority,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    pub fn to_definition(&self) -> RuleDefinition {
        RuleDefinition {
            id: self.id.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            rule_type: self.kind.type_name().to_string(),
            enabled: self.enabled,
            priority: self.priority,
            config: self.kind.config(),
            created_at: Some(self.created_at),
            updated_at: Some(self.updated_at),
        }
    }
}

impl From<RuleDefinition> for ValidationRule {
    fn from(definition: RuleDefinition) -> Self {
        let now = Utc::now();
        let created_at = definition.created_at.unwrap_or(now);
        Self {
            kind: RuleKind::parse(&definition.rule_type, &definition.config),
            id: definition.id,
            name: definition.name,
            description: definition.description,
            enabled: definition.enabled,
            priority: definition.priority,
            created_at,
            updated_at: definition.updated_at.unwrap_or(created_at),
        }
    }
}
