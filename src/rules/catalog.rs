use anyhow::Context;
use std::path::Path;

use crate::domain::rule::{AmountLimitConfig, CurrencyCheckConfig};
use crate::domain::{RuleDefinition, RuleKind, ValidationRule};

/// Ordered, read-only set of rules fixed at construction.
///
/// Order is the order the rules were supplied in; `priority` is informational
/// and never used to re-sort.
#[derive(Debug, Clone)]
pub struct RuleCatalog {
    rules: Vec<ValidationRule>,
}

impl RuleCatalog {
    pub fn new(rules: Vec<ValidationRule>) -> Self {
        Self { rules }
    }

    pub fn from_definitions(definitions: Vec<RuleDefinition>) -> Self {
        Self::new(definitions.into_iter().map(ValidationRule::from).collect())
    }

    /// Reads a JSON array of rule definitions.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read rules file {}", path.display()))?;
        let definitions: Vec<RuleDefinition> = serde_json::from_str(&raw)
            .with_context(|| format!("invalid rules file {}", path.display()))?;

        tracing::info!(
            path = %path.display(),
            rules_count = definitions.len(),
            "Loaded rule definitions"
        );

        Ok(Self::from_definitions(definitions))
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationRule> {
        self.rules.iter()
    }

    pub fn get(&self, id: &str) -> Option<&ValidationRule> {
        self.rules.iter().find(|rule| rule.id == id)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn enabled_count(&self) -> usize {
        self.rules.iter().filter(|rule| rule.enabled).count()
    }
}

impl Default for RuleCatalog {
    fn default() -> Self {
        Self::new(vec![
            ValidationRule::new(
                "amount-limit",
                "Amount Limit Check",
                "Validates transaction amount against maximum limits",
                RuleKind::AmountLimit(AmountLimitConfig::default()),
                1,
            ),
            ValidationRule::new(
                "currency-check",
                "Currency Validation",
                "Validates transaction currency against allowed currencies",
                RuleKind::CurrencyCheck(CurrencyCheckConfig::default()),
                2,
            ),
            ValidationRule::new(
                "counterparty-check",
                "Counterparty Validation",
                "Validates counterparty information completeness",
                RuleKind::CounterpartyCheck,
                3,
            ),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_catalog_order() {
        let catalog = RuleCatalog::default();
        let ids: Vec<_> = catalog.iter().map(|rule| rule.id.as_str()).collect();

        assert_eq!(ids, ["amount-limit", "currency-check", "counterparty-check"]);
        assert_eq!(catalog.enabled_count(), 3);
    }

    #[test]
    fn test_priority_does_not_reorder() {
        let catalog = RuleCatalog::new(vec![
            ValidationRule::new("b", "B", "", RuleKind::CounterpartyCheck, 9),
            ValidationRule::new("a", "A", "", RuleKind::CounterpartyCheck, 1),
        ]);

        let ids: Vec<_> = catalog.iter().map(|rule| rule.id.as_str()).collect();
        assert_eq!(ids, ["b", "a"]);
    }

    #[test]
    fn test_loads_definitions_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{"id": "limit", "name": "Limit", "type": "AMOUNT_LIMIT", "config": {{"max_amount": 50}}}},
                {{"id": "legacy", "name": "Legacy", "type": "VELOCITY", "enabled": false}}
            ]"#
        )
        .unwrap();

        let catalog = RuleCatalog::load(file.path()).unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.enabled_count(), 1);
        assert_eq!(
            catalog.get("limit").map(|rule| &rule.kind),
            Some(&RuleKind::AmountLimit(AmountLimitConfig { max_amount: 50.0 }))
        );
    }

    #[test]
    fn test_rejects_malformed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{not json").unwrap();

        assert!(RuleCatalog::load(file.path()).is_err());
        assert!(RuleCatalog::load("/nonexistent/rules.json").is_err());
    }
}
