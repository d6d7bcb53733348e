//! Per-kind rule checks and the evaluator that dispatches to them.
//!
//! Evaluation never fails: unknown kinds produce a SKIPPED outcome and config
//! problems were already resolved to defaults when the catalog was built.

use chrono::Utc;
use std::sync::Arc;

use super::observer::{RuleObserver, TracingObserver};
use crate::domain::rule::{AmountLimitConfig, CurrencyCheckConfig};
use crate::domain::{RuleKind, RuleResult, RuleStatus, ValidationRequest, ValidationRule};

/// Verdict and message produced by a single check.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub status: RuleStatus,
    pub message: String,
}

impl Outcome {
    pub fn passed(message: impl Into<String>) -> Self {
        Self {
            status: RuleStatus::Passed,
            message: message.into(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            status: RuleStatus::Failed,
            message: message.into(),
        }
    }

    pub fn skipped(message: impl Into<String>) -> Self {
        Self {
            status: RuleStatus::Skipped,
            message: message.into(),
        }
    }
}

/// A check applied to one transaction.
pub trait RuleCheck {
    fn check(&self, request: &ValidationRequest) -> Outcome;
}

impl RuleCheck for AmountLimitConfig {
    fn check(&self, request: &ValidationRequest) -> Outcome {
        if request.amount > self.max_amount {
            Outcome::failed(format!(
                "Amount {:.2} exceeds maximum limit of {:.2}",
                request.amount, self.max_amount
            ))
        } else {
            Outcome::passed(format!(
                "Amount {:.2} is within limit of {:.2}",
                request.amount, self.max_amount
            ))
        }
    }
}

impl RuleCheck for CurrencyCheckConfig {
    fn check(&self, request: &ValidationRequest) -> Outcome {
        if self.allows(&request.currency) {
            Outcome::passed(format!("Currency {} is allowed", request.currency))
        } else {
            Outcome::failed(format!("Currency {} is not allowed", request.currency))
        }
    }
}

/// Counterparty completeness. The id is checked before the name.
#[derive(Debug, Clone, Copy, Default)]
pub struct CounterpartyCheck;

impl RuleCheck for CounterpartyCheck {
    fn check(&self, request: &ValidationRequest) -> Outcome {
        if request.counterparty.id.is_empty() {
            Outcome::failed("Counterparty ID is required")
        } else if request.counterparty.name.is_empty() {
            Outcome::failed("Counterparty name is required")
        } else {
            Outcome::passed("Counterparty information is valid")
        }
    }
}

impl RuleCheck for RuleKind {
    fn check(&self, request: &ValidationRequest) -> Outcome {
        match self {
            RuleKind::AmountLimit(config) => config.check(request),
            RuleKind::CurrencyCheck(config) => config.check(request),
            RuleKind::CounterpartyCheck => CounterpartyCheck.check(request),
            RuleKind::Unknown(name) => Outcome::skipped(format!("Unknown rule type: {}", name)),
        }
    }
}

#[derive(Clone)]
pub struct RuleEvaluator {
    observer: Arc<dyn RuleObserver>,
}

impl RuleEvaluator {
    pub fn new(observer: Arc<dyn RuleObserver>) -> Self {
        Self { observer }
    }

    pub fn evaluate(&self, rule: &ValidationRule, request: &ValidationRequest) -> RuleResult {
        let started_at = Utc::now();
        let outcome = rule.kind.check(request);

        let result = RuleResult {
            rule_id: rule.id.clone(),
            rule_name: rule.name.clone(),
            status: outcome.status,
            message: outcome.message,
            processed_at: started_at,
        };

        self.observer.rule_evaluated(rule, &result);
        result
    }
}

impl Default for RuleEvaluator {
    fn default() -> Self {
        Self::new(Arc::new(TracingObserver))
    }
}
