use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;
use uuid::Uuid;

use crate::domain::validation::{VALIDATION_FAILED_CODE, VALIDATION_FAILED_MESSAGE};
use crate::domain::{RuleStatus, ValidationRequest, ValidationResult, ValidationStatus};
use crate::error::AppError;
use crate::ports::ResultRepository;
use crate::rules::{RuleCatalog, RuleEvaluator};

/// Runs a request through every enabled rule of the catalog.
///
/// Holds only read-only state, so one engine can serve concurrent requests.
#[derive(Clone)]
pub struct ValidationEngine {
    catalog: Arc<RuleCatalog>,
    evaluator: RuleEvaluator,
}

impl ValidationEngine {
    pub fn new(catalog: Arc<RuleCatalog>, evaluator: RuleEvaluator) -> Self {
        Self { catalog, evaluator }
    }

    pub fn catalog(&self) -> &RuleCatalog {
        &self.catalog
    }

    pub fn validate(&self, request: &ValidationRequest) -> ValidationResult {
        let started = Instant::now();

        let mut result = ValidationResult {
            id: next_validation_id(),
            transaction_id: request.transaction_id.clone(),
            status: ValidationStatus::Pending,
            rules: Vec::with_capacity(self.catalog.len()),
            error_code: None,
            error_message: None,
            processed_at: Utc::now(),
            processing_time: Default::default(),
            metadata: HashMap::new(),
        };

        tracing::info!(
            transaction_id = %request.transaction_id,
            validation_id = %result.id,
            amount = request.amount,
            currency = %request.currency,
            "Starting transaction validation"
        );

        let mut overall = ValidationStatus::Passed;
        for rule in self.catalog.iter().filter(|rule| rule.enabled) {
            let rule_result = self.evaluator.evaluate(rule, request);
            if rule_result.status == RuleStatus::Failed {
                overall = ValidationStatus::Failed;
            }
            result.rules.push(rule_result);
        }

        result.status = overall;
        result.processing_time = started.elapsed();

        if result.is_failed() {
            result.error_code = Some(VALIDATION_FAILED_CODE.to_string());
            result.error_message = Some(VALIDATION_FAILED_MESSAGE.to_string());
        }

        tracing::info!(
            transaction_id = %request.transaction_id,
            validation_id = %result.id,
            status = %result.status,
            processing_time_us = result.processing_time.as_micros() as u64,
            rules_processed = result.rules.len(),
            "Transaction validation completed"
        );

        result
    }
}

fn next_validation_id() -> String {
    format!("val-{}", Uuid::new_v4().simple())
}

/// Validation engine plus storage of the results it produces.
#[derive(Clone)]
pub struct ValidationService {
    engine: ValidationEngine,
    repository: Arc<dyn ResultRepository>,
}

impl ValidationService {
    pub fn new(engine: ValidationEngine, repository: Arc<dyn ResultRepository>) -> Self {
        tracing::info!(
            rules_count = engine.catalog().len(),
            enabled_rules = engine.catalog().enabled_count(),
            "Validation service initialized"
        );
        Self { engine, repository }
    }

    pub fn catalog(&self) -> &RuleCatalog {
        self.engine.catalog()
    }

    pub async fn validate_transaction(
        &self,
        request: &ValidationRequest,
    ) -> Result<ValidationResult, AppError> {
        let result = self.engine.validate(request);
        self.repository.insert(&result).await?;
        Ok(result)
    }

    /// Looks up a result produced earlier in this process.
    pub async fn get_validation_result(&self, id: &str) -> Result<ValidationResult, AppError> {
        if id.trim().is_empty() {
            return Err(AppError::NotFound("Validation ID is required".to_string()));
        }

        Ok(self.repository.get_by_id(id).await?)
    }
}
