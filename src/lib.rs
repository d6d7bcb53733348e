pub mod adapters;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod handlers;
pub mod health;
pub mod middleware;
pub mod ports;
pub mod rules;
pub mod services;
pub mod utils;
pub mod validation;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::adapters::InMemoryResultRepository;
use crate::config::Config;
use crate::middleware::{build_cors_layer, request_logger_middleware, RequestLogSettings};
use crate::rules::{RuleCatalog, RuleEvaluator};
use crate::services::{ValidationEngine, ValidationService};

#[derive(Clone)]
pub struct AppState {
    pub service: ValidationService,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(service: ValidationService, config: Config) -> Self {
        Self {
            service,
            config: Arc::new(config),
        }
    }

    /// Builds the catalog (from `RULES_PATH` when set), engine and result store.
    pub fn from_config(config: Config) -> anyhow::Result<Self> {
        let catalog = load_catalog(&config)?;
        let engine = ValidationEngine::new(Arc::new(catalog), RuleEvaluator::default());
        let repository = Arc::new(InMemoryResultRepository::new(config.result_capacity));

        Ok(Self::new(ValidationService::new(engine, repository), config))
    }
}

pub fn load_catalog(config: &Config) -> anyhow::Result<RuleCatalog> {
    match &config.rules_path {
        Some(path) => RuleCatalog::load(path),
        None => Ok(RuleCatalog::default()),
    }
}

pub fn create_app(state: AppState) -> Router {
    let cors = build_cors_layer(&state.config.cors_allowed_origins);
    let log_settings = RequestLogSettings {
        log_body: state.config.log_request_body,
    };

    Router::new()
        .route("/api/health", get(health::health))
        .route("/api/health/ready", get(health::ready))
        .route("/api/health/live", get(health::live))
        .route("/api/validate", post(handlers::validate_transaction))
        .route("/api/validate/:id", get(handlers::get_validation_result))
        .layer(axum::middleware::from_fn_with_state(
            log_settings,
            request_logger_middleware,
        ))
        .layer(cors)
        .with_state(state)
}
