//! Ports for the validation core.
//! Storage seams are traits so the service does not depend on a backend.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::ValidationResult;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Validation result {0} not found")]
    NotFound(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Storage for validation results, keyed by result id.
#[async_trait]
pub trait ResultRepository: Send + Sync {
    async fn insert(&self, result: &ValidationResult) -> RepositoryResult<()>;

    async fn get_by_id(&self, id: &str) -> RepositoryResult<ValidationResult>;
}
