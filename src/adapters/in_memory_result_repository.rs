//! In-process implementation of ResultRepository.

use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use tokio::sync::RwLock;

use crate::domain::ValidationResult;
use crate::ports::{RepositoryError, RepositoryResult, ResultRepository};

pub const DEFAULT_CAPACITY: usize = 10_000;

/// Bounded in-memory result store. Contents do not survive a restart.
///
/// Once `capacity` results are held, inserting evicts the oldest one.
pub struct InMemoryResultRepository {
    capacity: usize,
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    results: HashMap<String, ValidationResult>,
    order: VecDeque<String>,
}

impl InMemoryResultRepository {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            inner: RwLock::new(Inner::default()),
        }
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.results.len()
    }
}

impl Default for InMemoryResultRepository {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

#[async_trait]
impl ResultRepository for InMemoryResultRepository {
    async fn insert(&self, result: &ValidationResult) -> RepositoryResult<()> {
        let mut inner = self.inner.write().await;

        if inner
            .results
            .insert(result.id.clone(), result.clone())
            .is_none()
        {
            inner.order.push_back(result.id.clone());
        }

        while inner.order.len() > self.capacity {
            if let Some(evicted) = inner.order.pop_front() {
                inner.results.remove(&evicted);
                tracing::debug!(validation_id = %evicted, "Evicted validation result");
            }
        }

        Ok(())
    }

    async fn get_by_id(&self, id: &str) -> RepositoryResult<ValidationResult> {
        self.inner
            .read()
            .await
            .results
            .get(id)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ValidationStatus;
    use chrono::Utc;
    use std::time::Duration;

    fn result(id: &str) -> ValidationResult {
        ValidationResult {
            id: id.to_string(),
            transaction_id: format!("txn-{}", id),
            status: ValidationStatus::Passed,
            rules: Vec::new(),
            error_code: None,
            error_message: None,
            processed_at: Utc::now(),
            processing_time: Duration::ZERO,
            metadata: HashMap::new(),
        }
    }

    #[tokio::test]
    async fn test_stores_and_fetches_by_id() {
        let repository = InMemoryResultRepository::default();
        repository.insert(&result("val-1")).await.unwrap();

        let fetched = repository.get_by_id("val-1").await.unwrap();
        assert_eq!(fetched.transaction_id, "txn-val-1");
    }

    #[tokio::test]
    async fn test_missing_id_is_not_found() {
        let repository = InMemoryResultRepository::default();

        let err = repository.get_by_id("val-404").await.unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound(id) if id == "val-404"));
    }

    #[tokio::test]
    async fn test_evicts_oldest_when_full() {
        let repository = InMemoryResultRepository::new(2);
        for id in ["val-1", "val-2", "val-3"] {
            repository.insert(&result(id)).await.unwrap();
        }

        assert_eq!(repository.len().await, 2);
        assert!(repository.get_by_id("val-1").await.is_err());
        assert!(repository.get_by_id("val-3").await.is_ok());
    }
}
