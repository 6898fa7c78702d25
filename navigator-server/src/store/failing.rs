//! Stores that refuse every write, for exercising failure paths.

use chrono::{DateTime, Utc};

use super::{AuditEntry, AuditStore, RouteStats, StatsStore, StoreError};

#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct FailingStore;

impl FailingStore {
    fn error() -> StoreError {
        StoreError::Unavailable("disk full".to_string())
    }
}

impl StatsStore for FailingStore {
    async fn save(&self, _stats: RouteStats) -> Result<u64, StoreError> {
        Err(Self::error())
    }

    async fn delete_older_than(&self, _cutoff: DateTime<Utc>) -> Result<usize, StoreError> {
        Err(Self::error())
    }

    async fn count(&self) -> Result<usize, StoreError> {
        Err(Self::error())
    }
}

impl AuditStore for FailingStore {
    async fn save(&self, _entry: AuditEntry) -> Result<u64, StoreError> {
        Err(Self::error())
    }

    async fn count(&self) -> Result<usize, StoreError> {
        Err(Self::error())
    }
}
