//! In-memory stores.
//!
//! Cloning a store clones the handle, not the rows: every clone sees the
//! same data.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use super::{AuditEntry, AuditStore, RouteStats, StatsStore, StoreError};

/// Rows with sequentially assigned ids, starting at 1.
#[derive(Debug)]
struct Table<T> {
    next_id: u64,
    rows: Vec<(u64, T)>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            next_id: 1,
            rows: Vec::new(),
        }
    }
}

impl<T> Table<T> {
    fn insert(&mut self, row: T) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.rows.push((id, row));
        id
    }
}

/// Route statistics held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStatsStore {
    table: Arc<RwLock<Table<RouteStats>>>,
}

impl InMemoryStatsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all rows, in insertion order.
    pub async fn all(&self) -> Vec<RouteStats> {
        let table = self.table.read().await;
        table.rows.iter().map(|(_, row)| row.clone()).collect()
    }
}

impl StatsStore for InMemoryStatsStore {
    async fn save(&self, stats: RouteStats) -> Result<u64, StoreError> {
        Ok(self.table.write().await.insert(stats))
    }

    async fn delete_older_than(&self, cutoff: DateTime<Utc>) -> Result<usize, StoreError> {
        let mut table = self.table.write().await;
        let before = table.rows.len();
        table.rows.retain(|(_, row)| row.calculation_time >= cutoff);
        Ok(before - table.rows.len())
    }

    async fn count(&self) -> Result<usize, StoreError> {
        Ok(self.table.read().await.rows.len())
    }
}

/// Audit entries held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAuditStore {
    table: Arc<RwLock<Table<AuditEntry>>>,
}

impl InMemoryAuditStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all entries, in insertion order.
    pub async fn all(&self) -> Vec<AuditEntry> {
        let table = self.table.read().await;
        table.rows.iter().map(|(_, row)| row.clone()).collect()
    }
}

impl AuditStore for InMemoryAuditStore {
    async fn save(&self, entry: AuditEntry) -> Result<u64, StoreError> {
        Ok(self.table.write().await.insert(entry))
    }

    async fn count(&self) -> Result<usize, StoreError> {
        Ok(self.table.read().await.rows.len())
    }
}
