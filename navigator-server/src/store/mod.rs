//! Persistence contracts for route statistics and audit entries.
//!
//! The planner and audit recorder only depend on these traits. Each store
//! is its own unit of work: a write to one never depends on, blocks, or
//! rolls back a write to the other.

mod memory;
#[cfg(test)]
pub(crate) mod failing;

pub use memory::{InMemoryAuditStore, InMemoryStatsStore};

use std::future::Future;

use chrono::{DateTime, Utc};

use crate::domain::{RouteRequest, RouteResponse};

/// Errors from a store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The backing store could not be reached.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Statistics recorded for every computed route.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteStats {
    pub origin_lat: f64,
    pub origin_lon: f64,
    pub dest_lat: f64,
    pub dest_lon: f64,
    pub mode_used: String,
    pub distance_km: f64,
    pub duration_minutes: u32,
    pub calculation_time: DateTime<Utc>,
}

impl RouteStats {
    /// Build the stats row for a computed route.
    pub fn from_route(
        request: &RouteRequest,
        response: &RouteResponse,
        calculation_time: DateTime<Utc>,
    ) -> Self {
        Self {
            origin_lat: request.origin.lat(),
            origin_lon: request.origin.lon(),
            dest_lat: request.destination.lat(),
            dest_lon: request.destination.lon(),
            mode_used: response.mode.clone(),
            distance_km: response.distance_km,
            duration_minutes: response.duration_minutes,
            calculation_time,
        }
    }
}

/// A record of one audited operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEntry {
    pub action: String,
    pub timestamp: DateTime<Utc>,
    /// Method, arguments, and either the result or the error.
    pub message: String,
}

impl AuditEntry {
    pub fn new(action: impl Into<String>, message: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            action: action.into(),
            timestamp,
            message: message.into(),
        }
    }
}

/// Storage for route statistics.
///
/// Rows are write-once: the only removal is bulk retention cleanup.
pub trait StatsStore: Send + Sync {
    /// Persist a row, returning its assigned id.
    fn save(&self, stats: RouteStats) -> impl Future<Output = Result<u64, StoreError>> + Send;

    /// Remove rows calculated before `cutoff`, returning how many were removed.
    fn delete_older_than(
        &self,
        cutoff: DateTime<Utc>,
    ) -> impl Future<Output = Result<usize, StoreError>> + Send;

    /// Number of stored rows.
    fn count(&self) -> impl Future<Output = Result<usize, StoreError>> + Send;
}

/// Storage for audit entries.
pub trait AuditStore: Send + Sync {
    /// Persist an entry, returning its assigned id.
    fn save(&self, entry: AuditEntry) -> impl Future<Output = Result<u64, StoreError>> + Send;

    /// Number of stored entries.
    fn count(&self) -> impl Future<Output = Result<usize, StoreError>> + Send;
}
