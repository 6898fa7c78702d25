//! Strategy selection, computation and write-through of statistics.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, trace, warn};

use crate::audit::AuditError;
use crate::cache::RouteCache;
use crate::domain::{RouteRequest, RouteResponse, UnsupportedMode};
use crate::store::{RouteStats, StatsStore, StoreError};
use crate::strategy::StrategyRegistry;

use super::config::{PlannerConfig, StatsFailurePolicy};

/// Error from route planning.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlanError {
    /// No strategy serves the requested mode.
    #[error("unsupported transport mode: {mode}")]
    UnsupportedMode { mode: String },

    /// The statistics write failed and the policy is to fail.
    #[error("failed to save route statistics: {0}")]
    Persistence(#[source] StoreError),

    /// The operation succeeded but its audit entry could not be written.
    #[error(transparent)]
    Audit(#[from] AuditError),
}

impl From<UnsupportedMode> for PlanError {
    fn from(err: UnsupportedMode) -> Self {
        PlanError::UnsupportedMode {
            mode: err.into_mode(),
        }
    }
}

/// Plans routes with the registered strategies.
pub struct RoutePlanner<S> {
    registry: Arc<StrategyRegistry>,
    stats: S,
    cache: Option<RouteCache>,
    stats_policy: StatsFailurePolicy,
}

impl<S: StatsStore> RoutePlanner<S> {
    /// Create a new planner.
    pub fn new(registry: Arc<StrategyRegistry>, stats: S, config: &PlannerConfig) -> Self {
        Self {
            registry,
            stats,
            cache: config.cache.as_ref().map(RouteCache::new),
            stats_policy: config.stats_policy,
        }
    }

    pub fn registry(&self) -> &StrategyRegistry {
        &self.registry
    }

    pub fn stats(&self) -> &S {
        &self.stats
    }

    pub fn cache(&self) -> Option<&RouteCache> {
        self.cache.as_ref()
    }

    /// Plan a route.
    ///
    /// With caching enabled, a request identical to an earlier successful
    /// one returns the earlier response without recomputing or writing
    /// another statistics row.
    pub async fn plan(&self, request: &RouteRequest) -> Result<RouteResponse, PlanError> {
        match &self.cache {
            Some(cache) => {
                cache
                    .get_or_compute(request.clone(), self.compute_and_record(request))
                    .await
            }
            None => self.compute_and_record(request).await,
        }
    }

    /// Remove statistics calculated before `cutoff`.
    pub async fn purge_stats_older_than(&self, cutoff: DateTime<Utc>) -> Result<usize, PlanError> {
        let removed = self
            .stats
            .delete_older_than(cutoff)
            .await
            .map_err(PlanError::Persistence)?;
        debug!(removed, %cutoff, "purged route stats");
        Ok(removed)
    }

    async fn compute_and_record(&self, request: &RouteRequest) -> Result<RouteResponse, PlanError> {
        let strategy = self
            .registry
            .get(request.mode)
            .ok_or_else(|| PlanError::UnsupportedMode {
                mode: request.mode.to_string(),
            })?;

        let response = strategy.compute(request);
        debug!(
            mode = %request.mode,
            distance_km = response.distance_km,
            duration_minutes = response.duration_minutes,
            "route computed"
        );

        self.record_stats(request, &response).await?;
        Ok(response)
    }

    async fn record_stats(
        &self,
        request: &RouteRequest,
        response: &RouteResponse,
    ) -> Result<(), PlanError> {
        let stats = RouteStats::from_route(request, response, Utc::now());
        match self.stats.save(stats).await {
            Ok(id) => {
                trace!(id, "route stats saved");
                Ok(())
            }
            Err(e) => match self.stats_policy {
                StatsFailurePolicy::LogAndContinue => {
                    warn!(error = %e, mode = %request.mode, "failed to save route stats");
                    Ok(())
                }
                StatsFailurePolicy::Fail => Err(PlanError::Persistence(e)),
            },
        }
    }
}
