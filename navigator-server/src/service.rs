//! Audited route planning.
//!
//! The public entry point for planning: resolves the requested mode and
//! delegates to the [`RoutePlanner`], with every call audited under
//! [`ROUTE_PLANNED`] whatever its outcome.

use chrono::{DateTime, Utc};

use crate::audit::AuditRecorder;
use crate::domain::{RouteQuery, RouteResponse};
use crate::planner::{PlanError, RoutePlanner};
use crate::store::{AuditStore, StatsStore};

/// Action label for planning calls in the audit trail.
pub const ROUTE_PLANNED: &str = "Route Planned";

/// Route planner with an audit trail.
pub struct RouteService<S, A> {
    planner: RoutePlanner<S>,
    audit: AuditRecorder<A>,
}

impl<S: StatsStore, A: AuditStore> RouteService<S, A> {
    pub fn new(planner: RoutePlanner<S>, audit: AuditRecorder<A>) -> Self {
        Self { planner, audit }
    }

    pub fn planner(&self) -> &RoutePlanner<S> {
        &self.planner
    }

    pub fn audit(&self) -> &AuditRecorder<A> {
        &self.audit
    }

    /// Plan a route for a query.
    ///
    /// An unknown mode fails with [`PlanError::UnsupportedMode`] naming the
    /// value as sent. Exactly one audit entry is written per call.
    pub async fn plan_route(&self, query: RouteQuery) -> Result<RouteResponse, PlanError> {
        self.audit
            .record(ROUTE_PLANNED, "plan_route", &query, async {
                let request = query.to_request()?;
                self.planner.plan(&request).await
            })
            .await
    }

    /// Retention cleanup: drop statistics older than `cutoff`.
    pub async fn purge_stats_older_than(&self, cutoff: DateTime<Utc>) -> Result<usize, PlanError> {
        self.planner.purge_stats_older_than(cutoff).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::domain::{GeoPoint, RouteRequest, TransportMode};
    use crate::planner::{PlannerConfig, StatsFailurePolicy};
    use crate::store::failing::FailingStore;
    use crate::store::{InMemoryAuditStore, InMemoryStatsStore};
    use crate::strategy::StrategyRegistry;

    fn point(lat: f64, lon: f64) -> GeoPoint {
        GeoPoint::new(lat, lon).unwrap()
    }

    fn query(mode: &str) -> RouteQuery {
        RouteQuery::new(point(20.6736, -103.344), point(19.4326, -99.1332), mode)
    }

    fn service<S: StatsStore>(
        stats: S,
        config: PlannerConfig,
    ) -> (RouteService<S, InMemoryAuditStore>, InMemoryAuditStore) {
        let audit_store = InMemoryAuditStore::new();
        let registry = Arc::new(StrategyRegistry::standard().unwrap());
        let service = RouteService::new(
            RoutePlanner::new(registry, stats, &config),
            AuditRecorder::new(audit_store.clone()),
        );
        (service, audit_store)
    }

    #[tokio::test]
    async fn success_audited_once() {
        let stats = InMemoryStatsStore::new();
        let (service, audit) = service(stats.clone(), PlannerConfig::default());

        let response = service.plan_route(query("car")).await.unwrap();

        assert_eq!(response.mode, "CAR");
        let entries = audit.all().await;
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].action, ROUTE_PLANNED);
        assert!(entries[0].message.starts_with("Method: plan_route, Arguments: RouteQuery"));
        assert!(entries[0].message.contains("Result: RouteResponse"));
        assert_eq!(stats.count().await, Ok(1));
    }

    #[tokio::test]
    async fn unknown_mode_fails_and_is_audited() {
        let stats = InMemoryStatsStore::new();
        let (service, audit) = service(stats.clone(), PlannerConfig::default());

        let err = service.plan_route(query("PLANE")).await.unwrap_err();

        assert_eq!(
            err,
            PlanError::UnsupportedMode {
                mode: "PLANE".to_string()
            }
        );
        assert!(err.to_string().contains("PLANE"));

        let entries = audit.all().await;
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].action, ROUTE_PLANNED);
        assert!(entries[0].message.ends_with("Error: unsupported transport mode: PLANE"));
        assert_eq!(stats.count().await, Ok(0));
    }

    #[tokio::test]
    async fn cached_calls_are_still_audited() {
        let stats = InMemoryStatsStore::new();
        let (service, audit) = service(stats.clone(), PlannerConfig::default());

        for _ in 0..3 {
            service.plan_route(query("BIKE")).await.unwrap();
        }

        assert_eq!(audit.count().await, Ok(3));
        assert_eq!(stats.count().await, Ok(1));
    }

    #[tokio::test]
    async fn audit_survives_failed_stats_write() {
        let config = PlannerConfig::new(None, StatsFailurePolicy::Fail);
        let (service, audit) = service(FailingStore, config);

        let err = service.plan_route(query("MOTORCYCLE")).await.unwrap_err();

        assert!(matches!(err, PlanError::Persistence(_)));
        let entries = audit.all().await;
        assert_eq!(entries.len(), 1);
        assert!(entries[0].message.contains("Error: failed to save route statistics"));
    }

    #[tokio::test]
    async fn failed_audit_write_fails_successful_call() {
        let registry = Arc::new(StrategyRegistry::standard().unwrap());
        let stats = InMemoryStatsStore::new();
        let service = RouteService::new(
            RoutePlanner::new(registry, stats.clone(), &PlannerConfig::uncached()),
            AuditRecorder::new(FailingStore),
        );

        let err = service.plan_route(query("CAR")).await.unwrap_err();

        assert!(matches!(err, PlanError::Audit(_)));
        // The route itself was computed and its stats written.
        assert_eq!(stats.count().await, Ok(1));
    }

    #[tokio::test]
    async fn typed_requests_convert_to_queries() {
        let (service, _audit) = service(InMemoryStatsStore::new(), PlannerConfig::default());
        let request = RouteRequest::new(
            point(0.0, 0.0),
            point(0.0, 1.0),
            TransportMode::Motorcycle,
        );

        let response = service.plan_route(request.into()).await.unwrap();

        assert_eq!(response.mode, "MOTORCYCLE");
        assert_eq!(response.distance_km, 111.19);
        assert_eq!(response.duration_minutes, 111);
    }
}
