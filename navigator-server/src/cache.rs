//! Caching layer for computed routes.
//!
//! A route is a pure function of its request, so the whole request value
//! is the cache key. Concurrent lookups for the same key share a single
//! computation, which also means a single statistics write.
//!
//! Entries expire after a fixed time-to-live and the cache is bounded in
//! size. Failed computations are never cached.

use std::future::Future;
use std::time::Duration;

use moka::future::Cache as MokaCache;

use crate::domain::{RouteRequest, RouteResponse};
use crate::planner::PlanError;

/// Configuration for the route cache.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(10 * 60),
            max_capacity: 10_000,
        }
    }
}

/// Cache of route responses keyed by request.
pub struct RouteCache {
    routes: MokaCache<RouteRequest, RouteResponse>,
}

impl RouteCache {
    /// Create a new cache with the given configuration.
    pub fn new(config: &CacheConfig) -> Self {
        let routes = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { routes }
    }

    /// Return the cached response for `key`, or run `compute` to produce it.
    ///
    /// If several callers ask for the same missing key at once, only one
    /// `compute` runs and the rest wait for its outcome. Errors are passed
    /// to every waiter and nothing is cached.
    pub async fn get_or_compute<F>(
        &self,
        key: RouteRequest,
        compute: F,
    ) -> Result<RouteResponse, PlanError>
    where
        F: Future<Output = Result<RouteResponse, PlanError>>,
    {
        self.routes
            .try_get_with(key, compute)
            .await
            .map_err(|e| PlanError::clone(&e))
    }

    /// Get a cached response without computing.
    pub async fn get(&self, key: &RouteRequest) -> Option<RouteResponse> {
        self.routes.get(key).await
    }
}
