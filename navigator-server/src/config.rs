//! Server configuration loaded from environment variables.

use std::time::Duration;

use crate::cache::CacheConfig;
use crate::planner::{PlannerConfig, StatsFailurePolicy};

const DEFAULT_GREETING: &str = "Hello from the route navigator";

/// Server configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `NAVIGATOR_HOST`: bind address (default `127.0.0.1`)
/// - `NAVIGATOR_PORT`: listen port (default `3000`)
/// - `NAVIGATOR_GREETING`: message served by the greeting endpoint
/// - `NAVIGATOR_CACHE_TTL_SECS`: route cache TTL (default `600`)
/// - `NAVIGATOR_CACHE_CAPACITY`: route cache size (default `10000`)
/// - `NAVIGATOR_CACHE_DISABLED`: `1` or `true` turns the cache off
/// - `NAVIGATOR_STATS_POLICY`: `log` (default) or `fail`
///
/// Unparseable values fall back to the default.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigatorConfig {
    pub host: String,
    pub port: u16,
    pub greeting: String,
    pub planner: PlannerConfig,
}

impl NavigatorConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let default_cache = CacheConfig::default();

        let cache_disabled = lookup("NAVIGATOR_CACHE_DISABLED")
            .is_some_and(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true"));
        let cache = (!cache_disabled).then(|| CacheConfig {
            ttl: lookup("NAVIGATOR_CACHE_TTL_SECS")
                .and_then(|v| v.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(default_cache.ttl),
            max_capacity: lookup("NAVIGATOR_CACHE_CAPACITY")
                .and_then(|v| v.parse().ok())
                .unwrap_or(default_cache.max_capacity),
        });

        let stats_policy = lookup("NAVIGATOR_STATS_POLICY")
            .and_then(|v| v.parse::<StatsFailurePolicy>().ok())
            .unwrap_or_default();

        Self {
            host: lookup("NAVIGATOR_HOST").unwrap_or(defaults.host),
            port: lookup("NAVIGATOR_PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            greeting: lookup("NAVIGATOR_GREETING").unwrap_or(defaults.greeting),
            planner: PlannerConfig::new(cache, stats_policy),
        }
    }

    /// Returns the `"host:port"` bind address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            greeting: DEFAULT_GREETING.to_string(),
            planner: PlannerConfig::default(),
        }
    }
}
