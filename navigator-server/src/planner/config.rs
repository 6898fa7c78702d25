//! Planner configuration.

use std::str::FromStr;

use crate::cache::CacheConfig;

/// What to do when the statistics write fails after a route was computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatsFailurePolicy {
    /// Log the failure and still return the route.
    #[default]
    LogAndContinue,

    /// Fail the planning call with a persistence error.
    Fail,
}

impl FromStr for StatsFailurePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "log" | "log-and-continue" => Ok(StatsFailurePolicy::LogAndContinue),
            "fail" => Ok(StatsFailurePolicy::Fail),
            other => Err(format!("unknown stats failure policy: {other}")),
        }
    }
}

/// Configuration parameters for the route planner.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannerConfig {
    /// Route cache settings; `None` disables caching.
    pub cache: Option<CacheConfig>,

    pub stats_policy: StatsFailurePolicy,
}

impl PlannerConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(cache: Option<CacheConfig>, stats_policy: StatsFailurePolicy) -> Self {
        Self {
            cache,
            stats_policy,
        }
    }

    /// Configuration with caching turned off.
    pub fn uncached() -> Self {
        Self {
            cache: None,
            ..Self::default()
        }
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            cache: Some(CacheConfig::default()),
            stats_policy: StatsFailurePolicy::default(),
        }
    }
}
