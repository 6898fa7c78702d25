//! Route planner.
//!
//! Selects the strategy for the requested mode, computes the route, and
//! writes the resulting statistics through to the stats store before
//! returning. Identical requests can be served from a cache instead.

mod config;
mod plan;

pub use config::{PlannerConfig, StatsFailurePolicy};
pub use plan::{PlanError, RoutePlanner};
