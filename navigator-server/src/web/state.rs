//! Application state for the web layer.

use std::sync::Arc;

use crate::service::RouteService;
use crate::store::{InMemoryAuditStore, InMemoryStatsStore};

/// Route service backed by the in-memory stores.
pub type InMemoryRouteService = RouteService<InMemoryStatsStore, InMemoryAuditStore>;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Audited route planner
    pub routes: Arc<InMemoryRouteService>,

    /// Message served by the greeting endpoint
    pub greeting: Arc<str>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(routes: InMemoryRouteService, greeting: &str) -> Self {
        Self {
            routes: Arc::new(routes),
            greeting: Arc::from(greeting),
        }
    }
}
