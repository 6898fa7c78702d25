//! Web layer for the route navigator.
//!
//! Provides HTTP endpoints for planning routes and maintaining statistics.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::{AppState, InMemoryRouteService};
