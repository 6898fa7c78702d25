//! Domain types for the route navigator.
//!
//! Coordinates and modes are validated at construction time, so code that
//! receives a `GeoPoint` or `TransportMode` can trust it without checking
//! again.

mod mode;
mod point;
mod route;

pub use mode::{TransportMode, UnsupportedMode};
pub use point::{GeoPoint, InvalidGeoPoint};
pub use route::{RouteQuery, RouteRequest, RouteResponse};
