//! Route requests and responses.

use super::{GeoPoint, TransportMode, UnsupportedMode};

/// A validated request to plan a route.
///
/// The whole value (both points and the mode) identifies a route, which
/// is why it is hashable.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RouteRequest {
    pub origin: GeoPoint,
    pub destination: GeoPoint,
    pub mode: TransportMode,
}

impl RouteRequest {
    pub fn new(origin: GeoPoint, destination: GeoPoint, mode: TransportMode) -> Self {
        Self {
            origin,
            destination,
            mode,
        }
    }
}

/// An inbound planning query whose mode has not been resolved yet.
///
/// Coordinates are already valid; the mode is whatever string the caller
/// sent.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteQuery {
    pub origin: GeoPoint,
    pub destination: GeoPoint,
    pub mode: String,
}

impl RouteQuery {
    pub fn new(origin: GeoPoint, destination: GeoPoint, mode: impl Into<String>) -> Self {
        Self {
            origin,
            destination,
            mode: mode.into(),
        }
    }

    /// Resolve the mode string into a typed request.
    pub fn to_request(&self) -> Result<RouteRequest, UnsupportedMode> {
        Ok(RouteRequest::new(
            self.origin,
            self.destination,
            self.mode.parse()?,
        ))
    }
}

impl From<RouteRequest> for RouteQuery {
    fn from(request: RouteRequest) -> Self {
        Self::new(request.origin, request.destination, request.mode.as_str())
    }
}

/// The estimate produced for a route.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteResponse {
    /// Great-circle distance, rounded to 2 decimal places.
    pub distance_km: f64,

    pub duration_minutes: u32,

    /// Narrative steps, in travel order.
    pub steps: Vec<String>,

    /// Upper-case mode literal, e.g. `"CAR"`.
    pub mode: String,
}
