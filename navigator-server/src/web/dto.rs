//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{GeoPoint, InvalidGeoPoint, RouteQuery, RouteResponse};

/// A coordinate pair as sent by clients.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PointDto {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

/// Request to plan a route.
///
/// Every field is optional on the wire so that all missing or invalid
/// fields can be reported together.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlanRouteRequest {
    pub origin: Option<PointDto>,
    pub destination: Option<PointDto>,

    /// Transport mode, e.g. "CAR". Parsed by the planner, not here.
    pub mode: Option<String>,
}

impl PlanRouteRequest {
    /// Validate the request into a planning query.
    ///
    /// On failure returns one message per offending field, prefixed with
    /// the field path (`origin.lat: ...`).
    pub fn validate(self) -> Result<RouteQuery, Vec<String>> {
        let mut details = Vec::new();

        let origin = point_field("origin", self.origin, &mut details);
        let destination = point_field("destination", self.destination, &mut details);
        let mode = match self.mode {
            Some(mode) if !mode.trim().is_empty() => Some(mode),
            _ => {
                details.push("mode: must not be blank".to_string());
                None
            }
        };

        match (origin, destination, mode) {
            (Some(origin), Some(destination), Some(mode)) if details.is_empty() => {
                Ok(RouteQuery::new(origin, destination, mode))
            }
            _ => Err(details),
        }
    }
}

fn point_field(name: &str, point: Option<PointDto>, details: &mut Vec<String>) -> Option<GeoPoint> {
    let Some(point) = point else {
        details.push(format!("{name}: must not be null"));
        return None;
    };

    let lat = coordinate(name, "lat", point.lat, details);
    let lon = coordinate(name, "lon", point.lon, details);
    let (lat, lon) = (lat?, lon?);

    match GeoPoint::new(lat, lon) {
        Ok(p) => Some(p),
        Err(e) => {
            let field = match e {
                InvalidGeoPoint::Latitude(_) => "lat",
                InvalidGeoPoint::Longitude(_) => "lon",
            };
            details.push(format!("{name}.{field}: {e}"));
            None
        }
    }
}

fn coordinate(
    point: &str,
    field: &str,
    value: Option<f64>,
    details: &mut Vec<String>,
) -> Option<f64> {
    if value.is_none() {
        details.push(format!("{point}.{field}: must not be null"));
    }
    value
}

/// A planned route.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteResult {
    pub distance_km: f64,
    pub duration_minutes: u32,
    pub steps: Vec<String>,
    pub mode: String,
}

impl From<RouteResponse> for RouteResult {
    fn from(response: RouteResponse) -> Self {
        Self {
            distance_km: response.distance_km,
            duration_minutes: response.duration_minutes,
            steps: response.steps,
            mode: response.mode,
        }
    }
}

/// Query parameters for statistics cleanup.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurgeStatsParams {
    /// Remove rows older than this many days
    pub older_than_days: u32,
}

/// Response for statistics cleanup.
#[derive(Debug, Serialize)]
pub struct PurgeStatsResponse {
    /// Number of rows removed
    pub deleted: usize,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// RFC 3339 time the error was produced
    pub timestamp: String,

    /// HTTP status code
    pub status: u16,

    pub message: String,

    /// Per-field problems, empty unless validation failed
    pub details: Vec<String>,
}
