//! Route computation strategies, one per transport mode.
//!
//! Every strategy estimates the same way: great-circle distance, divided
//! by an average speed for the mode. Strategies differ only in that speed
//! and in the narrative steps they produce.

mod bike;
mod car;
mod motorcycle;
mod registry;

pub use bike::BikeStrategy;
pub use car::CarStrategy;
pub use motorcycle::MotorcycleStrategy;
pub use registry::{RegistryError, StrategyRegistry};

use crate::domain::{RouteRequest, RouteResponse, TransportMode};
use crate::geo::distance_km;

/// A way of turning a route request into an estimate.
pub trait RouteStrategy: Send + Sync {
    /// The mode this strategy serves.
    fn mode(&self) -> TransportMode;

    /// Average travel speed in km/h.
    fn average_speed_kmh(&self) -> f64;

    /// Narrative steps from origin to destination.
    fn steps(&self, request: &RouteRequest) -> Vec<String>;

    /// Estimate distance, duration and steps for a request.
    fn compute(&self, request: &RouteRequest) -> RouteResponse {
        let distance = distance_km(&request.origin, &request.destination);
        RouteResponse {
            distance_km: round_km(distance),
            duration_minutes: duration_minutes(distance, self.average_speed_kmh()),
            steps: self.steps(request),
            mode: self.mode().as_str().to_string(),
        }
    }
}

/// Round a distance to 2 decimal places.
pub fn round_km(distance_km: f64) -> f64 {
    (distance_km * 100.0).round() / 100.0
}

/// Travel time in whole minutes, rounded to nearest.
pub fn duration_minutes(distance_km: f64, speed_kmh: f64) -> u32 {
    (distance_km / speed_kmh * 60.0).round() as u32
}
