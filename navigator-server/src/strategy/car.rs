//! Car routing: fast, on major highways.

use crate::domain::{RouteRequest, TransportMode};

use super::RouteStrategy;

/// Average car speed on highways (km/h).
const CAR_SPEED_KMH: f64 = 80.0;

#[derive(Debug, Clone, Copy, Default)]
pub struct CarStrategy;

impl RouteStrategy for CarStrategy {
    fn mode(&self) -> TransportMode {
        TransportMode::Car
    }

    fn average_speed_kmh(&self) -> f64 {
        CAR_SPEED_KMH
    }

    fn steps(&self, request: &RouteRequest) -> Vec<String> {
        vec![
            format!("Start at {}", request.origin),
            "Drive on major highways".to_string(),
            format!("Arrive at {}", request.destination),
        ]
    }
}
