//! Motorcycle routing: a balance of speed and flexibility.

use crate::domain::{RouteRequest, TransportMode};

use super::RouteStrategy;

const MOTORCYCLE_SPEED_KMH: f64 = 60.0;

#[derive(Debug, Clone, Copy, Default)]
pub struct MotorcycleStrategy;

impl RouteStrategy for MotorcycleStrategy {
    fn mode(&self) -> TransportMode {
        TransportMode::Motorcycle
    }

    fn average_speed_kmh(&self) -> f64 {
        MOTORCYCLE_SPEED_KMH
    }

    fn steps(&self, request: &RouteRequest) -> Vec<String> {
        vec![
            format!("Start at {}", request.origin),
            "Take a flexible route mixing main roads and shortcuts".to_string(),
            format!("Arrive at {}", request.destination),
        ]
    }
}
