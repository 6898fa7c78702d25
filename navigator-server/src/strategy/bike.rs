//! Bike routing: slow, on bike paths and secondary roads.

use crate::domain::{RouteRequest, TransportMode};

use super::RouteStrategy;

const BIKE_SPEED_KMH: f64 = 15.0;

#[derive(Debug, Clone, Copy, Default)]
pub struct BikeStrategy;

impl RouteStrategy for BikeStrategy {
    fn mode(&self) -> TransportMode {
        TransportMode::Bike
    }

    fn average_speed_kmh(&self) -> f64 {
        BIKE_SPEED_KMH
    }

    fn steps(&self, request: &RouteRequest) -> Vec<String> {
        vec![
            format!("Start at {}", request.origin),
            "Follow bike paths and secondary roads".to_string(),
            "Avoid highways".to_string(),
            format!("Arrive at {}", request.destination),
        ]
    }
}
