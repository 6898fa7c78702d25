//! Lookup from transport mode to strategy.

use std::collections::HashMap;

use crate::domain::TransportMode;

use super::{BikeStrategy, CarStrategy, MotorcycleStrategy, RouteStrategy};

/// Error building a registry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("more than one strategy declares mode {0}")]
    DuplicateMode(TransportMode),
}

/// Strategies indexed by the mode they declare.
///
/// Built once at startup and read-only afterwards, so it can be shared
/// across requests behind an `Arc` without locking.
pub struct StrategyRegistry {
    strategies: HashMap<TransportMode, Box<dyn RouteStrategy>>,
}

impl StrategyRegistry {
    /// Index the given strategies by mode.
    ///
    /// Fails if two strategies declare the same mode.
    pub fn new(strategies: Vec<Box<dyn RouteStrategy>>) -> Result<Self, RegistryError> {
        let mut map = HashMap::with_capacity(strategies.len());
        for strategy in strategies {
            let mode = strategy.mode();
            if map.insert(mode, strategy).is_some() {
                return Err(RegistryError::DuplicateMode(mode));
            }
        }
        Ok(Self { strategies: map })
    }

    /// Registry with the built-in car, bike and motorcycle strategies.
    pub fn standard() -> Result<Self, RegistryError> {
        let strategies: Vec<Box<dyn RouteStrategy>> = vec![
            Box::new(CarStrategy),
            Box::new(BikeStrategy),
            Box::new(MotorcycleStrategy),
        ];
        Self::new(strategies)
    }

    /// Strategy for a mode, or `None` if the mode is not served.
    pub fn get(&self, mode: TransportMode) -> Option<&dyn RouteStrategy> {
        self.strategies.get(&mode).map(|s| s.as_ref())
    }

    /// Registered modes, in declaration order.
    pub fn modes(&self) -> Vec<TransportMode> {
        let mut modes: Vec<_> = self.strategies.keys().copied().collect();
        modes.sort();
        modes
    }
}

impl std::fmt::Debug for StrategyRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StrategyRegistry")
            .field("modes", &self.modes())
            .finish()
    }
}
