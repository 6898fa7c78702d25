//! Transport modes.

use std::fmt;
use std::str::FromStr;

/// Error returned when a mode string names no supported transport mode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported transport mode: {mode}")]
pub struct UnsupportedMode {
    mode: String,
}

impl UnsupportedMode {
    /// The offending mode value, as received.
    pub fn mode(&self) -> &str {
        &self.mode
    }

    /// Take the offending mode value.
    pub fn into_mode(self) -> String {
        self.mode
    }
}

/// A supported way of travelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TransportMode {
    Car,
    Bike,
    Motorcycle,
}

impl TransportMode {
    /// Every supported mode, in declaration order.
    pub const ALL: [TransportMode; 3] = [
        TransportMode::Car,
        TransportMode::Bike,
        TransportMode::Motorcycle,
    ];

    /// The canonical upper-case literal for this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportMode::Car => "CAR",
            TransportMode::Bike => "BIKE",
            TransportMode::Motorcycle => "MOTORCYCLE",
        }
    }
}

/// Parsing is case-insensitive and ignores surrounding whitespace.
///
/// ```
/// use navigator_server::domain::TransportMode;
///
/// assert_eq!("bike".parse::<TransportMode>().unwrap(), TransportMode::Bike);
/// assert_eq!(
///     "PLANE".parse::<TransportMode>().unwrap_err().to_string(),
///     "unsupported transport mode: PLANE"
/// );
/// ```
impl FromStr for TransportMode {
    type Err = UnsupportedMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();
        TransportMode::ALL
            .into_iter()
            .find(|m| m.as_str() == normalized)
            .ok_or_else(|| UnsupportedMode {
                mode: s.to_string(),
            })
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
