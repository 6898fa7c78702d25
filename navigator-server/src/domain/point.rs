//! Geographic point type.

use std::fmt;
use std::hash::{Hash, Hasher};

/// Error returned when a coordinate is outside its valid range.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvalidGeoPoint {
    #[error("invalid latitude {0}: must be within [-90, 90]")]
    Latitude(f64),

    #[error("invalid longitude {0}: must be within [-180, 180]")]
    Longitude(f64),
}

/// A point on the Earth's surface, in decimal degrees.
///
/// Latitude is always within `[-90, 90]` and longitude within
/// `[-180, 180]`; non-finite values are rejected.
///
/// # Examples
///
/// ```
/// use navigator_server::domain::GeoPoint;
///
/// let guadalajara = GeoPoint::new(20.6736, -103.344).unwrap();
/// assert_eq!(guadalajara.lat(), 20.6736);
///
/// assert!(GeoPoint::new(91.0, 0.0).is_err());
/// assert!(GeoPoint::new(0.0, -180.5).is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct GeoPoint {
    lat: f64,
    lon: f64,
}

impl GeoPoint {
    /// Create a point, validating both coordinates.
    pub fn new(lat: f64, lon: f64) -> Result<Self, InvalidGeoPoint> {
        if !(-90.0..=90.0).contains(&lat) {
            return Err(InvalidGeoPoint::Latitude(lat));
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(InvalidGeoPoint::Longitude(lon));
        }
        Ok(Self { lat, lon })
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Bit patterns used for equality and hashing.
    ///
    /// `-0.0` and `0.0` compare equal as floats, so both map to the same key.
    fn key(&self) -> (u64, u64) {
        fn bits(v: f64) -> u64 {
            if v == 0.0 { 0.0f64.to_bits() } else { v.to_bits() }
        }
        (bits(self.lat), bits(self.lon))
    }
}

// NaN is rejected by `new`, so bitwise equality is a true equivalence.
impl PartialEq for GeoPoint {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for GeoPoint {}

impl Hash for GeoPoint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lat, self.lon)
    }
}
