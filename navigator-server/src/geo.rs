//! Great-circle distance.
//!
//! Uses the haversine formula on a spherical Earth. Accurate to well
//! under 1% for the distances this service estimates, and always
//! available since it needs no road data.

use crate::domain::GeoPoint;

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two points, in kilometres.
///
/// Symmetric in its arguments and zero for identical points.
///
/// ```
/// use navigator_server::domain::GeoPoint;
/// use navigator_server::geo::distance_km;
///
/// let a = GeoPoint::new(0.0, 0.0).unwrap();
/// let b = GeoPoint::new(0.0, 90.0).unwrap();
/// assert!((distance_km(&a, &b) - 10007.54).abs() < 0.01);
/// ```
pub fn distance_km(p1: &GeoPoint, p2: &GeoPoint) -> f64 {
    let lat1 = p1.lat().to_radians();
    let lat2 = p2.lat().to_radians();
    // Absolute deltas keep the result bit-identical when the points swap.
    let delta_lat = (p2.lat() - p1.lat()).abs().to_radians();
    let delta_lon = (p2.lon() - p1.lon()).abs().to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
    // Rounding can push near-antipodal inputs a hair above 1.
    let a = a.min(1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}
