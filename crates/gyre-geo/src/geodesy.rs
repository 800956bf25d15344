//! Spherical bearing, haversine range, and local step integration.

use gyre_core::constants::{EARTH_RADIUS_M, METERS_PER_DEGREE};
use gyre_core::types::GeoPos;

/// Initial bearing (forward azimuth) from `from` to `to` in radians,
/// 0 = North, clockwise, in `[0, 2π)`.
pub fn initial_bearing_rad(from: &GeoPos, to: &GeoPos) -> f64 {
    let lat1 = from.lat.to_radians();
    let lat2 = to.lat.to_radians();
    let dlng = (to.lng - from.lng).to_radians();

    let y = dlng.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * dlng.cos();
    y.atan2(x).rem_euclid(std::f64::consts::TAU)
}

/// Great-circle distance between two positions in meters (haversine).
pub fn haversine_distance_m(a: &GeoPos, b: &GeoPos) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let dlat = (b.lat - a.lat).to_radians();
    let dlng = (b.lng - a.lng).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlng / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_M * h.sqrt().asin()
}

/// Advance `from` by `step_m` meters along `bearing_rad`.
///
/// Equirectangular local approximation, not a great-circle integration;
/// adequate because step sizes are tiny relative to the Earth radius.
pub fn step_from(from: &GeoPos, bearing_rad: f64, step_m: f64) -> GeoPos {
    let dlat = step_m * bearing_rad.cos() / METERS_PER_DEGREE;
    let dlng = step_m * bearing_rad.sin() / (METERS_PER_DEGREE * from.lat.to_radians().cos());
    GeoPos::new(from.lat + dlat, from.lng + dlng)
}
