//! Exponential approach toward a target.

use ltc_core::Coordinate;

/// Move `from` by `rate` of the remaining offset toward `to`.
#[inline]
pub fn approach(from: Coordinate, to: Coordinate, rate: f64) -> Coordinate {
    let (d_lat, d_lon) = from.offset_to(to);
    Coordinate::new(from.lat + d_lat * rate, from.lon + d_lon * rate)
}

/// `true` once both axis offsets between `at` and `target` are under
/// `epsilon`.
#[inline]
pub fn has_arrived(at: Coordinate, target: Coordinate, epsilon: f64) -> bool {
    let (d_lat, d_lon) = at.offset_to(target);
    d_lat.abs() < epsilon && d_lon.abs() < epsilon
}
