//! Coordinate type and planar distance helpers.
//!
//! The simulation measures everything in raw coordinate degrees: zone radii,
//! separation thresholds and the arrival epsilon are all degree quantities.
//! Distances are plain Euclidean distances in `(lat, lon)` space, which is
//! adequate at the sub-kilometre scale of a warehouse yard.

use std::f64::consts::PI;

/// A latitude/longitude pair in degrees.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Point at `dist` degrees from `center` along `angle` radians.
    ///
    /// `cos(angle)` drives latitude and `sin(angle)` drives longitude.
    #[inline]
    pub fn polar(center: Coordinate, angle: f64, dist: f64) -> Self {
        Self {
            lat: center.lat + dist * angle.cos(),
            lon: center.lon + dist * angle.sin(),
        }
    }

    /// `(d_lat, d_lon)` from `self` to `other`.
    #[inline]
    pub fn offset_to(self, other: Coordinate) -> (f64, f64) {
        (other.lat - self.lat, other.lon - self.lon)
    }

    /// Straight-line distance in degree units.
    #[inline]
    pub fn distance(self, other: Coordinate) -> f64 {
        let (d_lat, d_lon) = self.offset_to(other);
        d_lat.hypot(d_lon)
    }

    /// Bearing from `self` to `other` as `atan2(d_lat, d_lon)`, in `(-π, π]`.
    #[inline]
    pub fn bearing_to(self, other: Coordinate) -> f64 {
        let (d_lat, d_lon) = self.offset_to(other);
        d_lat.atan2(d_lon)
    }

    /// `true` if both coordinates are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.lat.is_finite() && self.lon.is_finite()
    }
}

/// Absolute difference between two angles, wrapped into `[0, π]`.
pub fn angle_between(a: f64, b: f64) -> f64 {
    let diff = (a - b).rem_euclid(2.0 * PI);
    if diff > PI { 2.0 * PI - diff } else { diff }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}
