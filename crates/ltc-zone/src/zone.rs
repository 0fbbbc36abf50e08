//! Concentric zone rings around the warehouse.

use std::fmt;

use ltc_core::{Coordinate, SimConfig};

/// Which ring a point falls in.  Innermost match wins.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Zone {
    Warehouse,
    Buffer,
    Approach,
    Outside,
}

impl Zone {
    /// Name as shown on the dashboard.
    pub fn label(self) -> &'static str {
        match self {
            Zone::Warehouse => "Warehouse Zone",
            Zone::Buffer    => "Buffer Zone",
            Zone::Approach  => "Approach Zone",
            Zone::Outside   => "Outside",
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The three radii plus the shared center.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ZoneLayout {
    pub center:           Coordinate,
    pub warehouse_radius: f64,
    pub buffer_radius:    f64,
    pub approach_radius:  f64,
}

impl ZoneLayout {
    pub fn new(center: Coordinate, warehouse_radius: f64, buffer_radius: f64, approach_radius: f64) -> Self {
        Self { center, warehouse_radius, buffer_radius, approach_radius }
    }

    pub fn from_config(config: &SimConfig) -> Self {
        Self::new(
            config.warehouse_center,
            config.warehouse_radius,
            config.buffer_radius,
            config.approach_radius,
        )
    }

    /// Classify `point` by its distance to the center.  Boundaries are
    /// inclusive: a point exactly on a ring belongs to that ring.
    pub fn classify(&self, point: Coordinate) -> Zone {
        let d = self.center.distance(point);
        if d <= self.warehouse_radius {
            Zone::Warehouse
        } else if d <= self.buffer_radius {
            Zone::Buffer
        } else if d <= self.approach_radius {
            Zone::Approach
        } else {
            Zone::Outside
        }
    }

    /// `true` if `point` classifies as `zone`.
    #[inline]
    pub fn contains(&self, zone: Zone, point: Coordinate) -> bool {
        self.classify(point) == zone
    }

    /// Outer radius of `zone`; `None` for `Outside`.
    pub fn radius(&self, zone: Zone) -> Option<f64> {
        match zone {
            Zone::Warehouse => Some(self.warehouse_radius),
            Zone::Buffer    => Some(self.buffer_radius),
            Zone::Approach  => Some(self.approach_radius),
            Zone::Outside   => None,
        }
    }
}
