//! Top-level simulation configuration.
//!
//! Every geometric quantity is in coordinate degrees.  The defaults reproduce
//! the stock dashboard: a one-dock warehouse with a ~100 m yard, a ~500 m
//! buffer ring and a ~1 km approach ring.

use crate::{Coordinate, LtcError, LtcResult};

/// A closed radial interval `[min, max]` measured from the warehouse center.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Band {
    pub min: f64,
    pub max: f64,
}

impl Band {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Map `u ∈ [0, 1)` onto the band.
    #[inline]
    pub fn lerp(self, u: f64) -> f64 {
        self.min + u * (self.max - self.min)
    }

    #[inline]
    pub fn width(self) -> f64 {
        self.max - self.min
    }
}

/// Simulation configuration, typically built from defaults and then
/// overridden from a JSON file or an environment value by the application.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Number of trucks to simulate.  Never above `max_trucks`.
    pub truck_count: usize,

    /// Upper bound applied to `truck_count`.
    pub max_trucks: usize,

    /// Warehouse center; all zone rings are concentric around it.
    pub warehouse_center: Coordinate,

    /// Radius of the Warehouse Zone (innermost ring).
    pub warehouse_radius: f64,

    /// Radius of the Buffer Zone, where waiting areas are placed.
    pub buffer_radius: f64,

    /// Radius of the Approach Zone.  Beyond it a truck is "Outside".
    pub approach_radius: f64,

    /// Radial band waiting areas are scattered in.
    pub waiting_band: Band,

    /// Radial band trucks start in.
    pub truck_band: Band,

    /// Minimum distance between two waiting areas.
    pub waiting_area_separation: f64,

    /// Minimum distance between two starting trucks.
    pub truck_separation: f64,

    /// Candidates tried per placement before settling for the last one.
    pub placement_attempts: u32,

    /// Physical loading docks at the warehouse.
    pub max_docks: u32,

    /// Ticks a truck spends unloading.
    pub unload_ticks: u32,

    /// Fraction of the remaining offset covered per tick.
    pub approach_rate: f64,

    /// Per-axis offset under which a truck counts as arrived.
    pub arrival_epsilon: f64,

    /// Scheduler period in milliseconds.
    pub tick_interval_ms: u64,

    /// Hand observers a snapshot every N ticks.  0 disables snapshots.
    pub output_interval_ticks: u64,

    /// Master RNG seed.  The same seed always produces the same layouts.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            truck_count:             10,
            max_trucks:              10,
            warehouse_center:        Coordinate::new(28.48, 77.02),
            warehouse_radius:        0.001,
            buffer_radius:           0.005,
            approach_radius:         0.01,
            waiting_band:            Band::new(0.002, 0.005),
            truck_band:              Band::new(0.005, 0.010),
            waiting_area_separation: 0.0005,
            truck_separation:        0.001,
            placement_attempts:      100,
            max_docks:               1,
            unload_ticks:            5,
            approach_rate:           0.05,
            arrival_epsilon:         0.0001,
            tick_interval_ms:        300,
            output_interval_ticks:   1,
            seed:                    42,
        }
    }
}

impl SimConfig {
    /// Number of waiting areas to scatter: one per truck, at least one.
    #[inline]
    pub fn waiting_area_count(&self) -> usize {
        self.truck_count.max(1)
    }

    /// Set `truck_count` from an untrusted textual value.
    ///
    /// Leading whitespace is skipped and the leading integer is used; any
    /// trailing text is ignored.  A value with no leading integer counts as
    /// zero.  The result is clamped to `[0, max_trucks]`.
    pub fn with_requested_trucks(mut self, requested: &str) -> Self {
        self.truck_count = clamp_truck_count(requested, self.max_trucks);
        self
    }

    /// Check geometric consistency.
    pub fn validate(&self) -> LtcResult<()> {
        if !self.warehouse_center.is_finite() {
            return Err(LtcError::Config("warehouse center must be finite".into()));
        }
        let radii = [self.warehouse_radius, self.buffer_radius, self.approach_radius];
        if radii.iter().any(|r| !r.is_finite() || *r <= 0.0) {
            return Err(LtcError::Config("zone radii must be positive".into()));
        }
        if !(self.warehouse_radius < self.buffer_radius && self.buffer_radius < self.approach_radius) {
            return Err(LtcError::Config(format!(
                "zone radii must increase outward, got {} / {} / {}",
                self.warehouse_radius, self.buffer_radius, self.approach_radius
            )));
        }
        for (name, band) in [("waiting_band", self.waiting_band), ("truck_band", self.truck_band)] {
            if !(band.min >= 0.0 && band.min < band.max && band.max.is_finite()) {
                return Err(LtcError::Config(format!(
                    "{name} must satisfy 0 <= min < max, got [{}, {}]",
                    band.min, band.max
                )));
            }
        }
        if self.waiting_band.min <= self.warehouse_radius || self.waiting_band.max > self.buffer_radius {
            return Err(LtcError::Config("waiting_band must lie inside the Buffer Zone ring".into()));
        }
        if self.truck_band.min < self.buffer_radius {
            return Err(LtcError::Config("truck_band must start outside the Buffer Zone".into()));
        }
        if self.truck_count > self.max_trucks {
            return Err(LtcError::Config(format!(
                "truck_count {} exceeds max_trucks {}",
                self.truck_count, self.max_trucks
            )));
        }
        if self.max_docks == 0 {
            return Err(LtcError::Config("max_docks must be at least 1".into()));
        }
        if self.unload_ticks == 0 {
            return Err(LtcError::Config("unload_ticks must be at least 1".into()));
        }
        if !(self.approach_rate > 0.0 && self.approach_rate <= 1.0) {
            return Err(LtcError::Config("approach_rate must be in (0, 1]".into()));
        }
        if !(self.arrival_epsilon > 0.0) {
            return Err(LtcError::Config("arrival_epsilon must be positive".into()));
        }
        if self.tick_interval_ms == 0 {
            return Err(LtcError::Config("tick_interval_ms must be positive".into()));
        }
        Ok(())
    }
}

/// Parse the leading integer of `requested` and clamp it to `[0, max]`.
pub fn clamp_truck_count(requested: &str, max: usize) -> usize {
    let s = requested.trim_start();
    let (negative, digits) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if negative || end == 0 {
        return 0;
    }
    // Overlong digit strings saturate rather than fail.
    digits[..end].parse::<usize>().unwrap_or(usize::MAX).min(max)
}
