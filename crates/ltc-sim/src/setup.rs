//! Randomized initial layout.
//!
//! Waiting areas are scattered first, then trucks.  Truck 1 starts already
//! cleared for the warehouse; every other truck starts unrouted.

use ltc_core::{Coordinate, SimConfig, SimRng, TruckId};
use ltc_fleet::{DockQueue, Fleet, Truck};
use ltc_zone::{WaitingAreas, scatter};
use tracing::debug;

/// Everything `reset` rebuilds.
pub struct InitialState {
    pub fleet:         Fleet,
    pub waiting_areas: WaitingAreas,
    pub queue:         DockQueue,
}

impl InitialState {
    /// Assemble from explicit trucks and waiting-area points.
    pub fn from_parts(trucks: Vec<Truck>, waiting_points: Vec<Coordinate>) -> Self {
        let fleet = Fleet::new(trucks);
        let n = fleet.len();
        Self {
            waiting_areas: WaitingAreas::new(waiting_points, n),
            queue:         DockQueue::sequential(n),
            fleet,
        }
    }

    /// Fresh random layout for `config`.
    pub fn random(config: &SimConfig, rng: &mut SimRng) -> Self {
        let points = waiting_area_points(config, rng);
        let trucks = scatter_trucks(config, rng);
        Self::from_parts(trucks, points)
    }
}

/// Scatter `config.waiting_area_count()` points in the waiting band.
pub fn waiting_area_points(config: &SimConfig, rng: &mut SimRng) -> Vec<Coordinate> {
    let placed = scatter(
        rng,
        config.warehouse_center,
        config.waiting_band,
        config.waiting_area_separation,
        config.waiting_area_count(),
        config.placement_attempts,
    );
    let crowded = placed.iter().filter(|p| !p.spaced).count();
    if crowded > 0 {
        debug!(crowded, "waiting areas placed below minimum separation");
    }
    placed.into_iter().map(|p| p.point).collect()
}

/// Scatter `config.truck_count` trucks in the truck band.
pub fn scatter_trucks(config: &SimConfig, rng: &mut SimRng) -> Vec<Truck> {
    let placed = scatter(
        rng,
        config.warehouse_center,
        config.truck_band,
        config.truck_separation,
        config.truck_count,
        config.placement_attempts,
    );
    placed
        .into_iter()
        .enumerate()
        .map(|(i, p)| {
            let id = TruckId::from_index(i);
            if id == TruckId::FIRST {
                Truck::heading_to_dock(id, p.point, p.angle)
            } else {
                Truck::en_route(id, p.point, p.angle)
            }
        })
        .collect()
}
