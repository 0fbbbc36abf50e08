//! Read-only view handed to renderers.

use ltc_core::{Coordinate, Tick, TruckId, WaitingAreaId};
use ltc_fleet::{RedirectTarget, TruckStatus};
use ltc_zone::{WaitingArea, Zone};

/// One non-departed truck as a renderer sees it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TruckView {
    pub id:             TruckId,
    pub coordinates:    Coordinate,
    pub zone:           Zone,
    pub status:         TruckStatus,
    pub redirect_to:    RedirectTarget,
    pub queue_position: Option<usize>,
    pub waiting_area:   Option<WaitingAreaId>,
    pub unload_timer:   u32,
}

/// Post-tick state of the whole simulation.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    pub tick:            Tick,
    pub paused:          bool,
    pub trucks:          Vec<TruckView>,
    pub docks_available: u32,
    pub max_docks:       u32,
    pub waiting_areas:   Vec<WaitingArea>,
    pub queue:           Vec<TruckId>,
}

/// Headline figures for the dashboard status cards.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusSummary {
    pub active:          usize,
    pub in_buffer:       usize,
    pub waiting:         usize,
    pub en_route_buffer: usize,
    pub unloading:       usize,
    pub docks_available: u32,
    pub max_docks:       u32,
}

impl Snapshot {
    pub fn truck(&self, id: TruckId) -> Option<&TruckView> {
        self.trucks.iter().find(|t| t.id == id)
    }

    /// Non-departed trucks currently in `zone`.
    pub fn in_zone(&self, zone: Zone) -> impl Iterator<Item = &TruckView> + '_ {
        self.trucks.iter().filter(move |t| t.zone == zone)
    }

    pub fn summary(&self) -> StatusSummary {
        let count = |status| self.trucks.iter().filter(|t| t.status == status).count();
        let in_buffer = |status| {
            self.in_zone(Zone::Buffer)
                .filter(|t| t.status == status)
                .count()
        };
        StatusSummary {
            active:          self.trucks.len(),
            in_buffer:       self.in_zone(Zone::Buffer).count(),
            waiting:         in_buffer(TruckStatus::Waiting),
            en_route_buffer: in_buffer(TruckStatus::EnRoute),
            unloading:       count(TruckStatus::Unloading),
            docks_available: self.docks_available,
            max_docks:       self.max_docks,
        }
    }
}
