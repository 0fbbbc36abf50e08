//! What happened during one tick.

use std::fmt;

use ltc_core::{Tick, TruckId, WaitingAreaId};
use ltc_zone::Zone;

/// A single state change observed while processing a truck.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TruckEvent {
    /// The truck crossed into another ring.
    ZoneChanged { truck: TruckId, from: Zone, to: Zone },
    /// The truck was given a waiting area and redirected to it.
    AssignedWaitingArea { truck: TruckId, area: WaitingAreaId },
    /// The truck reached its waiting area and parked.
    ArrivedAtWaitingArea { truck: TruckId, area: WaitingAreaId },
    /// The truck left its waiting area with a dock reserved.
    AdmittedToDock { truck: TruckId },
    /// The truck reached the warehouse but no dock was free.
    DockBusy { truck: TruckId },
    /// The truck started unloading.
    BeganUnloading { truck: TruckId },
    /// The truck finished unloading and left.
    Departed { truck: TruckId },
}

impl TruckEvent {
    pub fn truck(&self) -> TruckId {
        match *self {
            TruckEvent::ZoneChanged { truck, .. }
            | TruckEvent::AssignedWaitingArea { truck, .. }
            | TruckEvent::ArrivedAtWaitingArea { truck, .. }
            | TruckEvent::AdmittedToDock { truck }
            | TruckEvent::DockBusy { truck }
            | TruckEvent::BeganUnloading { truck }
            | TruckEvent::Departed { truck } => truck,
        }
    }
}

impl fmt::Display for TruckEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TruckEvent::ZoneChanged { truck, from, to } => write!(f, "{truck}: {from} → {to}"),
            TruckEvent::AssignedWaitingArea { truck, area } => write!(f, "{truck}: redirected to {area}"),
            TruckEvent::ArrivedAtWaitingArea { truck, area } => write!(f, "{truck}: waiting at {area}"),
            TruckEvent::AdmittedToDock { truck } => write!(f, "{truck}: heading to dock"),
            TruckEvent::DockBusy { truck } => write!(f, "{truck}: dock busy, holding"),
            TruckEvent::BeganUnloading { truck } => write!(f, "{truck}: unloading"),
            TruckEvent::Departed { truck } => write!(f, "{truck}: departed"),
        }
    }
}

/// Outcome of one call to [`Engine::tick`](crate::Engine::tick).
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickReport {
    /// The tick that was processed (the clock value before advancing).
    pub tick: Tick,
    /// `true` if the engine was paused and nothing changed.
    pub paused: bool,
    /// Trucks processed (non-departed at the start of the tick).
    pub processed: usize,
    /// Events in processing order.
    pub events: Vec<TruckEvent>,
    /// Docks free after the tick.
    pub docks_available: u32,
}

impl TickReport {
    pub fn departures(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, TruckEvent::Departed { .. }))
            .count()
    }

    /// Events that concern `truck`.
    pub fn for_truck(&self, truck: TruckId) -> impl Iterator<Item = &TruckEvent> + '_ {
        self.events.iter().filter(move |e| e.truck() == truck)
    }
}
