//! Per-truck state.

use std::fmt;

use ltc_core::{Coordinate, TruckId};
use ltc_zone::Zone;

/// The controlled narrative state of a truck.
///
/// ```text
/// En Route ──▶ En Route (redirected) ──▶ Waiting ──▶ Heading to Dock ──▶ Unloading ──▶ Departed
///     └───────────────────────────────────────────────────────────────────▶ Unloading
/// ```
///
/// `Departed` is terminal.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TruckStatus {
    EnRoute,
    HeadingToDock,
    Waiting,
    Unloading,
    Departed,
}

impl TruckStatus {
    pub fn label(self) -> &'static str {
        match self {
            TruckStatus::EnRoute       => "En Route",
            TruckStatus::HeadingToDock => "Heading to Dock",
            TruckStatus::Waiting       => "Waiting",
            TruckStatus::Unloading     => "Unloading",
            TruckStatus::Departed      => "Departed",
        }
    }

    /// Parked trucks hold their position instead of moving.
    #[inline]
    pub fn is_parked(self) -> bool {
        matches!(self, TruckStatus::Waiting | TruckStatus::Unloading)
    }
}

impl fmt::Display for TruckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Where a truck is currently being sent.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RedirectTarget {
    /// Not yet routed; the truck drives toward the warehouse center.
    Checking,
    /// Routed to the waiting area it holds.
    WaitingArea,
    /// Routed to a named zone.
    Zone(Zone),
}

impl RedirectTarget {
    pub const WAREHOUSE: RedirectTarget = RedirectTarget::Zone(Zone::Warehouse);

    pub fn label(self) -> &'static str {
        match self {
            RedirectTarget::Checking    => "Checking...",
            RedirectTarget::WaitingArea => "Waiting Area",
            RedirectTarget::Zone(z)     => z.label(),
        }
    }
}

impl fmt::Display for RedirectTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One simulated truck.
///
/// The waiting area a truck holds is not stored here; it lives in the
/// ownership table of [`ltc_zone::WaitingAreas`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Truck {
    pub id:          TruckId,
    pub coordinates: Coordinate,
    pub status:      TruckStatus,
    /// Recomputed every tick from the distance to the warehouse center.
    pub zone:        Zone,
    pub redirect_to: RedirectTarget,
    /// Ticks of unloading left.  Meaningful only while `Unloading`.
    pub unload_timer: u32,
    /// Index in the dock queue, recomputed every tick; `None` once dequeued.
    pub queue_position: Option<usize>,
    /// Angle the truck was placed at; its fixed approach heading.
    pub incoming_direction: f64,
    /// `true` from the moment the truck is granted a dock until it departs.
    pub holds_dock: bool,
}

impl Truck {
    /// A truck that has not yet been routed.
    pub fn en_route(id: TruckId, coordinates: Coordinate, incoming_direction: f64) -> Self {
        Self {
            id,
            coordinates,
            status:             TruckStatus::EnRoute,
            zone:               Zone::Outside,
            redirect_to:        RedirectTarget::Checking,
            unload_timer:       0,
            queue_position:     None,
            incoming_direction,
            holds_dock:         false,
        }
    }

    /// A truck already cleared for the warehouse.
    ///
    /// It has been told where to go but has not been granted a dock yet; it
    /// claims one on reaching the Warehouse Zone.
    pub fn heading_to_dock(id: TruckId, coordinates: Coordinate, incoming_direction: f64) -> Self {
        Self {
            status:      TruckStatus::HeadingToDock,
            zone:        Zone::Approach,
            redirect_to: RedirectTarget::WAREHOUSE,
            ..Self::en_route(id, coordinates, incoming_direction)
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.status != TruckStatus::Departed
    }
}
