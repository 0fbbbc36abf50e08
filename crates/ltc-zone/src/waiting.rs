//! `WaitingAreas` — Buffer Zone slots and who holds them.
//!
//! Ownership is kept in two flat tables instead of object back-references:
//!
//! - `occupied[area]`  — occupancy flag per waiting area;
//! - `assigned[truck]` — the area a truck holds, if any (by `TruckId::index`).
//!
//! Both tables change together, only through [`allocate`](WaitingAreas::allocate),
//! [`assign`](WaitingAreas::assign) and [`release`](WaitingAreas::release),
//! so an area is occupied exactly when one truck's entry points at it.

use std::f64::consts::PI;

use ltc_core::geo::angle_between;
use ltc_core::{Coordinate, TruckId, WaitingAreaId};

use crate::{ZoneError, ZoneResult};

/// Read-only view of one waiting area.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WaitingArea {
    pub id:       WaitingAreaId,
    pub point:    Coordinate,
    pub occupied: bool,
}

/// The set of waiting areas plus the truck → area ownership table.
#[derive(Clone, Debug, Default)]
pub struct WaitingAreas {
    points:   Vec<Coordinate>,
    occupied: Vec<bool>,
    assigned: Vec<Option<WaitingAreaId>>,
}

impl WaitingAreas {
    /// Create free areas at `points`, tracking ownership for `truck_count`
    /// trucks (`TruckId(1)..=TruckId(truck_count)`).
    pub fn new(points: Vec<Coordinate>, truck_count: usize) -> Self {
        let n = points.len();
        Self {
            points,
            occupied: vec![false; n],
            assigned: vec![None; truck_count],
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn point(&self, area: WaitingAreaId) -> Option<Coordinate> {
        self.points.get(area.index()).copied()
    }

    pub fn is_occupied(&self, area: WaitingAreaId) -> bool {
        self.occupied.get(area.index()).copied().unwrap_or(false)
    }

    pub fn free_count(&self) -> usize {
        self.occupied.iter().filter(|o| !**o).count()
    }

    /// The area `truck` currently holds.
    pub fn held_by(&self, truck: TruckId) -> Option<WaitingAreaId> {
        self.assigned.get(truck.checked_index()?).copied().flatten()
    }

    /// The truck currently holding `area`.
    pub fn holder(&self, area: WaitingAreaId) -> Option<TruckId> {
        self.assigned
            .iter()
            .position(|a| *a == Some(area))
            .map(TruckId::from_index)
    }

    /// Best unoccupied area for a truck at `from` approaching on `heading`.
    ///
    /// Each free area is scored by its distance from the truck, inflated by
    /// how far the bearing to it turns away from the heading:
    ///
    ///   adjusted = distance * (1 + angle_diff / π),   angle_diff ∈ [0, π]
    ///
    /// so an area straight ahead costs its plain distance and one directly
    /// behind costs double.  Lowest score wins; ties go to the lower id.
    pub fn best_free_for(&self, from: Coordinate, heading: f64) -> Option<WaitingAreaId> {
        let mut best: Option<(WaitingAreaId, f64)> = None;
        for (i, point) in self.points.iter().enumerate() {
            if self.occupied[i] {
                continue;
            }
            let dist       = from.distance(*point);
            let angle_diff = angle_between(from.bearing_to(*point), heading);
            let adjusted   = dist * (1.0 + angle_diff / PI);
            if best.is_none_or(|(_, score)| adjusted < score) {
                best = Some((WaitingAreaId::from_index(i), adjusted));
            }
        }
        best.map(|(id, _)| id)
    }

    /// Give `truck` the best free area, if there is one.
    ///
    /// Returns `None` when every area is occupied, when `truck` already
    /// holds an area, or when `truck` is not tracked.  A `None` is an
    /// ordinary outcome: the caller retries on a later tick.
    pub fn allocate(&mut self, truck: TruckId, from: Coordinate, heading: f64) -> Option<WaitingAreaId> {
        let slot = truck.checked_index()?;
        if !matches!(self.assigned.get(slot), Some(None)) {
            return None;
        }
        let area = self.best_free_for(from, heading)?;
        self.occupied[area.index()] = true;
        self.assigned[slot] = Some(area);
        Some(area)
    }

    /// Give `truck` a specific `area`.
    pub fn assign(&mut self, truck: TruckId, area: WaitingAreaId) -> ZoneResult<()> {
        if area.index() >= self.points.len() {
            return Err(ZoneError::UnknownArea(area));
        }
        let slot = truck.checked_index().ok_or(ZoneError::UnknownTruck(truck))?;
        let held = self
            .assigned
            .get(slot)
            .copied()
            .ok_or(ZoneError::UnknownTruck(truck))?;
        if let Some(held) = held {
            return Err(ZoneError::AlreadyHolding { truck, area: held });
        }
        if let Some(holder) = self.holder(area) {
            return Err(ZoneError::Occupied { area, holder });
        }
        self.occupied[area.index()] = true;
        self.assigned[slot] = Some(area);
        Ok(())
    }

    /// Return `truck`'s area to the pool.  Returns the released area, or
    /// `None` if the truck held nothing.
    pub fn release(&mut self, truck: TruckId) -> Option<WaitingAreaId> {
        let area = self.assigned.get_mut(truck.checked_index()?)?.take()?;
        self.occupied[area.index()] = false;
        Some(area)
    }

    /// Iterate all areas in id order.
    pub fn iter(&self) -> impl Iterator<Item = WaitingArea> + '_ {
        self.points
            .iter()
            .zip(&self.occupied)
            .enumerate()
            .map(|(i, (point, occupied))| WaitingArea {
                id:       WaitingAreaId::from_index(i),
                point:    *point,
                occupied: *occupied,
            })
    }

    /// `true` if every occupied area has exactly one holder and every held
    /// area is marked occupied.
    pub fn is_consistent(&self) -> bool {
        let mut holders = vec![0usize; self.points.len()];
        for area in self.assigned.iter().flatten() {
            match holders.get_mut(area.index()) {
                Some(n) => *n += 1,
                None => return false,
            }
        }
        holders
            .iter()
            .zip(&self.occupied)
            .all(|(n, occ)| (*n == 1 && *occ) || (*n == 0 && !*occ))
    }
}
