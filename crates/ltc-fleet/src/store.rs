//! `Fleet` — dense truck storage.

use ltc_core::TruckId;

use crate::{Truck, TruckStatus};

/// All trucks of a run, in id order.
///
/// `trucks[i].id == TruckId::from_index(i)` always holds, so lookups are
/// direct indexing.  Departed trucks stay in storage; they are only filtered
/// out of [`active`](Self::active).
#[derive(Clone, Debug, Default)]
pub struct Fleet {
    trucks: Vec<Truck>,
}

impl Fleet {
    /// Build from trucks supplied in id order.
    ///
    /// Ids are reassigned densely from `TruckId(1)` so the indexing invariant
    /// cannot be broken by the caller.
    pub fn new(mut trucks: Vec<Truck>) -> Self {
        for (i, truck) in trucks.iter_mut().enumerate() {
            truck.id = TruckId::from_index(i);
        }
        Self { trucks }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.trucks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.trucks.is_empty()
    }

    #[inline]
    pub fn get(&self, id: TruckId) -> Option<&Truck> {
        self.trucks.get(id.checked_index()?)
    }

    #[inline]
    pub fn get_mut(&mut self, id: TruckId) -> Option<&mut Truck> {
        self.trucks.get_mut(id.checked_index()?)
    }

    /// Every truck, departed ones included.
    pub fn iter(&self) -> std::slice::Iter<'_, Truck> {
        self.trucks.iter()
    }

    /// Trucks that have not departed, in id order.
    pub fn active(&self) -> impl Iterator<Item = &Truck> + '_ {
        self.trucks.iter().filter(|t| t.is_active())
    }

    /// Ids of trucks that have not departed, in id order.
    pub fn active_ids(&self) -> Vec<TruckId> {
        self.active().map(|t| t.id).collect()
    }

    /// Number of trucks currently in `status`.
    pub fn count(&self, status: TruckStatus) -> usize {
        self.trucks.iter().filter(|t| t.status == status).count()
    }

    /// `true` once every truck has departed (vacuously true when empty).
    pub fn all_departed(&self) -> bool {
        self.trucks.iter().all(|t| !t.is_active())
    }
}
