//! `DockQueue` — FIFO dock-access priority.
//!
//! A plain `Vec` is enough: fleets are capped at a handful of trucks and the
//! engine needs positional lookup as well as removal from the middle (a
//! truck that reaches the dock out of turn leaves the queue wherever it is).

use ltc_core::TruckId;

/// Ordered truck ids; the front has first claim on a free dock.
///
/// A truck appears at most once.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DockQueue {
    order: Vec<TruckId>,
}

impl DockQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// `[TruckId(1), …, TruckId(n)]`.
    pub fn sequential(n: usize) -> Self {
        Self {
            order: (0..n).map(TruckId::from_index).collect(),
        }
    }

    /// Append `truck` unless it is already queued.  Returns `true` if added.
    pub fn push_back(&mut self, truck: TruckId) -> bool {
        if self.order.contains(&truck) {
            return false;
        }
        self.order.push(truck);
        true
    }

    /// Zero-based position of `truck`, or `None` if not queued.
    pub fn position(&self, truck: TruckId) -> Option<usize> {
        self.order.iter().position(|t| *t == truck)
    }

    /// Remove `truck` wherever it sits.  Returns `true` if it was queued.
    pub fn remove(&mut self, truck: TruckId) -> bool {
        match self.position(truck) {
            Some(i) => {
                self.order.remove(i);
                true
            }
            None => false,
        }
    }

    pub fn front(&self) -> Option<TruckId> {
        self.order.first().copied()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn as_slice(&self) -> &[TruckId] {
        &self.order
    }
}
