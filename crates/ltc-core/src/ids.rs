//! Strongly typed identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.  Trucks are numbered from 1 (the
//! dashboard shows "Truck #1" for the first truck) while waiting areas are
//! numbered from 0; `.index()` hides that difference when indexing dense
//! `Vec`s.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
///
/// `$base` is the value of the first valid ID; `index()` subtracts it.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty) from $base:literal, $label:literal;) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// First valid ID.
            pub const FIRST: $name = $name($base);

            /// Dense zero-based position for direct `Vec` indexing.
            ///
            /// Only meaningful for ids at or above `FIRST`; lookups keyed by
            /// caller-supplied ids go through `checked_index`.
            #[inline(always)]
            pub fn index(self) -> usize {
                (self.0 - $base) as usize
            }

            /// Like [`index`](Self::index), but `None` for ids below `FIRST`.
            #[inline(always)]
            pub fn checked_index(self) -> Option<usize> {
                self.0.checked_sub($base).map(|i| i as usize)
            }

            /// Inverse of [`index`](Self::index).
            #[inline(always)]
            pub fn from_index(index: usize) -> Self {
                $name(index as $inner + $base)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($label, " #{}"), self.0)
            }
        }
    };
}

typed_id! {
    /// Identity of a simulated truck, stable for the life of a run.
    pub struct TruckId(u32) from 1, "Truck";
}

typed_id! {
    /// Index of a waiting area in the Buffer Zone.
    pub struct WaitingAreaId(u32) from 0, "Waiting Area";
}
