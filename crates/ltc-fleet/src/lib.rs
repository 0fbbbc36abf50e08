//! `ltc-fleet` — the trucks and the queue they wait in.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                  |
//! |----------------|-----------------------------------------------------------|
//! | [`truck`]      | `Truck`, `TruckStatus`, `RedirectTarget`                  |
//! | [`store`]      | `Fleet` — dense truck storage indexed by `TruckId`        |
//! | [`movement`]   | exponential approach step and arrival test                |
//! | [`queue`]      | `DockQueue` — FIFO dock priority                          |
//!
//! # Movement model
//!
//! Each tick a moving truck covers a fixed fraction of the straight-line
//! offset to its target, so it approaches geometrically and never lands
//! exactly.  Arrival is declared once both axis offsets drop under an
//! epsilon.  Trucks that are parked (waiting or unloading) do not move.

pub mod movement;
pub mod queue;
pub mod store;
pub mod truck;


pub use movement::{approach, has_arrived};
pub use queue::DockQueue;
pub use store::Fleet;
pub use truck::{RedirectTarget, Truck, TruckStatus};
