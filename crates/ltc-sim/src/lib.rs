//! `ltc-sim` — the truck/zone simulation engine.
//!
//! # Tick
//!
//! ```text
//! if paused: return
//! for truck in fleet (id order, departed trucks skipped):
//!   ① queue position  : index in the dock queue
//!   ② zone            : classified from distance to the warehouse center
//!   ③ waiting area    : Buffer Zone trucks without one get the best free slot
//!   ④ dock admission  : queue front, dock free, waiting → heading to dock
//!   ⑤ warehouse entry : in the Warehouse Zone → unloading (needs a dock)
//!   ⑥ countdown       : unloading timer hits zero → departed, dock freed
//!   ⑦ movement        : parked trucks hold, others close 5 % of the gap
//! ```
//!
//! Trucks are processed strictly one after another, so whichever comes
//! first in id order wins any contested waiting area or dock.
//!
//! # Scheduling
//!
//! [`Engine::tick`] takes `&mut self`: one tick runs to completion before the
//! next can start.  Whatever drives the engine on a timer must own it from a
//! single task or thread (the dashboard demo does this with one Tokio task
//! fed by a command channel).
//!
//! # Cargo features
//!
//! | Feature | Effect                                                |
//! |---------|-------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on snapshots.       |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ltc_core::SimConfig;
//! use ltc_sim::{EngineBuilder, NoopObserver};
//!
//! let mut engine = EngineBuilder::new(SimConfig::default()).build()?;
//! engine.run_until_idle(1_000, &mut NoopObserver);
//! ```

pub mod builder;
pub mod engine;
pub mod error;
pub mod observer;
pub mod report;
pub mod setup;
pub mod snapshot;

#[cfg(test)]
mod tests;

pub use builder::EngineBuilder;
pub use engine::Engine;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use report::{TickReport, TruckEvent};
pub use snapshot::{Snapshot, StatusSummary, TruckView};
