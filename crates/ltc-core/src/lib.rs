//! `ltc-core` — foundational types for the `ltc` logistics traffic simulation.
//!
//! This crate is a dependency of every other `ltc-*` crate.  It has no
//! `ltc-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `TruckId`, `WaitingAreaId`                            |
//! | [`geo`]         | `Coordinate`, planar degree-space helpers             |
//! | [`time`]        | `Tick`, `SimClock`                                    |
//! | [`rng`]         | `SimRng`                                              |
//! | [`config`]      | `SimConfig`, `Band`                                   |
//! | [`error`]       | `LtcError`, `LtcResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{Band, SimConfig};
pub use error::{LtcError, LtcResult};
pub use geo::Coordinate;
pub use ids::{TruckId, WaitingAreaId};
pub use rng::SimRng;
pub use time::{SimClock, Tick};
