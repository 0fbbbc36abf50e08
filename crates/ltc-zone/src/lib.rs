//! `ltc-zone` — zone rings, placement, and waiting-area ownership.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                     |
//! |---------------|--------------------------------------------------------------|
//! | [`zone`]      | `Zone`, `ZoneLayout` (classification by distance)            |
//! | [`placement`] | `scatter` — separation-constrained best-effort placement     |
//! | [`waiting`]   | `WaitingAreas` — occupancy array + truck → area table        |
//! | [`error`]     | `ZoneError`, `ZoneResult<T>`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod error;
pub mod placement;
pub mod waiting;
pub mod zone;


pub use error::{ZoneError, ZoneResult};
pub use placement::{Placement, scatter};
pub use waiting::{WaitingArea, WaitingAreas};
pub use zone::{Zone, ZoneLayout};
