//! `lift-core` — foundational types for the `lift` elevator simulator.
//!
//! This crate is a dependency of every other `lift-*` crate.  It has no
//! `lift-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `CabinId`, `Floor`                                    |
//! | [`direction`]   | `Direction`, `CabinState`                             |
//! | [`call`]        | `Call` — validated, immutable hall call               |
//! | [`config`]      | `CabinConfig`                                         |
//! | [`time`]        | `Tick`, `SimClock`, `SimConfig`                       |
//! | [`rng`]         | `SimRng` (seeded, for synthetic traffic)              |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public data types.   |

pub mod call;
pub mod config;
pub mod direction;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use call::Call;
pub use config::CabinConfig;
pub use direction::{CabinState, Direction};
pub use error::{CoreError, CoreResult};
pub use ids::{CabinId, Floor};
pub use rng::SimRng;
pub use time::{SimClock, SimConfig, Tick};
