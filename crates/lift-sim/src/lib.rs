//! `lift-sim` — tick driver for the lift simulator.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Script    — calls scripted for this tick are enqueued (hall) or handed
//!                 straight to their cabin (car).
//!   ② Motion    — every cabin advances by dt in registration order, firing
//!                 on_arrived / on_queue_changed as it goes.
//!   ③ Dispatch  — if calls are still pending, one scheduling pass retries
//!                 them against the cabins' new state.
//!   ④ Snapshot  — every snapshot_interval_ticks, observers see all cabins.
//! ```
//!
//! Everything runs synchronously on the caller's thread; notifications are
//! delivered inside the tick that causes them.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lift_core::{CabinConfig, SimConfig};
//! use lift_dispatch::NearestByDistance;
//! use lift_sim::{LogObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(SimConfig::default(), NearestByDistance::default())
//!     .cabin(CabinConfig::new("A"))
//!     .cabin(CabinConfig::new("B").starting_at(10))
//!     .build()?;
//! sim.hall_call(5, Direction::Up, &mut LogObserver::default())?;
//! sim.run(&mut LogObserver::default())?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod script;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{LogObserver, NoopObserver, SimObserver};
pub use script::{CallScript, ScriptedCall, load_script_csv, load_script_reader};
pub use sim::Sim;
