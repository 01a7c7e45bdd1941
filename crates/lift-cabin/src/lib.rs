//! `lift-cabin` — per-cabin scheduling state machine and the cabin registry.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                         |
//! |--------------|------------------------------------------------------------------|
//! | [`queues`]   | `TargetQueues` — ascending up-queue, descending down-queue       |
//! | [`elevator`] | `Elevator` capability trait, `CabinObserver`, `NoopCabinObserver` |
//! | [`cabin`]    | `Cabin` — the FSM advanced once per tick                         |
//! | [`registry`] | `CabinRegistry<E>` — append-only, idempotent registration        |
//! | [`error`]    | `CabinError`, `CabinResult<T>`                                   |
//!
//! # Movement model
//!
//! A cabin holds at most one *active target*.  Whenever it has none, the
//! target-selection pass pulls the nearest floor from one of the two queues:
//!
//! 1. keep the current direction if its queue is non-empty;
//! 2. otherwise take the only non-empty queue;
//! 3. otherwise take the queue whose head is closer (ties go up);
//! 4. otherwise go idle.
//!
//! Each tick the cabin moves `move_speed * dt` towards the target's vertical
//! offset, snapping onto it instead of overshooting.  Reaching it fires
//! [`CabinObserver::on_arrived`], clears the direction, and leaves the cabin
//! `Arriving` for one tick.  The next selection pass therefore starts from
//! rule 2.

pub mod cabin;
pub mod elevator;
pub mod error;
pub mod queues;
pub mod registry;


pub use cabin::{ARRIVAL_TOLERANCE, Cabin};
pub use elevator::{CabinObserver, Elevator, NoopCabinObserver};
pub use error::{CabinError, CabinResult};
pub use queues::TargetQueues;
pub use registry::CabinRegistry;
