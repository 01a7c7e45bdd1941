//! `lift-dispatch` — hall-call assignment.
//!
//! # Crate layout
//!
//! | Module            | Contents                                                   |
//! |-------------------|------------------------------------------------------------|
//! | [`strategy`]      | `DispatchStrategy` trait                                   |
//! | [`nearest`]       | `NearestByDistance` — rough ETA with on-the-way bonus      |
//! | [`least_loaded`]  | `LeastLoaded` — fewest pending targets first               |
//! | [`dispatcher`]    | `Dispatcher<S>`, `DispatchObserver`                        |
//! | [`error`]         | `DispatchError`, `DispatchResult<T>`                       |
//!
//! # Scheduling pass
//!
//! ```text
//! n = pending.len()                      // calls enqueued mid-pass wait
//! repeat n times:
//!   call = pending.pop_front()
//!   match strategy.pick(call, registry.cabins()):
//!     Some(id) → cabin.assign_hall_call(call) → on_assigned
//!     None     → pending.push_back(call)  // retried next pass
//! ```
//!
//! The strategy is a type parameter, so swapping `NearestByDistance` for
//! `LeastLoaded` (or an application strategy) never touches the dispatcher.

pub mod dispatcher;
pub mod error;
pub mod least_loaded;
pub mod nearest;
pub mod strategy;

#[cfg(test)]
mod tests;

pub use dispatcher::{DispatchObserver, Dispatcher};
pub use error::{DispatchError, DispatchResult};
pub use least_loaded::LeastLoaded;
pub use nearest::NearestByDistance;
pub use strategy::DispatchStrategy;
