//! The `DispatchStrategy` trait — the extension point for assignment policy.

use lift_cabin::Elevator;
use lift_core::{CabinId, Call};

/// Pick the best cabin for a hall call.
///
/// # Example
///
/// ```rust,ignore
/// struct AlwaysFirst;
///
/// impl DispatchStrategy for AlwaysFirst {
///     fn pick<E: Elevator>(&self, _call: &Call, cabins: &[E]) -> Option<CabinId> {
///         (!cabins.is_empty()).then_some(CabinId(0))
///     }
/// }
/// ```
pub trait DispatchStrategy {
    /// Return the chosen cabin's index in `cabins`, or `None` if no cabin is
    /// eligible (always `None` for an empty slice).
    ///
    /// Called with the registry's cabins in registration order; the returned
    /// id indexes that slice.
    fn pick<E: Elevator>(&self, call: &Call, cabins: &[E]) -> Option<CabinId>;
}
