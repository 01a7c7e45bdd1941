//! The `Elevator` capability trait and cabin notifications.

use lift_core::{CabinState, Call, Direction, Floor};

use crate::CabinResult;

/// What a dispatcher and its strategies may see of, and do to, a cabin.
///
/// [`Cabin`][crate::Cabin] is the production implementation; tests and
/// alternative cabin models can substitute their own without touching the
/// dispatcher.  The trait is object-safe so observers receive `&dyn Elevator`.
pub trait Elevator {
    /// Human-readable label, unique within a registry.
    fn id(&self) -> &str;

    /// Last floor the cabin stopped at.
    fn current_floor(&self) -> Floor;

    /// Current travel direction; `None` while idle or arriving.
    fn direction(&self) -> Direction;

    fn state(&self) -> CabinState;

    /// `true` while an active target is set or either queue is non-empty.
    fn is_busy(&self) -> bool;

    /// Externally set capacity flag.
    fn is_full(&self) -> bool;

    /// Accept a hall call routed by the dispatcher.
    fn assign_hall_call(
        &mut self,
        call:     &Call,
        observer: &mut dyn CabinObserver,
    ) -> CabinResult<()>;

    /// Accept an in-cabin floor request.  Same queueing rules as hall calls.
    fn accept_car_call(
        &mut self,
        floor:    Floor,
        observer: &mut dyn CabinObserver,
    ) -> CabinResult<()>;

    /// `|current_floor - target| * floor_travel_time`.  Ignores queue depth
    /// and heading.
    fn estimate_rough_eta(&self, target: Floor, floor_travel_time: f64) -> f64 {
        (self.current_floor() - target).abs() as f64 * floor_travel_time
    }

    /// Every pending target in priority order: active target, then the
    /// up-queue ascending, then the down-queue descending.
    fn targets(&self) -> Vec<Floor>;

    fn pending_count(&self) -> usize {
        self.targets().len()
    }
}

/// Notifications fired synchronously by a cabin, inside the call or tick that
/// caused them.
///
/// Both methods default to no-ops.  Implementations must not block.
pub trait CabinObserver {
    /// A target was added, or the active target was consumed.
    fn on_queue_changed(&mut self, _cabin: &dyn Elevator) {}

    /// The cabin stopped at `floor`.
    fn on_arrived(&mut self, _cabin: &dyn Elevator, _floor: Floor) {}
}

/// A [`CabinObserver`] that ignores every notification.
pub struct NoopCabinObserver;

impl CabinObserver for NoopCabinObserver {}
