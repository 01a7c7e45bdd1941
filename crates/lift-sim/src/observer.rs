//! Simulation observer trait for progress reporting and data collection.

use log::{debug, info};

use lift_cabin::{CabinError, CabinObserver, CabinRegistry, Elevator};
use lift_core::{Call, Floor, Tick};
use lift_dispatch::DispatchObserver;

/// Callbacks invoked by [`Sim`][crate::Sim] at tick boundaries, on top of the
/// cabin and dispatcher notifications inherited from [`DispatchObserver`].
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — arrival counter
///
/// ```rust,ignore
/// struct Arrivals(usize);
///
/// impl CabinObserver for Arrivals {
///     fn on_arrived(&mut self, _cabin: &dyn Elevator, _floor: Floor) {
///         self.0 += 1;
///     }
/// }
/// impl DispatchObserver for Arrivals {}
/// impl SimObserver for Arrivals {}
/// ```
pub trait SimObserver: DispatchObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the end of each tick with the number of hall calls still
    /// waiting for a cabin.
    fn on_tick_end(&mut self, _tick: Tick, _pending_calls: usize) {}

    /// Called every `config.snapshot_interval_ticks` ticks with read-only
    /// access to every cabin.
    fn on_snapshot(&mut self, _tick: Tick, _cabins: &CabinRegistry) {}

    /// Called once after the final tick of [`Sim::run`][crate::Sim::run].
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl CabinObserver for NoopObserver {}
impl DispatchObserver for NoopObserver {}
impl SimObserver for NoopObserver {}

/// Logs every notification through the `log` facade.
///
/// Arrivals and assignments go to `info!`, queue changes to `debug!`.
#[derive(Default)]
pub struct LogObserver {
    tick: Tick,
}

impl CabinObserver for LogObserver {
    fn on_queue_changed(&mut self, cabin: &dyn Elevator) {
        debug!("{} cabin {} targets {:?}", self.tick, cabin.id(), cabin.targets());
    }

    fn on_arrived(&mut self, cabin: &dyn Elevator, floor: Floor) {
        info!("{} cabin {} arrived at floor {floor}", self.tick, cabin.id());
    }
}

impl DispatchObserver for LogObserver {
    fn on_enqueued(&mut self, call: &Call) {
        info!("{} hall call {call} enqueued", self.tick);
    }

    fn on_assigned(&mut self, call: &Call, cabin: &dyn Elevator) {
        info!("{} hall call {call} assigned to cabin {}", self.tick, cabin.id());
    }

    fn on_rejected(&mut self, call: &Call, cabin: &dyn Elevator, error: &CabinError) {
        info!("{} hall call {call} rejected by cabin {}: {error}", self.tick, cabin.id());
    }
}

impl SimObserver for LogObserver {
    fn on_tick_start(&mut self, tick: Tick) {
        self.tick = tick;
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        info!("simulation finished at {final_tick}");
    }
}
