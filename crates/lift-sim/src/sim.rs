//! The `Sim` struct and its tick loop.

use log::{trace, warn};

use lift_cabin::{Cabin, CabinRegistry, Elevator};
use lift_core::{Direction, Floor, SimClock, SimConfig, Tick};
use lift_dispatch::{DispatchStrategy, Dispatcher};

use crate::{CallScript, ScriptedCall, SimError, SimObserver, SimResult};

/// The main simulation runner.
///
/// `Sim<S>` owns the cabins, the dispatcher, and the call script, and drives
/// the tick loop:
///
/// 1. **Script**: calls due at this tick are injected.  Hall calls go through
///    the dispatcher (and may be assigned on the spot); car calls go straight
///    to their cabin.
/// 2. **Motion**: every cabin ticks by `dt` in registration order.
/// 3. **Dispatch**: one scheduling pass if hall calls are still waiting.
/// 4. **Snapshot**: every `snapshot_interval_ticks`, observers see the
///    registry.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<S: DispatchStrategy> {
    /// Global configuration (total ticks, tick duration, …).
    pub config: SimConfig,

    /// Simulation clock: current tick plus simulated seconds.
    pub clock: SimClock,

    /// Every cabin in the building, in registration order.
    pub registry: CabinRegistry,

    /// Pending hall calls and the strategy that places them.
    pub dispatcher: Dispatcher<S>,

    /// Calls still to be injected, keyed by tick.
    pub script: CallScript,
}

impl<S: DispatchStrategy> Sim<S> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run the simulation from the current tick to `config.end_tick()`.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        while self.clock.current_tick < self.config.end_tick() {
            let dt = self.clock.tick_duration_secs;
            self.step(dt, observer)?;
        }
        observer.on_sim_end(self.clock.current_tick);
        Ok(())
    }

    /// Run exactly `n` fixed-length ticks from the current position (ignores
    /// `end_tick`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            let dt = self.clock.tick_duration_secs;
            self.step(dt, observer)?;
        }
        Ok(())
    }

    /// Run one tick of `dt` seconds.
    ///
    /// # Errors
    ///
    /// [`SimError::Config`] if `dt` is negative or not finite.
    pub fn step<O: SimObserver>(&mut self, dt: f64, observer: &mut O) -> SimResult<()> {
        if !dt.is_finite() || dt < 0.0 {
            return Err(SimError::Config(format!("dt must be non-negative, got {dt}")));
        }

        let now = self.clock.current_tick;
        observer.on_tick_start(now);
        self.process_tick(now, dt, observer);

        let interval = self.config.snapshot_interval_ticks;
        if interval > 0 && now.0.is_multiple_of(interval) {
            observer.on_snapshot(now, &self.registry);
        }
        observer.on_tick_end(now, self.dispatcher.pending_len());

        self.clock.advance_by(dt);
        Ok(())
    }

    /// Make a hall call at the current tick.
    ///
    /// # Errors
    ///
    /// [`SimError::Dispatch`] if `direction` is `None` or `floor` is negative.
    pub fn hall_call<O: SimObserver>(
        &mut self,
        floor:     Floor,
        direction: Direction,
        observer:  &mut O,
    ) -> SimResult<()> {
        let now = self.clock.current_tick;
        self.dispatcher
            .enqueue_hall_call(floor, direction, now, &mut self.registry, observer)?;
        Ok(())
    }

    /// Press `floor` inside the cabin labelled `cabin`.
    ///
    /// # Errors
    ///
    /// - [`SimError::UnknownCabin`] if no cabin carries `cabin`.
    /// - [`SimError::Cabin`] if the cabin rejects `floor`.
    pub fn car_call<O: SimObserver>(&mut self, cabin: &str, floor: Floor, observer: &mut O) -> SimResult<()> {
        let target = self
            .registry
            .find(cabin)
            .and_then(|id| self.registry.get_mut(id))
            .ok_or_else(|| SimError::UnknownCabin(cabin.to_owned()))?;
        target.accept_car_call(floor, &mut *observer)?;
        Ok(())
    }

    /// Look up a cabin by label.
    pub fn cabin(&self, label: &str) -> Option<&Cabin> {
        self.registry.find(label).and_then(|id| self.registry.get(id))
    }

    /// Hall calls still waiting for a cabin.
    pub fn pending_calls(&self) -> usize {
        self.dispatcher.pending_len()
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn process_tick<O: SimObserver>(&mut self, now: Tick, dt: f64, observer: &mut O) {
        // ── Phase 1: scripted calls ───────────────────────────────────────
        for scripted in self.script.drain_due(now) {
            match scripted {
                ScriptedCall::Hall(call) => {
                    self.dispatcher.enqueue(call, &mut self.registry, observer);
                }
                ScriptedCall::Car { cabin, floor } => {
                    // Labels were checked at build time; a rejected floor is
                    // logged and the run goes on.
                    if let Err(e) = self.car_call(&cabin, floor, observer) {
                        warn!("{now} scripted car call {cabin}->{floor} dropped: {e}");
                    }
                }
            }
        }

        // ── Phase 2: cabin motion ─────────────────────────────────────────
        for cabin in self.registry.cabins_mut() {
            cabin.tick(dt, &mut *observer);
        }

        // ── Phase 3: dispatch pass ────────────────────────────────────────
        if self.dispatcher.has_pending() {
            let placed = self.dispatcher.try_assign(&mut self.registry, observer);
            trace!("{now} dispatch pass placed {placed} call(s)");
        }
    }
}
