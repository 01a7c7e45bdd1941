//! Simulation time model.
//!
//! # Design
//!
//! Time is a monotonically increasing `Tick` counter plus a running total of
//! simulated seconds held in `SimClock`.  Fixed-step runs advance both by
//! `tick_duration_secs`; variable-step runs pass their own `dt` to
//! [`SimClock::advance_by`].
//!
//! The tick number is the canonical ordering key (call timestamps, scripted
//! calls); seconds only drive cabin motion.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Ticks elapsed from `earlier` to `self`, saturating at zero.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Tracks the current tick and the simulated seconds elapsed since tick 0.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// Default step length in seconds for fixed-step runs.
    pub tick_duration_secs: f64,
    /// The current tick.
    pub current_tick: Tick,
    /// Simulated seconds since tick 0 (sum of every step's `dt`).
    pub elapsed_secs: f64,
}

impl SimClock {
    pub fn new(tick_duration_secs: f64) -> Self {
        Self {
            tick_duration_secs,
            current_tick: Tick::ZERO,
            elapsed_secs: 0.0,
        }
    }

    /// Advance by one fixed-length tick.
    #[inline]
    pub fn advance(&mut self) {
        self.advance_by(self.tick_duration_secs);
    }

    /// Advance by one tick of length `dt` seconds.
    #[inline]
    pub fn advance_by(&mut self, dt: f64) {
        self.current_tick = Tick(self.current_tick.0 + 1);
        self.elapsed_secs += dt;
    }

    /// Break elapsed time into (minutes, seconds) for log lines.
    pub fn elapsed_ms(&self) -> (u64, f64) {
        let total = self.elapsed_secs.max(0.0);
        let minutes = (total / 60.0).floor();
        (minutes as u64, total - minutes * 60.0)
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (m, s) = self.elapsed_ms();
        write!(f, "{} ({:02}:{:05.2})", self.current_tick, m, s)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// Typically loaded from a JSON building description by the application crate
/// and passed to the simulation builder.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Seconds per fixed tick.  Default: 0.1.
    pub tick_duration_secs: f64,

    /// Total ticks `Sim::run` simulates.
    pub total_ticks: u64,

    /// Master RNG seed for synthetic traffic.  Same seed, same run.
    pub seed: u64,

    /// Emit a cabin snapshot every N ticks.  0 disables snapshots.
    pub snapshot_interval_ticks: u64,
}

impl SimConfig {
    /// The tick at which the simulation ends (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    /// Construct a `SimClock` pre-configured for this run.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.tick_duration_secs)
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            tick_duration_secs:      0.1,
            total_ticks:             600,
            seed:                    42,
            snapshot_interval_ticks: 10,
        }
    }
}
