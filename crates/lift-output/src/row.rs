//! Plain data row types written by output backends.

use std::fmt;

use lift_core::{CabinState, Direction, Floor};

/// One cabin's state at a snapshot tick.
#[derive(Debug, Clone, PartialEq)]
pub struct CabinSnapshotRow {
    pub tick:      u64,
    pub cabin:     String,
    pub floor:     Floor,
    /// Vertical offset in distance units.
    pub position:  f64,
    pub state:     CabinState,
    pub direction: Direction,
    /// Active target first, then the up-queue ascending, then the down-queue
    /// descending.
    pub targets:   Vec<Floor>,
}

/// What happened in an [`EventRow`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Enqueued,
    Assigned,
    Rejected,
    Arrived,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EventKind::Enqueued => "enqueued",
            EventKind::Assigned => "assigned",
            EventKind::Rejected => "rejected",
            EventKind::Arrived  => "arrived",
        })
    }
}

/// A single call or cabin event.
#[derive(Debug, Clone, PartialEq)]
pub struct EventRow {
    pub tick:      u64,
    pub event:     EventKind,
    /// Empty for `Enqueued` (no cabin involved yet).
    pub cabin:     Option<String>,
    pub floor:     Floor,
    /// The call's direction; `None` for arrivals.
    pub direction: Direction,
}
