//! `TargetQueues` — the two ordered target sets of one cabin.
//!
//! `BTreeSet` gives O(log n) insert and O(log n) pop from either end, so the
//! up-queue yields its minimum and the down-queue its maximum without keeping
//! two differently-sorted containers.

use std::collections::BTreeSet;

use lift_core::Floor;

/// Pending target floors split by the direction they were queued for.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TargetQueues {
    up:   BTreeSet<Floor>,
    down: BTreeSet<Floor>,
}

impl TargetQueues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `floor` for the upward sweep.  Returns `false` if already present.
    pub fn push_up(&mut self, floor: Floor) -> bool {
        self.up.insert(floor)
    }

    /// Queue `floor` for the downward sweep.  Returns `false` if already present.
    pub fn push_down(&mut self, floor: Floor) -> bool {
        self.down.insert(floor)
    }

    /// Nearest upward target (smallest floor).
    #[inline]
    pub fn peek_up(&self) -> Option<Floor> {
        self.up.first().copied()
    }

    /// Nearest downward target (largest floor).
    #[inline]
    pub fn peek_down(&self) -> Option<Floor> {
        self.down.last().copied()
    }

    pub fn pop_up(&mut self) -> Option<Floor> {
        self.up.pop_first()
    }

    pub fn pop_down(&mut self) -> Option<Floor> {
        self.down.pop_last()
    }

    /// `true` if `floor` waits in either queue.
    pub fn contains(&self, floor: Floor) -> bool {
        self.up.contains(&floor) || self.down.contains(&floor)
    }

    pub fn up_len(&self) -> usize {
        self.up.len()
    }

    pub fn down_len(&self) -> usize {
        self.down.len()
    }

    pub fn len(&self) -> usize {
        self.up.len() + self.down.len()
    }

    pub fn is_empty(&self) -> bool {
        self.up.is_empty() && self.down.is_empty()
    }

    /// Up-queue ascending, then down-queue descending: the order each queue
    /// would be served in.
    pub fn iter(&self) -> impl Iterator<Item = Floor> + '_ {
        self.up.iter().copied().chain(self.down.iter().rev().copied())
    }
}
