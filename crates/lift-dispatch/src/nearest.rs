//! `NearestByDistance` — the default dispatch strategy.

use lift_cabin::Elevator;
use lift_core::{CabinId, Call, Direction};

use crate::DispatchStrategy;

/// Scores each cabin by rough ETA and picks the lowest.
///
/// ```text
/// score = |cabin.floor - call.floor| * floor_travel_time
///       - on_the_way_bonus   if the cabin already heads the call's way and
///                            the call floor is not behind it
///       + full_penalty       if the cabin is full
/// ```
///
/// The first cabin with the strictly lowest score wins, so ties go to the
/// earliest-registered cabin.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NearestByDistance {
    /// Time units per floor travelled.  Default: 0.8.
    pub floor_travel_time: f64,
    /// Subtracted for cabins already travelling towards the call.  Default: 0.5.
    pub on_the_way_bonus:  f64,
    /// Added for full cabins.  Default: 2.0.
    pub full_penalty:      f64,
}

impl NearestByDistance {
    /// Score a single cabin for `call`.  Lower is better.
    pub fn score<E: Elevator + ?Sized>(&self, call: &Call, cabin: &E) -> f64 {
        let mut score = cabin.estimate_rough_eta(call.floor(), self.floor_travel_time);
        if on_the_way(call, cabin) {
            score -= self.on_the_way_bonus;
        }
        if cabin.is_full() {
            score += self.full_penalty;
        }
        score
    }
}

impl Default for NearestByDistance {
    fn default() -> Self {
        Self {
            floor_travel_time: 0.8,
            on_the_way_bonus:  0.5,
            full_penalty:      2.0,
        }
    }
}

impl DispatchStrategy for NearestByDistance {
    fn pick<E: Elevator>(&self, call: &Call, cabins: &[E]) -> Option<CabinId> {
        let mut best: Option<(CabinId, f64)> = None;
        for (i, cabin) in cabins.iter().enumerate() {
            let score = self.score(call, cabin);
            if best.is_none_or(|(_, s)| score < s) {
                best = Some((CabinId(i as u32), score));
            }
        }
        best.map(|(id, _)| id)
    }
}

/// The cabin already heads the way the call wants and will pass the call
/// floor without reversing.
fn on_the_way<E: Elevator + ?Sized>(call: &Call, cabin: &E) -> bool {
    cabin.direction() == call.direction()
        && match call.direction() {
            Direction::Up   => call.floor() >= cabin.current_floor(),
            Direction::Down => call.floor() <= cabin.current_floor(),
            Direction::None => false,
        }
}
