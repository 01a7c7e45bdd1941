//! `LeastLoaded` — balance work across cabins.

use lift_cabin::Elevator;
use lift_core::{CabinId, Call};

use crate::DispatchStrategy;

/// Picks the cabin with the fewest pending targets; ties go to the lower
/// rough ETA, then to the earliest-registered cabin.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LeastLoaded {
    /// Time units per floor travelled, for the ETA tie-break.  Default: 0.8.
    pub floor_travel_time: f64,
}

impl Default for LeastLoaded {
    fn default() -> Self {
        Self { floor_travel_time: 0.8 }
    }
}

impl DispatchStrategy for LeastLoaded {
    fn pick<E: Elevator>(&self, call: &Call, cabins: &[E]) -> Option<CabinId> {
        let mut best: Option<(CabinId, usize, f64)> = None;
        for (i, cabin) in cabins.iter().enumerate() {
            let load = cabin.pending_count();
            let eta = cabin.estimate_rough_eta(call.floor(), self.floor_travel_time);
            let better = match best {
                None => true,
                Some((_, best_load, best_eta)) => {
                    load < best_load || (load == best_load && eta < best_eta)
                }
            };
            if better {
                best = Some((CabinId(i as u32), load, eta));
            }
        }
        best.map(|(id, _, _)| id)
    }
}
