//! `TraceObserver<W>` — bridges `SimObserver` to a `TraceWriter`.

use lift_cabin::{CabinError, CabinObserver, CabinRegistry, Elevator};
use lift_core::{Call, Direction, Floor, Tick};
use lift_dispatch::DispatchObserver;
use lift_sim::SimObserver;

use crate::row::{CabinSnapshotRow, EventKind, EventRow};
use crate::writer::TraceWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes cabin snapshots and call events to any
/// [`TraceWriter`] backend.
///
/// Errors from the writer are stored internally because observer methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct TraceObserver<W: TraceWriter> {
    writer:     W,
    tick:       Tick,
    last_error: Option<OutputError>,
}

impl<W: TraceWriter> TraceObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            tick:       Tick::ZERO,
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn event(&mut self, event: EventKind, cabin: Option<&str>, floor: Floor, direction: Direction) {
        let row = EventRow {
            tick: self.tick.0,
            event,
            cabin: cabin.map(str::to_owned),
            floor,
            direction,
        };
        let result = self.writer.write_event(&row);
        self.store_err(result);
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: TraceWriter> CabinObserver for TraceObserver<W> {
    fn on_arrived(&mut self, cabin: &dyn Elevator, floor: Floor) {
        self.event(EventKind::Arrived, Some(cabin.id()), floor, Direction::None);
    }
}

impl<W: TraceWriter> DispatchObserver for TraceObserver<W> {
    fn on_enqueued(&mut self, call: &Call) {
        self.event(EventKind::Enqueued, None, call.floor(), call.direction());
    }

    fn on_assigned(&mut self, call: &Call, cabin: &dyn Elevator) {
        self.event(EventKind::Assigned, Some(cabin.id()), call.floor(), call.direction());
    }

    fn on_rejected(&mut self, call: &Call, cabin: &dyn Elevator, _error: &CabinError) {
        self.event(EventKind::Rejected, Some(cabin.id()), call.floor(), call.direction());
    }
}

impl<W: TraceWriter> SimObserver for TraceObserver<W> {
    fn on_tick_start(&mut self, tick: Tick) {
        self.tick = tick;
    }

    fn on_snapshot(&mut self, tick: Tick, cabins: &CabinRegistry) {
        let rows: Vec<CabinSnapshotRow> = cabins
            .cabins()
            .iter()
            .map(|cabin| CabinSnapshotRow {
                tick:      tick.0,
                cabin:     cabin.id().to_owned(),
                floor:     cabin.current_floor(),
                position:  cabin.position(),
                state:     cabin.state(),
                direction: cabin.direction(),
                targets:   cabin.targets(),
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
