//! The `TraceWriter` trait implemented by all backend writers.

use crate::{CabinSnapshotRow, EventRow, OutputResult};

/// Trait implemented by trace backends.
///
/// All methods are infallible from the observer's perspective: errors are
/// stored and retrieved with [`TraceObserver::take_error`][crate::TraceObserver::take_error].
pub trait TraceWriter {
    /// Write a batch of cabin snapshots.
    fn write_snapshots(&mut self, rows: &[CabinSnapshotRow]) -> OutputResult<()>;

    /// Write one event row.
    fn write_event(&mut self, row: &EventRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
