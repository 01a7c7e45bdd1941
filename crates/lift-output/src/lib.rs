//! `lift-output` — run traces for the lift simulator.
//!
//! | Backend | Files created                          |
//! |---------|----------------------------------------|
//! | CSV     | `cabin_snapshots.csv`, `events.csv`    |
//!
//! Backends implement [`TraceWriter`] and are driven by [`TraceObserver`],
//! which implements `lift_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use lift_output::{CsvTraceWriter, TraceObserver};
//!
//! let writer = CsvTraceWriter::new(Path::new("./output"))?;
//! let mut obs = TraceObserver::new(writer);
//! sim.run(&mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use self::csv::CsvTraceWriter;
pub use error::{OutputError, OutputResult};
pub use observer::TraceObserver;
pub use row::{CabinSnapshotRow, EventKind, EventRow};
pub use writer::TraceWriter;
