//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `cabin_snapshots.csv`
//! - `events.csv`
//!
//! Snapshot targets are written space-separated in service order (`"3 7 2"`).

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::TraceWriter;
use crate::{CabinSnapshotRow, EventRow, OutputResult};

/// Writes a run trace to two CSV files.
pub struct CsvTraceWriter {
    snapshots: Writer<File>,
    events:    Writer<File>,
    finished:  bool,
}

impl CsvTraceWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut snapshots = Writer::from_path(dir.join("cabin_snapshots.csv"))?;
        snapshots.write_record(["tick", "cabin", "floor", "position", "state", "direction", "targets"])?;

        let mut events = Writer::from_path(dir.join("events.csv"))?;
        events.write_record(["tick", "event", "cabin", "floor", "direction"])?;

        Ok(Self {
            snapshots,
            events,
            finished: false,
        })
    }
}

impl TraceWriter for CsvTraceWriter {
    fn write_snapshots(&mut self, rows: &[CabinSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            let targets: Vec<String> = row.targets.iter().map(ToString::to_string).collect();
            self.snapshots.write_record(&[
                row.tick.to_string(),
                row.cabin.clone(),
                row.floor.to_string(),
                format!("{:.3}", row.position),
                row.state.to_string(),
                row.direction.to_string(),
                targets.join(" "),
            ])?;
        }
        Ok(())
    }

    fn write_event(&mut self, row: &EventRow) -> OutputResult<()> {
        self.events.write_record(&[
            row.tick.to_string(),
            row.event.to_string(),
            row.cabin.clone().unwrap_or_default(),
            row.floor.to_string(),
            row.direction.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.snapshots.flush()?;
        self.events.flush()?;
        Ok(())
    }
}
