//! `CallScript` — calls scheduled ahead of time, plus its CSV loader.
//!
//! # CSV format
//!
//! One row per call.  Rows need not be sorted.
//!
//! ```csv
//! tick,kind,floor,direction,cabin
//! 0,hall,5,up,
//! 12,car,9,,A
//! 40,hall,3,down,
//! ```
//!
//! | Column      | Hall row                   | Car row                 |
//! |-------------|----------------------------|-------------------------|
//! | `kind`      | `hall`                     | `car`                   |
//! | `direction` | `up` / `down` (required)   | ignored                 |
//! | `cabin`     | ignored                    | cabin label (required)  |
//!
//! Hall rows are validated exactly like a live hall call, so a script that
//! loads never injects a malformed call.

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use lift_core::{Call, Direction, Floor, Tick};

use crate::{SimError, SimResult};

// ── ScriptedCall ──────────────────────────────────────────────────────────────

/// One entry of a [`CallScript`].
#[derive(Clone, Debug, PartialEq)]
pub enum ScriptedCall {
    /// A hall call, stamped with its scheduled tick.
    Hall(Call),
    /// A passenger inside cabin `cabin` pressing `floor`.
    Car { cabin: String, floor: Floor },
}

// ── CallScript ────────────────────────────────────────────────────────────────

/// Calls keyed by the tick at which they are injected.
#[derive(Clone, Debug, Default)]
pub struct CallScript {
    inner: BTreeMap<Tick, Vec<ScriptedCall>>,
    /// Cached entry count for O(1) `len()`.
    total: usize,
}

impl CallScript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `call` for `tick`.  Calls sharing a tick keep insertion order.
    pub fn push(&mut self, tick: Tick, call: ScriptedCall) {
        self.inner.entry(tick).or_default().push(call);
        self.total += 1;
    }

    /// Remove and return every call scheduled at or before `tick`, earliest
    /// first.
    ///
    /// Returns an empty `Vec` on the (common) ticks with nothing due.
    pub fn drain_due(&mut self, tick: Tick) -> Vec<ScriptedCall> {
        let mut due = Vec::new();
        while let Some(entry) = self.inner.first_entry() {
            if *entry.key() > tick {
                break;
            }
            let calls = entry.remove();
            self.total -= calls.len();
            due.extend(calls);
        }
        due
    }

    /// Every cabin label named by a car call, in tick order.
    pub fn cabin_labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.inner.values().flatten().filter_map(|c| match c {
            ScriptedCall::Car { cabin, .. } => Some(cabin.as_str()),
            ScriptedCall::Hall(_) => None,
        })
    }

    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct ScriptRecord {
    tick:      u64,
    kind:      String,
    floor:     Floor,
    direction: Option<String>,
    cabin:     Option<String>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a [`CallScript`] from a CSV file.
pub fn load_script_csv(path: &Path) -> SimResult<CallScript> {
    let file = std::fs::File::open(path)?;
    load_script_reader(file)
}

/// Like [`load_script_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor` or a byte slice).
///
/// # Errors
///
/// [`SimError::Script`] naming the 1-based data row for malformed CSV, an
/// unknown `kind`, a hall row without a valid direction or with a negative
/// floor, or a car row without a cabin label.
pub fn load_script_reader<R: Read>(reader: R) -> SimResult<CallScript> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut script = CallScript::new();

    for (i, result) in csv_reader.deserialize::<ScriptRecord>().enumerate() {
        let row = i + 1;
        let record = result.map_err(|e| SimError::Script(format!("row {row}: {e}")))?;
        let tick = Tick(record.tick);
        let call = parse_record(record, tick).map_err(|msg| SimError::Script(format!("row {row}: {msg}")))?;
        script.push(tick, call);
    }

    Ok(script)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_record(record: ScriptRecord, tick: Tick) -> Result<ScriptedCall, String> {
    match record.kind.to_ascii_lowercase().as_str() {
        "hall" => {
            let direction: Direction = record
                .direction
                .as_deref()
                .unwrap_or("")
                .parse::<Direction>()
                .map_err(|e| e.to_string())?;
            let call = Call::new(record.floor, direction, tick).map_err(|e| e.to_string())?;
            Ok(ScriptedCall::Hall(call))
        }
        "car" => {
            let cabin = record
                .cabin
                .filter(|c| !c.is_empty())
                .ok_or_else(|| "car call without a cabin label".to_string())?;
            if record.floor < 0 {
                return Err(format!("negative floor {}", record.floor));
            }
            Ok(ScriptedCall::Car { cabin, floor: record.floor })
        }
        other => Err(format!("unknown call kind {other:?} (expected hall or car)")),
    }
}
