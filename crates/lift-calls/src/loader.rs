//! CSV call-script loader.
//!
//! # CSV format
//!
//! One row per hall call:
//!
//! ```csv
//! origin_floor,destination_floor,direction,tick
//! 3,2,down,0
//! 10,1,down,1
//! 5,8,up,0
//! ```
//!
//! **`direction`** is `up` or `down` (an idle hall call makes no sense and
//! is rejected).  Every row is validated against the building before the
//! script is returned, so a loaded script never fails later at registration.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use lift_core::{Direction, Floor, FloorRange, Tick};

use crate::{CallError, CallEvent, CallResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct CallRecord {
    origin_floor: u8,
    destination_floor: u8,
    direction: String,
    tick: u64,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a call script from a CSV file and validate it against `building`.
pub fn load_calls_csv(path: &Path, building: &FloorRange) -> CallResult<Vec<CallEvent>> {
    let file = std::fs::File::open(path).map_err(CallError::Io)?;
    load_calls_reader(file, building)
}

/// Like [`load_calls_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedded scripts.
pub fn load_calls_reader<R: Read>(reader: R, building: &FloorRange) -> CallResult<Vec<CallEvent>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut calls = Vec::new();

    for result in csv_reader.deserialize::<CallRecord>() {
        let row = result.map_err(|e| CallError::Parse(e.to_string()))?;
        let call = CallEvent::new(
            Floor(row.origin_floor),
            Floor(row.destination_floor),
            parse_direction(&row.direction)?,
            Tick(row.tick),
        );
        call.validate(building)?;
        calls.push(call);
    }

    Ok(calls)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_direction(s: &str) -> CallResult<Direction> {
    match s.trim() {
        "up" => Ok(Direction::Up),
        "down" => Ok(Direction::Down),
        other => Err(CallError::Parse(format!(
            "invalid direction {other:?}: expected \"up\" or \"down\""
        ))),
    }
}
