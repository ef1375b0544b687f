//! CSV output backend.
//!
//! Creates one file, `ticks.csv`, in the configured output directory: a
//! header row followed by one row per simulation tick.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{OutputResult, SnapshotRow};

/// Writes per-tick snapshots to a CSV file.
pub struct CsvWriter {
    ticks: Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) `ticks.csv` in `dir` and write the header row.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut ticks = Writer::from_path(dir.join("ticks.csv"))?;
        ticks.write_record(["tick", "floor", "direction", "onboard", "waiting", "destinations"])?;
        Ok(Self {
            ticks,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_snapshot(&mut self, row: &SnapshotRow) -> OutputResult<()> {
        self.ticks.write_record(&[
            row.tick.to_string(),
            row.floor.to_string(),
            row.direction.clone(),
            row.onboard.to_string(),
            row.waiting.to_string(),
            row.destinations.clone(),
        ])?;
        Ok(())
    }

    fn write_summary(&mut self, _final_tick: u64, _delivered: u64) -> OutputResult<()> {
        // The per-tick rows already carry everything; totals are the console
        // backend's concern.
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.ticks.flush()?;
        Ok(())
    }
}
