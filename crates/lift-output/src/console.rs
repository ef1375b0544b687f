//! Console output backend: one human-readable line per tick.

use std::io::Write;

use crate::writer::OutputWriter;
use crate::{OutputResult, SnapshotRow};

/// Writes tick lines to any `io::Write` sink (stdout, a file, a test
/// buffer).
///
/// Line shape:
///
/// ```text
/// T3  floor 5  up    onboard 1  waiting 1  destinations [5;8]
/// ```
pub struct ConsoleWriter<W: Write> {
    sink: W,
}

impl<W: Write> ConsoleWriter<W> {
    pub fn new(sink: W) -> Self {
        Self { sink }
    }

    /// Unwrap the inner sink (e.g. to inspect a test buffer).
    pub fn into_inner(self) -> W {
        self.sink
    }
}

impl<W: Write> OutputWriter for ConsoleWriter<W> {
    fn write_snapshot(&mut self, row: &SnapshotRow) -> OutputResult<()> {
        writeln!(
            self.sink,
            "T{}  floor {}  {:<5} onboard {}  waiting {}  destinations [{}]",
            row.tick, row.floor, row.direction, row.onboard, row.waiting, row.destinations
        )?;
        Ok(())
    }

    fn write_summary(&mut self, final_tick: u64, delivered: u64) -> OutputResult<()> {
        writeln!(
            self.sink,
            "settled after {final_tick} ticks, {delivered} passengers delivered"
        )?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        self.sink.flush()?;
        Ok(())
    }
}
