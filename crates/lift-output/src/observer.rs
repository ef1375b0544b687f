//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use lift_core::Tick;
use lift_sim::{SimObserver, TickSnapshot};

use crate::writer::OutputWriter;
use crate::{OutputError, SnapshotRow};

/// A [`SimObserver`] that writes every tick snapshot to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver`
/// methods have no return value.  After `sim.run()` returns, check for
/// errors with [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer: W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect a buffer after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_tick_end(&mut self, snapshot: &TickSnapshot) {
        let row = SnapshotRow::from(snapshot);
        let result = self.writer.write_snapshot(&row);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, final_tick: Tick, delivered: u64) {
        let result = self.writer.write_summary(final_tick.0, delivered);
        self.store_err(result);
        let result = self.writer.finish();
        self.store_err(result);
    }
}
