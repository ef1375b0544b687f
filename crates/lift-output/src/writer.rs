//! The `OutputWriter` trait implemented by all backend writers.

use crate::{OutputResult, SnapshotRow};

/// Trait implemented by the CSV and console writers.
///
/// All methods are infallible from the observer's perspective — errors are
/// stored internally and retrieved with
/// [`SimOutputObserver::take_error`][crate::SimOutputObserver::take_error].
pub trait OutputWriter {
    /// Write one per-tick snapshot row.
    fn write_snapshot(&mut self, row: &SnapshotRow) -> OutputResult<()>;

    /// Write the end-of-run totals.
    fn write_summary(&mut self, final_tick: u64, delivered: u64) -> OutputResult<()>;

    /// Flush and close the underlying sink.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
