//! `lift-output` — snapshot writers for the lift simulation.
//!
//! The simulation reports through the [`SimObserver`][lift_sim::SimObserver]
//! trait; this crate bridges that to concrete backends:
//!
//! - [`CsvWriter`] — one `ticks.csv` row per tick, for analysis.
//! - [`ConsoleWriter`] — one human-readable line per tick, for watching.
//!
//! Both implement [`OutputWriter`]; [`SimOutputObserver`] adapts any
//! `OutputWriter` into a `SimObserver`, storing the first write error for
//! retrieval after the run (observer hooks have no return value).

pub mod console;
pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use console::ConsoleWriter;
pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::SnapshotRow;
pub use writer::OutputWriter;
