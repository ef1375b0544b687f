//! `lift-calls` — hall calls and the people behind them.
//!
//! A **call** is a press of the up/down button in a hallway, scheduled for a
//! future tick.  Calls sit in the [`CallRegistry`] until their tick arrives,
//! then activate into [`Passenger`]s in the [`PassengerPool`], where they
//! wait for the car to stop at their floor going the right way.
//!
//! Call scripts come from three places:
//!
//! - built in code ([`CallEvent::new`] + `Sim::add_call`),
//! - a CSV file ([`load_calls_csv`] / [`load_calls_reader`]),
//! - the random generator ([`random_calls`]).

pub mod call;
pub mod error;
pub mod generator;
pub mod loader;
pub mod pool;
pub mod registry;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use call::{CallEvent, Passenger};
pub use error::{CallError, CallResult};
pub use generator::random_calls;
pub use loader::{load_calls_csv, load_calls_reader};
pub use pool::PassengerPool;
pub use registry::CallRegistry;
