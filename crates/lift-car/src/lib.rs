//! `lift-car` — the elevator car and its two per-tick phases.
//!
//! The car is a pure state machine with no knowledge of the clock or the
//! registry.  Each tick the orchestrator calls, in order:
//!
//! 1. [`CarState::advance`] — the movement phase: pick/keep/reverse a
//!    direction under the scan policy and move one floor.
//! 2. [`CarState::resolve_floor`] — the passenger phase: board eligible
//!    waiters at the new floor, then let arrivals off.
//!
//! # Scan policy
//!
//! The car keeps travelling in its current direction while any destination
//! lies strictly ahead; with work only behind it reverses; with work only at
//! the current floor it drops to `Idle` and lets the passenger phase commit
//! it to whichever way the first boarder is going.

pub mod state;
pub mod stops;


pub use state::CarState;
pub use stops::Stop;
