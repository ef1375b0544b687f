//! `lift-core` — foundational types for the lift elevator simulation.
//!
//! This crate is a dependency of every other `lift-*` crate.  It intentionally
//! has no `lift-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                  |
//! |---------------|-------------------------------------------|
//! | [`floor`]     | `Floor`, `FloorRange`                     |
//! | [`direction`] | `Direction` enum                          |
//! | [`time`]      | `Tick`, `SimClock`, `SimConfig`           |
//! | [`rng`]       | `SimRng` (seeded, reproducible)           |
//! | [`error`]     | `LiftError`, `LiftResult`                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod direction;
pub mod error;
pub mod floor;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use direction::Direction;
pub use error::{LiftError, LiftResult};
pub use floor::{Floor, FloorRange};
pub use rng::SimRng;
pub use time::{SimClock, SimConfig, Tick};
