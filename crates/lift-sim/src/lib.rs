//! `lift-sim` — tick loop orchestrator for the lift simulation.
//!
//! # Four-phase tick loop
//!
//! ```text
//! while not settled:
//!   ① Release  — calls scheduled for this tick leave the registry; each
//!                becomes a waiting passenger and its origin floor a
//!                destination for the car.
//!   ② Move     — the car advances one floor under the scan policy.
//!   ③ Resolve  — eligible waiters board at the new floor, then arrivals
//!                alight.
//!   ④ Report   — a TickSnapshot goes to the observer; the clock advances.
//! ```
//!
//! The run is settled when the registry, the pool, and the car are all
//! empty.  A run still unsettled at `config.max_ticks` fails with
//! [`SimError::DidNotTerminate`] — the scan policy is not proven to settle
//! under adversarial call scripts, so the ceiling is mandatory.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lift_calls::CallEvent;
//! use lift_core::{Floor, SimConfig, Tick};
//! use lift_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(SimConfig::ten_floor(42, 1_000))
//!     .call(CallEvent::between(Floor(3), Floor(2), Tick(0)))
//!     .build()?;
//! let summary = sim.run(&mut NoopObserver)?;
//! println!("delivered {} in {} ticks", summary.delivered, summary.ticks);
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;
pub mod snapshot;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
pub use snapshot::{RunSummary, TickSnapshot};
