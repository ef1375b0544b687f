//! Simulation observer trait for progress reporting and data collection.

use lift_core::Tick;

use crate::TickSnapshot;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, snapshot: &TickSnapshot) {
///         println!(
///             "{}: floor {} going {}",
///             snapshot.tick, snapshot.floor, snapshot.direction
///         );
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the end of each tick with the freshly emitted snapshot.
    fn on_tick_end(&mut self, _snapshot: &TickSnapshot) {}

    /// Called once after the run settles.  Not called for runs that fail
    /// the tick ceiling.
    fn on_sim_end(&mut self, _final_tick: Tick, _delivered: u64) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
