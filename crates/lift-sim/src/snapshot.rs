//! Per-tick state reports handed to observers.

use lift_core::{Direction, Floor, Tick};

/// What the simulation looked like at the end of one tick.
///
/// A plain value: emitting it never touches simulation state, and observers
/// may keep it as long as they like.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickSnapshot {
    pub tick: Tick,
    pub floor: Floor,
    pub direction: Direction,
    /// Passengers riding the car.
    pub onboard: usize,
    /// Passengers released but not yet aboard.
    pub waiting: usize,
    /// Floors the car still has to visit, ascending.
    pub destinations: Vec<Floor>,
}

/// Totals for a completed run.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunSummary {
    /// Ticks executed before the simulation settled.
    pub ticks: u64,
    /// Passengers who reached their destination.
    pub delivered: u64,
}
