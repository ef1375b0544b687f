//! Simulation time model.
//!
//! # Design
//!
//! Time is a monotonically increasing `Tick` counter with no wall-clock
//! mapping: one tick is one floor of car travel plus one round of
//! boarding/alighting, and nothing in the simulation cares how many real
//! seconds that represents.  Using an integer tick as the canonical unit
//! keeps all schedule arithmetic exact and comparisons O(1).

use std::fmt;

use crate::{Floor, FloorRange, LiftError, LiftResult};

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// The simulation clock, advanced exactly once per loop iteration by the
/// tick-loop owner.  Nothing else mutates it.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    pub current_tick: Tick,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = Tick(self.current_tick.0 + 1);
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.current_tick)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration, fixed per run.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// The building extent the car services.
    pub floors: FloorRange,

    /// Where the car starts (usually the lobby).
    pub initial_floor: Floor,

    /// Master RNG seed.  The same seed always produces identical call scripts
    /// from the generator, hence identical runs.
    pub seed: u64,

    /// Safety ceiling: a run still unsettled after this many ticks fails with
    /// `DidNotTerminate` instead of looping forever.  Always explicit — there
    /// is no hidden default.
    pub max_ticks: u64,
}

impl SimConfig {
    /// A 10-floor building serviced from floor 1 — the dimensions of the
    /// classic exercise this simulation models.
    pub fn ten_floor(seed: u64, max_ticks: u64) -> Self {
        Self {
            floors: FloorRange::ground_to(10),
            initial_floor: Floor(1),
            seed,
            max_ticks,
        }
    }

    /// Check the configuration is internally consistent.
    pub fn validate(&self) -> LiftResult<()> {
        if self.floors.bottom >= self.floors.top {
            return Err(LiftError::Config(format!(
                "floor range {} must span at least two floors",
                self.floors
            )));
        }
        if !self.floors.contains(self.initial_floor) {
            return Err(LiftError::Config(format!(
                "initial floor {} outside building {}",
                self.initial_floor, self.floors
            )));
        }
        if self.max_ticks == 0 {
            return Err(LiftError::Config("max_ticks must be non-zero".into()));
        }
        Ok(())
    }
}
