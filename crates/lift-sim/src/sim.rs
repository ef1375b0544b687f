//! The `Sim` struct and its tick loop.

use lift_calls::{CallEvent, CallRegistry, Passenger, PassengerPool};
use lift_car::CarState;
use lift_core::{SimClock, SimConfig, Tick};

use crate::{SimError, SimObserver, SimResult, RunSummary, TickSnapshot};

/// The main simulation runner.
///
/// Owns all mutable simulation state — registry, pool, car, clock — and is
/// the only thing that mutates any of it.  One tick fully completes before
/// the next begins; there is no way to interrupt a tick, only the run
/// between ticks (via the ceiling).
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    /// Global configuration (building extent, start floor, seed, ceiling).
    pub config: SimConfig,

    /// The tick counter, advanced exactly once per loop iteration.
    pub clock: SimClock,

    /// Calls waiting for their scheduled tick.
    pub registry: CallRegistry,

    /// Passengers released but not yet aboard.
    pub pool: PassengerPool,

    /// The car itself.
    pub car: CarState,

    pub(crate) delivered: u64,
}

impl Sim {
    // ── Public API ────────────────────────────────────────────────────────

    /// Register a call, validating it against the building first.
    ///
    /// May be used before the run or between ticks of a stepped run.  A call
    /// scheduled for a tick the clock has already passed is never released —
    /// see `CallRegistry` for the strict-equality rule — and will surface as
    /// `DidNotTerminate` when the ceiling hits.
    pub fn add_call(&mut self, call: CallEvent) -> SimResult<()> {
        call.validate(&self.config.floors)?;
        self.registry.push(call);
        Ok(())
    }

    /// `true` when nothing remains anywhere: no pending calls, no waiting
    /// passengers, and a quiescent car.
    pub fn is_settled(&self) -> bool {
        self.registry.is_empty() && self.pool.is_empty() && self.car.is_quiescent()
    }

    /// Passengers delivered so far.
    pub fn delivered(&self) -> u64 {
        self.delivered
    }

    /// The report record for the current state.  Takes `&self`: emitting a
    /// snapshot can never mutate the simulation.
    pub fn snapshot(&self, tick: Tick) -> TickSnapshot {
        TickSnapshot {
            tick,
            floor: self.car.floor,
            direction: self.car.direction,
            onboard: self.car.onboard.len(),
            waiting: self.pool.len(),
            destinations: self.car.destinations.iter().copied().collect(),
        }
    }

    /// Run until settled, invoking observer hooks at every tick boundary.
    ///
    /// Use [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    /// Fails with [`SimError::DidNotTerminate`] if the configured ceiling is
    /// reached first.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<RunSummary> {
        while !self.is_settled() {
            if self.clock.current_tick.0 >= self.config.max_ticks {
                return Err(SimError::DidNotTerminate {
                    ceiling: self.config.max_ticks,
                });
            }
            self.step(observer);
        }
        observer.on_sim_end(self.clock.current_tick, self.delivered);
        Ok(RunSummary {
            ticks: self.clock.current_tick.0,
            delivered: self.delivered,
        })
    }

    /// Execute exactly one tick from the current position (ignores the
    /// ceiling and the settled check).
    ///
    /// Useful for tests and incremental stepping.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> TickSnapshot {
        let now = self.clock.current_tick;
        observer.on_tick_start(now);
        self.process_tick(now);
        let snapshot = self.snapshot(now);
        observer.on_tick_end(&snapshot);
        self.clock.advance();
        snapshot
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn process_tick(&mut self, now: Tick) {
        // ── Phase 1: release due calls ─────────────────────────────────────
        //
        // Each released call becomes a waiting passenger, and the car must
        // now visit their origin floor to pick them up.
        for call in self.registry.release_due(now) {
            let passenger = Passenger::from_call(&call);
            self.car.add_destination(passenger.origin);
            self.pool.push(passenger);
        }

        // ── Phase 2: movement ──────────────────────────────────────────────
        self.car.advance(&self.config.floors);

        // ── Phase 3: boarding and alighting at the new floor ───────────────
        let stop = self.car.resolve_floor(&mut self.pool);
        self.delivered += stop.alighted.len() as u64;
    }
}
