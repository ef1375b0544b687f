//! Fluent builder for constructing a [`Sim`].

use lift_calls::{CallEvent, CallRegistry, PassengerPool};
use lift_car::CarState;
use lift_core::{SimClock, SimConfig};

use crate::{Sim, SimResult};

/// Fluent builder for [`Sim`].
///
/// Validates the configuration and the whole call script up front, so a
/// built `Sim` can only fail at runtime by hitting the tick ceiling.
/// Calls may also be injected later through [`Sim::add_call`].
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(SimConfig::ten_floor(42, 1_000))
///     .calls(script)
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    config: SimConfig,
    calls: Vec<CallEvent>,
}

impl SimBuilder {
    pub fn new(config: SimConfig) -> Self {
        Self {
            config,
            calls: Vec::new(),
        }
    }

    /// Append a whole call script.
    pub fn calls(mut self, calls: impl IntoIterator<Item = CallEvent>) -> Self {
        self.calls.extend(calls);
        self
    }

    /// Append a single call.
    pub fn call(mut self, call: CallEvent) -> Self {
        self.calls.push(call);
        self
    }

    /// Validate everything and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim> {
        self.config.validate()?;
        for call in &self.calls {
            call.validate(&self.config.floors)?;
        }

        Ok(Sim {
            clock: SimClock::new(),
            registry: CallRegistry::from_calls(self.calls),
            pool: PassengerPool::new(),
            car: CarState::new(self.config.initial_floor),
            delivered: 0,
            config: self.config,
        })
    }
}
