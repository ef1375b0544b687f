//! Hall calls and the passengers they activate into.

use lift_core::{Direction, Floor, FloorRange, Tick};

use crate::{CallError, CallResult};

// ── CallEvent ─────────────────────────────────────────────────────────────────

/// A hall-button press: someone at `origin` wants to reach `destination`,
/// starting at `scheduled_tick`.  Immutable once created.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CallEvent {
    pub origin: Floor,
    pub destination: Floor,
    /// The button pressed.  Must agree with `origin.toward(destination)`;
    /// [`CallEvent::validate`] enforces this.
    pub direction: Direction,
    pub scheduled_tick: Tick,
}

impl CallEvent {
    pub fn new(origin: Floor, destination: Floor, direction: Direction, scheduled_tick: Tick) -> Self {
        Self {
            origin,
            destination,
            direction,
            scheduled_tick,
        }
    }

    /// A call with the direction derived from the floor pair, for call sites
    /// that construct scripts programmatically.
    pub fn between(origin: Floor, destination: Floor, scheduled_tick: Tick) -> Self {
        Self::new(origin, destination, origin.toward(destination), scheduled_tick)
    }

    /// Check the call against the building: both floors in range, distinct,
    /// and the pressed button consistent with the travel they imply.
    pub fn validate(&self, building: &FloorRange) -> CallResult<()> {
        for floor in [self.origin, self.destination] {
            if !building.contains(floor) {
                return Err(CallError::FloorOutOfRange {
                    floor,
                    building: *building,
                });
            }
        }
        if self.origin == self.destination {
            return Err(CallError::SameFloor(self.origin));
        }
        if self.direction != self.origin.toward(self.destination) {
            return Err(CallError::DirectionMismatch {
                origin: self.origin,
                destination: self.destination,
                direction: self.direction,
            });
        }
        Ok(())
    }
}

// ── Passenger ─────────────────────────────────────────────────────────────────

/// An activated call: a person waiting at their origin floor or riding the
/// car.  Owned by exactly one of the pool and the car at a time — boarding
/// and alighting move the value, never copy it.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Passenger {
    pub origin: Floor,
    pub destination: Floor,
    /// The hall button they pressed; boarding eligibility checks it against
    /// the car's direction.
    pub requested_direction: Direction,
}

impl Passenger {
    /// The person behind a released call.
    pub fn from_call(call: &CallEvent) -> Self {
        Self {
            origin: call.origin,
            destination: call.destination,
            requested_direction: call.direction,
        }
    }
}
