//! The passenger phase: boarding and alighting at the car's current floor.

use lift_calls::{Passenger, PassengerPool};
use lift_core::Direction;

use crate::CarState;

/// What happened at one floor stop.
#[derive(Debug, Default)]
pub struct Stop {
    /// Passengers who moved from the pool into the car this tick.
    pub boarded: usize,
    /// Passengers who reached their destination and left the car this tick.
    /// Returned by value so the caller can tally deliveries.
    pub alighted: Vec<Passenger>,
}

impl CarState {
    /// Boarding eligibility for a waiting passenger at the car's floor.
    ///
    /// Both legs must hold: the car is idle or already going the way the
    /// passenger asked, and the travel the car would make from here is
    /// consistent with the passenger's destination.  An idle car is
    /// trivially consistent — it adopts the boarder's direction.
    pub fn can_board(&self, passenger: &Passenger) -> bool {
        let direction_ok = self.direction == Direction::Idle
            || self.direction == passenger.requested_direction;
        let going_right_way = match self.direction {
            Direction::Idle => true,
            moving => moving == self.floor.toward(passenger.destination),
        };
        direction_ok && going_right_way
    }

    fn board(&mut self, passenger: Passenger) {
        self.destinations.insert(passenger.destination);
        if self.direction == Direction::Idle {
            self.direction = self.floor.toward(passenger.destination);
        }
        self.onboard.push(passenger);
    }

    /// Passenger phase: run once per tick, after [`CarState::advance`].
    ///
    /// Boarding is resolved first, in pool (FIFO) order, so eligibility uses
    /// the direction the movement phase established — and the first boarder
    /// into an idle car commits it for everyone behind them in line.  Then
    /// every rider destined here alights.
    pub fn resolve_floor(&mut self, pool: &mut PassengerPool) -> Stop {
        let floor = self.floor;

        let mut boarded = 0;
        let mut i = 0;
        while let Some(candidate) = pool.get(i) {
            if candidate.origin == floor && self.can_board(candidate) {
                let passenger = pool.remove_at(i);
                self.board(passenger);
                boarded += 1;
            } else {
                i += 1;
            }
        }

        let mut alighted = Vec::new();
        let mut j = 0;
        while j < self.onboard.len() {
            if self.onboard[j].destination == floor {
                alighted.push(self.onboard.remove(j));
            } else {
                j += 1;
            }
        }
        if !alighted.is_empty() && self.onboard.is_empty() {
            // The car does not hold a direction without riders, even when
            // destinations remain for waiting passengers elsewhere; the next
            // movement phase re-picks from scratch.
            self.direction = Direction::Idle;
        }

        // The floor stays a destination while anyone still waits on it, so
        // the car comes back for passengers the direction check skipped.
        if !pool.any_at(floor) {
            self.destinations.remove(&floor);
        }

        Stop { boarded, alighted }
    }
}
