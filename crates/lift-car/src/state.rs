//! Car state and the movement phase.

use std::collections::BTreeSet;

use lift_calls::Passenger;
use lift_core::{Direction, Floor, FloorRange};

/// The elevator car: position, committed direction, floors it must visit,
/// and the passengers riding it.
///
/// Mutated exclusively by the tick loop, once per tick.  `destinations` is a
/// `BTreeSet` so iteration order — and with it the nearest-destination
/// choice — is deterministic.
#[derive(Debug)]
pub struct CarState {
    pub floor: Floor,
    pub direction: Direction,
    /// Every floor the car still has to visit, pickups and drop-offs alike.
    pub destinations: BTreeSet<Floor>,
    pub onboard: Vec<Passenger>,
}

impl CarState {
    /// A car parked at `initial`, idle and empty.
    pub fn new(initial: Floor) -> Self {
        Self {
            floor: initial,
            direction: Direction::Idle,
            destinations: BTreeSet::new(),
            onboard: Vec::new(),
        }
    }

    /// Mark `floor` as requiring a visit (a released call's origin, or a
    /// boarder's destination).  Duplicates collapse.
    pub fn add_destination(&mut self, floor: Floor) {
        self.destinations.insert(floor);
    }

    /// `true` when the car has nothing left to do: no floors to visit and
    /// nobody aboard.
    pub fn is_quiescent(&self) -> bool {
        self.destinations.is_empty() && self.onboard.is_empty()
    }

    /// The closest destination to the current floor; equal distances resolve
    /// toward the lower floor (ascending set iteration keeps the first
    /// minimum).
    pub fn nearest_destination(&self) -> Option<Floor> {
        self.destinations
            .iter()
            .copied()
            .min_by_key(|&f| (self.floor.distance(f), f))
    }

    fn has_destination_ahead(&self) -> bool {
        match self.direction {
            Direction::Up => self.destinations.iter().any(|&f| f > self.floor),
            Direction::Down => self.destinations.iter().any(|&f| f < self.floor),
            Direction::Idle => false,
        }
    }

    fn has_destination_behind(&self) -> bool {
        match self.direction {
            Direction::Up => self.destinations.iter().any(|&f| f < self.floor),
            Direction::Down => self.destinations.iter().any(|&f| f > self.floor),
            Direction::Idle => false,
        }
    }

    /// Movement phase: run once per tick, before the passenger phase.
    ///
    /// With no destinations the car idles in place.  An idle car with work
    /// commits toward its nearest destination (a destination at the current
    /// floor keeps it idle in place for the passenger phase).  The car then
    /// moves exactly one floor, clamped to the building, and the scan rule
    /// decides whether to keep going, reverse, or drop to `Idle`.
    pub fn advance(&mut self, building: &FloorRange) {
        if self.destinations.is_empty() {
            self.direction = Direction::Idle;
            return;
        }

        if self.direction == Direction::Idle {
            if let Some(target) = self.nearest_destination() {
                self.direction = self.floor.toward(target);
            }
        }

        match self.direction {
            Direction::Up if self.floor < building.top => self.floor = self.floor.above(),
            Direction::Down if self.floor > building.bottom => self.floor = self.floor.below(),
            _ => {}
        }

        // Scan rule: keep direction while work remains ahead; turn around if
        // it is all behind; go idle if it is all at this floor.
        if self.direction.is_moving() && !self.has_destination_ahead() {
            self.direction = if self.has_destination_behind() {
                self.direction.reversed()
            } else {
                Direction::Idle
            };
        }

        debug_assert!(
            !(self.floor == building.top && self.direction == Direction::Up),
            "car pointing up at the top floor"
        );
        debug_assert!(
            !(self.floor == building.bottom && self.direction == Direction::Down),
            "car pointing down at the bottom floor"
        );
    }
}
