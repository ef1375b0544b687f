//! `PassengerPool` — passengers released from the registry but not yet aboard.
//!
//! Backed by a plain `Vec` in insertion order.  Boarding decisions are
//! order-sensitive when several passengers queue at one floor, so the pool
//! guarantees FIFO within a floor, stable across ticks: a passenger skipped
//! today keeps their place in line.

use lift_core::Floor;

use crate::Passenger;

/// Waiting passengers, in the order their calls were released.
#[derive(Default)]
pub struct PassengerPool {
    waiting: Vec<Passenger>,
}

impl PassengerPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a newly activated passenger at the back of the line.
    pub fn push(&mut self, passenger: Passenger) {
        self.waiting.push(passenger);
    }

    /// The current waiting set, oldest first.
    pub fn waiting(&self) -> &[Passenger] {
        &self.waiting
    }

    pub fn get(&self, index: usize) -> Option<&Passenger> {
        self.waiting.get(index)
    }

    /// Transfer the passenger at `index` out of the pool (boarding).
    ///
    /// Shifts later passengers down, preserving their relative order.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds; callers index from their own
    /// iteration over the pool.
    pub fn remove_at(&mut self, index: usize) -> Passenger {
        self.waiting.remove(index)
    }

    /// `true` if anyone is still waiting at `floor`.
    pub fn any_at(&self, floor: Floor) -> bool {
        self.waiting.iter().any(|p| p.origin == floor)
    }

    /// How many passengers wait at `floor`.
    pub fn count_at(&self, floor: Floor) -> usize {
        self.waiting.iter().filter(|p| p.origin == floor).count()
    }

    pub fn len(&self) -> usize {
        self.waiting.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waiting.is_empty()
    }
}
