//! Strongly typed floor numbers and the building extent.
//!
//! Floors are 1-based, matching how buildings label them.  The inner integer
//! is `pub` for direct arithmetic at call sites, but most code should go
//! through [`Floor::above`]/[`Floor::below`] and [`FloorRange::contains`].

use std::fmt;

use crate::Direction;

// ── Floor ─────────────────────────────────────────────────────────────────────

/// A 1-based floor number.
///
/// `u8` caps the building at 255 floors, far beyond anything a single-car
/// scan dispatcher is sensible for.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Floor(pub u8);

impl Floor {
    /// The floor one above `self`.  Callers clamp against the building top.
    #[inline]
    pub fn above(self) -> Floor {
        Floor(self.0 + 1)
    }

    /// The floor one below `self`.  Callers clamp against the building bottom.
    #[inline]
    pub fn below(self) -> Floor {
        Floor(self.0 - 1)
    }

    /// Absolute distance in floors between `self` and `other`.
    #[inline]
    pub fn distance(self, other: Floor) -> u8 {
        self.0.abs_diff(other.0)
    }

    /// The direction of travel from `self` toward `target`.
    ///
    /// Returns [`Direction::Idle`] when the floors are equal.
    #[inline]
    pub fn toward(self, target: Floor) -> Direction {
        match target.0.cmp(&self.0) {
            std::cmp::Ordering::Greater => Direction::Up,
            std::cmp::Ordering::Less => Direction::Down,
            std::cmp::Ordering::Equal => Direction::Idle,
        }
    }
}

impl fmt::Display for Floor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ── FloorRange ────────────────────────────────────────────────────────────────

/// The inclusive span of floors a building has.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FloorRange {
    /// Lowest serviced floor (the lobby, typically `Floor(1)`).
    pub bottom: Floor,
    /// Highest serviced floor.
    pub top: Floor,
}

impl FloorRange {
    /// A building spanning `bottom..=top`.  `SimConfig::validate` rejects
    /// inverted ranges, so construction itself stays infallible.
    pub fn new(bottom: Floor, top: Floor) -> Self {
        Self { bottom, top }
    }

    /// A building with floors `1..=top_floor`.
    pub fn ground_to(top_floor: u8) -> Self {
        Self::new(Floor(1), Floor(top_floor))
    }

    #[inline]
    pub fn contains(&self, floor: Floor) -> bool {
        self.bottom <= floor && floor <= self.top
    }

    /// Number of serviced floors.
    #[inline]
    pub fn count(&self) -> u8 {
        self.top.0 - self.bottom.0 + 1
    }
}

impl fmt::Display for FloorRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}..{}]", self.bottom, self.top)
    }
}
