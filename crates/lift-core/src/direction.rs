//! Travel direction of the car and of hall calls.

use std::fmt;

/// Which way the car is committed to travel, or `Idle` when uncommitted.
///
/// Hall calls carry an `Up`/`Down` direction; `Idle` is only ever a car
/// state.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    #[default]
    Idle,
    Up,
    Down,
}

impl Direction {
    /// The opposite travel direction.  `Idle` has no opposite and is
    /// returned unchanged.
    #[inline]
    pub fn reversed(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Idle => Direction::Idle,
        }
    }

    /// `true` for `Up` and `Down`.
    #[inline]
    pub fn is_moving(self) -> bool {
        self != Direction::Idle
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Direction::Idle => "idle",
            Direction::Up => "up",
            Direction::Down => "down",
        };
        f.write_str(s)
    }
}
