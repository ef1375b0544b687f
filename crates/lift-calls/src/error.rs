//! Error types for lift-calls.

use thiserror::Error;

use lift_core::{Direction, Floor, FloorRange};

/// Rejections for malformed calls and unreadable call scripts.
#[derive(Debug, Error)]
pub enum CallError {
    #[error("floor {floor} outside building {building}")]
    FloorOutOfRange { floor: Floor, building: FloorRange },

    #[error("call origin and destination are both floor {0}")]
    SameFloor(Floor),

    #[error("direction {direction} inconsistent with travel {origin} -> {destination}")]
    DirectionMismatch {
        origin: Floor,
        destination: Floor,
        direction: Direction,
    },

    #[error("call script parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Alias for `Result<T, CallError>`.
pub type CallResult<T> = Result<T, CallError>;
