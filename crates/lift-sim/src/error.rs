use lift_calls::CallError;
use lift_core::LiftError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] LiftError),

    #[error("invalid call: {0}")]
    InvalidCall(#[from] CallError),

    #[error("simulation did not settle within the {ceiling}-tick ceiling")]
    DidNotTerminate { ceiling: u64 },
}

pub type SimResult<T> = Result<T, SimError>;
