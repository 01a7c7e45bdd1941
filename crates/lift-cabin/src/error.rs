use lift_core::Floor;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CabinError {
    #[error("floor {0} is negative")]
    NegativeFloor(Floor),

    #[error("floor {floor} is outside the served range 0..{floor_count}")]
    FloorOutOfRange {
        floor:       Floor,
        floor_count: u32,
    },

    #[error("cabin configuration error: {0}")]
    Config(String),
}

pub type CabinResult<T> = Result<T, CabinError>;
