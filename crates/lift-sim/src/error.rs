use lift_cabin::CabinError;
use lift_dispatch::DispatchError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("no cabin labelled {0:?}")]
    UnknownCabin(String),

    #[error("call script error: {0}")]
    Script(String),

    #[error("cabin error: {0}")]
    Cabin(#[from] CabinError),

    #[error("dispatch error: {0}")]
    Dispatch(#[from] DispatchError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SimResult<T> = Result<T, SimError>;
