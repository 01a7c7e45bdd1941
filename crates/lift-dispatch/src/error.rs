use lift_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DispatchError {
    #[error("invalid hall call: {0}")]
    InvalidCall(#[from] CoreError),
}

pub type DispatchResult<T> = Result<T, DispatchError>;
