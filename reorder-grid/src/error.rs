use thiserror::Error;

/// Caller-contract violations reported by the grid engine.
///
/// None of these are transient: they mean the caller asked for something that would break the
/// key ↔ order permutation, so the engine refuses instead of corrupting it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("key is already tracked")]
    DuplicateKey,
    #[error("key is not tracked")]
    UnknownKey,
    #[error("grid has not been measured yet")]
    NotMeasured,
    #[error("column count must be at least 1")]
    InvalidColumns,
}

pub type GridResult<T> = Result<T, GridError>;
