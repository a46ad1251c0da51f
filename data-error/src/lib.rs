use std::num::ParseIntError;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Error, Debug)]
pub enum StoreError {
    /// Upload of a name that is already taken in the time-naive namespace.
    /// This is the only condition that aborts a command sequence.
    #[error("{0} already exists.")]
    Conflict(String),
    #[error("Parsing error: {0}")]
    Parse(String),
}

impl StoreError {
    /// Whether the error is the hard upload conflict rather than
    /// malformed input.
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict(_))
    }
}

impl From<ParseIntError> for StoreError {
    fn from(e: ParseIntError) -> Self {
        Self::Parse(e.to_string())
    }
}
