use data_error::StoreError;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScriptParseError {
    #[error("Invalid script: expected an array of commands, each an array of strings or numbers")]
    InvalidShape,

    #[error("Invalid script at command {index}: {reason}")]
    InvalidArgument { index: usize, reason: String },
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Could not read script {0}: {1}")]
    ScriptReadError(String, io::Error),

    #[error("Command sequence aborted: {0}")]
    Aborted(StoreError),

    #[error(transparent)]
    IoError(#[from] io::Error),

    #[error(transparent)]
    JsonError(#[from] serde_json::Error),

    #[error(transparent)]
    StoreError(#[from] StoreError),

    #[error(transparent)]
    ScriptParseError(#[from] ScriptParseError),
}
