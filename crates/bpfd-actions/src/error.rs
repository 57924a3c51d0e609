//! Errors raised by actions and the registry (§4.5).

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ActionError {
    #[error("no process with pid {0}")]
    NoSuchProcess(i32),

    #[error("sending signal to pid {pid} failed: {message}")]
    SignalFailed { pid: i32, message: String },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("action {0:?} is already registered")]
pub struct DuplicateActionError(pub String);
