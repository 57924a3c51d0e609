//! Errors raised while loading or running a tracer (§4.6).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TracerError {
    #[error("load failed for tracer {tracer}: {message}")]
    LoadFailed { tracer: String, message: String },

    #[error("decode failed for tracer {tracer}: {message}")]
    DecodeFailed { tracer: String, message: String },

    #[error("watch_event interrupted")]
    Interrupted,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("tracer {0:?} is already registered")]
pub struct DuplicateTracerError(pub String);

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown tracer {0:?}")]
pub struct UnknownTracerError(pub String);
