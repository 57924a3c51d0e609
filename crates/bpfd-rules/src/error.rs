//! Error taxonomy for rule loading and validation (§7).

use thiserror::Error;

/// Errors raised while decoding or validating a rule, either from a file
/// (§6) or a `CreateRule` control-plane request (§4.8).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("rule name must not be empty")]
    EmptyName,

    #[error("rule tracer must not be empty")]
    EmptyTracer,

    #[error("invalid container runtime tag: {0}")]
    InvalidRuntimeTag(String),

    #[error("unknown tracer: {0}")]
    UnknownTracer(String),

    #[error("unknown action: {0}")]
    UnknownAction(String),

    #[error("malformed rule file {path}: {message}")]
    MalformedFile { path: String, message: String },
}
