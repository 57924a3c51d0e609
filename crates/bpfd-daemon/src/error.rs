//! Daemon-level error taxonomy (§7). `ConfigError` and tracer load failures
//! at startup are fatal; everything inside the steady-state pipeline is
//! logged and swallowed by the caller instead of surfacing here.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DaemonError {
    #[error("reading rules directory {path}: {source}")]
    RulesDir {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("loading rule file {path}: {source}")]
    RuleFile {
        path: String,
        #[source]
        source: bpfd_rules::ConfigError,
    },

    #[error("loading tracer {tracer}: {source}")]
    TracerLoad {
        tracer: String,
        #[source]
        source: bpfd_tracers::TracerError,
    },

    #[error("binding control-plane socket {path}: {source}")]
    Bind {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("control-plane transport error: {0}")]
    Transport(#[from] tonic::transport::Error),
}
