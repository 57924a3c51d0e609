//! Ambient logging setup, matching the teacher's `tracing` +
//! `tracing-subscriber` shape. Unlike the teacher's user-level daemon, this
//! daemon keeps no standing log file (§6 names no persisted daemon log) —
//! logs go to stderr so `systemd`/the foreground CLI capture them directly.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Installs a global `tracing` subscriber. `debug` forces `debug` level when
/// `RUST_LOG` is unset; otherwise `RUST_LOG` wins.
pub fn setup_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
