//! Daemon entrypoint: wires the rule store, registries, tracers, pipeline
//! consumers, control-plane server, and shutdown coordinator together
//! (§2 data flow, §4.7-§4.9).

use std::sync::Arc;

use bpfd_actions::ActionRegistry;
use bpfd_proto::bpfd::tracer_server::TracerServer;
use bpfd_rules::RuleStore;
use bpfd_tracers::{Tracer, TracerRegistry};
use tokio::net::UnixListener;
use tokio_stream::wrappers::UnixListenerStream;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

use crate::buffer::EventBuffer;
use crate::config::Config;
use crate::control_plane::ControlPlane;
use crate::error::DaemonError;
use crate::shutdown::ShutdownCoordinator;

/// Starts the daemon and blocks until a termination signal is handled.
///
/// Fatal per §7: a malformed rule file, an unknown tracer/action referenced
/// by a rule file, or a tracer `load()` failure all abort startup before any
/// tracer consumer or the control-plane server is spawned.
pub async fn run(config: Config) -> Result<(), DaemonError> {
    let action_registry = Arc::new(ActionRegistry::with_builtins());
    let tracer_registry = TracerRegistry::with_builtins();
    let tracer_names = tracer_registry.names();
    let rule_store = Arc::new(RuleStore::new());

    load_rules(&config, &rule_store, &tracer_names, &action_registry)?;

    let buffer = EventBuffer::new(config.buffer_capacity);
    let token = CancellationToken::new();
    let mut coordinator = ShutdownCoordinator::new(token.clone());

    for name in &tracer_names {
        let mut tracer = tracer_registry
            .get(name)
            .expect("name came from registry.names(), lookup cannot fail");
        tracer.load().await.map_err(|source| DaemonError::TracerLoad {
            tracer: name.clone(),
            source,
        })?;
        tracer.start();
        info!(tracer = %name, "tracer loaded and started");

        let handle = {
            let rule_store = Arc::clone(&rule_store);
            let action_registry = Arc::clone(&action_registry);
            let buffer = Arc::clone(&buffer);
            let token = token.clone();
            let boxed: Box<dyn Tracer> = tracer;
            tokio::spawn(async move {
                crate::pipeline::run(boxed, rule_store, action_registry, buffer, token).await;
            })
        };
        coordinator.track_consumer(handle);
    }

    let control_plane = ControlPlane::new(
        Arc::clone(&rule_store),
        Arc::clone(&action_registry),
        tracer_names,
        Arc::clone(&buffer),
    );

    if config.grpc_addr.exists() {
        let _ = std::fs::remove_file(&config.grpc_addr);
    }
    if let Some(parent) = config.grpc_addr.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    let listener = UnixListener::bind(&config.grpc_addr).map_err(|source| DaemonError::Bind {
        path: config.grpc_addr.display().to_string(),
        source,
    })?;

    info!(addr = %config.grpc_addr.display(), "control plane listening");

    let server_token = token.clone();
    let server = tokio::spawn(async move {
        let incoming = UnixListenerStream::new(listener);
        let result = tonic::transport::Server::builder()
            .add_service(TracerServer::new(control_plane))
            .serve_with_incoming_shutdown(incoming, server_token.cancelled())
            .await;
        if let Err(e) = result {
            error!(error = %e, "control-plane server exited with an error");
        }
    });

    let shutdown = tokio::spawn(async move {
        if let Err(e) = coordinator.wait_for_signal_and_shutdown().await {
            warn!(error = %e, "failed to install signal handler");
        }
    });

    let _ = shutdown.await;
    let _ = server.await;
    let _ = std::fs::remove_file(&config.grpc_addr);

    Ok(())
}

/// Scans `config.rules_dir` for rule files, validating each structurally
/// and referentially before inserting it (§6, §4.3). A directory that does
/// not exist is treated as "no rules configured", not an error — matching
/// `<prog> daemon --rules-dir DIR` having nothing to load on a fresh host.
fn load_rules(
    config: &Config,
    rule_store: &RuleStore,
    tracer_names: &[String],
    action_registry: &ActionRegistry,
) -> Result<(), DaemonError> {
    let entries = match std::fs::read_dir(&config.rules_dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
        Err(source) => {
            return Err(DaemonError::RulesDir {
                path: config.rules_dir.display().to_string(),
                source,
            })
        }
    };

    let registered_actions = action_registry.names();

    for entry in entries {
        let entry = entry.map_err(|source| DaemonError::RulesDir {
            path: config.rules_dir.display().to_string(),
            source,
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let rule = bpfd_rules::parse_rule_file(&path).map_err(|source| DaemonError::RuleFile {
            path: path.display().to_string(),
            source,
        })?;
        bpfd_rules::validate(&rule, tracer_names, &registered_actions).map_err(|source| {
            DaemonError::RuleFile {
                path: path.display().to_string(),
                source,
            }
        })?;

        info!(path = %path.display(), tracer = %rule.tracer, name = %rule.name, "rule loaded");
        rule_store.insert(rule);
    }

    Ok(())
}

#[cfg(test)]
#[path = "daemon_tests.rs"]
mod tests;
