//! The per-tracer consumer loop (§4.7).

use std::sync::Arc;

use bpfd_actions::ActionRegistry;
use bpfd_rules::RuleStore;
use bpfd_tracers::{Tracer, TracerError};
use tokio_util::sync::CancellationToken;
use tracing::warn;

use crate::buffer::EventBuffer;

/// Runs one tracer's consumer loop until `token` fires or the tracer's
/// channel is torn down. Steps 1-7 of §4.7:
///
/// 1. fetch the next event (decode errors are logged and the loop
///    continues; `None` means "call again").
/// 2-4. stamp container runtime, container id, and tracer name.
/// 5. snapshot the rules registered for this tracer.
/// 6. no rules ⇒ run `stdout` unconditionally and push to the buffer.
/// 7. otherwise run every matching rule's actions, pushing to the buffer at
///    most once regardless of how many rules match (§9 open question).
///
/// This task owns `tracer` exclusively, so it calls `unload` itself on the
/// way out (§4.9: unload runs exactly once per tracer, whether the loop
/// ended via cancellation or the channel closing).
pub async fn run(
    mut tracer: Box<dyn Tracer>,
    rule_store: Arc<RuleStore>,
    action_registry: Arc<ActionRegistry>,
    buffer: Arc<EventBuffer>,
    token: CancellationToken,
) {
    let tracer_name = tracer.name().to_string();

    loop {
        let outcome = tracer.watch_event(&token).await;
        let mut event = match outcome {
            Ok(Some(event)) => event,
            Ok(None) => continue,
            Err(TracerError::Interrupted) => break,
            Err(e) => {
                warn!(tracer = %tracer_name, error = %e, "tracer decode error, continuing");
                continue;
            }
        };

        event.tracer = tracer_name.clone();
        event.container_runtime = bpfd_proc::container_runtime(event.pid as i64);
        event.container_id = bpfd_proc::container_id(event.pid as i64);

        let rules = rule_store.rules_for(&tracer_name);

        if rules.is_empty() {
            dispatch(&action_registry, "stdout", &event);
            buffer.push(event);
            continue;
        }

        let mut pushed = false;
        for rule in &rules {
            if !bpfd_rules::matches(rule, &event.data, event.container_runtime) {
                continue;
            }
            if !pushed {
                buffer.push(event.clone());
                pushed = true;
            }
            for action_name in &rule.actions {
                dispatch(&action_registry, action_name, &event);
            }
        }
    }

    tracer.unload();
}

fn dispatch(registry: &ActionRegistry, name: &str, event: &bpfd_core::Event) {
    match registry.get(name) {
        Some(action) => {
            if let Err(e) = action.do_(event) {
                warn!(action = name, error = %e, "action failed");
            }
        }
        None => warn!(action = name, "rule names an unregistered action, skipping"),
    }
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
