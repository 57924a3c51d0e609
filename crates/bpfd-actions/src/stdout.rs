//! Logs a structured line for the matched event (§4.5).

use bpfd_core::Event;
use tracing::info;

use crate::action::Action;
use crate::error::ActionError;

pub struct StdoutAction;

impl Action for StdoutAction {
    fn name(&self) -> &str {
        "stdout"
    }

    fn do_(&self, event: &Event) -> Result<(), ActionError> {
        info!(
            tracer = %event.tracer,
            pid = event.pid,
            tgid = event.tgid,
            uid = event.uid,
            gid = event.gid,
            command = %event.command,
            return_value = event.return_value,
            container_runtime = %event.container_runtime,
            container_id = %event.container_id,
            data = ?event.data,
            "matched event",
        );
        Ok(())
    }
}

#[cfg(test)]
#[path = "stdout_tests.rs"]
mod tests;
