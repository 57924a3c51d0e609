//! Sends `SIGINT` to the matched event's pid (§4.5).

use bpfd_core::Event;
use nix::sys::signal::Signal;

use crate::action::Action;
use crate::error::ActionError;
use crate::kill::send_signal;

pub struct InterruptAction;

impl Action for InterruptAction {
    fn name(&self) -> &str {
        "interrupt"
    }

    fn do_(&self, event: &Event) -> Result<(), ActionError> {
        send_signal(event.pid, Signal::SIGINT)
    }
}

#[cfg(test)]
#[path = "interrupt_tests.rs"]
mod tests;
