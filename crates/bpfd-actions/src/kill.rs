//! Sends `SIGKILL` to the matched event's pid (§4.5).

use bpfd_core::Event;
use nix::sys::signal::{self, Signal};
use nix::unistd::Pid;

use crate::action::Action;
use crate::error::ActionError;

pub struct KillAction;

impl Action for KillAction {
    fn name(&self) -> &str {
        "kill"
    }

    fn do_(&self, event: &Event) -> Result<(), ActionError> {
        send_signal(event.pid, Signal::SIGKILL)
    }
}

pub(crate) fn send_signal(pid: u32, signal: Signal) -> Result<(), ActionError> {
    let raw = pid as i32;
    signal::kill(Pid::from_raw(raw), signal).map_err(|errno| {
        if errno == nix::errno::Errno::ESRCH {
            ActionError::NoSuchProcess(raw)
        } else {
            ActionError::SignalFailed {
                pid: raw,
                message: errno.to_string(),
            }
        }
    })
}

#[cfg(test)]
#[path = "kill_tests.rs"]
mod tests;
