use std::os::unix::process::ExitStatusExt;
use std::process::Command;

use super::*;

#[test]
fn name_is_interrupt() {
    assert_eq!(InterruptAction.name(), "interrupt");
}

#[test]
fn do_delivers_sigint_to_the_target_process() {
    let mut child = Command::new("sleep").arg("5").spawn().unwrap();
    let event = Event::new(child.id(), child.id(), "sleep", 0);

    InterruptAction.do_(&event).unwrap();

    let status = child.wait().unwrap();
    assert_eq!(status.signal(), Some(nix::sys::signal::Signal::SIGINT as i32));
}

#[test]
fn do_on_a_missing_pid_is_no_such_process() {
    let event = Event::new(i32::MAX as u32, i32::MAX as u32, "gone", 0);
    let err = InterruptAction.do_(&event).unwrap_err();
    assert_eq!(err, ActionError::NoSuchProcess(i32::MAX));
}
