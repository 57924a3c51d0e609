use std::os::unix::process::ExitStatusExt;
use std::process::Command;

use super::*;

#[test]
fn name_is_kill() {
    assert_eq!(KillAction.name(), "kill");
}

#[test]
fn do_terminates_the_target_process() {
    let mut child = Command::new("sleep").arg("5").spawn().unwrap();
    let event = Event::new(child.id(), child.id(), "sleep", 0);

    KillAction.do_(&event).unwrap();

    let status = child.wait().unwrap();
    assert_eq!(status.signal(), Some(nix::sys::signal::Signal::SIGKILL as i32));
}

#[test]
fn do_on_a_missing_pid_is_no_such_process() {
    let event = Event::new(i32::MAX as u32, i32::MAX as u32, "gone", 0);
    let err = KillAction.do_(&event).unwrap_err();
    assert_eq!(err, ActionError::NoSuchProcess(i32::MAX));
}
