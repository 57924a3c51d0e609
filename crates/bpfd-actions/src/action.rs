//! The `Action` trait (§4.5).

use bpfd_core::Event;

use crate::error::ActionError;

/// A named side effect performed on a matched event.
///
/// Unlike [`bpfd_tracers::Tracer`](../bpfd_tracers/trait.Tracer.html), an
/// action never blocks on kernel I/O, so the trait stays synchronous — it
/// mirrors the original `Do(event) error` interface directly.
pub trait Action: Send + Sync {
    /// The registered name this action runs under.
    fn name(&self) -> &str;

    /// Performs the action's effect for `event`.
    fn do_(&self, event: &Event) -> Result<(), ActionError>;
}

#[cfg(test)]
#[path = "action_tests.rs"]
mod tests;
