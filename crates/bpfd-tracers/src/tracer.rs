//! The `Tracer` trait (§4.6).

use async_trait::async_trait;
use bpfd_core::Event;
use tokio_util::sync::CancellationToken;

use crate::error::TracerError;

/// A named component that attaches kernel probes and produces a stream of
/// [`Event`]s. Lifecycle is `Unloaded → Loaded → Started → Unloaded`;
/// `unload` is idempotent and safe to call from any state.
#[async_trait]
pub trait Tracer: Send + Sync {
    /// The name this tracer is registered and matched against in rules.
    fn name(&self) -> &str;

    /// Allocates kernel-side resources and attaches probes, binding the
    /// perf/ring map to an internal channel.
    async fn load(&mut self) -> Result<(), TracerError>;

    /// Begins draining the kernel buffer into the channel `watch_event`
    /// reads from.
    fn start(&mut self);

    /// Blocks until the next event is ready, or returns `None` if the
    /// current kernel record was incomplete or irrelevant (the caller is
    /// expected to call again). Cancels promptly via `token`.
    async fn watch_event(&mut self, token: &CancellationToken) -> Result<Option<Event>, TracerError>;

    /// Stops the perf map and releases module resources. Safe to call more
    /// than once.
    fn unload(&mut self);
}

#[cfg(test)]
#[path = "tracer_tests.rs"]
mod tests;
