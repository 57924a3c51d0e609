//! The decoded, enriched record emitted by a tracer.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::container_runtime::ContainerRuntime;

/// An event produced by a tracer, enriched with container context by the
/// event pipeline before it reaches the rule matcher or a live subscriber.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub tracer: String,
    pub pid: u32,
    pub tgid: u32,
    pub uid: u32,
    pub gid: u32,
    pub command: String,
    pub return_value: i32,
    pub container_runtime: ContainerRuntime,
    #[serde(default)]
    pub container_id: String,
    /// Tracer-specific fields, e.g. `filename`, `argv`, `saddr`, `sport`,
    /// `state`, `tcpflags`. Key order is insertion order; irrelevant to
    /// matching semantics but kept stable for `stdout` log output.
    #[serde(default)]
    pub data: IndexMap<String, String>,
}

impl Event {
    /// Builds an event as a tracer would, with runtime/id left for the
    /// pipeline to fill in (§4.7 steps 2-4).
    pub fn new(pid: u32, tgid: u32, command: impl Into<String>, return_value: i32) -> Self {
        Event {
            tracer: String::new(),
            pid,
            tgid,
            uid: 0,
            gid: 0,
            command: command.into(),
            return_value,
            container_runtime: ContainerRuntime::NotFound,
            container_id: String::new(),
            data: IndexMap::new(),
        }
    }

    pub fn with_data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
