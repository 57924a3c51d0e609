//! Conversions between `bpfd-core`'s in-process types and the generated
//! wire types. Both directions are infallible: every field either copies
//! directly or round-trips through `ContainerRuntime::tag`/`parse_tag`.
//!
//! One lossy edge: `bpfd_core::Event::data` is an `IndexMap` (insertion
//! order preserved, relied on only by the `stdout` action running
//! in-process); protobuf's `map<string, string>` has no order, so a round
//! trip through `LiveTrace` does not preserve display order.

use std::collections::HashMap;

use bpfd_core::ContainerRuntime;
use indexmap::IndexMap;

use crate::bpfd;

impl From<bpfd_core::Filter> for bpfd::Filter {
    fn from(filter: bpfd_core::Filter) -> Self {
        bpfd::Filter { values: filter.values }
    }
}

impl From<bpfd::Filter> for bpfd_core::Filter {
    fn from(filter: bpfd::Filter) -> Self {
        bpfd_core::Filter::new(filter.values)
    }
}

impl From<bpfd_core::Rule> for bpfd::Rule {
    fn from(rule: bpfd_core::Rule) -> Self {
        bpfd::Rule {
            name: rule.name,
            tracer: rule.tracer,
            container_runtimes: rule.container_runtimes,
            filter_events: rule
                .filter_events
                .into_iter()
                .map(|(field, filter)| (field, filter.into()))
                .collect(),
            actions: rule.actions,
        }
    }
}

impl From<bpfd::Rule> for bpfd_core::Rule {
    fn from(rule: bpfd::Rule) -> Self {
        bpfd_core::Rule {
            name: rule.name,
            tracer: rule.tracer,
            container_runtimes: rule.container_runtimes,
            filter_events: rule
                .filter_events
                .into_iter()
                .map(|(field, filter)| (field, filter.into()))
                .collect(),
            actions: rule.actions,
        }
    }
}

impl From<bpfd_core::Event> for bpfd::Event {
    fn from(event: bpfd_core::Event) -> Self {
        bpfd::Event {
            tracer: event.tracer,
            pid: event.pid,
            tgid: event.tgid,
            uid: event.uid,
            gid: event.gid,
            command: event.command,
            return_value: event.return_value,
            container_runtime: event.container_runtime.tag().to_string(),
            container_id: event.container_id,
            data: event.data.into_iter().collect::<HashMap<_, _>>(),
        }
    }
}

impl From<bpfd::Event> for bpfd_core::Event {
    fn from(event: bpfd::Event) -> Self {
        bpfd_core::Event {
            tracer: event.tracer,
            pid: event.pid,
            tgid: event.tgid,
            uid: event.uid,
            gid: event.gid,
            command: event.command,
            return_value: event.return_value,
            container_runtime: ContainerRuntime::parse_tag(&event.container_runtime).unwrap_or_default(),
            container_id: event.container_id,
            data: event.data.into_iter().collect::<IndexMap<_, _>>(),
        }
    }
}

#[cfg(test)]
#[path = "convert_tests.rs"]
mod tests;
