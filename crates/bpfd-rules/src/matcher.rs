//! The match decision ladder (§4.4, §8).

use bpfd_core::{ContainerRuntime, Rule};
use indexmap::IndexMap;

/// Decides whether `rule` fires for an event carrying `data` and observed
/// at `pid_runtime`, per the four-step ladder in §4.4:
///
/// 1. No runtime filter and no field filters ⇒ match.
/// 2. A runtime filter that excludes `pid_runtime` ⇒ no match.
/// 3. Runtime filter satisfied (or absent) and no field filters ⇒ match.
/// 4. Otherwise, match iff some `(field, filter)` in `filter_events` has
///    `field` present in `data` and some filter value is a substring of
///    `data[field]`.
///
/// Runtime filtering is conjunctive with the rest of the rule; value
/// filters are disjunctive across all `(field, value)` pairs — one hit
/// anywhere fires the rule.
pub fn matches(rule: &Rule, data: &IndexMap<String, String>, pid_runtime: ContainerRuntime) -> bool {
    let has_runtime_filter = !rule.container_runtimes.is_empty();
    let has_field_filter = !rule.filter_events.is_empty();

    if !has_runtime_filter && !has_field_filter {
        return true;
    }

    if has_runtime_filter && !rule.container_runtimes.iter().any(|tag| tag == pid_runtime.tag()) {
        return false;
    }

    if !has_field_filter {
        return true;
    }

    rule.filter_events.iter().any(|(field, filter)| {
        data.get(field)
            .is_some_and(|value| filter.matches(value))
    })
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
