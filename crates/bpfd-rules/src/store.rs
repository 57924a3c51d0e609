//! Concurrency-safe two-level rule store (§3, §4.2).

use std::collections::HashMap;

use bpfd_core::Rule;
use parking_lot::RwLock;

/// Tracer name → rule name → rule, guarded by a single `RwLock` so readers
/// (the pipeline, `ListRules`) can proceed concurrently and writers
/// (`CreateRule`, `RemoveRule`) are serialized against each other and
/// against readers.
///
/// Invariant: every rule held under key `(t, n)` has `rule.tracer == t` and
/// `rule.name == n` — enforced by construction, since `insert` derives both
/// keys from the rule itself.
#[derive(Default)]
pub struct RuleStore {
    inner: RwLock<HashMap<String, HashMap<String, Rule>>>,
}

impl RuleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Upserts by `(tracer, name)`; last writer wins.
    pub fn insert(&self, rule: Rule) {
        let mut guard = self.inner.write();
        guard
            .entry(rule.tracer.clone())
            .or_default()
            .insert(rule.name.clone(), rule);
    }

    /// Removes `name` from `tracer` if given, otherwise removes every rule
    /// named `name` regardless of tracer (§4.2, §9 open question — the
    /// source deletes all on a cross-tracer name collision; kept as-is).
    pub fn remove(&self, name: &str, tracer: Option<&str>) {
        let mut guard = self.inner.write();
        match tracer {
            Some(tracer) => {
                if let Some(rules) = guard.get_mut(tracer) {
                    rules.remove(name);
                }
            }
            None => {
                for rules in guard.values_mut() {
                    rules.remove(name);
                }
            }
        }
    }

    /// Snapshot copy of every rule across every tracer.
    pub fn list(&self) -> Vec<Rule> {
        let guard = self.inner.read();
        guard.values().flat_map(|rules| rules.values().cloned()).collect()
    }

    /// Snapshot copy of the rules registered for a single tracer.
    pub fn rules_for(&self, tracer: &str) -> Vec<Rule> {
        let guard = self.inner.read();
        guard
            .get(tracer)
            .map(|rules| rules.values().cloned().collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
