//! Operator-authored rules: runtime filter + per-field value filters + actions.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::filter::Filter;

/// A rule as authored by an operator, either via a rule file or the
/// control plane. Two rules are distinguished by `(tracer, name)` (§3).
///
/// `container_runtimes` holds raw tag strings rather than
/// [`crate::ContainerRuntime`] values: a `Rule` may exist transiently in an
/// unvalidated state (freshly parsed from a file, before structural
/// validation runs), and an invalid tag must be representable so the
/// validator can report it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub name: String,
    pub tracer: String,
    #[serde(default)]
    pub container_runtimes: Vec<String>,
    #[serde(default)]
    pub filter_events: IndexMap<String, Filter>,
    #[serde(default)]
    pub actions: Vec<String>,
}

impl Rule {
    pub fn new(name: impl Into<String>, tracer: impl Into<String>) -> Self {
        Rule {
            name: name.into(),
            tracer: tracer.into(),
            container_runtimes: Vec::new(),
            filter_events: IndexMap::new(),
            actions: Vec::new(),
        }
    }

    /// The `(tracer, name)` key this rule is stored and distinguished under.
    pub fn key(&self) -> (&str, &str) {
        (self.tracer.as_str(), self.name.as_str())
    }
}

#[cfg(test)]
#[path = "rule_tests.rs"]
mod tests;
