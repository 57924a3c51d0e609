//! The on-disk rule file format (§6): one file, one rule, TOML-encoded.
//!
//! Listed in §1 as an external collaborator "specified only by interface",
//! but the format is fully specified in §6, so it is implemented here
//! rather than left as a bare trait — the way `oj-runbook` decodes its
//! HCL/TOML runbook files into typed structs before handing them to the
//! engine.

use std::collections::HashMap;
use std::path::Path;

use bpfd_core::{Filter, Rule};
use indexmap::IndexMap;
use serde::Deserialize;

use crate::error::ConfigError;

#[derive(Debug, Deserialize)]
struct FilterFile {
    #[serde(rename = "Values", alias = "values")]
    values: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RuleFile {
    name: Option<String>,
    tracer: String,
    #[serde(default, rename = "containerRuntimes")]
    container_runtimes: Vec<String>,
    #[serde(default, rename = "filterEvents")]
    filter_events: HashMap<String, FilterFile>,
    #[serde(default)]
    actions: Vec<String>,
}

/// Parses one rule file into a [`Rule`]. `name` defaults to the file's
/// basename without extension when the file omits it.
pub fn parse_rule_file(path: &Path) -> Result<Rule, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|e| ConfigError::MalformedFile {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    let parsed: RuleFile = toml::from_str(&text).map_err(|e| ConfigError::MalformedFile {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    let name = parsed.name.unwrap_or_else(|| {
        path.file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    });

    let mut filter_events = IndexMap::new();
    for (field, filter) in parsed.filter_events {
        filter_events.insert(field, Filter::new(filter.values));
    }

    Ok(Rule {
        name,
        tracer: parsed.tracer,
        container_runtimes: parsed.container_runtimes,
        filter_events,
        actions: parsed.actions,
    })
}

#[cfg(test)]
#[path = "rule_file_tests.rs"]
mod tests;
