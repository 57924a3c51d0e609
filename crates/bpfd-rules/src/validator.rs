//! Two-phase rule validation (§4.3).

use bpfd_core::{ContainerRuntime, Rule};

use crate::error::ConfigError;

/// Structural validation: checks the rule is well-formed without
/// consulting any registry. `name` and `tracer` must be non-empty; every
/// `container_runtimes` entry must be a known tag.
pub fn validate_structural(rule: &Rule) -> Result<(), ConfigError> {
    if rule.name.is_empty() {
        return Err(ConfigError::EmptyName);
    }
    if rule.tracer.is_empty() {
        return Err(ConfigError::EmptyTracer);
    }
    for tag in &rule.container_runtimes {
        if !ContainerRuntime::is_valid_tag(tag) {
            return Err(ConfigError::InvalidRuntimeTag(tag.clone()));
        }
    }
    Ok(())
}

/// Referential validation: the rule's tracer must be loaded, and every
/// action it names must be registered. Run only after structural
/// validation passes.
pub fn validate_referential(
    rule: &Rule,
    loaded_tracers: &[String],
    registered_actions: &[String],
) -> Result<(), ConfigError> {
    if !loaded_tracers.iter().any(|t| t == &rule.tracer) {
        return Err(ConfigError::UnknownTracer(rule.tracer.clone()));
    }
    for action in &rule.actions {
        if !registered_actions.iter().any(|a| a == action) {
            return Err(ConfigError::UnknownAction(action.clone()));
        }
    }
    Ok(())
}

/// Runs both validation phases in order, short-circuiting on the first
/// failure (structural errors never need a registry to diagnose).
pub fn validate(
    rule: &Rule,
    loaded_tracers: &[String],
    registered_actions: &[String],
) -> Result<(), ConfigError> {
    validate_structural(rule)?;
    validate_referential(rule, loaded_tracers, registered_actions)
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
