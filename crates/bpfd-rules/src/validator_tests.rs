use super::*;

fn tracers() -> Vec<String> {
    vec!["exec".to_string(), "open".to_string()]
}

fn actions() -> Vec<String> {
    vec!["stdout".to_string(), "kill".to_string()]
}

#[test]
fn empty_name_is_rejected() {
    let rule = Rule::new("", "exec");
    assert_eq!(validate_structural(&rule), Err(ConfigError::EmptyName));
}

#[test]
fn empty_tracer_is_rejected() {
    let rule = Rule::new("r", "");
    assert_eq!(validate_structural(&rule), Err(ConfigError::EmptyTracer));
}

#[test]
fn invalid_runtime_tag_is_rejected() {
    let mut rule = Rule::new("r", "exec");
    rule.container_runtimes.push("made-up".to_string());
    assert_eq!(
        validate_structural(&rule),
        Err(ConfigError::InvalidRuntimeTag("made-up".to_string()))
    );
}

#[test]
fn valid_rule_passes_structural_validation() {
    let mut rule = Rule::new("r", "exec");
    rule.container_runtimes.push("docker".to_string());
    assert_eq!(validate_structural(&rule), Ok(()));
}

#[test]
fn unknown_tracer_is_rejected_referentially() {
    let rule = Rule::new("r", "ptrace");
    assert_eq!(
        validate_referential(&rule, &tracers(), &actions()),
        Err(ConfigError::UnknownTracer("ptrace".to_string()))
    );
}

#[test]
fn unknown_action_is_rejected_referentially() {
    let mut rule = Rule::new("r", "exec");
    rule.actions.push("nuke".to_string());
    assert_eq!(
        validate_referential(&rule, &tracers(), &actions()),
        Err(ConfigError::UnknownAction("nuke".to_string()))
    );
}

#[test]
fn full_validate_runs_structural_before_referential() {
    let rule = Rule::new("", "ptrace");
    // Structural failure (empty name) reported even though tracer is also unknown.
    assert_eq!(
        validate(&rule, &tracers(), &actions()),
        Err(ConfigError::EmptyName)
    );
}

#[test]
fn fully_valid_rule_passes() {
    let mut rule = Rule::new("r", "exec");
    rule.actions.push("stdout".to_string());
    assert_eq!(validate(&rule, &tracers(), &actions()), Ok(()));
}
