use std::io::Write;

use tempfile::NamedTempFile;

use super::*;

fn write_toml(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::with_suffix(".toml").unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn parses_a_full_rule_file() {
    let file = write_toml(
        r#"
        name = "suspicious-bash"
        tracer = "exec"
        containerRuntimes = ["docker", "rkt"]
        actions = ["stdout", "kill"]

        [filterEvents.command]
        Values = ["nc", "ncat"]
        "#,
    );

    let rule = parse_rule_file(file.path()).unwrap();
    assert_eq!(rule.name, "suspicious-bash");
    assert_eq!(rule.tracer, "exec");
    assert_eq!(rule.container_runtimes, vec!["docker", "rkt"]);
    assert_eq!(rule.actions, vec!["stdout", "kill"]);
    assert_eq!(rule.filter_events["command"].values, vec!["nc", "ncat"]);
}

#[test]
fn name_defaults_to_the_file_stem_when_omitted() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("watch-netcat.toml");
    std::fs::write(&path, "tracer = \"exec\"\n").unwrap();

    let rule = parse_rule_file(&path).unwrap();
    assert_eq!(rule.name, "watch-netcat");
}

#[test]
fn minimal_file_has_no_filters_or_actions() {
    let file = write_toml("name = \"r\"\ntracer = \"open\"\n");
    let rule = parse_rule_file(file.path()).unwrap();
    assert!(rule.container_runtimes.is_empty());
    assert!(rule.filter_events.is_empty());
    assert!(rule.actions.is_empty());
}

#[test]
fn invalid_toml_is_a_malformed_file_error() {
    let file = write_toml("this is not valid toml {{{");
    let err = parse_rule_file(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::MalformedFile { .. }));
}

#[test]
fn missing_file_is_a_malformed_file_error() {
    let err = parse_rule_file(std::path::Path::new("/no/such/rule.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::MalformedFile { .. }));
}
