use super::*;
use yare::parameterized;

#[parameterized(
    docker = { "docker", Some(ContainerRuntime::Docker) },
    kube = { "kube", Some(ContainerRuntime::Kube) },
    lxc_libvirt = { "lxc-libvirt", Some(ContainerRuntime::LxcLibvirt) },
    not_found = { "not-found", Some(ContainerRuntime::NotFound) },
    unknown = { "made-up", None },
    empty = { "", None },
)]
fn parse_tag_round_trips_known_tags(input: &str, expected: Option<ContainerRuntime>) {
    assert_eq!(ContainerRuntime::parse_tag(input), expected);
}

#[test]
fn tag_round_trips_through_parse_tag() {
    for runtime in ContainerRuntime::ALL {
        assert_eq!(ContainerRuntime::parse_tag(runtime.tag()), Some(*runtime));
    }
}

#[test]
fn is_valid_tag_matches_parse_tag() {
    assert!(ContainerRuntime::is_valid_tag("docker"));
    assert!(!ContainerRuntime::is_valid_tag("nonsense"));
}

#[test]
fn serializes_as_kebab_case_tag() {
    let json = serde_json::to_string(&ContainerRuntime::LxcLibvirt).unwrap();
    assert_eq!(json, "\"lxc-libvirt\"");
}

#[test]
fn default_is_not_found() {
    assert_eq!(ContainerRuntime::default(), ContainerRuntime::NotFound);
}
