//! Container runtime and container-id inference from `/proc/<pid>/cgroup`.
//!
//! Ported from `genuinetools/bpfd`'s `proc` package: first match wins across
//! cgroup substring scan, the `/proc/vz` OpenVZ heuristic, `$container`, and
//! `/run/systemd/container`, in that order (§4.1).

use std::path::Path;
use std::sync::LazyLock;

use bpfd_core::ContainerRuntime;
use regex::Regex;

/// Runtime name substrings, checked in this order. `lxc` is checked before
/// `lxc-libvirt` — preserved from the original implementation: an
/// `lxc-libvirt` cgroup path also contains the substring `lxc`, so it is
/// classified as plain `Lxc` unless `lxc-libvirt` is scanned first. This
/// quirk is inherited rather than fixed; no REDESIGN FLAG calls for it.
const RUNTIME_SUBSTRINGS: &[(&str, ContainerRuntime)] = &[
    ("docker", ContainerRuntime::Docker),
    ("rkt", ContainerRuntime::Rkt),
    ("systemd-nspawn", ContainerRuntime::Nspawn),
    ("lxc", ContainerRuntime::Lxc),
    ("lxc-libvirt", ContainerRuntime::LxcLibvirt),
    ("openvz", ContainerRuntime::OpenVz),
    ("kube", ContainerRuntime::Kube),
    ("garden", ContainerRuntime::Garden),
    ("podman", ContainerRuntime::Podman),
];

const CGROUP_CONTAINER_ID_PATTERN: &str = concat!(
    r":(/docker/|/kube.*/.*/|/kube.*/.*/.*/.*/|/system.slice/docker-",
    r"|/machine.slice/machine-rkt-|/machine.slice/machine-|/lxc/",
    r"|/lxc-libvirt/|/garden/|/podman/)([[:alnum:]-]{1,64})(.scope|$)",
);

#[allow(clippy::expect_used)]
static CGROUP_CONTAINER_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(CGROUP_CONTAINER_ID_PATTERN).expect("constant regex pattern is valid"));

/// Scans `input` for any known runtime substring, returning the first hit.
fn runtime_from_text(input: &str) -> Option<ContainerRuntime> {
    if input.trim().is_empty() {
        return None;
    }
    RUNTIME_SUBSTRINGS
        .iter()
        .find(|(needle, _)| input.contains(needle))
        .map(|(_, runtime)| *runtime)
}

/// Extracts a container id from raw `/proc/<pid>/cgroup` text.
///
/// rkt encodes dashes in cgroup paths as `\x2d`; unescape before matching.
pub fn container_id_from_cgroup_text(input: &str) -> String {
    if input.trim().is_empty() {
        return String::new();
    }

    let unescaped = input.replace(r"\x2d", "-");

    for line in unescaped.lines() {
        if let Some(caps) = CGROUP_CONTAINER_ID_RE.captures(line) {
            if let Some(id) = caps.get(2) {
                return id.as_str().to_string();
            }
        }
    }

    String::new()
}

fn read_trimmed(path: &Path) -> String {
    std::fs::read_to_string(path)
        .map(|s| s.trim().to_string())
        .unwrap_or_default()
}

fn cgroup_path(pid: i64) -> std::path::PathBuf {
    if pid > 0 {
        std::path::PathBuf::from(format!("/proc/{pid}/cgroup"))
    } else {
        std::path::PathBuf::from("/proc/self/cgroup")
    }
}

/// Returns the container runtime for `pid`. `pid < 1` means "self".
pub fn container_runtime(pid: i64) -> ContainerRuntime {
    let cgroup_text = read_trimmed(&cgroup_path(pid));
    if let Some(runtime) = runtime_from_text(&cgroup_text) {
        return runtime;
    }

    // /proc/vz exists in container and outside of it; /proc/bc only outside.
    if Path::new("/proc/vz").exists() && !Path::new("/proc/bc").exists() {
        return ContainerRuntime::OpenVz;
    }

    if let Ok(container_env) = std::env::var("container") {
        if let Some(runtime) = runtime_from_text(&container_env) {
            return runtime;
        }
    }

    let systemd_marker = read_trimmed(Path::new("/run/systemd/container"));
    if let Some(runtime) = runtime_from_text(&systemd_marker) {
        return runtime;
    }

    ContainerRuntime::NotFound
}

/// Returns the container id for `pid`. `pid < 1` means "self".
pub fn container_id(pid: i64) -> String {
    let cgroup_text = read_trimmed(&cgroup_path(pid));
    container_id_from_cgroup_text(&cgroup_text)
}

#[cfg(test)]
#[path = "container_tests.rs"]
mod tests;
