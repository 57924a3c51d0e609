//! Container runtime identity tag.

use serde::{Deserialize, Serialize};

/// Container runtime a process is confined to, as inferred from its
/// cgroup path, environment, or systemd container marker file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContainerRuntime {
    NotFound,
    Docker,
    Rkt,
    Nspawn,
    Lxc,
    LxcLibvirt,
    OpenVz,
    Kube,
    Garden,
    Podman,
}

impl ContainerRuntime {
    /// All variants, in the order cgroup substring matching checks them.
    pub const ALL: &'static [ContainerRuntime] = &[
        ContainerRuntime::Docker,
        ContainerRuntime::Rkt,
        ContainerRuntime::Nspawn,
        ContainerRuntime::Lxc,
        ContainerRuntime::LxcLibvirt,
        ContainerRuntime::OpenVz,
        ContainerRuntime::Kube,
        ContainerRuntime::Garden,
        ContainerRuntime::Podman,
        ContainerRuntime::NotFound,
    ];

    /// The wire/rule-file tag for this runtime, e.g. `"lxc-libvirt"`.
    pub fn tag(self) -> &'static str {
        match self {
            ContainerRuntime::NotFound => "not-found",
            ContainerRuntime::Docker => "docker",
            ContainerRuntime::Rkt => "rkt",
            ContainerRuntime::Nspawn => "nspawn",
            ContainerRuntime::Lxc => "lxc",
            ContainerRuntime::LxcLibvirt => "lxc-libvirt",
            ContainerRuntime::OpenVz => "openvz",
            ContainerRuntime::Kube => "kube",
            ContainerRuntime::Garden => "garden",
            ContainerRuntime::Podman => "podman",
        }
    }

    /// Parses a rule-file/wire tag back into a runtime, if it names one.
    pub fn parse_tag(tag: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .chain(std::iter::once(ContainerRuntime::NotFound))
            .find(|r| r.tag() == tag)
    }

    /// `IsValid(tag)` from §3: true iff `tag` names one of the known variants.
    pub fn is_valid_tag(tag: &str) -> bool {
        Self::parse_tag(tag).is_some()
    }
}

impl std::fmt::Display for ContainerRuntime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl Default for ContainerRuntime {
    fn default() -> Self {
        ContainerRuntime::NotFound
    }
}

#[cfg(test)]
#[path = "container_runtime_tests.rs"]
mod tests;
