//! Ancillary process security metadata: seccomp mode, no-new-privs,
//! capability sets, and user-namespace membership.
//!
//! These are not consulted by the core event pipeline (§4.1 calls them
//! "ancillary and optional") but are exposed for rules/actions that want
//! richer context, and for the `bpfd` CLI's future `inspect` use cases.

use std::path::PathBuf;

/// Seccomp enforcement level of a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeccompMode {
    Disabled,
    Strict,
    Filtering,
}

fn status_text(pid: i64) -> String {
    let path = if pid > 0 {
        PathBuf::from(format!("/proc/{pid}/status"))
    } else {
        PathBuf::from("/proc/self/status")
    };
    std::fs::read_to_string(path).unwrap_or_default()
}

fn status_field<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    text.lines()
        .find(|line| line.starts_with(prefix))
        .map(|line| line[prefix.len()..].trim())
}

/// Returns the seccomp mode for `pid`, or `None` if the kernel predates the
/// `Seccomp:` status field (pre Linux 3.8) or the field can't be parsed.
pub fn seccomp_mode(pid: i64) -> Option<SeccompMode> {
    let text = status_text(pid);
    match status_field(&text, "Seccomp:") {
        Some("0") => Some(SeccompMode::Disabled),
        Some("1") => Some(SeccompMode::Strict),
        Some("2") => Some(SeccompMode::Filtering),
        _ => None,
    }
}

/// Returns whether `PR_SET_NO_NEW_PRIVS` is set for `pid`. Defaults to
/// `false` if the field is missing (older kernels).
pub fn no_new_privs(pid: i64) -> bool {
    let text = status_text(pid);
    status_field(&text, "NoNewPrivs:") == Some("1")
}

/// Raw capability bitmasks, one per capability set, as reported by
/// `/proc/<pid>/status`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Capabilities {
    pub effective: u64,
    pub permitted: u64,
    pub inheritable: u64,
    pub bounding: u64,
    pub ambient: u64,
}

fn parse_cap_hex(text: &str, prefix: &str) -> u64 {
    status_field(text, prefix)
        .and_then(|hex| u64::from_str_radix(hex, 16).ok())
        .unwrap_or(0)
}

/// Returns the capability sets for `pid`. Missing fields default to zero;
/// never fails (§4.1's "missing file ⇒ empty/default value" policy).
pub fn capabilities(pid: i64) -> Capabilities {
    let text = status_text(pid);
    Capabilities {
        effective: parse_cap_hex(&text, "CapEff:"),
        permitted: parse_cap_hex(&text, "CapPrm:"),
        inheritable: parse_cap_hex(&text, "CapInh:"),
        bounding: parse_cap_hex(&text, "CapBnd:"),
        ambient: parse_cap_hex(&text, "CapAmb:"),
    }
}

/// Returns whether `pid` is running in a non-default user namespace, by
/// inspecting `/proc/<pid>/uid_map`. An uninitialized or identity mapping
/// (`0 0 4294967295`) means "no user namespace".
pub fn user_namespace(pid: i64) -> bool {
    let path = if pid > 0 {
        PathBuf::from(format!("/proc/{pid}/uid_map"))
    } else {
        PathBuf::from("/proc/self/uid_map")
    };
    let text = std::fs::read_to_string(path).unwrap_or_default();
    is_non_identity_uid_map(&text)
}

const IDENTITY_MAP_RANGE: &str = "4294967295";

fn is_non_identity_uid_map(text: &str) -> bool {
    let fields: Vec<&str> = text.split_whitespace().collect();
    if fields.len() < 3 {
        return false;
    }
    !(fields[0] == "0" && fields[1] == "0" && fields[2] == IDENTITY_MAP_RANGE)
}

#[cfg(test)]
#[path = "security_tests.rs"]
mod tests;
