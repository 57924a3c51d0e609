//! uid/gid lookup from `/proc/<pid>/status`.

use std::path::PathBuf;

fn status_path(pid: i64) -> PathBuf {
    if pid > 0 {
        PathBuf::from(format!("/proc/{pid}/status"))
    } else {
        PathBuf::from("/proc/self/status")
    }
}

fn first_column_after(text: &str, prefix: &str) -> Option<u32> {
    text.lines()
        .find(|line| line.starts_with(prefix))
        .and_then(|line| line[prefix.len()..].split_whitespace().next())
        .and_then(|s| s.parse().ok())
}

/// Parses the first `Uid:`/`Gid:` line of `/proc/<pid>/status`. Missing
/// file or unparsable line yields `(0, 0)`, never an error (§4.1).
pub fn uid_gid(pid: i64) -> (u32, u32) {
    let text = std::fs::read_to_string(status_path(pid)).unwrap_or_default();
    uid_gid_from_status_text(&text)
}

fn uid_gid_from_status_text(text: &str) -> (u32, u32) {
    let uid = first_column_after(text, "Uid:").unwrap_or(0);
    let gid = first_column_after(text, "Gid:").unwrap_or(0);
    (uid, gid)
}

#[cfg(test)]
#[path = "identity_tests.rs"]
mod tests;
