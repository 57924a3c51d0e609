//! bpfd-proc: pure read-only `/proc` queries backing container-context
//! enrichment (§4.1). All functions return a default/empty value rather
//! than failing when the underlying proc file is absent — a missing file
//! is a normal race (the traced process may have already exited), never a
//! fatal condition.

pub mod container;
pub mod identity;
pub mod security;

pub use container::{container_id, container_runtime};
pub use identity::uid_gid;
pub use security::{capabilities, no_new_privs, seccomp_mode, user_namespace, Capabilities, SeccompMode};
