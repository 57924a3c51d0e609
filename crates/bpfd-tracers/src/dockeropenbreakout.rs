//! `dockeropenbreakout` tracer: like `open`, but scoped to Docker containers
//! and filtered down to opens that reach outside every mount the container's
//! graph driver reports — a file read that escapes the container's own
//! layered filesystem (§4.6, ported from
//! `original_source/tracer/dockeropenbreakout/dockeropenbreakout.go`).
//!
//! Unlike `open`, the wire record already carries `uid`/`gid` (the original
//! reads them at kprobe time rather than looking them up afterward), and
//! this tracer decides for itself whether an event is in scope — the
//! container runtime/id the pipeline stamps onto every event afterward
//! arrives too late to gate on here.

use std::collections::HashSet;

use async_trait::async_trait;
use bollard::Docker;
use bpfd_core::Event;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::warn;

use crate::error::TracerError;
use crate::tracer::Tracer;
use crate::wire::{read_cstr, read_i32, read_u32};

const NAME: &str = "dockeropenbreakout";
const RECORD_LEN: usize = 4 + 4 + 4 + 4 + 4 + 16 + 255;

struct DecodedRecord {
    pid: u32,
    tgid: u32,
    uid: u32,
    gid: u32,
    return_value: i32,
    comm: String,
    filename: String,
}

fn decode(buf: &[u8]) -> Result<DecodedRecord, TracerError> {
    if buf.len() < RECORD_LEN {
        return Err(TracerError::DecodeFailed {
            tracer: NAME.to_string(),
            message: format!("expected {RECORD_LEN} bytes, got {}", buf.len()),
        });
    }
    Ok(DecodedRecord {
        pid: read_u32(buf, 0, NAME)?,
        tgid: read_u32(buf, 4, NAME)?,
        uid: read_u32(buf, 8, NAME)?,
        gid: read_u32(buf, 12, NAME)?,
        return_value: read_i32(buf, 16, NAME)?,
        comm: read_cstr(buf, 20, 16, NAME)?,
        filename: read_cstr(buf, 36, 255, NAME)?,
    })
}

fn is_self_open(filename: &str, pid: u32, tgid: u32, comm: &str) -> bool {
    filename.starts_with(&format!("/proc/{pid}"))
        || filename.starts_with(&format!("/proc/{tgid}"))
        || comm == "bpfd"
}

pub struct DockerOpenBreakoutTracer {
    channel: Option<(mpsc::Sender<Vec<u8>>, mpsc::Receiver<Vec<u8>>)>,
    docker: Option<Docker>,
}

impl DockerOpenBreakoutTracer {
    pub fn new() -> Self {
        DockerOpenBreakoutTracer {
            channel: None,
            docker: None,
        }
    }

    pub fn raw_sender(&self) -> Option<mpsc::Sender<Vec<u8>>> {
        self.channel.as_ref().map(|(tx, _)| tx.clone())
    }

    /// Graph-driver mount paths for `container_id`, or an empty set if the
    /// daemon can't be reached or the container can't be inspected — in
    /// either case every open is treated as "inside some mount" and
    /// suppressed, rather than risk false breakout reports.
    async fn container_mounts(&self, container_id: &str) -> HashSet<String> {
        let Some(docker) = &self.docker else {
            return HashSet::new();
        };
        match docker.inspect_container(container_id, None).await {
            Ok(info) => info
                .graph_driver
                .and_then(|gd| gd.data)
                .map(|data| data.into_values().collect())
                .unwrap_or_default(),
            Err(e) => {
                warn!(container_id, error = %e, "failed to inspect container, suppressing event");
                HashSet::new()
            }
        }
    }
}

impl Default for DockerOpenBreakoutTracer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tracer for DockerOpenBreakoutTracer {
    fn name(&self) -> &str {
        NAME
    }

    async fn load(&mut self) -> Result<(), TracerError> {
        self.channel = Some(mpsc::channel(1024));
        self.docker = match Docker::connect_with_local_defaults() {
            Ok(docker) => Some(docker),
            Err(e) => {
                warn!(error = %e, "could not connect to the Docker daemon, breakout checks will suppress all events");
                None
            }
        };
        Ok(())
    }

    fn start(&mut self) {}

    async fn watch_event(&mut self, token: &CancellationToken) -> Result<Option<Event>, TracerError> {
        let Some((_, rx)) = self.channel.as_mut() else {
            return Err(TracerError::DecodeFailed {
                tracer: NAME.to_string(),
                message: "watch_event called before load".to_string(),
            });
        };

        let raw = tokio::select! {
            biased;
            _ = token.cancelled() => return Err(TracerError::Interrupted),
            raw = rx.recv() => match raw {
                Some(raw) => raw,
                None => return Err(TracerError::Interrupted),
            },
        };

        let record = decode(&raw)?;

        if is_self_open(&record.filename, record.pid, record.tgid, &record.comm) {
            return Ok(None);
        }

        if bpfd_proc::container_runtime(record.pid as i64) != bpfd_core::ContainerRuntime::Docker {
            return Ok(None);
        }

        let container_id = bpfd_proc::container_id(record.pid as i64);
        if container_id.is_empty() {
            return Ok(None);
        }

        let mounts = self.container_mounts(&container_id).await;
        if mounts.iter().any(|mount| record.filename.starts_with(mount.as_str())) {
            return Ok(None);
        }

        let mut event = Event::new(record.pid, record.tgid, record.comm, record.return_value)
            .with_data("filename", record.filename);
        event.tracer = NAME.to_string();
        event.uid = record.uid;
        event.gid = record.gid;

        Ok(Some(event))
    }

    fn unload(&mut self) {
        self.channel = None;
        self.docker = None;
    }
}

#[cfg(test)]
#[path = "dockeropenbreakout_tests.rs"]
mod tests;
