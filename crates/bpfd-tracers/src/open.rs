//! `open` tracer: single-shot entry/return correlation producing
//! `filename`, `comm`, `return_value` (§4.6, ported from
//! `original_source/tracer/open/open.go`).

use async_trait::async_trait;
use bpfd_core::Event;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::error::TracerError;
use crate::tracer::Tracer;
use crate::wire::{read_cstr, read_i32, read_u32};

const NAME: &str = "open";
const RECORD_LEN: usize = 4 + 4 + 4 + 16 + 255;

struct DecodedRecord {
    pid: u32,
    tgid: u32,
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
        return_value: read_i32(buf, 8, NAME)?,
        comm: read_cstr(buf, 12, 16, NAME)?,
        filename: read_cstr(buf, 28, 255, NAME)?,
    })
}

/// True when the open targets our own `/proc/<pid>` entry, which would
/// otherwise cause this tracer to observe itself reading its own state.
fn is_self_open(filename: &str, pid: u32, tgid: u32, comm: &str) -> bool {
    filename.starts_with(&format!("/proc/{pid}"))
        || filename.starts_with(&format!("/proc/{tgid}"))
        || comm == "bpfd"
}

pub struct OpenTracer {
    channel: Option<(mpsc::Sender<Vec<u8>>, mpsc::Receiver<Vec<u8>>)>,
}

impl OpenTracer {
    pub fn new() -> Self {
        OpenTracer { channel: None }
    }

    pub fn raw_sender(&self) -> Option<mpsc::Sender<Vec<u8>>> {
        self.channel.as_ref().map(|(tx, _)| tx.clone())
    }
}

impl Default for OpenTracer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tracer for OpenTracer {
    fn name(&self) -> &str {
        NAME
    }

    async fn load(&mut self) -> Result<(), TracerError> {
        self.channel = Some(mpsc::channel(1024));
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

        let (uid, gid) = bpfd_proc::uid_gid(record.pid as i64);

        let mut event = Event::new(record.pid, record.tgid, record.comm, record.return_value)
            .with_data("filename", record.filename);
        event.tracer = NAME.to_string();
        event.uid = uid;
        event.gid = gid;

        Ok(Some(event))
    }

    fn unload(&mut self) {
        self.channel = None;
    }
}

#[cfg(test)]
#[path = "open_tests.rs"]
mod tests;
