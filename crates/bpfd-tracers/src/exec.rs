//! `exec` tracer: correlates `execve` entry/return records by pid,
//! accumulating argv chunks until the return record (§4.6, ported from
//! `original_source/tracer/exec/exec.go`).

use std::collections::HashMap;

use async_trait::async_trait;
use bpfd_core::Event;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::error::TracerError;
use crate::tracer::Tracer;
use crate::wire::{read_cstr, read_i32, read_u32};

const NAME: &str = "exec";
const RECORD_LEN: usize = 4 + 4 + 16 + 4 + 128 + 4;
const EVENT_ARG: i32 = 0;
const EVENT_RET: i32 = 1;

struct DecodedRecord {
    pid: u32,
    tgid: u32,
    comm: String,
    record_type: i32,
    argv: String,
    return_value: i32,
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
        comm: read_cstr(buf, 8, 16, NAME)?,
        record_type: read_i32(buf, 24, NAME)?,
        argv: read_cstr(buf, 28, 128, NAME)?,
        return_value: read_i32(buf, 156, NAME)?,
    })
}

/// Watches `execve` calls, joining argv fragments into one event per call.
pub struct ExecTracer {
    channel: Option<(mpsc::Sender<Vec<u8>>, mpsc::Receiver<Vec<u8>>)>,
    argv: HashMap<u32, Vec<String>>,
}

impl ExecTracer {
    pub fn new() -> Self {
        ExecTracer {
            channel: None,
            argv: HashMap::new(),
        }
    }

    /// The sending half of this tracer's raw-record channel. The in-kernel
    /// probe backend (out of scope here; §1) pushes decoded perf-buffer
    /// records through this handle once the tracer is loaded.
    pub fn raw_sender(&self) -> Option<mpsc::Sender<Vec<u8>>> {
        self.channel.as_ref().map(|(tx, _)| tx.clone())
    }
}

impl Default for ExecTracer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tracer for ExecTracer {
    fn name(&self) -> &str {
        NAME
    }

    async fn load(&mut self) -> Result<(), TracerError> {
        self.channel = Some(mpsc::channel(1024));
        self.argv.clear();
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

        if record.record_type == EVENT_ARG {
            if !record.argv.is_empty() {
                self.argv.entry(record.pid).or_default().push(record.argv);
            }
            return Ok(None);
        }

        if record.record_type != EVENT_RET {
            return Ok(None);
        }

        let argv = self.argv.remove(&record.pid).unwrap_or_default().join(" ");

        let event = Event::new(record.pid, record.tgid, record.comm.clone(), record.return_value)
            .with_data("argv", argv)
            .with_data("command", record.comm)
            .with_data("returnval", record.return_value.to_string())
            .with_data("type", record.record_type.to_string());

        Ok(Some(Event { tracer: NAME.to_string(), ..event }))
    }

    fn unload(&mut self) {
        self.channel = None;
        self.argv.clear();
    }
}

#[cfg(test)]
#[path = "exec_tests.rs"]
mod tests;
