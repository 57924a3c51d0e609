//! `bashreadline` tracer: one record per interactive bash `readline`
//! return (§4.6, ported from
//! `original_source/tracer/bashreadline/bashreadline.go`).

use async_trait::async_trait;
use bpfd_core::Event;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::error::TracerError;
use crate::tracer::Tracer;
use crate::wire::{read_cstr, read_u32};

const NAME: &str = "bashreadline";
const RECORD_LEN: usize = 4 + 4 + 4 + 4 + 80;

struct DecodedRecord {
    pid: u32,
    tgid: u32,
    uid: u32,
    gid: u32,
    comm: String,
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
        comm: read_cstr(buf, 16, 80, NAME)?,
    })
}

pub struct BashReadlineTracer {
    channel: Option<(mpsc::Sender<Vec<u8>>, mpsc::Receiver<Vec<u8>>)>,
}

impl BashReadlineTracer {
    pub fn new() -> Self {
        BashReadlineTracer { channel: None }
    }

    pub fn raw_sender(&self) -> Option<mpsc::Sender<Vec<u8>>> {
        self.channel.as_ref().map(|(tx, _)| tx.clone())
    }
}

impl Default for BashReadlineTracer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tracer for BashReadlineTracer {
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

        let mut event = Event::new(record.pid, record.tgid, record.comm.clone(), 0).with_data("command", record.comm);
        event.tracer = NAME.to_string();
        event.uid = record.uid;
        event.gid = record.gid;

        Ok(Some(event))
    }

    fn unload(&mut self) {
        self.channel = None;
    }
}

#[cfg(test)]
#[path = "bashreadline_tests.rs"]
mod tests;
