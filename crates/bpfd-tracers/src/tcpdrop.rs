//! `tcpdrop` tracer: one record per `tcp_drop` call, decoding addresses,
//! ports, connection state, and header flags (§4.6, ported from
//! `original_source/tracer/tcpdrop/tcpdrop.go`).

use async_trait::async_trait;
use bpfd_core::Event;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::error::TracerError;
use crate::tcp::{flags_to_string, inet_ntoa, state_name};
use crate::tracer::Tracer;
use crate::wire::{read_cstr, read_i32, read_u16, read_u32, read_u8};

const NAME: &str = "tcpdrop";
const RECORD_LEN: usize = 4 + 4 + 4 + 16 + 4 + 4 + 2 + 2 + 1 + 1;

struct DecodedRecord {
    pid: u32,
    tgid: u32,
    return_value: i32,
    comm: String,
    saddr: u32,
    daddr: u32,
    sport: u16,
    dport: u16,
    state: u8,
    tcpflags: u8,
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
        saddr: read_u32(buf, 28, NAME)?,
        daddr: read_u32(buf, 32, NAME)?,
        sport: read_u16(buf, 36, NAME)?,
        dport: read_u16(buf, 38, NAME)?,
        state: read_u8(buf, 40, NAME)?,
        tcpflags: read_u8(buf, 41, NAME)?,
    })
}

pub struct TcpDropTracer {
    channel: Option<(mpsc::Sender<Vec<u8>>, mpsc::Receiver<Vec<u8>>)>,
}

impl TcpDropTracer {
    pub fn new() -> Self {
        TcpDropTracer { channel: None }
    }

    pub fn raw_sender(&self) -> Option<mpsc::Sender<Vec<u8>>> {
        self.channel.as_ref().map(|(tx, _)| tx.clone())
    }
}

impl Default for TcpDropTracer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tracer for TcpDropTracer {
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

        let state = state_name(record.state).ok_or_else(|| TracerError::DecodeFailed {
            tracer: NAME.to_string(),
            message: format!("{} is not a valid tcp state", record.state),
        })?;

        let mut event = Event::new(record.pid, record.tgid, record.comm.clone(), record.return_value)
            .with_data("saddr", inet_ntoa(record.saddr))
            .with_data("daddr", inet_ntoa(record.daddr))
            .with_data("sport", record.sport.to_string())
            .with_data("dport", record.dport.to_string())
            .with_data("state", state)
            .with_data("tcpflags", flags_to_string(record.tcpflags))
            .with_data("command", record.comm)
            .with_data("returnval", record.return_value.to_string());
        event.tracer = NAME.to_string();

        Ok(Some(event))
    }

    fn unload(&mut self) {
        self.channel = None;
    }
}

#[cfg(test)]
#[path = "tcpdrop_tests.rs"]
mod tests;
