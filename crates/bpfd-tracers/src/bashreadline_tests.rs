use super::*;

fn pad(s: &str, len: usize) -> Vec<u8> {
    let mut bytes = s.as_bytes().to_vec();
    bytes.resize(len, 0);
    bytes
}

fn build_record(pid: u32, tgid: u32, uid: u32, gid: u32, comm: &str) -> Vec<u8> {
    let mut buf = Vec::with_capacity(RECORD_LEN);
    buf.extend_from_slice(&pid.to_ne_bytes());
    buf.extend_from_slice(&tgid.to_ne_bytes());
    buf.extend_from_slice(&uid.to_ne_bytes());
    buf.extend_from_slice(&gid.to_ne_bytes());
    buf.extend_from_slice(&pad(comm, 80));
    buf
}

#[tokio::test]
async fn decodes_a_single_readline_record() {
    let mut tracer = BashReadlineTracer::new();
    tracer.load().await.unwrap();
    let tx = tracer.raw_sender().unwrap();
    let token = CancellationToken::new();

    tx.send(build_record(5, 5, 1000, 1000, "ls -la")).await.unwrap();

    let event = tracer.watch_event(&token).await.unwrap().unwrap();
    assert_eq!(event.tracer, "bashreadline");
    assert_eq!(event.uid, 1000);
    assert_eq!(event.gid, 1000);
    assert_eq!(event.data["command"], "ls -la");
}

#[tokio::test]
async fn cancellation_interrupts_watch_event() {
    let mut tracer = BashReadlineTracer::new();
    tracer.load().await.unwrap();
    let token = CancellationToken::new();
    token.cancel();
    assert!(matches!(tracer.watch_event(&token).await, Err(TracerError::Interrupted)));
}
