use super::*;

fn pad(s: &str, len: usize) -> Vec<u8> {
    let mut bytes = s.as_bytes().to_vec();
    bytes.resize(len, 0);
    bytes
}

fn build_record(pid: u32, tgid: u32, comm: &str, record_type: i32, argv: &str, return_value: i32) -> Vec<u8> {
    let mut buf = Vec::with_capacity(RECORD_LEN);
    buf.extend_from_slice(&pid.to_ne_bytes());
    buf.extend_from_slice(&tgid.to_ne_bytes());
    buf.extend_from_slice(&pad(comm, 16));
    buf.extend_from_slice(&record_type.to_ne_bytes());
    buf.extend_from_slice(&pad(argv, 128));
    buf.extend_from_slice(&return_value.to_ne_bytes());
    buf
}

#[tokio::test]
async fn accumulates_argv_and_emits_on_return_record() {
    let mut tracer = ExecTracer::new();
    tracer.load().await.unwrap();
    let tx = tracer.raw_sender().unwrap();
    let token = CancellationToken::new();

    tx.send(build_record(7, 7, "bash", EVENT_ARG, "/bin/bash", 0)).await.unwrap();
    tx.send(build_record(7, 7, "bash", EVENT_ARG, "-c", 0)).await.unwrap();
    tx.send(build_record(7, 7, "bash", EVENT_RET, "", 0)).await.unwrap();

    assert_eq!(tracer.watch_event(&token).await.unwrap(), None);
    assert_eq!(tracer.watch_event(&token).await.unwrap(), None);

    let event = tracer.watch_event(&token).await.unwrap().unwrap();
    assert_eq!(event.tracer, "exec");
    assert_eq!(event.pid, 7);
    assert_eq!(event.command, "bash");
    assert_eq!(event.data["argv"], "/bin/bash -c");
    assert_eq!(event.data["command"], "bash");
}

#[tokio::test]
async fn accumulator_is_cleared_after_emit() {
    let mut tracer = ExecTracer::new();
    tracer.load().await.unwrap();
    let tx = tracer.raw_sender().unwrap();
    let token = CancellationToken::new();

    tx.send(build_record(9, 9, "sh", EVENT_ARG, "sh", 0)).await.unwrap();
    tx.send(build_record(9, 9, "sh", EVENT_RET, "", 0)).await.unwrap();
    tracer.watch_event(&token).await.unwrap();
    let first = tracer.watch_event(&token).await.unwrap().unwrap();
    assert_eq!(first.data["argv"], "sh");

    tx.send(build_record(9, 9, "sh", EVENT_RET, "", 0)).await.unwrap();
    let second = tracer.watch_event(&token).await.unwrap().unwrap();
    assert_eq!(second.data["argv"], "");
}

#[tokio::test]
async fn cancellation_interrupts_watch_event() {
    let mut tracer = ExecTracer::new();
    tracer.load().await.unwrap();
    let token = CancellationToken::new();
    token.cancel();
    assert!(matches!(tracer.watch_event(&token).await, Err(TracerError::Interrupted)));
}

#[tokio::test]
async fn short_buffer_is_a_decode_error() {
    let mut tracer = ExecTracer::new();
    tracer.load().await.unwrap();
    let tx = tracer.raw_sender().unwrap();
    let token = CancellationToken::new();
    tx.send(vec![0u8; 4]).await.unwrap();
    assert!(matches!(
        tracer.watch_event(&token).await,
        Err(TracerError::DecodeFailed { .. })
    ));
}
