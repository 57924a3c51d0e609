use super::*;

fn pad(s: &str, len: usize) -> Vec<u8> {
    let mut bytes = s.as_bytes().to_vec();
    bytes.resize(len, 0);
    bytes
}

fn build_record(pid: u32, tgid: u32, uid: u32, gid: u32, return_value: i32, comm: &str, filename: &str) -> Vec<u8> {
    let mut buf = Vec::with_capacity(RECORD_LEN);
    buf.extend_from_slice(&pid.to_ne_bytes());
    buf.extend_from_slice(&tgid.to_ne_bytes());
    buf.extend_from_slice(&uid.to_ne_bytes());
    buf.extend_from_slice(&gid.to_ne_bytes());
    buf.extend_from_slice(&return_value.to_ne_bytes());
    buf.extend_from_slice(&pad(comm, 16));
    buf.extend_from_slice(&pad(filename, 255));
    buf
}

#[tokio::test]
async fn skips_opens_of_its_own_proc_entry() {
    let mut tracer = DockerOpenBreakoutTracer::new();
    tracer.load().await.unwrap();
    let tx = tracer.raw_sender().unwrap();
    let token = CancellationToken::new();

    tx.send(build_record(100, 100, 0, 0, 0, "cat", "/proc/100/status")).await.unwrap();
    assert_eq!(tracer.watch_event(&token).await.unwrap(), None);
}

#[tokio::test]
async fn skips_opens_by_bpfd_itself() {
    let mut tracer = DockerOpenBreakoutTracer::new();
    tracer.load().await.unwrap();
    let tx = tracer.raw_sender().unwrap();
    let token = CancellationToken::new();

    tx.send(build_record(1, 1, 0, 0, 0, "bpfd", "/etc/hosts")).await.unwrap();
    assert_eq!(tracer.watch_event(&token).await.unwrap(), None);
}

#[tokio::test]
async fn skips_events_from_processes_outside_any_docker_container() {
    // The current test process is never itself inside a `docker` cgroup, so
    // `bpfd_proc::container_runtime` returns something other than `Docker`
    // and the event is suppressed before any inspect call is attempted.
    let mut tracer = DockerOpenBreakoutTracer::new();
    tracer.load().await.unwrap();
    let tx = tracer.raw_sender().unwrap();
    let token = CancellationToken::new();

    let pid = std::process::id();
    tx.send(build_record(pid, pid, 0, 0, 0, "cat", "/etc/passwd")).await.unwrap();
    assert_eq!(tracer.watch_event(&token).await.unwrap(), None);
}

#[test]
fn decode_reads_uid_and_gid_directly_from_the_wire_record() {
    let buf = build_record(100, 100, 1000, 1000, 3, "cat", "/etc/passwd");
    let record = decode(&buf).unwrap();
    assert_eq!(record.uid, 1000);
    assert_eq!(record.gid, 1000);
    assert_eq!(record.filename, "/etc/passwd");
}
