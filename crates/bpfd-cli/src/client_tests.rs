use tempfile::tempdir;

use super::*;

#[tokio::test]
async fn connect_to_a_missing_socket_fails() {
    let dir = tempdir().unwrap();
    let socket_path = dir.path().join("bpfd.sock");

    let result = DaemonClient::connect(&socket_path).await;
    assert!(matches!(result, Err(ClientError::Connect { .. })));
}
