use super::*;

#[test]
fn new_fills_command_and_leaves_runtime_unset() {
    let e = Event::new(42, 42, "bash", 0);
    assert_eq!(e.pid, 42);
    assert_eq!(e.command, "bash");
    assert_eq!(e.container_runtime, ContainerRuntime::NotFound);
    assert!(e.container_id.is_empty());
}

#[test]
fn with_data_preserves_insertion_order() {
    let e = Event::new(1, 1, "cat", 0)
        .with_data("filename", "/etc/passwd")
        .with_data("argv", "cat /etc/passwd");
    let keys: Vec<_> = e.data.keys().cloned().collect();
    assert_eq!(keys, vec!["filename", "argv"]);
}

#[test]
fn round_trips_through_json() {
    let e = Event::new(7, 7, "sh", -1).with_data("key", "value");
    let json = serde_json::to_string(&e).unwrap();
    let back: Event = serde_json::from_str(&json).unwrap();
    assert_eq!(e, back);
}
