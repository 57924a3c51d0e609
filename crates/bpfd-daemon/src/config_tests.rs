use super::*;

#[test]
fn defaults_match_the_documented_cli_flags() {
    let config = Config::default();
    assert_eq!(config.rules_dir, PathBuf::from("/etc/bpfd/rules"));
    assert_eq!(config.grpc_addr, PathBuf::from("/run/bpfd/bpfd.sock"));
    assert!(!config.debug);
    assert_eq!(config.buffer_capacity, 1024);
}
