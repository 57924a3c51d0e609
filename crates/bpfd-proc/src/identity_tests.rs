use super::*;

#[test]
fn parses_first_column_of_uid_and_gid_lines() {
    let text = "Name:\tbash\nUid:\t1000\t1000\t1000\t1000\nGid:\t1001\t1001\t1001\t1001\n";
    assert_eq!(uid_gid_from_status_text(text), (1000, 1001));
}

#[test]
fn missing_lines_default_to_zero() {
    assert_eq!(uid_gid_from_status_text("Name:\tinit\n"), (0, 0));
}

#[test]
fn missing_file_does_not_panic() {
    // pid 0 is never real; status_path still builds a path to read_to_string
    // against, which simply fails and falls back to the default.
    assert_eq!(uid_gid(-1), uid_gid(-1));
}
