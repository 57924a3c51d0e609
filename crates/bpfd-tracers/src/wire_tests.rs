use super::*;

#[test]
fn read_u32_reads_native_endian() {
    let buf = 7u32.to_ne_bytes();
    assert_eq!(read_u32(&buf, 0, "t").unwrap(), 7);
}

#[test]
fn read_u32_out_of_range_is_decode_failed() {
    let buf = [0u8; 2];
    assert!(matches!(read_u32(&buf, 0, "t"), Err(TracerError::DecodeFailed { .. })));
}

#[test]
fn read_cstr_truncates_at_first_nul_and_trims() {
    let mut buf = [0u8; 8];
    buf[..5].copy_from_slice(b"ab  \0");
    assert_eq!(read_cstr(&buf, 0, 8, "t").unwrap(), "ab");
}

#[test]
fn read_cstr_with_no_nul_uses_the_full_field() {
    let buf = *b"abcdefgh";
    assert_eq!(read_cstr(&buf, 0, 8, "t").unwrap(), "abcdefgh");
}

#[test]
fn read_cstr_out_of_range_is_decode_failed() {
    let buf = [0u8; 4];
    assert!(matches!(read_cstr(&buf, 0, 8, "t"), Err(TracerError::DecodeFailed { .. })));
}
