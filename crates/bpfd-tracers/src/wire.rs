//! Shared fixed-layout decode helpers for the built-in tracers (§4.6).
//!
//! Kernel records arrive as raw byte buffers in host byte order; each
//! tracer's event struct is decoded field-by-field rather than transmuted,
//! so a short or malformed buffer surfaces a [`TracerError::DecodeFailed`]
//! instead of panicking.

use crate::error::TracerError;

fn decode_err(tracer: &str, message: impl Into<String>) -> TracerError {
    TracerError::DecodeFailed {
        tracer: tracer.to_string(),
        message: message.into(),
    }
}

pub(crate) fn read_u32(buf: &[u8], offset: usize, tracer: &str) -> Result<u32, TracerError> {
    let slice = buf
        .get(offset..offset + 4)
        .ok_or_else(|| decode_err(tracer, "buffer too short for u32 field"))?;
    let array: [u8; 4] = slice
        .try_into()
        .map_err(|_| decode_err(tracer, "buffer too short for u32 field"))?;
    Ok(u32::from_ne_bytes(array))
}

pub(crate) fn read_i32(buf: &[u8], offset: usize, tracer: &str) -> Result<i32, TracerError> {
    read_u32(buf, offset, tracer).map(|v| v as i32)
}

pub(crate) fn read_u16(buf: &[u8], offset: usize, tracer: &str) -> Result<u16, TracerError> {
    let slice = buf
        .get(offset..offset + 2)
        .ok_or_else(|| decode_err(tracer, "buffer too short for u16 field"))?;
    let array: [u8; 2] = slice
        .try_into()
        .map_err(|_| decode_err(tracer, "buffer too short for u16 field"))?;
    Ok(u16::from_ne_bytes(array))
}

pub(crate) fn read_u8(buf: &[u8], offset: usize, tracer: &str) -> Result<u8, TracerError> {
    buf.get(offset)
        .copied()
        .ok_or_else(|| decode_err(tracer, "buffer too short for u8 field"))
}

/// Reads `len` bytes starting at `offset`, truncates at the first NUL, and
/// trims surrounding whitespace — the same conversion every `char[N]`
/// kernel field needs.
pub(crate) fn read_cstr(buf: &[u8], offset: usize, len: usize, tracer: &str) -> Result<String, TracerError> {
    let slice = buf
        .get(offset..offset + len)
        .ok_or_else(|| decode_err(tracer, "buffer too short for char field"))?;
    let end = slice.iter().position(|&b| b == 0).unwrap_or(slice.len());
    Ok(String::from_utf8_lossy(&slice[..end]).trim().to_string())
}

#[cfg(test)]
#[path = "wire_tests.rs"]
mod tests;
