//! TCP state/flag decode tables for the `tcpdrop` tracer, ported from
//! `original_source/tcp/tcp.go`.

const HEADER_FIN: u8 = 0x01;
const HEADER_SYN: u8 = 0x02;
const HEADER_RST: u8 = 0x04;
const HEADER_PSH: u8 = 0x08;
const HEADER_ACK: u8 = 0x10;
const HEADER_URG: u8 = 0x20;
const HEADER_ECE: u8 = 0x40;
const HEADER_CWR: u8 = 0x80;

const STATES: &[(u8, &str)] = &[
    (1, "ESTABLISHED"),
    (2, "SYNSENT"),
    (3, "SYNRECV"),
    (4, "FINWAIT1"),
    (5, "FINWAIT2"),
    (6, "TIMEWAIT"),
    (7, "CLOSE"),
    (8, "CLOSEWAIT"),
    (9, "LASTACK"),
    (10, "LISTEN"),
    (11, "CLOSING"),
    (12, "NEWSYNRECV"),
];

/// Looks up the textual name of a `sk_state` value. `None` for anything
/// outside the known range, matching the original's `ok` check.
pub(crate) fn state_name(state: u8) -> Option<&'static str> {
    STATES.iter().find(|(v, _)| *v == state).map(|(_, name)| *name)
}

/// Joins the set TCP header flags with `" | "`, in FIN/SYN/RST/PSH/ACK/URG/ECE/CWR order.
pub(crate) fn flags_to_string(flags: u8) -> String {
    let mut parts = Vec::new();
    if flags & HEADER_FIN != 0 {
        parts.push("FIN");
    }
    if flags & HEADER_SYN != 0 {
        parts.push("SYN");
    }
    if flags & HEADER_RST != 0 {
        parts.push("RST");
    }
    if flags & HEADER_PSH != 0 {
        parts.push("PSH");
    }
    if flags & HEADER_ACK != 0 {
        parts.push("ACK");
    }
    if flags & HEADER_URG != 0 {
        parts.push("URG");
    }
    if flags & HEADER_ECE != 0 {
        parts.push("ECE");
    }
    if flags & HEADER_CWR != 0 {
        parts.push("CWR");
    }
    parts.join(" | ")
}

/// Formats a raw network-order IPv4 address the way `inetNtoa` does: each
/// byte of the little-endian-stored `u32` in order (not host-order
/// arithmetic), matching `original_source/tracer/tcpdrop/tcpdrop.go`.
pub(crate) fn inet_ntoa(addr: u32) -> String {
    let bytes = addr.to_le_bytes();
    format!("{}.{}.{}.{}", bytes[0], bytes[1], bytes[2], bytes[3])
}

#[cfg(test)]
#[path = "tcp_tests.rs"]
mod tests;
