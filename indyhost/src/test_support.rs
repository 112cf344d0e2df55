//! Test support helpers intended for use by unit and integration tests.
//!
//! These build well-formed host interface packets so tests across the crate
//! and the tests/ directory share one definition of the wire layout.
#![allow(dead_code)]

use crate::config::SessionConfig;
use crate::host::MockHost;
use crate::session::Session;
use crate::Result;

/// 16-byte packet with only the common header filled in.
#[doc(hidden)]
pub fn header_only_packet(packet_type: u16) -> Vec<u8> {
    let mut data = vec![0u8; 16];
    data[0] = 0x01;
    data[2..4].copy_from_slice(&packet_type.to_le_bytes());
    data[4..6].copy_from_slice(&2u16.to_le_bytes());
    data
}

/// Command-end packet carrying `status` at offset 12.
#[doc(hidden)]
pub fn command_end_packet(status: u32) -> Vec<u8> {
    let mut data = header_only_packet(0x0001);
    data[12..16].copy_from_slice(&status.to_le_bytes());
    data
}

/// Inventory packet with `epc` at offset 20. The header length is derived
/// from the EPC size plus the padding announced by `flags >> 6`.
#[doc(hidden)]
pub fn inventory_packet(epc: &[u8], flags: u8) -> Vec<u8> {
    let padding = usize::from(flags >> 6);
    let data_len = epc.len() + padding;
    let words = 3 + data_len.div_ceil(4);

    let mut data = vec![0u8; 20];
    data[0] = 0x01;
    data[1] = flags;
    data[2..4].copy_from_slice(&0x0005u16.to_le_bytes());
    data[4..6].copy_from_slice(&(words as u16).to_le_bytes());
    data.extend_from_slice(epc);
    data.resize(20 + (words - 3) * 4, 0);
    data
}

/// Tag access packet with the given flags, tag error code (offset 13) and
/// protocol error code (offsets 14..16, little-endian).
#[doc(hidden)]
pub fn tag_access_packet(flags: u8, tag_error: u8, protocol_error: u16) -> Vec<u8> {
    let mut data = header_only_packet(0x0006);
    data[1] = flags;
    data[4..6].copy_from_slice(&3u16.to_le_bytes());
    data[13] = tag_error;
    data[14..16].copy_from_slice(&protocol_error.to_le_bytes());
    data.extend_from_slice(&[0u8; 4]);
    data
}

/// MockHost pre-seeded with `packets`.
#[doc(hidden)]
pub fn mock_host_with_packets(packets: Vec<Vec<u8>>) -> MockHost {
    let mut host = MockHost::new();
    host.push_packets(packets);
    host
}

/// Convenience: open a Session over a MockHost seeded with `packets`.
#[doc(hidden)]
pub fn mock_session(packets: Vec<Vec<u8>>, config: SessionConfig) -> Result<Session> {
    Session::open(Box::new(mock_host_with_packets(packets)), config)
}
