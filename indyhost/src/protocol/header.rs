// indyhost/src/protocol/header.rs

use crate::constants::{
    FLAGS_OFFSET, LENGTH_OFFSET, MIN_PACKET_LEN, RESERVED_OFFSET, TYPE_OFFSET,
};
use crate::protocol::packet_type::{PacketType, lookup_packet_type};
use crate::protocol::parser;
use crate::types::PacketFlags;
use crate::Result;

/// Common header shared by every host interface packet.
///
/// Layout (little-endian):
/// `version(1) flags(1) type(2) length(2) reserved(2)`, where `length` counts
/// 32-bit words following the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PacketHeader {
    pub version: u8,
    pub flags: PacketFlags,
    pub packet_type: PacketType,
    pub length: u16,
    pub reserved: u16,
}

/// Decode the common header. Buffers shorter than the 16-byte minimum
/// packet are rejected before any field is read.
pub fn decode_header(data: &[u8]) -> Result<PacketHeader> {
    parser::ensure_len(data, MIN_PACKET_LEN)?;

    Ok(PacketHeader {
        version: parser::byte_at(data, 0)?,
        flags: PacketFlags::new(parser::byte_at(data, FLAGS_OFFSET)?),
        packet_type: lookup_packet_type(parser::le_u16_at(data, TYPE_OFFSET)?),
        length: parser::le_u16_at(data, LENGTH_OFFSET)?,
        reserved: parser::le_u16_at(data, RESERVED_OFFSET)?,
    })
}
