// indyhost/src/protocol/packets/mod.rs

pub mod command_end;
pub mod inventory;
pub mod tag_access;

pub use command_end::{CommandEnd, decode_command_end};
pub use inventory::{Inventory, decode_inventory, epc_len};
pub use tag_access::{AccessError, TagAccess, decode_tag_access};

use crate::protocol::header::{PacketHeader, decode_header};
use crate::protocol::packet_type::PacketType;
use crate::Result;

/// Type-specific fields. Per-type decoders live in
/// `protocol::packets::<name>.rs` and are dispatched from `decode_packet`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    CommandEnd(CommandEnd),
    Inventory(Inventory),
    TagAccess(TagAccess),
    /// Header-only packet types.
    None,
}

/// One decoded host interface packet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedPacket {
    pub header: PacketHeader,
    pub payload: Payload,
}

impl DecodedPacket {
    pub fn packet_type(&self) -> PacketType {
        self.header.packet_type
    }

    /// Warning to report for this packet: a command end carrying a
    /// nonzero MAC status. Every other packet yields `None`.
    pub fn warning(&self) -> Option<String> {
        match &self.payload {
            Payload::CommandEnd(end) if end.is_error() => Some(format!(
                "MAC error code {} ({}) returned by reader",
                end.status,
                end.status.subsystem()
            )),
            _ => None,
        }
    }
}

/// Decode a raw packet buffer. Pure: the same buffer always yields the
/// same result and nothing is read outside `data`.
pub fn decode_packet(data: &[u8]) -> Result<DecodedPacket> {
    let header = decode_header(data)?;

    let payload = match header.packet_type {
        PacketType::CommandEnd => Payload::CommandEnd(decode_command_end(data)?),
        PacketType::Inventory => Payload::Inventory(decode_inventory(&header, data)?),
        PacketType::TagAccess => Payload::TagAccess(decode_tag_access(&header, data)?),
        _ => Payload::None,
    };

    Ok(DecodedPacket { header, payload })
}
