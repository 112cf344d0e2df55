// indyhost/src/protocol/packets/tag_access.rs

use crate::constants::{PROTOCOL_ERROR_OFFSET, TAG_ERROR_OFFSET};
use crate::protocol::header::PacketHeader;
use crate::protocol::parser;
use crate::types::PacketFlags;
use crate::Result;

/// Where a failed tag access was reported from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessError {
    /// Error code backscattered by the tag (tag_error_code, offset 13).
    Backscatter(u8),
    /// MAC protocol access error (prot_error_code, offsets 14..16).
    Protocol(u16),
}

impl AccessError {
    pub fn code(&self) -> u16 {
        match self {
            AccessError::Backscatter(code) => u16::from(*code),
            AccessError::Protocol(code) => *code,
        }
    }
}

impl std::fmt::Display for AccessError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccessError::Backscatter(code) => write!(f, "0x{:02X}", code),
            AccessError::Protocol(code) => write!(f, "0x{:04X}", code),
        }
    }
}

/// Fields of an ISO 18000-6C tag access packet (type 0x0006).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagAccess {
    pub flags: PacketFlags,
    pub error: Option<AccessError>,
}

/// Decode a tag access packet body.
pub fn decode_tag_access(header: &PacketHeader, data: &[u8]) -> Result<TagAccess> {
    let flags = header.flags;
    let error = if !flags.access_error() {
        None
    } else if flags.backscatter_error() {
        Some(AccessError::Backscatter(parser::byte_at(
            data,
            TAG_ERROR_OFFSET,
        )?))
    } else {
        Some(AccessError::Protocol(parser::le_u16_at(
            data,
            PROTOCOL_ERROR_OFFSET,
        )?))
    };

    Ok(TagAccess { flags, error })
}
