// indyhost/src/protocol/packets/command_end.rs

use crate::constants::COMMAND_END_STATUS_OFFSET;
use crate::protocol::mac_error::{MacErrorCode, lookup_mac_error_code};
use crate::protocol::parser;
use crate::Result;

/// Fields of a command-end packet (type 0x0001).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandEnd {
    pub status: MacErrorCode,
    /// Raw 4-byte status word at offset 12.
    pub status_word: u32,
}

impl CommandEnd {
    /// Status word as logged by reader tools: bytes 15..12, most
    /// significant first.
    pub fn status_display(&self) -> String {
        format!("0x{:08X}", self.status_word)
    }

    /// The firmware reported a failure.
    pub fn is_error(&self) -> bool {
        !self.status.is_success()
    }
}

/// Decode a command-end packet body.
/// Layout: header(8) ms_ctr(4) status(4)
pub fn decode_command_end(data: &[u8]) -> Result<CommandEnd> {
    let status_word = parser::le_u32_at(data, COMMAND_END_STATUS_OFFSET)?;
    Ok(CommandEnd {
        status: lookup_mac_error_code(status_word),
        status_word,
    })
}
