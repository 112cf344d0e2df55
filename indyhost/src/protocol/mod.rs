// indyhost/src/protocol/mod.rs

pub mod header;
pub mod mac_error;
pub mod packet_type;
pub mod packets;
pub mod parser;

pub use header::{PacketHeader, decode_header};
pub use mac_error::{MAC_ERROR_CODES, MacErrorCode, MacSubsystem, lookup_mac_error_code};
pub use packet_type::{PacketClass, PacketType, lookup_packet_type};
pub use packets::*;
