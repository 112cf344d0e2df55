// indyhost/src/prelude.rs

pub use crate::callback::{HandledPacket, PacketCounter, PacketHandler, QuotaPolicy};
pub use crate::config::SessionConfig;
pub use crate::host::{HostLibrary, Operation, PacketCallback};
pub use crate::protocol::{
    AccessError, DecodedPacket, MacErrorCode, PacketType, Payload, decode_packet,
    lookup_mac_error_code, lookup_packet_type,
};
pub use crate::session::{OperationReport, Session};
pub use crate::{
    Continuation, Epc, Error, MemoryBank, PacketFlags, RadioHandle, Result,
};

// Re-export small utilities for convenience
pub use crate::utils::bytes_to_hex;
