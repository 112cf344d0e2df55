// indyhost/src/protocol/packets/inventory.rs

use crate::constants::{INVENTORY_EPC_OFFSET, INVENTORY_HEADER_WORDS};
use crate::protocol::header::PacketHeader;
use crate::protocol::parser;
use crate::types::{Epc, PacketFlags};
use crate::Result;

/// Fields of an ISO 18000-6C inventory packet (type 0x0005).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inventory {
    pub epc: Epc,
}

/// Number of inventory data bytes announced by the header:
/// `(length - 3) * 4 - padding`, clamped at zero.
pub fn epc_len(length: u16, flags: PacketFlags) -> usize {
    let words = i32::from(length) - INVENTORY_HEADER_WORDS;
    let bytes = words * 4 - i32::from(flags.epc_padding());
    usize::try_from(bytes).unwrap_or(0)
}

/// Decode an inventory packet body. The EPC starts at offset 20; an
/// announced length reaching past the buffer is a length error. A
/// non-positive length reads nothing, so a bare 16-byte packet is valid.
pub fn decode_inventory(header: &PacketHeader, data: &[u8]) -> Result<Inventory> {
    let len = epc_len(header.length, header.flags);
    if len == 0 {
        return Ok(Inventory { epc: Epc::default() });
    }
    let epc = parser::slice_at(data, INVENTORY_EPC_OFFSET, len)?;
    Ok(Inventory {
        epc: Epc::from_bytes(epc),
    })
}
