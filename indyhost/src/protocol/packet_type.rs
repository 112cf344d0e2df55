// indyhost/src/protocol/packet_type.rs

//! Host interface packet types.
//!
//! Codes are grouped in classes by their high nibble: common (0x0xxx),
//! diagnostic (0x1xxx), status (0x2xxx), reserved/engineering (0x3xxx) and
//! debug (0x4xxx).

use derive_more::Display;

/// Packet type carried in bytes 2..4 of every host interface packet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PacketType {
    // Common class
    CommandBegin,
    CommandEnd,
    AntennaCycleBegin,
    AntennaBegin,
    InventoryRoundBegin,
    Inventory,
    TagAccess,
    AntennaCycleEnd,
    AntennaEnd,
    InventoryRoundEnd,
    InventoryCycleBegin,
    InventoryCycleEnd,
    CarrierInfo,
    CommandActive,

    // Diagnostic class
    InventoryRoundBeginDiagnostics,
    InventoryRoundEndDiagnostics,
    InventoryDiagnostics,
    InventoryCycleEndDiagnostics,
    SjcScanResult,
    TxRandomDataStatus,
    CsmProtocolSchedulerStateMachineStatus,
    CsmProtocolSchedulerLbtStatus,

    // Status class
    NonCriticalFault,

    // Reserved class
    EngineeringTestPatternZzs,
    EngineeringTestPatternFfs,
    EngineeringTestPatternW1s,
    EngineeringTestPatternW0s,
    EngineeringTestPatternBoundsCheck,
    MacBypassRead,
    GpioRead,
    OemConfigRead,
    TestRssi,
    TestInventoryStatistics,
    TestBerPerResult,
    NonVolatileMemoryUpdateConfiguration,
    LinkProfileXcvrRegisterRead,
    TestXyPair,

    // Debug class
    Debug,

    /// A code this crate does not know about (newer firmware).
    Unknown(u16),
}

/// (code, variant) pairs for every named packet type.
const PACKET_TYPES: &[(u16, PacketType)] = &[
    (0x0000, PacketType::CommandBegin),
    (0x0001, PacketType::CommandEnd),
    (0x0002, PacketType::AntennaCycleBegin),
    (0x0003, PacketType::AntennaBegin),
    (0x0004, PacketType::InventoryRoundBegin),
    (0x0005, PacketType::Inventory),
    (0x0006, PacketType::TagAccess),
    (0x0007, PacketType::AntennaCycleEnd),
    (0x0008, PacketType::AntennaEnd),
    (0x0009, PacketType::InventoryRoundEnd),
    (0x000A, PacketType::InventoryCycleBegin),
    (0x000B, PacketType::InventoryCycleEnd),
    (0x000C, PacketType::CarrierInfo),
    (0x000E, PacketType::CommandActive),
    (0x1004, PacketType::InventoryRoundBeginDiagnostics),
    (0x1005, PacketType::InventoryRoundEndDiagnostics),
    (0x1006, PacketType::InventoryDiagnostics),
    (0x1008, PacketType::InventoryCycleEndDiagnostics),
    (0x1009, PacketType::SjcScanResult),
    (0x100A, PacketType::TxRandomDataStatus),
    (0x100B, PacketType::CsmProtocolSchedulerStateMachineStatus),
    (0x100C, PacketType::CsmProtocolSchedulerLbtStatus),
    (0x2000, PacketType::NonCriticalFault),
    (0x3000, PacketType::EngineeringTestPatternZzs),
    (0x3001, PacketType::EngineeringTestPatternFfs),
    (0x3002, PacketType::EngineeringTestPatternW1s),
    (0x3003, PacketType::EngineeringTestPatternW0s),
    (0x3004, PacketType::EngineeringTestPatternBoundsCheck),
    (0x3005, PacketType::MacBypassRead),
    (0x3006, PacketType::GpioRead),
    (0x3007, PacketType::OemConfigRead),
    (0x3008, PacketType::TestRssi),
    (0x3009, PacketType::TestInventoryStatistics),
    (0x300A, PacketType::TestBerPerResult),
    (0x300B, PacketType::NonVolatileMemoryUpdateConfiguration),
    (0x300C, PacketType::LinkProfileXcvrRegisterRead),
    (0x300E, PacketType::TestXyPair),
    (0x4000, PacketType::Debug),
];

/// Resolve a raw packet type code. Never fails: codes missing from the
/// catalog come back as `PacketType::Unknown(code)`.
pub fn lookup_packet_type(code: u16) -> PacketType {
    PACKET_TYPES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, t)| *t)
        .unwrap_or(PacketType::Unknown(code))
}

/// Packet class, taken from the high nibble of the type code.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PacketClass {
    #[display(fmt = "common")]
    Common,
    #[display(fmt = "diagnostic")]
    Diagnostic,
    #[display(fmt = "status")]
    Status,
    #[display(fmt = "reserved")]
    Reserved,
    #[display(fmt = "debug")]
    Debug,
    #[display(fmt = "unrecognized")]
    Unrecognized,
}

impl PacketType {
    pub fn code(&self) -> u16 {
        match self {
            PacketType::Unknown(code) => *code,
            known => PACKET_TYPES
                .iter()
                .find(|(_, t)| t == known)
                .map(|(c, _)| *c)
                // every named variant has a table row
                .unwrap_or_default(),
        }
    }

    pub fn class(&self) -> PacketClass {
        match self.code() >> 12 {
            0x0 => PacketClass::Common,
            0x1 => PacketClass::Diagnostic,
            0x2 => PacketClass::Status,
            0x3 => PacketClass::Reserved,
            0x4 => PacketClass::Debug,
            _ => PacketClass::Unrecognized,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, PacketType::Unknown(_))
    }

    pub fn name(&self) -> &'static str {
        match self {
            PacketType::CommandBegin => "CommandBegin",
            PacketType::CommandEnd => "CommandEnd",
            PacketType::AntennaCycleBegin => "AntennaCycleBegin",
            PacketType::AntennaBegin => "AntennaBegin",
            PacketType::InventoryRoundBegin => "InventoryRoundBegin",
            PacketType::Inventory => "Inventory",
            PacketType::TagAccess => "TagAccess",
            PacketType::AntennaCycleEnd => "AntennaCycleEnd",
            PacketType::AntennaEnd => "AntennaEnd",
            PacketType::InventoryRoundEnd => "InventoryRoundEnd",
            PacketType::InventoryCycleBegin => "InventoryCycleBegin",
            PacketType::InventoryCycleEnd => "InventoryCycleEnd",
            PacketType::CarrierInfo => "CarrierInfo",
            PacketType::CommandActive => "CommandActive",
            PacketType::InventoryRoundBeginDiagnostics => "InventoryRoundBeginDiagnostics",
            PacketType::InventoryRoundEndDiagnostics => "InventoryRoundEndDiagnostics",
            PacketType::InventoryDiagnostics => "InventoryDiagnostics",
            PacketType::InventoryCycleEndDiagnostics => "InventoryCycleEndDiagnostics",
            PacketType::SjcScanResult => "SjcScanResult",
            PacketType::TxRandomDataStatus => "TxRandomDataStatus",
            PacketType::CsmProtocolSchedulerStateMachineStatus => {
                "CsmProtocolSchedulerStateMachineStatus"
            }
            PacketType::CsmProtocolSchedulerLbtStatus => "CsmProtocolSchedulerLbtStatus",
            PacketType::NonCriticalFault => "NonCriticalFault",
            PacketType::EngineeringTestPatternZzs => "EngineeringTestPatternZzs",
            PacketType::EngineeringTestPatternFfs => "EngineeringTestPatternFfs",
            PacketType::EngineeringTestPatternW1s => "EngineeringTestPatternW1s",
            PacketType::EngineeringTestPatternW0s => "EngineeringTestPatternW0s",
            PacketType::EngineeringTestPatternBoundsCheck => "EngineeringTestPatternBoundsCheck",
            PacketType::MacBypassRead => "MacBypassRead",
            PacketType::GpioRead => "GpioRead",
            PacketType::OemConfigRead => "OemConfigRead",
            PacketType::TestRssi => "TestRssi",
            PacketType::TestInventoryStatistics => "TestInventoryStatistics",
            PacketType::TestBerPerResult => "TestBerPerResult",
            PacketType::NonVolatileMemoryUpdateConfiguration => {
                "NonVolatileMemoryUpdateConfiguration"
            }
            PacketType::LinkProfileXcvrRegisterRead => "LinkProfileXcvrRegisterRead",
            PacketType::TestXyPair => "TestXyPair",
            PacketType::Debug => "Debug",
            PacketType::Unknown(_) => "Unknown",
        }
    }
}

impl From<u16> for PacketType {
    fn from(code: u16) -> Self {
        lookup_packet_type(code)
    }
}

impl std::fmt::Display for PacketType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PacketType::Unknown(code) => write!(f, "Unknown({:#06x})", code),
            known => f.write_str(known.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_known_codes() {
        assert_eq!(lookup_packet_type(0x0000), PacketType::CommandBegin);
        assert_eq!(lookup_packet_type(0x0001), PacketType::CommandEnd);
        assert_eq!(lookup_packet_type(0x0005), PacketType::Inventory);
        assert_eq!(lookup_packet_type(0x0006), PacketType::TagAccess);
        assert_eq!(lookup_packet_type(0x100A), PacketType::TxRandomDataStatus);
        assert_eq!(lookup_packet_type(0x4000), PacketType::Debug);
    }

    #[test]
    fn lookup_unknown_code_is_representable() {
        // 0x000D is a hole in the common class
        assert_eq!(lookup_packet_type(0x000D), PacketType::Unknown(0x000D));
        let t = PacketType::from(0xBEEF);
        assert_eq!(t.code(), 0xBEEF);
        assert!(!t.is_known());
        assert_eq!(t.class(), PacketClass::Unrecognized);
        assert_eq!(t.to_string(), "Unknown(0xbeef)");
    }

    #[test]
    fn code_roundtrips_for_every_named_type() {
        for &(code, t) in PACKET_TYPES {
            assert_eq!(t.code(), code);
            assert_eq!(lookup_packet_type(code), t);
            assert!(t.is_known());
        }
    }

    #[test]
    fn table_codes_are_unique() {
        let mut codes: Vec<u16> = PACKET_TYPES.iter().map(|(c, _)| *c).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), PACKET_TYPES.len());
    }

    #[test]
    fn classes_follow_high_nibble() {
        assert_eq!(PacketType::CommandEnd.class(), PacketClass::Common);
        assert_eq!(PacketType::SjcScanResult.class(), PacketClass::Diagnostic);
        assert_eq!(PacketType::NonCriticalFault.class(), PacketClass::Status);
        assert_eq!(PacketType::GpioRead.class(), PacketClass::Reserved);
        assert_eq!(PacketType::Debug.class(), PacketClass::Debug);
        assert_eq!(PacketType::Unknown(0x1FFF).class(), PacketClass::Diagnostic);
    }

    #[test]
    fn display_uses_name() {
        assert_eq!(PacketType::Inventory.to_string(), "Inventory");
        assert_eq!(PacketClass::Reserved.to_string(), "reserved");
    }
}
