// indyhost/src/constants.rs
//! Wire offsets and defaults shared across the crate

/// Every host interface packet carries at least this many bytes.
pub const MIN_PACKET_LEN: usize = 16;

/// Byte offset of the packet flags.
pub const FLAGS_OFFSET: usize = 1;

/// Byte offset of the little-endian packet type.
pub const TYPE_OFFSET: usize = 2;

/// Byte offset of the little-endian packet length (32-bit words).
pub const LENGTH_OFFSET: usize = 4;

/// Byte offset of the reserved header word.
pub const RESERVED_OFFSET: usize = 6;

/// Command-end status word offset.
pub const COMMAND_END_STATUS_OFFSET: usize = 12;

/// Inventory data (EPC) starts here.
pub const INVENTORY_EPC_OFFSET: usize = 20;

/// Words of the inventory packet length that are not inventory data.
pub const INVENTORY_HEADER_WORDS: i32 = 3;

/// Tag access: single-byte tag (backscatter) error code.
pub const TAG_ERROR_OFFSET: usize = 13;

/// Tag access: two-byte MAC protocol error code.
pub const PROTOCOL_ERROR_OFFSET: usize = 14;

/// Flag bits signalling that a tag access failed.
pub const ACCESS_ERROR_MASK: u8 = 0x03;

/// Flag bits signalling that the failure was backscattered by the tag.
pub const BACKSCATTER_ERROR_MASK: u8 = 0x0E;

/// Continuous-mode bit in the packet flags.
pub const CONTINUOUS_MODE_BIT: u8 = 0x80;

/// Callback return value: keep delivering packets.
pub const CALLBACK_CONTINUE: i32 = 0;

/// Callback return value: abort the running operation.
pub const CALLBACK_STOP: i32 = 1;

/// Default number of MAC packets handled per operation.
pub const DEFAULT_PACKET_COUNT: u32 = 40;

/// Default antenna dwell time in milliseconds.
pub const DEFAULT_DWELL_TIME_MS: u32 = 2000;

/// Default antenna power in tenths of dBm.
pub const DEFAULT_POWER_LEVEL: u32 = 300;

/// Highest power level the firmware accepts (+33 dBm).
pub const MAX_POWER_LEVEL: u32 = 330;

/// Default random carrier wave duration in milliseconds.
pub const DEFAULT_RANDOM_CW_DURATION_MS: u32 = 10_000;
