// indyhost/src/types.rs

use derive_more::Display;

use crate::constants::{
    ACCESS_ERROR_MASK, BACKSCATTER_ERROR_MASK, CALLBACK_CONTINUE, CALLBACK_STOP,
    CONTINUOUS_MODE_BIT,
};

/// Electronic Product Code backscattered by a tag during singulation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Epc(Vec<u8>);

impl Epc {
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Uppercase hex, no separators.
    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(&self.0)
    }
}

impl std::fmt::Display for Epc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Pkt_Flags byte of the common header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PacketFlags(u8);

impl PacketFlags {
    pub const fn new(bits: u8) -> Self {
        Self(bits)
    }

    pub fn bits(&self) -> u8 {
        self.0
    }

    /// Operation was executed in continuous mode.
    pub fn is_continuous(&self) -> bool {
        self.0 & CONTINUOUS_MODE_BIT != 0
    }

    /// Number of padding bytes at the end of inventory data.
    pub fn epc_padding(&self) -> u8 {
        self.0 >> 6
    }

    /// Tag access packets: the access failed.
    pub fn access_error(&self) -> bool {
        self.0 & ACCESS_ERROR_MASK != 0
    }

    /// Tag access packets: the failure code came from the tag itself.
    pub fn backscatter_error(&self) -> bool {
        self.0 & BACKSCATTER_ERROR_MASK != 0
    }
}

/// Opaque radio handle handed out by the host library.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RadioHandle(i32);

impl RadioHandle {
    pub const fn new(raw: i32) -> Self {
        Self(raw)
    }

    pub fn as_i32(&self) -> i32 {
        self.0
    }
}

/// Decision returned to the host library after each packet.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Continuation {
    #[display(fmt = "continue")]
    Continue,
    #[display(fmt = "stop")]
    Stop,
}

impl Continuation {
    /// The two-valued code the native operation loop inspects.
    pub fn as_callback_code(&self) -> i32 {
        match self {
            Continuation::Continue => CALLBACK_CONTINUE,
            Continuation::Stop => CALLBACK_STOP,
        }
    }

    pub fn from_callback_code(code: i32) -> Self {
        if code == CALLBACK_CONTINUE {
            Continuation::Continue
        } else {
            Continuation::Stop
        }
    }

    pub fn is_stop(&self) -> bool {
        matches!(self, Continuation::Stop)
    }
}

/// ISO 18000-6C memory banks
#[repr(u8)]
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MemoryBank {
    #[display(fmt = "reserved")]
    Reserved = 0,
    #[display(fmt = "epc")]
    Epc = 1,
    #[display(fmt = "tid")]
    Tid = 2,
    #[display(fmt = "user")]
    User = 3,
}
