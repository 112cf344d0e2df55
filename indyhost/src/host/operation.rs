// indyhost/src/host/operation.rs

use crate::constants::DEFAULT_RANDOM_CW_DURATION_MS;
use crate::types::MemoryBank;

/// Asynchronous ISO 18000-6C operations that report through the packet
/// callback. New operations should be added here and handled by every
/// `HostLibrary` implementation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Operation {
    Inventory {
        /// Select-criteria / post-singulation match enables.
        select_flags: u32,
    },
    Read {
        bank: MemoryBank,
        offset: u16,
        count: u16,
        access_password: u32,
    },
    /// Impinj QT read of the private memory map.
    Qt {
        bank: MemoryBank,
        offset: u16,
        count: u16,
        access_password: u32,
    },
    BlockErase {
        bank: MemoryBank,
        offset: u16,
        count: u16,
        access_password: u32,
    },
    Kill {
        access_password: u32,
        kill_password: u32,
    },
    Lock {
        access_password: u32,
    },
    RandomCarrierWave {
        duration_ms: u32,
    },
}

impl Operation {
    /// Host library entry point name, used in logs and errors.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Inventory { .. } => "Tag18K6CInventory",
            Self::Read { .. } => "Tag18K6CRead",
            Self::Qt { .. } => "Tag18K6CQT",
            Self::BlockErase { .. } => "Tag18K6CBlockErase",
            Self::Kill { .. } => "Tag18K6CKill",
            Self::Lock { .. } => "Tag18K6CLock",
            Self::RandomCarrierWave { .. } => "RadioTurnCarrierWaveOnRandom",
        }
    }

    /// Operations that permanently change tags.
    pub fn is_destructive(&self) -> bool {
        matches!(self, Self::Kill { .. } | Self::Lock { .. })
    }

    /// Basic inventory with no select or post-match filtering.
    pub fn inventory() -> Self {
        Self::Inventory { select_flags: 0 }
    }

    /// Read words 2..8 of the EPC bank (the EPC itself).
    pub fn read_epc() -> Self {
        Self::Read {
            bank: MemoryBank::Epc,
            offset: 2,
            count: 6,
            access_password: 0,
        }
    }

    pub fn random_carrier_wave() -> Self {
        Self::RandomCarrierWave {
            duration_ms: DEFAULT_RANDOM_CW_DURATION_MS,
        }
    }
}
