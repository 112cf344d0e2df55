// indyhost/src/protocol/mac_error.rs

//! MAC firmware error codes reported in command-end packets.

use derive_more::Display;

/// Firmware subsystem a MAC error originates from (high byte of the code).
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MacSubsystem {
    #[display(fmt = "core state machine")]
    CoreStateMachine,
    #[display(fmt = "host interface")]
    HostInterface,
    #[display(fmt = "protocol")]
    Protocol,
    #[display(fmt = "rf transceiver control")]
    RfTransceiverControl,
    #[display(fmt = "memory/io")]
    MemoryIo,
    #[display(fmt = "transceiver interface")]
    TransceiverInterface,
    #[display(fmt = "built-in self test")]
    BuiltInSelfTest,
    #[display(fmt = "unrecognized")]
    Unrecognized,
}

impl MacSubsystem {
    pub fn from_code(code: u32) -> Self {
        match code >> 8 {
            0x00 => MacSubsystem::CoreStateMachine,
            0x01 => MacSubsystem::HostInterface,
            0x02 => MacSubsystem::Protocol,
            0x03 => MacSubsystem::RfTransceiverControl,
            0x04 => MacSubsystem::MemoryIo,
            0x06 => MacSubsystem::TransceiverInterface,
            0x07 => MacSubsystem::BuiltInSelfTest,
            _ => MacSubsystem::Unrecognized,
        }
    }
}

/// A resolved MAC error code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MacErrorCode {
    Known { code: u32, name: &'static str },
    Unknown(u32),
}

impl MacErrorCode {
    pub const SUCCESS: Self = MacErrorCode::Known {
        code: 0x0000,
        name: "MACERR_SUCCESS",
    };

    pub fn code(&self) -> u32 {
        match self {
            MacErrorCode::Known { code, .. } => *code,
            MacErrorCode::Unknown(code) => *code,
        }
    }

    /// Firmware identifier, `None` for codes outside the catalog.
    pub fn name(&self) -> Option<&'static str> {
        match self {
            MacErrorCode::Known { name, .. } => Some(*name),
            MacErrorCode::Unknown(_) => None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.code() == 0
    }

    pub fn is_known(&self) -> bool {
        matches!(self, MacErrorCode::Known { .. })
    }

    pub fn subsystem(&self) -> MacSubsystem {
        MacSubsystem::from_code(self.code())
    }
}

impl From<u32> for MacErrorCode {
    fn from(code: u32) -> Self {
        lookup_mac_error_code(code)
    }
}

impl std::fmt::Display for MacErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MacErrorCode::Known { name, .. } => f.write_str(name),
            MacErrorCode::Unknown(code) => write!(f, "unknown code {}", code),
        }
    }
}

/// Resolve a MAC error code against the firmware catalog. Never fails.
pub fn lookup_mac_error_code(code: u32) -> MacErrorCode {
    MAC_ERROR_CODES
        .binary_search_by_key(&code, |&(c, _)| c)
        .map(|idx| MacErrorCode::Known {
            code,
            name: MAC_ERROR_CODES[idx].1,
        })
        .unwrap_or(MacErrorCode::Unknown(code))
}

/// Firmware error catalog, sorted by code.
pub static MAC_ERROR_CODES: &[(u32, &str)] = &[
    (0x0000, "MACERR_SUCCESS"),
    (0x0001, "CSM_ERR_UNKNOWNCMD"),
    (0x0002, "CSM_ERR_PREEXECPROC"),
    (0x0003, "CSM_ERR_POSTEXECPROC"),
    (0x0004, "CSM_ERR_BADENGTESTSUBCMD"),
    (0x0005, "CSM_ERR_MBPRDADDR"),
    (0x0006, "CSM_ERR_MBPWRADDR"),
    (0x0007, "CSM_ERR_SUBSYSINIT_CPU"),
    (0x0008, "CSM_ERR_SUBSYSINIT_DBG"),
    (0x0009, "CSM_ERR_SUBSYSINIT_CSM"),
    (0x000A, "CSM_ERR_SUBSYSINIT_OEMCFG"),
    (0x000B, "CSM_ERR_SUBSYSINIT_HOSTIF"),
    (0x000C, "CSM_ERR_SUBSYSINIT_TILIF"),
    (0x000D, "CSM_ERR_SUBSYSINIT_BIST"),
    (0x000F, "CSM_ERR_SUBSYSINIT_GPIO"),
    (0x0010, "CSM_ERR_SUBSYSINIT_RFTC"),
    (0x0011, "CSM_ERR_SUBSYSINIT_PROT"),
    (0x0012, "CSM_ERR_PROTSCHED_UNKST"),
    (0x0013, "CSM_ERR_PROTSCHED_AMBANT"),
    (0x0014, "CSM_ERR_PROTSCHED_NODESC"),
    (0x0015, "CSM_ERR_PROTSCHED_PORTDEF"),
    (0x0016, "CSM_ERR_PROTSCHED_NOFRQCH"),
    (0x0017, "CSM_ERR_PROTSCHED_BADREGION"),
    (0x0018, "CSM_ERR_PROTSCHED_BADFTIME"),
    (0x0019, "CSM_ERR_PROTSCHED_FTUNETO"),
    (0x001A, "CSM_ERR_SUBSYSINIT_OEMHWOPTS"),
    (0x001B, "CSM_ERR_SUBSYSINIT_NVMEMUPD"),
    (0x001C, "CSM_ERR_BAD_RESET_KEY"),
    (0x001D, "CSM_ERR_DEV_RESET_FAILED"),
    (0x001E, "CSM_ERR_NVMEMUPD_ABORT_MACERRNO"),
    (0x001F, "CSM_ERR_NVMEMUPD_INT_MEMBNDS"),
    (0x0020, "CSM_ERR_NVMEMUPD_ENTRYKEY"),
    (0x0021, "CSM_ERR_NVMEMUPD_NVFLUSH"),
    (0x0022, "CSM_ERR_NVMEMUPD_WRVERFAIL"),
    (0x0023, "CSM_ERR_INVAL_START_CHAN"),
    (0x0024, "CSM_ERR_PROTSCHED_UNK_ALGO"),
    (0x0025, "CSM_ERR_INVAL_PWRMODE"),
    (0x0026, "CSM_ERR_PWRMODE_CORRUPT"),
    (0x0027, "CSM_ERR_NVMEMUPD_TXFAIL"),
    (0x0028, "CSM_ERR_NVMEMUPD_UPD_BOUNDS"),
    (0x0029, "CSM_ERR_NVMEMUPD_UNKNOWN"),
    (0x002A, "CSM_ERR_NVMEMUPD_RXTO"),
    (0x002B, "CSM_ERR_GPIO_NOTAVAIL"),
    (0x002C, "CSM_ERR_ANT_NOTAVAIL"),
    (0x002D, "CSM_ERR_CMDNOTAVAILABLE"),
    (0x002E, "CSM_ERR_NOCORDICDEF"),
    (0x002F, "CSM_ERR_SUBSYSINIT_DEBUG"),
    (0x0030, "CSM_ERR_SUBSYSINIT_TRACE"),
    (0x0031, "CSM_ERR_BUILD_TARGET_DEVICE_MISMATCH"),
    (0x0032, "CSM_ERR_DIAGNOSTICS"),
    (0x0033, "CSM_ERR_SUBSYSINIT_HOSTIFREGS_INIT"),
    (0x0034, "CSM_ERR_SUBSYSINIT_HANDSHAKE"),
    (0x0035, "CSM_ERR_NVMEMUPD_INVALID_MODE"),
    (0x0036, "CSM_ERR_INVALID_CMD_WHILE_IN_CRIT_ERROR"),
    (0x0037, "CSM_ERR_CRITICAL_ERROR_UNKNOWN"),
    (0x0101, "RESERVED_0x0101"),
    (0x0102, "HOSTIF_ERR_USBDESC"),
    (0x0103, "HOSTIF_ERR_USBDESCIDX"),
    (0x0104, "HOSTIF_ERR_USBTXEP0"),
    (0x0105, "RESERVED_0x0105"),
    (0x0106, "HOSTIF_ERR_USBRXBUFFSZ"),
    (0x0107, "HOSTIF_ERR_RXUNKNOWN"),
    (0x0108, "HOSTIF_ERR_TXUNKNOWN"),
    (0x0109, "HOSTIF_ERR_BADIFSTATE"),
    (0x010A, "RESERVED_0x010A"),
    (0x010B, "HOSTIF_ERR_REGADDR"),
    (0x010C, "RESERVED_0x010C"),
    (0x010D, "HOSTIF_ERR_USBDESCINIT"),
    (0x010E, "HOSTIF_ERR_SELECTORBNDS"),
    (0x010F, "RESERVED_0x010F"),
    (0x0110, "HOSTIF_ERR_PKTALIGN"),
    (0x0111, "HOSTIF_ERR_BADRAWMODE"),
    (0x0112, "HOSTIF_ERR_UNKLNKSTATE"),
    (0x0113, "HOSTIF_ERR_UNKUSBSETUP"),
    (0x0114, "HOSTIF_ERR_UARTRXBUFFSZ"),
    (0x0115, "HOSTIF_ERR_RAWMODECTL"),
    (0x0116, "HOSTIF_ERR_UNKHOSTIF"),
    (0x0117, "HOSTIF_ERR_UNKREGSTD"),
    (0x0118, "HOSTIF_ERR_DEBUGID"),
    (0x0119, "HOSTIF_ERR_DEBUGOVERFLOW"),
    (0x011A, "HOSTIF_ERR_REGREADONLY"),
    (0x011B, "HOSTIF_ERR_REGWRITEONLY"),
    (0x011C, "HOSTIF_ERR_BADREGIONINITVALUES"),
    (0x011D, "HOSTIF_ERR_INVALIDENGTESTARG"),
    (0x011E, "HOSTIF_ERR_INVALIDSETFREQARG"),
    (0x011F, "HOSTIF_ERR_INVALID_RSSI_FILTERING"),
    (0x0120, "HOSTIF_ERR_INVALID_TAGACC_CNT"),
    (0x0121, "HOSTIF_ERR_INVALID_BW_MODE"),
    (0x0122, "HOSTIF_ERR_OEM_MAC_REG_INIT_CTRL_ERROR"),
    (0x0123, "HOSTIF_ERR_OEM_MAC_REG_INIT_WRITE_ERROR"),
    (0x0200, "PROTOCOL_ERR_TRUNCATION_UNSUPPORTED"),
    (0x0300, "RFTC_ERR_BADFRQCHAN"),
    (0x0301, "RFTC_ERR_BADHOPMODE"),
    (0x0302, "RFTC_ERR_PLLFAILEDTOLOCK"),
    (0x0303, "RFTC_ERR_XCVRADC_TIMEDOUT"),
    (0x0304, "RFTC_ERR_FILTTUNE_TIMEOUT"),
    (0x0305, "RFTC_ERR_AMBIENTTEMPTOOHOT"),
    (0x0306, "RFTC_ERR_XCVRTEMPTOOHOT"),
    (0x0307, "RFTC_ERR_PATEMPTOOHOT"),
    (0x0308, "RFTC_ERR_PADELTATEMPTOOBIG"),
    (0x0309, "RFTC_ERR_REVPWRLEVTOOHIGH"),
    (0x030A, "RFTC_ERR_BADIFLNAGAIN"),
    (0x030B, "RFTC_ERR_TXRF_BIT_FAILED"),
    (0x030C, "RFTC_ERR_TXRF_BYTE_FAILED"),
    (0x030D, "RFTC_ERR_TXRF_EOT_FAILED"),
    (0x030E, "RFTC_ERR_TXRF_PREAM_FAILED"),
    (0x030F, "RFTC_ERR_TXRF_FSYNC_FAILED"),
    (0x0310, "RFTC_ERR_RXRF_ISR_TIMEOUT"),
    (0x0311, "RFTC_ERR_INVALIDLINKPARMS"),
    (0x0312, "RFTC_ERR_RXRF_INTERPKTTIMEOUT"),
    (0x0313, "RFTC_ERR_NO_LINKPROFHDR"),
    (0x0314, "RFTC_ERR_PROFILE_INVALID"),
    (0x0315, "RFTC_ERR_DBMVALOUTOFRANGE"),
    (0x0316, "RFTC_ERR_FWDPWRLEVTOOHIGH"),
    (0x0317, "RFTC_ERR_NO_GROSSPWRENTRY"),
    (0x0318, "RFTC_ERR_TARGETPWRTOOHIGH"),
    (0x0319, "RESERVED_0x0318"),
    (0x031A, "RFTC_ERR_ANTENNADISCONNECTED"),
    (0x031B, "RFTC_ERR_UNREC_HWOPTFORMAT"),
    (0x031C, "RFTC_ERR_HWOPT_BADFWDPWROPT"),
    (0x031D, "RFTC_ERR_HWOPT_BADREVPWROPT"),
    (0x031E, "RFTC_ERR_HWOPT_BADDRMFILTOPT"),
    (0x031F, "RFTC_ERR_HWOPT_BADAMBTEMPOPT"),
    (0x0320, "RFTC_ERR_HWOPT_BADPATEMPOPT"),
    (0x0321, "RFTC_ERR_HWOPT_BADXCVRTEMPOPT"),
    (0x0322, "RFTC_ERR_HWOPT_BADANTSENSOPT"),
    (0x0323, "RFTC_ERR_BADIFLNAAGCRANGE"),
    (0x0324, "RFTC_ERR_LPROFBADSELECTOR"),
    (0x0325, "RFTC_ERR_BADXCVRADDR"),
    (0x0326, "RFTC_ERR_XCVRADDRNOTINLIST"),
    (0x0327, "RFTC_ERR_BAD_RFLNA_GAIN_REQ"),
    (0x0328, "RFTC_ERR_BAD_IFLNA_GAIN_REQ"),
    (0x0329, "RFTC_ERR_BAD_AGCMIX_GAIN_REQ"),
    (0x032A, "RFTC_ERR_HWOPT_BADFWDPWRCOMPOPT"),
    (0x032B, "RFTC_ERR_INVALID_PLL_DIVIDER_VALUE"),
    (0x032C, "RFTC_ERR_SJC_EXTERNALLOTOOLOW"),
    (0x032D, "RFTC_ERR_SJC_EXTERNALLONOTSELECTED"),
    (0x032E, "RFTC_ERR_BADLOSOURCE"),
    (0x032F, "RFTC_ERR_GENERALRANDOMDATA"),
    (0x0330, "RFTC_ERR_XVCR_HEALTH_CHECK_FAIL"),
    (0x0331, "RFTC_ERR_INVALID_OEM_PROFILE_HEADER"),
    (0x0332, "RFTC_ERR_AUTO_READ_RX_FIFO"),
    (0x0333, "RFTC_ERR_DC_OFFSET_CALIBRATION"),
    (0x0334, "RFTC_ERR_LBT_RSSI_CALIBRATION"),
    (0x0335, "RFTC_ERR_PA_BIAS_CAL_CONFIG"),
    (0x0336, "RFTC_ERR_FWDPWRLEVERROR"),
    (0x0337, "RFTC_ERR_HWOPT_BADPABIASDACCTL"),
    (0x0338, "RFTC_ERR_PA_BIAS_CAL_MEASUREMENT"),
    (0x0339, "RFTC_ERR_PA_BIAS_CAL_NOT_FOUND"),
    (0x033A, "RFTC_ERR_GROSSGAIN_CONFIG_INVALID"),
    (0x033B, "RFTC_ERR_SJC_NOT_AVAILABLE_R500"),
    (0x033C, "RFTC_ERR_GROSSGAIN_CALIBRATION"),
    (0x0401, "IO_INVAL_RDMASK"),
    (0x0402, "IO_INVAL_WRMASK"),
    (0x0403, "IO_INVAL_PTR_RAM"),
    (0x0404, "IO_INVAL_PTR_NV"),
    (0x0405, "IO_INVAL_PTR_NV_ALIGN"),
    (0x0406, "IO_NV_LOCK_ERR"),
    (0x0407, "IO_NV_PROG_ERR"),
    (0x0408, "IO_OEMCFG_ADDR_BOUNDS"),
    (0x0409, "IO_OEMCFG_NV_BOUNDS"),
    (0x040A, "IO_OEMCFG_FMT_KEY"),
    (0x040B, "IO_OEMCFG_FLUSH"),
    (0x040C, "IO_OEMCFG_FORMAT"),
    (0x040D, "IO_INVAL_IORSVD"),
    (0x040E, "IO_OEMCFG_STRING_TYPE"),
    (0x040F, "IO_OEMCFG_STRING_LENGTH"),
    (0x0410, "IO_OEMCFG_STRING_CHARACTER"),
    (0x0411, "IO_OEMCFG_STRING_CURRENT_INVALID"),
    (0x0412, "IO_OEMCFG_FORMAT_KEY_INVALID"),
    (0x0413, "IO_OEMCFG_FORMAT_CONFIGURATION_INVALID"),
    (0x0414, "IO_INVAL_NV_SECTOR"),
    (0x0601, "TILDENIF_ERR_ADDRMISMAT"),
    (0x0602, "TILDENIF_ERR_RDFAILSAFE"),
    (0x0603, "TILDENIF_ERR_INVALPWRST"),
    (0x0604, "TILDENIF_ERR_INVALID_SETTING_R500"),
    (0x0701, "BIST_ERR_RF_IO_REG_CHK"),
    (0x0702, "BIST_ERR_RF_REG_BITS"),
];
