// indyhost/src/config.rs

use crate::callback::QuotaPolicy;
use crate::host::{AntennaPortConfig, ImpinjExtensions};
use crate::constants::{
    DEFAULT_DWELL_TIME_MS, DEFAULT_PACKET_COUNT, DEFAULT_POWER_LEVEL, MAX_POWER_LEVEL,
};
use crate::{Error, Result};

/// Settings for a reader session.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SessionConfig {
    /// MAC packets handled per operation before it is stopped.
    pub packet_count: u32,
    pub quota_policy: QuotaPolicy,
    /// Antenna dwell time in milliseconds.
    pub dwell_time_ms: u32,
    /// Antenna power in tenths of dBm.
    pub power_level: u32,
    /// Suppress singulated tags for the rest of the inventory.
    pub tag_focus: bool,
    /// Return TID memory along with the EPC.
    pub fast_id: bool,
    pub enable_tag_kill: bool,
    pub enable_tag_lock: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            packet_count: DEFAULT_PACKET_COUNT,
            quota_policy: QuotaPolicy::default(),
            dwell_time_ms: DEFAULT_DWELL_TIME_MS,
            power_level: DEFAULT_POWER_LEVEL,
            tag_focus: false,
            fast_id: false,
            enable_tag_kill: false,
            enable_tag_lock: false,
        }
    }
}

impl SessionConfig {
    pub fn builder() -> SessionConfigBuilder {
        SessionConfigBuilder::new()
    }

    pub fn validate(&self) -> Result<()> {
        if self.dwell_time_ms == 0 {
            return Err(Error::InvalidConfig(
                "dwell time must be positive".to_string(),
            ));
        }
        if self.power_level > MAX_POWER_LEVEL {
            return Err(Error::InvalidConfig(format!(
                "power level {} exceeds maximum {}",
                self.power_level, MAX_POWER_LEVEL
            )));
        }
        Ok(())
    }

    /// Antenna port settings applied when the radio is opened.
    pub fn antenna_port(&self) -> AntennaPortConfig {
        AntennaPortConfig {
            dwell_time_ms: self.dwell_time_ms,
            power_level: self.power_level,
        }
    }

    pub fn impinj_extensions(&self) -> ImpinjExtensions {
        ImpinjExtensions {
            tag_focus: self.tag_focus,
            fast_id: self.fast_id,
        }
    }
}

/// Helper to construct a validated `SessionConfig`.
#[derive(Debug, Clone, Default)]
pub struct SessionConfigBuilder {
    config: SessionConfig,
}

impl SessionConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn packet_count(mut self, count: u32) -> Self {
        self.config.packet_count = count;
        self
    }

    pub fn quota_policy(mut self, policy: QuotaPolicy) -> Self {
        self.config.quota_policy = policy;
        self
    }

    pub fn dwell_time_ms(mut self, ms: u32) -> Self {
        self.config.dwell_time_ms = ms;
        self
    }

    pub fn power_level(mut self, level: u32) -> Self {
        self.config.power_level = level;
        self
    }

    pub fn tag_focus(mut self, enabled: bool) -> Self {
        self.config.tag_focus = enabled;
        self
    }

    pub fn fast_id(mut self, enabled: bool) -> Self {
        self.config.fast_id = enabled;
        self
    }

    pub fn enable_tag_kill(mut self, enabled: bool) -> Self {
        self.config.enable_tag_kill = enabled;
        self
    }

    pub fn enable_tag_lock(mut self, enabled: bool) -> Self {
        self.config.enable_tag_lock = enabled;
        self
    }

    /// Consume the builder and return the validated config.
    pub fn build(self) -> Result<SessionConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
