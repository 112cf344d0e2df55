// indyhost/src/session.rs

use std::sync::Arc;

use log::{info, warn};

use crate::callback::{PacketCounter, PacketHandler};
use crate::config::SessionConfig;
use crate::host::{HostLibrary, Operation};
use crate::types::RadioHandle;
use crate::{Error, Result};

/// Outcome of one asynchronous operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationReport {
    pub operation: &'static str,
    pub packets_handled: u32,
    /// The packet quota ended the operation rather than the reader.
    pub stopped_by_quota: bool,
}

/// An open radio plus the settings operations run with.
pub struct Session {
    host: Box<dyn HostLibrary>,
    handle: RadioHandle,
    config: SessionConfig,
}

impl Session {
    /// Open the first attached radio on `host` and apply the antenna and
    /// tag extension settings from `config`.
    pub fn open(mut host: Box<dyn HostLibrary>, config: SessionConfig) -> Result<Self> {
        config.validate()?;
        let handle = host.open_radio()?;
        info!("opened radio {}", handle.as_i32());

        if let Err(e) = Self::configure(host.as_mut(), handle, &config) {
            if let Err(close_err) = host.close_radio(handle) {
                warn!("closing radio {} failed: {}", handle.as_i32(), close_err);
            }
            return Err(e);
        }

        Ok(Self {
            host,
            handle,
            config,
        })
    }

    pub fn handle(&self) -> RadioHandle {
        self.handle
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Run one operation with a fresh packet counter.
    pub fn run(&mut self, operation: &Operation) -> Result<OperationReport> {
        self.check_enabled(operation)?;

        let quota = self.config.packet_count;
        info!(
            "Starting {}, limiting to {} MAC packets",
            operation.name(),
            quota
        );

        let counter = Arc::new(PacketCounter::new());
        let handler = PacketHandler::with_counter(quota, self.config.quota_policy, counter.clone());

        let outcome = self.host.execute(self.handle, operation, &handler, 0);
        let packets_handled = counter.get();
        info!(
            "{} => {} ({} packets)",
            operation.name(),
            if outcome.is_ok() { "success" } else { "failed" },
            packets_handled
        );
        outcome?;

        Ok(OperationReport {
            operation: operation.name(),
            packets_handled,
            stopped_by_quota: self
                .config
                .quota_policy
                .decide(packets_handled, quota)
                .is_stop(),
        })
    }

    /// Run operations in order, stopping at the first error.
    pub fn run_all(&mut self, operations: &[Operation]) -> Result<Vec<OperationReport>> {
        operations.iter().map(|op| self.run(op)).collect()
    }

    /// Close the radio and hand the host library back.
    pub fn close(mut self) -> Result<Box<dyn HostLibrary>> {
        self.host.close_radio(self.handle)?;
        info!("closed radio {}", self.handle.as_i32());
        Ok(self.host)
    }

    fn configure(
        host: &mut dyn HostLibrary,
        handle: RadioHandle,
        config: &SessionConfig,
    ) -> Result<()> {
        let port = config.antenna_port();
        host.configure_antenna_port(handle, port)?;
        info!(
            "antenna port 0: dwell {} ms, power {}",
            port.dwell_time_ms, port.power_level
        );

        let extensions = config.impinj_extensions();
        host.set_impinj_extensions(handle, extensions)?;
        info!(
            "impinj extensions: tag focus {}, fast id {}",
            extensions.tag_focus, extensions.fast_id
        );
        Ok(())
    }

    fn check_enabled(&self, operation: &Operation) -> Result<()> {
        let enabled = match operation {
            Operation::Kill { .. } => self.config.enable_tag_kill,
            Operation::Lock { .. } => self.config.enable_tag_lock,
            _ => true,
        };
        if enabled {
            Ok(())
        } else {
            Err(Error::OperationDisabled(operation.name()))
        }
    }
}
