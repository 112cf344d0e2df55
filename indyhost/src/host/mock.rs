// indyhost/src/host/mock.rs

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::constants::CALLBACK_CONTINUE;
use crate::host::operation::Operation;
use crate::host::traits::{AntennaPortConfig, HostLibrary, ImpinjExtensions, PacketCallback};
use crate::types::RadioHandle;
use crate::{Error, Result};

/// Mock host library for tests. Replays queued packets through the
/// callback and records what was executed.
#[derive(Debug)]
pub struct MockHost {
    pub radios: Vec<RadioHandle>,
    pub packets: VecDeque<Vec<u8>>,
    /// Operations passed to `execute`, in order.
    pub executed: Vec<Operation>,
    /// Total packets handed to callbacks.
    pub delivered: usize,
    pub closed: Vec<RadioHandle>,
    /// Antenna port settings applied, in order.
    pub antenna_configs: Vec<(RadioHandle, AntennaPortConfig)>,
    /// Impinj extension settings applied, in order.
    pub extensions: Vec<(RadioHandle, ImpinjExtensions)>,
    /// Testing hook: status the next `execute` fails with.
    pub fail_status: Option<i32>,
    /// Testing hook: status the next `configure_antenna_port` fails with.
    pub fail_configure: Option<i32>,
}

impl Default for MockHost {
    fn default() -> Self {
        Self::new()
    }
}

impl MockHost {
    /// A host with a single attached radio.
    pub fn new() -> Self {
        Self::with_radios(vec![RadioHandle::new(1)])
    }

    pub fn with_radios(radios: Vec<RadioHandle>) -> Self {
        Self {
            radios,
            packets: VecDeque::new(),
            executed: Vec::new(),
            delivered: 0,
            closed: Vec::new(),
            antenna_configs: Vec::new(),
            extensions: Vec::new(),
            fail_status: None,
            fail_configure: None,
        }
    }

    pub fn push_packet(&mut self, packet: Vec<u8>) {
        self.packets.push_back(packet);
    }

    pub fn push_packets<I: IntoIterator<Item = Vec<u8>>>(&mut self, packets: I) {
        self.packets.extend(packets);
    }

    /// Make the next `execute` call fail with `status`.
    pub fn fail_next(&mut self, status: i32) {
        self.fail_status = Some(status);
    }

    pub fn remaining(&self) -> usize {
        self.packets.len()
    }
}

impl HostLibrary for MockHost {
    fn open_radio(&mut self) -> Result<RadioHandle> {
        self.radios.first().copied().ok_or(Error::RadioNotFound)
    }

    fn close_radio(&mut self, handle: RadioHandle) -> Result<()> {
        self.closed.push(handle);
        Ok(())
    }

    fn configure_antenna_port(
        &mut self,
        handle: RadioHandle,
        config: AntennaPortConfig,
    ) -> Result<()> {
        if let Some(status) = self.fail_configure.take() {
            return Err(Error::HostStatus {
                operation: "AntennaPortSetConfiguration",
                status,
            });
        }
        self.antenna_configs.push((handle, config));
        Ok(())
    }

    fn set_impinj_extensions(
        &mut self,
        handle: RadioHandle,
        extensions: ImpinjExtensions,
    ) -> Result<()> {
        self.extensions.push((handle, extensions));
        Ok(())
    }

    fn execute(
        &mut self,
        handle: RadioHandle,
        operation: &Operation,
        callback: &dyn PacketCallback,
        context: usize,
    ) -> Result<()> {
        self.executed.push(operation.clone());

        if let Some(status) = self.fail_status.take() {
            return Err(Error::HostStatus {
                operation: operation.name(),
                status,
            });
        }

        // Packets left over after a stop stay queued for the next operation.
        while let Some(packet) = self.packets.pop_front() {
            self.delivered += 1;
            if callback.on_packet(handle, &packet, context) != CALLBACK_CONTINUE {
                break;
            }
        }
        Ok(())
    }
}

/// Shared mock. Tests box one clone and keep the other to inspect the
/// calls made through the box.
impl HostLibrary for Arc<Mutex<MockHost>> {
    fn open_radio(&mut self) -> Result<RadioHandle> {
        lock(self).open_radio()
    }

    fn close_radio(&mut self, handle: RadioHandle) -> Result<()> {
        lock(self).close_radio(handle)
    }

    fn configure_antenna_port(
        &mut self,
        handle: RadioHandle,
        config: AntennaPortConfig,
    ) -> Result<()> {
        lock(self).configure_antenna_port(handle, config)
    }

    fn set_impinj_extensions(
        &mut self,
        handle: RadioHandle,
        extensions: ImpinjExtensions,
    ) -> Result<()> {
        lock(self).set_impinj_extensions(handle, extensions)
    }

    fn execute(
        &mut self,
        handle: RadioHandle,
        operation: &Operation,
        callback: &dyn PacketCallback,
        context: usize,
    ) -> Result<()> {
        lock(self).execute(handle, operation, callback, context)
    }
}

// A panicking test thread must not hide the recorded calls from the rest.
fn lock(host: &Mutex<MockHost>) -> MutexGuard<'_, MockHost> {
    host.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
