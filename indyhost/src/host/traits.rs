// indyhost/src/host/traits.rs

use crate::host::operation::Operation;
use crate::types::RadioHandle;
use crate::Result;

/// Per-packet callback invoked by the host library.
///
/// Implementations must return `0` to keep the operation running or `1` to
/// abort it; the native operation loop inspects nothing else. Calls may
/// arrive on a driver thread, hence `Sync`.
pub trait PacketCallback: Sync {
    fn on_packet(&self, handle: RadioHandle, buffer: &[u8], context: usize) -> i32;
}

impl<F> PacketCallback for F
where
    F: Fn(RadioHandle, &[u8], usize) -> i32 + Sync,
{
    fn on_packet(&self, handle: RadioHandle, buffer: &[u8], context: usize) -> i32 {
        self(handle, buffer, context)
    }
}

/// Antenna port 0 settings applied when a radio is opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AntennaPortConfig {
    pub dwell_time_ms: u32,
    /// Tenths of dBm.
    pub power_level: u32,
}

/// Impinj Monza tag extensions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImpinjExtensions {
    pub tag_focus: bool,
    pub fast_id: bool,
}

/// The reader host library. Everything behind this trait is opaque: each
/// call returns a status and asynchronous operations deliver their packets
/// through the callback before `execute` returns.
pub trait HostLibrary {
    /// Open the first attached radio.
    fn open_radio(&mut self) -> Result<RadioHandle>;

    /// Close a radio handle.
    fn close_radio(&mut self, handle: RadioHandle) -> Result<()>;

    /// Set dwell time and power on the antenna port.
    fn configure_antenna_port(
        &mut self,
        handle: RadioHandle,
        config: AntennaPortConfig,
    ) -> Result<()>;

    fn set_impinj_extensions(
        &mut self,
        handle: RadioHandle,
        extensions: ImpinjExtensions,
    ) -> Result<()>;

    /// Run an operation, delivering each packet to `callback` until it
    /// answers `1` or the reader is done. `context` is passed through
    /// unchanged.
    fn execute(
        &mut self,
        handle: RadioHandle,
        operation: &Operation,
        callback: &dyn PacketCallback,
        context: usize,
    ) -> Result<()>;
}
