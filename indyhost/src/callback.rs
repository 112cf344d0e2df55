// indyhost/src/callback.rs

//! Packet callback handed to the host library for asynchronous operations.
//!
//! The host library calls back once per received packet, possibly from its
//! own driver thread. `PacketHandler` decodes each buffer, logs it, counts it
//! against the per-operation quota and answers continue (0) or stop (1).

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use log::{debug, info, trace, warn};

use crate::host::PacketCallback;
use crate::protocol::{DecodedPacket, Payload, decode_packet};
use crate::types::{Continuation, RadioHandle};
use crate::utils::bytes_to_hex_spaced;
use crate::Result;

/// Packets handled since the current operation started.
#[derive(Debug, Default)]
pub struct PacketCounter(AtomicU32);

impl PacketCounter {
    pub fn new() -> Self {
        Self(AtomicU32::new(0))
    }

    /// Count one packet and return the new total. Saturates at `u32::MAX`
    /// so a stop decision is never undone by wrap-around.
    pub fn increment(&self) -> u32 {
        match self
            .0
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |n| {
                Some(n.saturating_add(1))
            }) {
            Ok(prev) | Err(prev) => prev.saturating_add(1),
        }
    }

    pub fn get(&self) -> u32 {
        self.0.load(Ordering::Acquire)
    }

    pub fn reset(&self) {
        self.0.store(0, Ordering::Release);
    }
}

/// How the running count is compared with the quota.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum QuotaPolicy {
    /// Stop once the count reaches or passes the quota.
    #[default]
    AtLeast,
    /// Stop only when the count equals the quota. Packets delivered after
    /// the boundary never stop the operation.
    Exact,
}

impl QuotaPolicy {
    pub fn decide(&self, count: u32, quota: u32) -> Continuation {
        let stop = match self {
            QuotaPolicy::AtLeast => count >= quota,
            QuotaPolicy::Exact => count == quota,
        };
        if stop {
            Continuation::Stop
        } else {
            Continuation::Continue
        }
    }
}

/// A decoded packet together with its position in the operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandledPacket {
    pub packet: DecodedPacket,
    /// 1-based count after this packet.
    pub sequence: u32,
    pub continuation: Continuation,
}

/// Per-operation packet callback.
#[derive(Debug, Clone)]
pub struct PacketHandler {
    quota: u32,
    policy: QuotaPolicy,
    counter: Arc<PacketCounter>,
}

impl PacketHandler {
    pub fn new(quota: u32, policy: QuotaPolicy) -> Self {
        Self::with_counter(quota, policy, Arc::new(PacketCounter::new()))
    }

    /// Share a counter owned by the caller, e.g. to read it after the
    /// operation has finished.
    pub fn with_counter(quota: u32, policy: QuotaPolicy, counter: Arc<PacketCounter>) -> Self {
        Self {
            quota,
            policy,
            counter,
        }
    }

    pub fn quota(&self) -> u32 {
        self.quota
    }

    pub fn policy(&self) -> QuotaPolicy {
        self.policy
    }

    pub fn counter(&self) -> &Arc<PacketCounter> {
        &self.counter
    }

    pub fn packets_handled(&self) -> u32 {
        self.counter.get()
    }

    /// Decode, log and count one packet.
    ///
    /// Malformed buffers return `Err` without touching the counter.
    pub fn process(&self, data: &[u8]) -> Result<HandledPacket> {
        let packet = decode_packet(data)?;
        log_packet(&packet);

        let sequence = self.counter.increment();
        let continuation = self.policy.decide(sequence, self.quota);
        if continuation.is_stop() {
            info!("packet quota of {} reached after {} packets", self.quota, sequence);
        }

        Ok(HandledPacket {
            packet,
            sequence,
            continuation,
        })
    }
}

impl PacketCallback for PacketHandler {
    fn on_packet(&self, handle: RadioHandle, buffer: &[u8], _context: usize) -> i32 {
        match self.process(buffer) {
            Ok(handled) => handled.continuation.as_callback_code(),
            Err(e) => {
                warn!(
                    "radio {}: dropping malformed MAC packet ({} bytes): {}",
                    handle.as_i32(),
                    buffer.len(),
                    e
                );
                debug!("raw packet: {}", bytes_to_hex_spaced(buffer));
                Continuation::Continue.as_callback_code()
            }
        }
    }
}

/// Emit one record per decoded field group.
pub fn log_packet(packet: &DecodedPacket) {
    let packet_type = packet.packet_type();
    info!(
        "Mac Packet received, PacketType = 0x{:04X} ({})",
        packet_type.code(),
        packet_type
    );

    match &packet.payload {
        Payload::CommandEnd(end) => {
            if let Some(warning) = packet.warning() {
                warn!("{}", warning);
            }
            info!("EndPacket Status = {}", end.status_display());
        }
        Payload::Inventory(inventory) => {
            trace!("EPC = {}", inventory.epc);
        }
        Payload::TagAccess(access) => {
            if let Some(error) = access.error {
                info!(
                    "AccessPacket Flag = 0x{:02X}, Error = {}",
                    access.flags.bits(),
                    error
                );
            }
        }
        Payload::None => {}
    }
}
