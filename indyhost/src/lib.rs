// indyhost/src/lib.rs

//! indyhost
//!
//! Packet decoding for Indy (ISO 18000-6C / EPC Gen2) RFID reader host
//! interfaces, plus the callback plumbing that drives asynchronous reader
//! operations against a per-operation packet quota.
#![warn(missing_docs)]

pub mod callback;
pub mod config;
pub mod constants;
pub mod error;
pub mod host;
pub mod prelude;
pub mod protocol;
pub mod session;
pub mod test_support;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
