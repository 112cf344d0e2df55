// indyhost/src/host/mod.rs

pub mod mock;
pub mod operation;
pub mod traits;

pub use mock::MockHost;
pub use operation::Operation;
pub use traits::{AntennaPortConfig, HostLibrary, ImpinjExtensions, PacketCallback};
