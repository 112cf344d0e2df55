// indyhost/src/error.rs

use thiserror::Error;

/// Crate-wide error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("no radio attached")]
    RadioNotFound,

    #[error("invalid packet length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("{operation} failed: host library status {status}")]
    HostStatus {
        operation: &'static str,
        status: i32,
    },

    #[error("operation disabled by configuration: {0}")]
    OperationDisabled(&'static str),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, Error>;
