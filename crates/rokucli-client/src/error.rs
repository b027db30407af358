//! Client errors.

use thiserror::Error;

/// Errors from discovering or talking to a device.
///
/// Reasons are kept as strings so the error stays `Clone` and comparable in
/// tests; the underlying I/O and HTTP errors are not.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// The discovery socket failed. Finding no device is not an error.
    #[error("device discovery failed: {0}")]
    Discovery(String),

    /// The device address is invalid or did not answer the initial query.
    #[error("unable to connect to device at {addr}: {reason}")]
    Connection {
        /// Address as given or as normalized.
        addr: String,
        /// Why the connection failed.
        reason: String,
    },

    /// A command could not be delivered.
    #[error("unable to communicate with device at {addr}: {reason}")]
    Communication {
        /// `host:port` of the device.
        addr: String,
        /// Transport error or unexpected HTTP status.
        reason: String,
    },
}

impl ClientError {
    /// Whether the session must stop.
    ///
    /// Commands are never retried, so every variant is fatal.
    pub fn is_fatal(&self) -> bool {
        match self {
            Self::Discovery(_) | Self::Connection { .. } | Self::Communication { .. } => true,
        }
    }

    /// Device address the error refers to, if any.
    pub fn addr(&self) -> Option<&str> {
        match self {
            Self::Discovery(_) => None,
            Self::Connection { addr, .. } | Self::Communication { addr, .. } => Some(addr),
        }
    }
}
