//! Protocol-level errors.

use thiserror::Error;

/// Result alias for protocol operations.
pub type Result<T> = std::result::Result<T, ProtocolError>;

/// Errors produced while decoding ECP key names.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// Key name does not correspond to any [`crate::Command`].
    #[error("unknown ECP key: {0:?}")]
    UnknownKey(String),

    /// `Lit_` key whose payload is not exactly one percent-encoded character.
    #[error("invalid literal key: {0:?}")]
    InvalidLiteral(String),
}
