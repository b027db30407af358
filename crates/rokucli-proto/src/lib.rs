//! Remote-control protocol vocabulary.
//!
//! Defines [`Command`], the atomic instruction understood by a streaming
//! device, and its encoding as a Roku External Control Protocol (ECP) key
//! name. The transport that carries these keys lives in `rokucli-client`;
//! this crate has no I/O.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod command;
pub mod errors;

pub use command::{Command, ECP_PORT};
pub use errors::{ProtocolError, Result};
