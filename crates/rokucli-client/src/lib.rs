//! Client
//!
//! Device command sink for Roku External Control Protocol (ECP) devices.
//!
//! # Components
//!
//! - [`EcpClient`]: sends [`Command`]s as `POST /keypress/<key>` requests
//! - [`discover`]: finds devices on the local network via SSDP
//! - [`ClientError`]: every failure a device interaction can produce
//!
//! HTTP requests are blocking (`ureq`) and run on tokio's blocking pool, so
//! callers await each command before sending the next one.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod addr;
pub mod discovery;
mod error;
pub mod transport;

pub use addr::parse_addr;
pub use discovery::{DeviceLocation, DiscoveryConfig, discover};
pub use error::ClientError;
pub use rokucli_proto::{Command, ECP_PORT};
pub use transport::{EcpClient, TransportConfig};
