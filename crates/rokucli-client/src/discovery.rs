//! SSDP discovery of ECP devices.
//!
//! Sends one `M-SEARCH` for the `roku:ecp` search target and collects the
//! `LOCATION` header of every answer until the timeout. Finding nothing is
//! an empty list, not an error.

use std::{
    net::{Ipv4Addr, SocketAddr, SocketAddrV4},
    time::Duration,
};

use tokio::{net::UdpSocket, time::Instant};

use crate::{addr::parse_addr, error::ClientError};

/// SSDP multicast group and port.
pub const SSDP_MULTICAST: SocketAddr =
    SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::new(239, 255, 255, 250), 1900));

/// Search target answered by ECP devices.
pub const ECP_SEARCH_TARGET: &str = "roku:ecp";

/// Largest datagram we read; SSDP answers fit comfortably.
const MAX_DATAGRAM: usize = 2048;

/// Discovery configuration.
#[derive(Debug, Clone)]
pub struct DiscoveryConfig {
    /// How long to collect answers.
    pub timeout: Duration,
    /// Where the search is sent. The multicast group outside of tests.
    pub target: SocketAddr,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self { timeout: Duration::from_secs(3), target: SSDP_MULTICAST }
    }
}

/// A device that answered the search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceLocation {
    /// Raw `LOCATION` header value, e.g. `http://192.168.1.20:8060/`.
    pub location: String,
    /// `host:port` derived from the location.
    pub addr: String,
}

impl DeviceLocation {
    /// Parse an SSDP answer.
    ///
    /// Returns `None` unless the datagram is an HTTP 200 response carrying a
    /// usable `LOCATION` header. Header names are case-insensitive.
    pub fn from_response(response: &str) -> Option<Self> {
        let mut lines = response.lines();
        let status = lines.next()?;
        let mut parts = status.split_whitespace();
        if !parts.next()?.starts_with("HTTP/") || parts.next()? != "200" {
            return None;
        }

        let location = lines
            .filter_map(|line| line.split_once(':'))
            .find(|(name, _)| name.trim().eq_ignore_ascii_case("location"))
            .map(|(_, value)| value.trim())
            .filter(|value| !value.is_empty())?;

        let addr = parse_addr(location).ok()?;
        Some(Self { location: location.to_string(), addr })
    }
}

/// Build the `M-SEARCH` request.
fn search_request(config: &DiscoveryConfig) -> String {
    // MX is the answer window in whole seconds, at least 1
    let mx = config.timeout.as_secs().max(1);
    format!(
        "M-SEARCH * HTTP/1.1\r\n\
         HOST: {SSDP_MULTICAST}\r\n\
         MAN: \"ssdp:discover\"\r\n\
         ST: {ECP_SEARCH_TARGET}\r\n\
         MX: {mx}\r\n\
         \r\n"
    )
}

/// Search the local network for ECP devices.
///
/// Answers are de-duplicated by address and returned in arrival order.
///
/// # Errors
///
/// [`ClientError::Discovery`] if the socket cannot be bound or the search
/// cannot be sent.
pub async fn discover(config: &DiscoveryConfig) -> Result<Vec<DeviceLocation>, ClientError> {
    let io_err = |e: std::io::Error| ClientError::Discovery(e.to_string());

    let socket = UdpSocket::bind((Ipv4Addr::UNSPECIFIED, 0)).await.map_err(io_err)?;
    socket.send_to(search_request(config).as_bytes(), config.target).await.map_err(io_err)?;
    tracing::debug!(dest = %config.target, timeout = ?config.timeout, "sent ssdp search");

    let deadline = Instant::now() + config.timeout;
    let mut devices: Vec<DeviceLocation> = Vec::new();
    let mut buf = [0u8; MAX_DATAGRAM];

    loop {
        let received = tokio::time::timeout_at(deadline, socket.recv_from(&mut buf)).await;
        let Ok(received) = received else { break };
        let (len, from) = received.map_err(io_err)?;

        let response = String::from_utf8_lossy(&buf[..len]);
        match DeviceLocation::from_response(&response) {
            Some(device) if devices.iter().any(|known| known.addr == device.addr) => {},
            Some(device) => {
                tracing::info!(addr = %device.addr, %from, "discovered device");
                devices.push(device);
            },
            None => tracing::debug!(%from, "ignoring ssdp datagram without location"),
        }
    }

    Ok(devices)
}
