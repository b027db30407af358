//! ECP transport.
//!
//! Provides [`EcpClient`], a thin HTTP layer that turns [`Command`]s into
//! `POST /keypress/<key>` requests. Requests are blocking `ureq` calls moved
//! onto tokio's blocking pool; each call is awaited to completion so commands
//! reach the device in order.

use std::time::Duration;

use rokucli_proto::Command;

use crate::{addr::parse_addr, error::ClientError};

/// Path queried on connect to check that the device answers.
const DEVICE_INFO_PATH: &str = "/query/device-info";

/// Transport configuration.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Upper bound on a whole request, connect to last byte.
    pub timeout: Duration,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self { timeout: Duration::from_secs(5) }
    }
}

/// Connected ECP device.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct EcpClient {
    agent: ureq::Agent,
    addr: String,
    base_url: String,
}

impl EcpClient {
    /// Connect to a device and verify it answers ECP queries.
    ///
    /// `addr` is `host` or `host:port`; the port defaults to 8060.
    ///
    /// # Errors
    ///
    /// [`ClientError::Connection`] if the address is malformed or the
    /// device-info query fails.
    pub async fn connect(addr: &str, config: TransportConfig) -> Result<Self, ClientError> {
        let addr = parse_addr(addr)?;
        let agent_config =
            ureq::Agent::config_builder().timeout_global(Some(config.timeout)).build();

        let client = Self {
            agent: ureq::Agent::new_with_config(agent_config),
            base_url: format!("http://{addr}"),
            addr,
        };

        let url = format!("{}{DEVICE_INFO_PATH}", client.base_url);
        client
            .request(move |agent| agent.get(&url).call().map(drop))
            .await
            .map_err(|reason| ClientError::Connection { addr: client.addr.clone(), reason })?;

        tracing::info!(addr = %client.addr, "connected to device");
        Ok(client)
    }

    /// Send one command.
    ///
    /// # Errors
    ///
    /// [`ClientError::Communication`] on any transport failure or non-2xx
    /// status.
    pub async fn send(&self, command: Command) -> Result<(), ClientError> {
        let url = format!("{}/keypress/{}", self.base_url, command.ecp_key());
        tracing::trace!(%command, "sending keypress");

        self.request(move |agent| agent.post(&url).send_empty().map(drop))
            .await
            .map_err(|reason| {
                tracing::warn!(addr = %self.addr, %command, %reason, "keypress failed");
                ClientError::Communication { addr: self.addr.clone(), reason }
            })
    }

    /// Device address as `host:port`.
    pub fn addr(&self) -> &str {
        &self.addr
    }

    /// Run a blocking request on tokio's blocking pool.
    async fn request<F>(&self, request: F) -> Result<(), String>
    where
        F: FnOnce(&ureq::Agent) -> Result<(), ureq::Error> + Send + 'static,
    {
        let agent = self.agent.clone();
        match tokio::task::spawn_blocking(move || request(&agent)).await {
            Ok(result) => result.map_err(|e| e.to_string()),
            Err(e) => Err(format!("request task failed: {e}")),
        }
    }
}
