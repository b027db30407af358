//! Command-line arguments.

use std::{path::PathBuf, time::Duration};

use clap::Parser;
use rokucli_app::RuntimeConfig;
use rokucli_client::{DiscoveryConfig, TransportConfig};

/// Interactive command-line control of Roku devices
#[derive(Parser, Debug)]
#[command(name = "rokucli")]
#[command(about = "Interactive command-line control of Roku devices")]
#[command(version)]
pub struct Args {
    /// IP address of the device to control
    ///
    /// By default, devices on the LAN are discovered automatically.
    pub addr: Option<String>,

    /// Pause after toggling caps on the on-screen keyboard, in milliseconds
    #[arg(long, default_value = "1000")]
    pub caps_settle_ms: u64,

    /// Timeout for each request to the device, in milliseconds
    #[arg(long, default_value = "5000")]
    pub timeout_ms: u64,

    /// How long to wait for discovery answers, in milliseconds
    #[arg(long, default_value = "3000")]
    pub discovery_timeout_ms: u64,

    /// Write logs to this file (nothing is logged without it)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Args {
    /// Settings for the session runtime.
    pub fn runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig { caps_settle: Duration::from_millis(self.caps_settle_ms) }
    }

    /// Settings for the ECP transport.
    pub fn transport_config(&self) -> TransportConfig {
        TransportConfig { timeout: Duration::from_millis(self.timeout_ms) }
    }

    /// Settings for SSDP discovery.
    pub fn discovery_config(&self) -> DiscoveryConfig {
        DiscoveryConfig {
            timeout: Duration::from_millis(self.discovery_timeout_ms),
            ..DiscoveryConfig::default()
        }
    }
}
