//! rokucli entry point.

use std::{io, process::ExitCode, sync::Arc};

use clap::Parser;
use rokucli_app::{Driver, Runtime};
use rokucli_client::{discover, parse_addr};
use rokucli_core::{KeyboardLayout, SystemEnv};
use rokucli_tui::{Args, Exit, TerminalDriver, logging, select::choose_device};

#[tokio::main(flavor = "current_thread")]
#[allow(clippy::print_stderr, reason = "errors are reported after the terminal is restored")]
async fn main() -> ExitCode {
    let args = Args::parse();

    let exit = run(&args).await;
    if let Some(diagnostic) = &exit.diagnostic {
        eprintln!("{diagnostic}");
    }
    exit.code()
}

async fn run(args: &Args) -> Exit {
    if let Err(e) = logging::init(args.log_file.as_deref(), &args.log_level) {
        return Exit::failure(format!("unable to open log file: {e}"));
    }

    let addr = match resolve_device(args).await {
        Ok(Some(addr)) => addr,
        Ok(None) => return Exit::success(),
        Err(message) => return Exit::failure(message),
    };

    let driver = match TerminalDriver::connect(&addr, args.transport_config()).await {
        Ok(driver) => driver,
        Err(e) => return Exit::failure(e.to_string()),
    };
    tracing::info!(device = driver.device_addr(), "connected");

    let layout = Arc::new(KeyboardLayout::roku());
    let mut runtime = Runtime::new(driver, SystemEnv::new(), layout, args.runtime_config());
    let result = runtime.run().await;

    // restore the terminal before reporting
    drop(runtime);

    Exit::from_session(&result)
}

/// Address of the device to control.
///
/// An explicit address is validated. Otherwise the LAN is searched and the
/// user picks among the answers; `None` means there is nothing to control.
async fn resolve_device(args: &Args) -> Result<Option<String>, String> {
    if let Some(raw) = &args.addr {
        return parse_addr(raw).map(Some).map_err(|e| e.to_string());
    }

    let devices = discover(&args.discovery_config()).await.map_err(|e| e.to_string())?;
    tracing::info!(found = devices.len(), "discovery finished");

    let chosen = choose_device(&devices, io::stdin().lock(), io::stdout())
        .map_err(|e| format!("unable to read device choice: {e}"))?;
    Ok(chosen.map(|device| device.addr.clone()))
}
