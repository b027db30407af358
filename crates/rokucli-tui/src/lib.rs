//! Terminal UI for rokucli
//!
//! A thin shell over [`rokucli_app::Driver`] that provides terminal-specific
//! I/O. All orchestration logic lives in the generic [`rokucli_app::Runtime`]
//!
//! This crate only handles terminal input, rendering, and process setup
//! (arguments, logging, device selection).

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod cli;
pub mod exit;
pub mod logging;
pub mod select;
pub mod terminal;
pub mod ui;

pub use cli::Args;
pub use exit::Exit;
pub use rokucli_app::{App, AppAction, AppEvent, Driver, KeyInput, Runtime};
pub use terminal::{TerminalDriver, TerminalError};
