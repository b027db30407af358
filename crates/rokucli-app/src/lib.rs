//! Application layer for rokucli
//!
//! Pure state machine and generic runtime for the remote-control session,
//! enabling deterministic simulation testing with the same code that runs in
//! production.
//!
//! # Components
//!
//! - [`App`]: session state machine (key dispatch, text-capture sub-modes)
//! - [`keymap`]: static key bindings and the usage menu
//! - [`TextCapture`]: shared helper behind the two text-entry sub-modes
//! - [`Driver`]: trait for platform-specific I/O abstraction
//! - [`Runtime`]: generic orchestration loop using Driver

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod action;
mod app;
mod capture;
mod driver;
mod event;
mod input;
pub mod keymap;
mod runtime;
mod state;

pub use action::AppAction;
pub use app::App;
pub use capture::{CAPTURE_PROMPT, CaptureKind, CaptureOutcome, TextCapture};
pub use driver::Driver;
pub use event::AppEvent;
pub use input::KeyInput;
pub use keymap::Binding;
pub use runtime::{Runtime, RuntimeConfig, RuntimeError};
pub use state::Mode;
