//! Deterministic simulation harness for rokucli sessions.
//!
//! In-memory implementations of the [`rokucli_app::Driver`] and
//! [`rokucli_core::Environment`] traits, so the production
//! [`rokucli_app::Runtime`] can be driven by scripted keys against a virtual
//! device with a virtual clock.
//!
//! # Model-Based Testing
//!
//! The `model` module provides [`VirtualKeyboard`], a reference model of the
//! device's on-screen keyboard. Every command the runtime sends is replayed
//! on it, so tests compare the text the device would have received with the
//! text the user typed.
//!
//! # Invariant Testing
//!
//! The `invariants` module provides behavioral testing through invariant
//! checks. Invariants verify WHAT must be true across all execution paths, not
//! specific scenarios. Use [`InvariantRegistry::standard()`] for the common
//! session invariants.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod invariants;
pub mod model;
pub mod sim_driver;
pub mod sim_env;

pub use invariants::{
    CapsBalanced, CursorOnKey, DeliveredMatchesAcknowledged, EchoMatchesMode, Invariant,
    InvariantRegistry, InvariantResult, KeyboardSnapshot, SessionSnapshot, SystemSnapshot,
    Violation,
};
pub use model::{KeyboardFault, VirtualKeyboard};
pub use sim_driver::{SimDriver, SimDriverError};
pub use sim_env::SimEnv;
