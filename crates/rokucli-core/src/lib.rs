//! Core keyboard navigation logic.
//!
//! A streaming device's on-screen keyboard only reacts to directional moves
//! and Select. This crate turns an arbitrary string into the shortest such
//! sequence under a greedy rows-then-columns policy.
//!
//! # Components
//!
//! - [`KeyboardLayout`]: immutable grid of keys and unselectable gaps
//! - [`Navigator`]: pure planner producing a [`Plan`] of [`Step`]s
//! - [`Environment`]: time abstraction so plans can be executed against a
//!   virtual clock in simulation
//!
//! Planning has no side effects. A plan either resolves completely or fails
//! with a [`NavigationError`] before anything is sent to a device.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod env;
pub mod error;
pub mod layout;
pub mod navigator;

pub use env::{Environment, SystemEnv};
pub use error::{LayoutError, NavigationError};
pub use layout::{Cell, Direction, Glyph, KeyboardLayout, Position};
pub use navigator::{Navigator, Plan, Step, Stride, normalize};
