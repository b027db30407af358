//! Reference models for model-based testing.
//!
//! Models are simplified implementations that define correct behavior.
//! Commands sent by the real runtime are replayed on them and their
//! observable state is compared with what the user asked for.

mod keyboard;

pub use keyboard::{KeyboardFault, VirtualKeyboard};
