//! Standard invariant checks.
//!
//! These invariants capture behavioral properties that must always hold.
//! They verify WHAT must be true, not specific test scenarios.

use super::{Invariant, InvariantResult, SystemSnapshot, Violation};

/// Keyboard focus never rests on, or passes through, an unselectable cell.
///
/// The navigator only plans moves into selectable cells, so any fault in the
/// keyboard model means a plan was wrong.
pub struct CursorOnKey;

impl Invariant for CursorOnKey {
    fn name(&self) -> &'static str {
        "cursor_on_key"
    }

    fn check(&self, state: &SystemSnapshot) -> InvariantResult {
        let keyboard = &state.keyboard;
        if let Some(fault) = keyboard.faults.first() {
            return Err(Violation { invariant: self.name(), message: fault.clone() });
        }
        if !keyboard.on_key {
            return Err(Violation {
                invariant: self.name(),
                message: format!("focus at {} is not on a key", keyboard.cursor),
            });
        }
        Ok(())
    }
}

/// Text is never submitted with shift still on.
///
/// Every uppercase character is bracketed by two caps selects.
pub struct CapsBalanced;

impl Invariant for CapsBalanced {
    fn name(&self) -> &'static str {
        "caps_balanced"
    }

    fn check(&self, state: &SystemSnapshot) -> InvariantResult {
        match state.keyboard.unbalanced_submits {
            0 => Ok(()),
            n => Err(Violation {
                invariant: self.name(),
                message: format!("{n} submission(s) made with caps on"),
            }),
        }
    }
}

/// The App's command count equals what the device received.
///
/// A mismatch means a failed command was acknowledged or a delivered one was
/// not.
pub struct DeliveredMatchesAcknowledged;

impl Invariant for DeliveredMatchesAcknowledged {
    fn name(&self) -> &'static str {
        "delivered_matches_acknowledged"
    }

    fn check(&self, state: &SystemSnapshot) -> InvariantResult {
        let session = &state.session;
        if session.commands_acknowledged != session.commands_delivered as u64 {
            return Err(Violation {
                invariant: self.name(),
                message: format!(
                    "app counted {} commands, device received {}",
                    session.commands_acknowledged, session.commands_delivered
                ),
            });
        }
        Ok(())
    }
}

/// A local echo exists exactly while a text-entry sub-mode is active.
pub struct EchoMatchesMode;

impl Invariant for EchoMatchesMode {
    fn name(&self) -> &'static str {
        "echo_matches_mode"
    }

    fn check(&self, state: &SystemSnapshot) -> InvariantResult {
        let session = &state.session;
        if session.capture_text.is_some() != session.mode.is_capturing() {
            return Err(Violation {
                invariant: self.name(),
                message: format!("mode {} with echo {:?}", session.mode, session.capture_text),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rokucli_app::Mode;

    use super::*;

    #[test]
    fn fault_breaks_cursor_on_key() {
        let mut state = SystemSnapshot::idle();
        state.keyboard.faults.push("focus moved onto the gap at (0, 0)".into());

        let violation = CursorOnKey.check(&state).unwrap_err();
        assert_eq!(violation.invariant, "cursor_on_key");
        assert_eq!(violation.message, "focus moved onto the gap at (0, 0)");
    }

    #[test]
    fn caps_left_on_is_reported() {
        let mut state = SystemSnapshot::idle();
        state.keyboard.unbalanced_submits = 1;
        assert!(CapsBalanced.check(&state).is_err());
    }

    #[test]
    fn count_mismatch_is_reported() {
        let mut state = SystemSnapshot::idle();
        state.session.commands_acknowledged = 3;
        state.session.commands_delivered = 2;

        let violation = DeliveredMatchesAcknowledged.check(&state).unwrap_err();
        assert_eq!(violation.message, "app counted 3 commands, device received 2");
    }

    #[test]
    fn echo_without_capture_is_reported() {
        let mut state = SystemSnapshot::idle();
        state.session.capture_text = Some("x".into());
        assert!(EchoMatchesMode.check(&state).is_err());

        state.session.mode = Mode::BufferedEntry;
        assert!(EchoMatchesMode.check(&state).is_ok());
    }
}
