//! Static key bindings.
//!
//! [`BINDINGS`] is the single source of truth for what a key does outside of
//! text entry. [`USAGE`] is the menu shown to the user; it lists the same
//! bindings grouped for display.

use rokucli_proto::Command;

use crate::{CaptureKind, KeyInput};

/// What a bound key does in [`crate::Mode::Idle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binding {
    /// Send one command.
    Send(Command),
    /// Enter a text-capture sub-mode.
    Capture(CaptureKind),
}

/// Every bound key. Keys not listed here are ignored.
pub const BINDINGS: &[(KeyInput, Binding)] = &[
    (KeyInput::Char('B'), Binding::Send(Command::Back)),
    (KeyInput::Backspace, Binding::Send(Command::Back)),
    (KeyInput::Delete, Binding::Send(Command::Back)),
    (KeyInput::Char('H'), Binding::Send(Command::Home)),
    (KeyInput::Char('h'), Binding::Send(Command::Left)),
    (KeyInput::Left, Binding::Send(Command::Left)),
    (KeyInput::Char('j'), Binding::Send(Command::Down)),
    (KeyInput::Down, Binding::Send(Command::Down)),
    (KeyInput::Char('k'), Binding::Send(Command::Up)),
    (KeyInput::Up, Binding::Send(Command::Up)),
    (KeyInput::Char('l'), Binding::Send(Command::Right)),
    (KeyInput::Right, Binding::Send(Command::Right)),
    (KeyInput::Enter, Binding::Send(Command::Select)),
    (KeyInput::Char('R'), Binding::Send(Command::Replay)),
    (KeyInput::Char('i'), Binding::Send(Command::Info)),
    (KeyInput::Char('r'), Binding::Send(Command::Reverse)),
    (KeyInput::Char('f'), Binding::Send(Command::Forward)),
    (KeyInput::Char(' '), Binding::Send(Command::Play)),
    (KeyInput::Char('/'), Binding::Capture(CaptureKind::Direct)),
    (KeyInput::Char('u'), Binding::Capture(CaptureKind::Buffered)),
];

/// Usage menu entries as `(action, keys)`, navigation column first.
pub const USAGE: &[(&str, &str)] = &[
    ("Back", "B or <Backsp>"),
    ("Home", "H"),
    ("Left", "h or <Left>"),
    ("Down", "j or <Down>"),
    ("Up", "k or <Up>"),
    ("Right", "l or <Right>"),
    ("Ok/Enter", "<Enter>"),
    ("Replay", "R"),
    ("Info/Settings", "i"),
    ("Rewind", "r"),
    ("Fast-Fwd", "f"),
    ("Play/Pause", "<Space>"),
    ("Enter Text", "/"),
    ("Use Keyboard", "u"),
];

/// Footer line under the usage menu.
pub const QUIT_HINT: &str = "(press q to exit)";

/// Look up the binding for `key`.
pub fn lookup(key: KeyInput) -> Option<Binding> {
    BINDINGS.iter().find(|(bound, _)| *bound == key).map(|(_, binding)| *binding)
}

/// True for the keys that end the session from [`crate::Mode::Idle`].
pub fn is_quit(key: KeyInput) -> bool {
    matches!(key, KeyInput::Char('q' | 'Q'))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn each_key_is_bound_once() {
        let keys: HashSet<KeyInput> = BINDINGS.iter().map(|(key, _)| *key).collect();
        assert_eq!(keys.len(), BINDINGS.len());
    }

    #[test]
    fn quit_keys_are_not_bindings() {
        assert_eq!(lookup(KeyInput::Char('q')), None);
        assert_eq!(lookup(KeyInput::Char('Q')), None);
        assert!(is_quit(KeyInput::Char('Q')));
    }

    #[test]
    fn aliases_share_a_command() {
        assert_eq!(lookup(KeyInput::Char('h')), lookup(KeyInput::Left));
        assert_eq!(lookup(KeyInput::Char('B')), Some(Binding::Send(Command::Back)));
        assert_eq!(lookup(KeyInput::Delete), Some(Binding::Send(Command::Back)));
        assert_eq!(lookup(KeyInput::Enter), Some(Binding::Send(Command::Select)));
    }

    #[test]
    fn every_named_remote_key_but_text_keys_is_reachable() {
        let bound: HashSet<Command> = BINDINGS
            .iter()
            .filter_map(|(_, binding)| match binding {
                Binding::Send(command) => Some(*command),
                Binding::Capture(_) => None,
            })
            .collect();

        for command in Command::NAMED {
            let text_only = matches!(command, Command::Backspace | Command::Enter);
            assert_eq!(bound.contains(&command), !text_only, "{command}");
        }
    }

    #[test]
    fn usage_menu_fills_two_columns() {
        assert_eq!(USAGE.len() % 2, 0);
    }
}
