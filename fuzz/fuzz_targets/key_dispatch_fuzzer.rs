//! Fuzz target for App key dispatch
//!
//! Feeds arbitrary key sequences to the session state machine.
//!
//! # Invariants
//!
//! - A key in remote mode sends at most one command
//! - The echo exists exactly while a capture runs
//! - Direct entry sends each printable key as a literal
//! - Quit is only requested from remote mode or by an interrupt

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use rokucli_app::{App, AppAction, AppEvent, KeyInput, Mode};
use rokucli_proto::Command;

#[derive(Debug, Clone, Copy, Arbitrary)]
enum FuzzKey {
    Char(char),
    Enter,
    Esc,
    Backspace,
    Delete,
    Up,
    Down,
    Left,
    Right,
    Interrupt,
}

impl FuzzKey {
    fn event(self) -> AppEvent {
        let key = match self {
            FuzzKey::Char(c) => KeyInput::Char(c),
            FuzzKey::Enter => KeyInput::Enter,
            FuzzKey::Esc => KeyInput::Esc,
            FuzzKey::Backspace => KeyInput::Backspace,
            FuzzKey::Delete => KeyInput::Delete,
            FuzzKey::Up => KeyInput::Up,
            FuzzKey::Down => KeyInput::Down,
            FuzzKey::Left => KeyInput::Left,
            FuzzKey::Right => KeyInput::Right,
            FuzzKey::Interrupt => return AppEvent::Interrupt,
        };
        AppEvent::Key(key)
    }
}

fuzz_target!(|keys: Vec<FuzzKey>| {
    let mut app = App::new("192.0.2.10:8060".to_string());

    for key in keys {
        let before = app.mode();
        let actions = app.handle(key.event());

        let sends = actions.iter().filter(|a| matches!(a, AppAction::Send(_))).count();
        if before == Mode::Idle {
            assert!(sends <= 1, "{key:?} sent {sends} commands from remote mode");
        }

        if before == Mode::DirectEntry {
            if let FuzzKey::Char(c) = key {
                assert_eq!(actions.first(), Some(&AppAction::Send(Command::Literal(c))));
            }
        }

        if actions.contains(&AppAction::Quit) {
            assert!(before == Mode::Idle || matches!(key, FuzzKey::Interrupt));
            return;
        }

        assert_eq!(app.capture_text().is_some(), app.mode().is_capturing());
    }
});
