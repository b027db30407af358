//! Property-based tests for the App state machine.
//!
//! Tests verify that invariants hold under arbitrary key sequences:
//! - Unbound keys never produce a command and never change state
//! - Direct entry sends exactly one literal per typed character
//! - Buffered entry touches the device only on Enter
//! - Ctrl+C quits from any state

use proptest::prelude::*;
use rokucli_app::{App, AppAction, AppEvent, KeyInput, Mode, keymap};
use rokucli_proto::Command;

/// Generate any key the driver can produce.
fn key_strategy() -> impl Strategy<Value = KeyInput> {
    prop_oneof![
        4 => any::<char>().prop_map(KeyInput::Char),
        1 => prop::sample::select(vec![
            KeyInput::Enter,
            KeyInput::Esc,
            KeyInput::Backspace,
            KeyInput::Delete,
            KeyInput::Up,
            KeyInput::Down,
            KeyInput::Left,
            KeyInput::Right,
        ]),
    ]
}

/// Printable text without the keys that leave a capture.
fn text_strategy() -> impl Strategy<Value = String> {
    "[ -~]{0,24}"
}

fn app() -> App {
    App::new("10.0.0.7:8060".into())
}

fn type_chars(app: &mut App, text: &str) -> Vec<AppAction> {
    text.chars().flat_map(|c| app.handle(AppEvent::Key(KeyInput::Char(c)))).collect()
}

fn sent(actions: &[AppAction]) -> Vec<Command> {
    actions
        .iter()
        .filter_map(|action| match action {
            AppAction::Send(command) => Some(*command),
            _ => None,
        })
        .collect()
}

proptest! {
    #[test]
    fn prop_unbound_keys_are_no_ops(key in key_strategy()) {
        prop_assume!(keymap::lookup(key).is_none() && !keymap::is_quit(key));

        let mut app = app();
        let before = app.clone();

        prop_assert!(app.handle(AppEvent::Key(key)).is_empty());
        prop_assert_eq!(app, before);
    }

    #[test]
    fn prop_idle_keys_emit_at_most_one_command(keys in prop::collection::vec(key_strategy(), 0..40)) {
        let mut app = app();
        for key in keys {
            let idle = app.mode() == Mode::Idle;
            let actions = app.handle(AppEvent::Key(key));
            if idle {
                let typed = actions.iter().any(|a| matches!(a, AppAction::TypeText { .. }));
                prop_assert!(sent(&actions).len() <= 1);
                prop_assert!(!typed);
            }
        }
    }

    #[test]
    fn prop_direct_entry_sends_one_literal_per_char(text in text_strategy()) {
        let mut app = app();
        let _ = app.handle(AppEvent::Key(KeyInput::Char('/')));

        let actions = type_chars(&mut app, &text);

        let expected: Vec<Command> = text.chars().map(Command::Literal).collect();
        prop_assert_eq!(sent(&actions), expected);
        prop_assert_eq!(app.capture_text(), Some(text.as_str()));
        prop_assert_eq!(app.mode(), Mode::DirectEntry);
    }

    #[test]
    fn prop_buffered_entry_defers_until_enter(text in text_strategy()) {
        let mut app = app();
        let _ = app.handle(AppEvent::Key(KeyInput::Char('u')));

        let actions = type_chars(&mut app, &text);
        prop_assert!(sent(&actions).is_empty());

        let actions = app.handle(AppEvent::Key(KeyInput::Enter));
        prop_assert_eq!(actions, vec![AppAction::TypeText { text }, AppAction::Render]);
        prop_assert_eq!(app.mode(), Mode::Idle);
    }

    #[test]
    fn prop_interrupt_always_quits(keys in prop::collection::vec(key_strategy(), 0..20)) {
        let mut app = app();
        for key in keys {
            let _ = app.handle(AppEvent::Key(key));
        }
        prop_assert_eq!(app.handle(AppEvent::Interrupt), vec![AppAction::Quit]);
    }
}
