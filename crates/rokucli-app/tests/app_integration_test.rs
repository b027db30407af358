//! Integration tests for App session flows.
//!
//! # Oracle Pattern
//!
//! Tests replay a key script through the App, feed `CommandSent` back for
//! every `Send` the way the runtime does, and end with oracle checks on:
//! - The commands that reached the device, in order
//! - The mode and local echo after the script
//! - The status bar state

use rokucli_app::{App, AppAction, AppEvent, KeyInput, Mode};
use rokucli_proto::Command;

/// Outcome of a key script.
#[derive(Debug, Default)]
struct Session {
    sent: Vec<Command>,
    typed: Vec<String>,
    quit: bool,
}

/// Drive `keys` through `app`, acknowledging every command.
fn run(app: &mut App, keys: &[KeyInput]) -> Session {
    let mut session = Session::default();
    for key in keys {
        let mut pending = app.handle(AppEvent::Key(*key));
        while !pending.is_empty() {
            for action in std::mem::take(&mut pending) {
                match action {
                    AppAction::Send(command) => {
                        session.sent.push(command);
                        pending.extend(app.handle(AppEvent::CommandSent(command)));
                    },
                    AppAction::TypeText { text } => session.typed.push(text),
                    AppAction::Quit => session.quit = true,
                    AppAction::Render => {},
                }
            }
        }
        if session.quit {
            break;
        }
    }
    session
}

fn chars(text: &str) -> Vec<KeyInput> {
    text.chars().map(KeyInput::Char).collect()
}

#[test]
fn remote_keys_drive_the_device() {
    let mut app = App::new("10.0.0.7:8060".into());
    let keys = [
        KeyInput::Char('H'),
        KeyInput::Down,
        KeyInput::Char('l'),
        KeyInput::Enter,
        KeyInput::Char(' '),
        KeyInput::Backspace,
    ];

    let session = run(&mut app, &keys);

    assert_eq!(session.sent, vec![
        Command::Home,
        Command::Down,
        Command::Right,
        Command::Select,
        Command::Play,
        Command::Back,
    ]);
    assert_eq!(app.commands_sent(), 6);
    assert_eq!(app.last_command(), Some(Command::Back));
}

#[test]
fn direct_entry_round_trip() {
    let mut app = App::new("10.0.0.7:8060".into());
    let mut keys = chars("/ab");
    keys.extend([KeyInput::Delete, KeyInput::Char('c'), KeyInput::Enter]);

    let session = run(&mut app, &keys);

    assert_eq!(session.sent, vec![
        Command::Literal('a'),
        Command::Literal('b'),
        Command::Backspace,
        Command::Literal('c'),
        Command::Enter,
    ]);
    assert_eq!(app.mode(), Mode::Idle);
}

#[test]
fn direct_entry_treats_command_letters_as_text() {
    let mut app = App::new("10.0.0.7:8060".into());

    let session = run(&mut app, &chars("/hjkq"));

    assert_eq!(session.sent, vec![
        Command::Literal('h'),
        Command::Literal('j'),
        Command::Literal('k'),
        Command::Literal('q'),
    ]);
    assert!(!session.quit);
    assert_eq!(app.capture_text(), Some("hjkq"));
}

#[test]
fn buffered_entry_hands_text_to_the_navigator() {
    let mut app = App::new("10.0.0.7:8060".into());
    let mut keys = chars("uHello");
    keys.push(KeyInput::Enter);

    let session = run(&mut app, &keys);

    assert!(session.sent.is_empty());
    assert_eq!(session.typed, vec!["Hello".to_string()]);
    assert_eq!(app.mode(), Mode::Idle);
}

#[test]
fn escape_aborts_buffered_entry() {
    let mut app = App::new("10.0.0.7:8060".into());
    let mut keys = chars("uabc");
    keys.push(KeyInput::Esc);
    keys.push(KeyInput::Char('k'));

    let session = run(&mut app, &keys);

    assert!(session.typed.is_empty());
    assert_eq!(session.sent, vec![Command::Up]);
}

#[test]
fn quit_stops_the_script() {
    let mut app = App::new("10.0.0.7:8060".into());

    let session = run(&mut app, &chars("jqk"));

    assert!(session.quit);
    assert_eq!(session.sent, vec![Command::Down]);
}
