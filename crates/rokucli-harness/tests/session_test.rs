//! End-to-end session tests.
//!
//! Each test scripts keys into a [`SimDriver`], runs the production
//! [`Runtime`] to completion, and checks what the virtual device received.
//! The standard invariant registry is checked on every render.

use std::{sync::Arc, time::Duration};

use rokucli_app::{KeyInput, Mode, Runtime, RuntimeConfig, RuntimeError};
use rokucli_core::{KeyboardLayout, Navigator, Plan, Step};
use rokucli_harness::{InvariantRegistry, SimDriver, SimDriverError, SimEnv};
use rokucli_proto::Command::{self, Down, Left, Right, Select, Up};

fn layout() -> Arc<KeyboardLayout> {
    Arc::new(KeyboardLayout::roku())
}

fn runtime(config: RuntimeConfig) -> (Runtime<SimDriver, SimEnv>, SimEnv) {
    let env = SimEnv::new();
    let driver = SimDriver::new(layout()).with_invariants(InvariantRegistry::standard());
    (Runtime::new(driver, env.clone(), layout(), config), env)
}

/// Script `text` as keys, with `\n` as Enter and `\x1b` as Escape.
fn script(runtime: &Runtime<SimDriver, SimEnv>, text: &str) {
    runtime.driver().inject_keys(text.chars().map(|c| match c {
        '\n' => KeyInput::Enter,
        '\x1b' => KeyInput::Esc,
        c => KeyInput::Char(c),
    }));
}

/// One line per selected glyph; `+settle` marks a caps wait.
fn describe(plan: &Plan) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut line: Vec<String> = Vec::new();
    for step in plan.steps() {
        match step {
            Step::Send(command) => {
                line.push(command.to_string());
                if *command == Select {
                    lines.push(line.join(" "));
                    line.clear();
                }
            },
            Step::Settle => {
                if let Some(last) = lines.last_mut() {
                    last.push_str(" +settle");
                }
            },
        }
    }
    lines.join("\n")
}

#[tokio::test]
async fn typing_hi_through_the_keyboard() {
    let (mut runtime, env) = runtime(RuntimeConfig::default());
    script(&runtime, "uhi\n");

    runtime.run().await.unwrap();

    let driver = runtime.driver();
    assert_eq!(driver.sent(), vec![
        Down, Down, Right, Right, Right, Right, Right, Select, // h
        Up, Right, Right, Select, // i
        Down, Right, Right, Right, Select, // done
    ]);
    assert_eq!(driver.keyboard().submitted(), &["hi".to_string()]);
    assert!(env.sleeps().is_empty());
    assert!(driver.is_stopped());

    let app = runtime.app();
    assert_eq!(app.mode(), Mode::Idle);
    assert_eq!(app.commands_sent(), 17);
    assert_eq!(app.last_command(), Some(Select));
    assert_eq!(app.status_message(), Some("Typed 3 keys in 14 moves"));
}

#[test]
fn mixed_case_plan_shape() {
    let layout = KeyboardLayout::roku();
    let plan = Navigator::new(&layout).plan("Hi").unwrap();

    insta::assert_snapshot!(describe(&plan), @r"
    Down Down Left Select +settle
    Right Right Right Right Right Right Select
    Left Left Left Left Left Left Select +settle
    Right Up Right Right Right Right Right Right Right Select
    Down Right Right Right Select
    ");
}

#[tokio::test]
async fn caps_settle_uses_configured_delay() {
    let config = RuntimeConfig { caps_settle: Duration::from_millis(250) };
    let (mut runtime, env) = runtime(config);
    script(&runtime, "uAb\n");

    runtime.run().await.unwrap();

    assert_eq!(env.sleeps(), vec![Duration::from_millis(250); 2]);
    assert_eq!(env.elapsed(), Duration::from_millis(500));
    assert_eq!(runtime.driver().keyboard().submitted(), &["Ab".to_string()]);
}

#[tokio::test]
async fn direct_entry_sends_literals() {
    let (mut runtime, _env) = runtime(RuntimeConfig::default());
    script(&runtime, "/Hi q\n");

    runtime.run().await.unwrap();

    assert_eq!(runtime.driver().sent(), vec![
        Command::Literal('H'),
        Command::Literal('i'),
        Command::Literal(' '),
        Command::Literal('q'),
        Command::Enter,
    ]);
    assert_eq!(runtime.driver().keyboard().submitted(), &["Hi q".to_string()]);
}

#[tokio::test]
async fn remote_keys_then_quit() {
    let (mut runtime, _env) = runtime(RuntimeConfig::default());
    script(&runtime, "Hjl qk");

    runtime.run().await.unwrap();

    assert_eq!(runtime.driver().sent(), vec![Command::Home, Down, Right, Command::Play]);
    assert!(runtime.driver().has_pending(), "keys after quit stay unread");
}

#[tokio::test]
async fn untypeable_text_is_reported_not_fatal() {
    let (mut runtime, _env) = runtime(RuntimeConfig::default());
    script(&runtime, "uhi!\nj");

    runtime.run().await.unwrap();

    assert_eq!(runtime.driver().sent(), vec![Down]);
    assert_eq!(
        runtime.app().status_message(),
        Some("Error: no key for '!' on the on-screen keyboard")
    );
}

#[tokio::test]
async fn escape_sends_nothing() {
    let (mut runtime, _env) = runtime(RuntimeConfig::default());
    script(&runtime, "uhello\x1b/abc\x1b");

    runtime.run().await.unwrap();

    // direct entry already sent its literals before the escape
    assert_eq!(runtime.driver().sent(), vec![
        Command::Literal('a'),
        Command::Literal('b'),
        Command::Literal('c'),
    ]);
    assert!(runtime.driver().keyboard().submitted().is_empty());
}

#[tokio::test]
async fn communication_failure_ends_session() {
    let (mut runtime, _env) = runtime(RuntimeConfig::default());
    runtime.driver().fail_after(2);
    script(&runtime, "jjjj");

    let err = runtime.run().await.unwrap_err();

    match err {
        RuntimeError::Communication { ref device, .. } => assert_eq!(device, "192.0.2.10:8060"),
        ref other => panic!("expected communication error, got {other:?}"),
    }
    assert_eq!(err.to_string(), "Unable to communicate with device at 192.0.2.10:8060");
    assert_eq!(runtime.driver().sent(), vec![Down, Down]);
    assert!(runtime.driver().has_pending());
    assert!(runtime.driver().is_stopped());
}

#[tokio::test]
async fn failure_mid_plan_abandons_the_rest() {
    let (mut runtime, env) = runtime(RuntimeConfig::default());
    runtime.driver().fail_after(5);
    script(&runtime, "uHello\nj");

    let err = runtime.run().await.unwrap_err();

    assert!(matches!(err, RuntimeError::Communication { .. }));
    assert_eq!(runtime.driver().sent(), vec![Down, Down, Left, Select, Right]);
    assert_eq!(env.sleeps().len(), 1);
    assert_eq!(runtime.app().commands_sent(), 5);
}

#[tokio::test]
async fn render_failure_is_a_driver_error() {
    let (mut runtime, _env) = runtime(RuntimeConfig::default());
    runtime.driver().fail_next_render("terminal closed");
    script(&runtime, "j");

    let err = runtime.run().await.unwrap_err();

    assert!(matches!(err, RuntimeError::Driver(SimDriverError(ref m)) if m == "terminal closed"));
    assert!(runtime.driver().sent().is_empty());
}

#[tokio::test]
async fn interrupt_quits_inside_capture() {
    let (mut runtime, _env) = runtime(RuntimeConfig::default());
    script(&runtime, "uab");
    runtime.driver().inject_event(rokucli_app::AppEvent::Interrupt);
    script(&runtime, "\n");

    runtime.run().await.unwrap();

    assert!(runtime.driver().sent().is_empty());
    assert_eq!(runtime.app().mode(), Mode::BufferedEntry);
}
