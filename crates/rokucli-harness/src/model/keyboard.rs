//! Model of the device's on-screen keyboard.
//!
//! Tracks focus, shift state and the text field the keyboard edits. A
//! selection of the Done key submits the field and resets focus to the start
//! key, which is where the next keyboard session opens.

use std::{fmt, sync::Arc};

use rokucli_core::{Direction, Glyph, KeyboardLayout, Position};
use rokucli_proto::Command;

/// A command the real keyboard could not have executed as intended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyboardFault {
    /// A move pointed off the edge of the grid.
    OffGrid {
        /// Focus before the move.
        from: Position,
        /// Attempted direction.
        direction: Direction,
    },
    /// A move landed on an unselectable cell.
    Gap(Position),
    /// Select was pressed with focus on an unselectable cell.
    SelectOnGap(Position),
}

impl fmt::Display for KeyboardFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OffGrid { from, direction } => write!(f, "{direction:?} from {from} left the grid"),
            Self::Gap(at) => write!(f, "focus moved onto the gap at {at}"),
            Self::SelectOnGap(at) => write!(f, "select pressed on the gap at {at}"),
        }
    }
}

/// Virtual on-screen keyboard.
#[derive(Debug, Clone)]
pub struct VirtualKeyboard {
    layout: Arc<KeyboardLayout>,
    cursor: Position,
    caps: bool,
    field: String,
    submitted: Vec<String>,
    faults: Vec<KeyboardFault>,
    unbalanced_submits: usize,
}

impl VirtualKeyboard {
    /// Keyboard with focus on the layout's start key and an empty field.
    pub fn new(layout: Arc<KeyboardLayout>) -> Self {
        let cursor = layout.start();
        Self {
            layout,
            cursor,
            caps: false,
            field: String::new(),
            submitted: Vec::new(),
            faults: Vec::new(),
            unbalanced_submits: 0,
        }
    }

    /// Apply one command as the device would.
    ///
    /// Commands with no effect on the keyboard (Home, Play, ...) are ignored.
    pub fn apply(&mut self, command: Command) {
        if let Some(direction) = Direction::from_command(command) {
            self.step(direction);
            return;
        }

        match command {
            Command::Select => self.select(),
            Command::Literal(c) => self.field.push(c),
            Command::Backspace => {
                self.field.pop();
            },
            Command::Enter => self.submit(),
            _ => {},
        }
    }

    fn step(&mut self, direction: Direction) {
        match self.layout.neighbor(self.cursor, direction) {
            Some(to) => {
                self.cursor = to;
                if !self.layout.is_selectable(to) {
                    self.faults.push(KeyboardFault::Gap(to));
                }
            },
            None => self.faults.push(KeyboardFault::OffGrid { from: self.cursor, direction }),
        }
    }

    fn select(&mut self) {
        match self.layout.glyph_at(self.cursor) {
            Some(Glyph::Char(c)) if self.caps => self.field.extend(c.to_uppercase()),
            Some(Glyph::Char(c)) => self.field.push(c),
            Some(Glyph::Caps) => self.caps = !self.caps,
            Some(Glyph::Done) => {
                if self.caps {
                    self.unbalanced_submits += 1;
                }
                self.submit();
                self.cursor = self.layout.start();
                self.caps = false;
            },
            None => self.faults.push(KeyboardFault::SelectOnGap(self.cursor)),
        }
    }

    fn submit(&mut self) {
        self.submitted.push(std::mem::take(&mut self.field));
    }

    /// Current focus.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// True if focus is on a selectable key.
    pub fn on_key(&self) -> bool {
        self.layout.is_selectable(self.cursor)
    }

    /// Shift state.
    pub fn caps(&self) -> bool {
        self.caps
    }

    /// Text in the field, not yet submitted.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Submitted texts, oldest first.
    pub fn submitted(&self) -> &[String] {
        &self.submitted
    }

    /// Every fault recorded so far.
    pub fn faults(&self) -> &[KeyboardFault] {
        &self.faults
    }

    /// Submissions that happened with shift still on.
    pub fn unbalanced_submits(&self) -> usize {
        self.unbalanced_submits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keyboard() -> VirtualKeyboard {
        VirtualKeyboard::new(Arc::new(KeyboardLayout::roku()))
    }

    #[test]
    fn select_types_focused_key() {
        let mut kb = keyboard();
        for command in [Command::Down, Command::Select, Command::Right, Command::Select] {
            kb.apply(command);
        }
        assert_eq!(kb.field(), "qw");
        assert!(kb.faults().is_empty());
    }

    #[test]
    fn caps_uppercases_until_toggled_off() {
        let mut kb = keyboard();
        // '1' -> caps (2,0) -> 'a' (2,1)
        for command in [
            Command::Down,
            Command::Down,
            Command::Left,
            Command::Select,
            Command::Right,
            Command::Select,
            Command::Left,
            Command::Select,
            Command::Right,
            Command::Select,
        ] {
            kb.apply(command);
        }
        assert_eq!(kb.field(), "Aa");
        assert!(!kb.caps());
    }

    #[test]
    fn moving_onto_a_gap_is_a_fault() {
        let mut kb = keyboard();
        kb.apply(Command::Left);

        assert_eq!(kb.faults(), &[KeyboardFault::Gap(Position::new(0, 0))]);
        assert!(!kb.on_key());
    }

    #[test]
    fn moving_off_grid_is_a_fault() {
        let mut kb = keyboard();
        kb.apply(Command::Up);

        assert_eq!(kb.faults(), &[KeyboardFault::OffGrid {
            from: Position::new(0, 1),
            direction: Direction::Up
        }]);
        assert_eq!(kb.cursor(), Position::new(0, 1));
    }

    #[test]
    fn literals_and_enter_edit_the_field_directly() {
        let mut kb = keyboard();
        for command in [
            Command::Literal('o'),
            Command::Literal('x'),
            Command::Backspace,
            Command::Literal('k'),
            Command::Enter,
        ] {
            kb.apply(command);
        }
        assert_eq!(kb.submitted(), &["ok".to_string()]);
        assert_eq!(kb.field(), "");
    }
}
