//! On-screen keyboard layout.
//!
//! A [`KeyboardLayout`] is a rectangular grid of [`Cell`]s. Each cell is
//! either a key the device can focus ([`Cell::Key`]) or a gap with no key
//! ([`Cell::Unselectable`]). Focus cannot enter a gap, so navigation must
//! route around them.
//!
//! # Invariants
//!
//! - The grid is non-empty and rectangular.
//! - Every glyph appears exactly once.
//! - The Caps, Done and start glyphs are present.
//!
//! [`KeyboardLayout::new`] and [`KeyboardLayout::from_rows`] enforce all
//! three; the layout is immutable afterwards.

use std::{collections::HashMap, fmt};

use rokucli_proto::Command;

use crate::error::LayoutError;

/// Text legend: unselectable gap.
pub const LEGEND_GAP: char = '~';

/// Text legend: Caps toggle.
pub const LEGEND_CAPS: char = '^';

/// Text legend: Done key.
pub const LEGEND_DONE: char = '$';

/// The device's own keyboard, as seen on screen.
///
/// Caps sits at the start of the home row, Done at its end.
const ROKU_ROWS: [&str; 5] = [
    "~1234567890~",
    "~qwertyuiop~",
    "^asdfghjkl@$",
    "~~zxcvbnm-_~",
    "~~~~~~~ <>.~",
];

/// Key focused when the keyboard opens.
const ROKU_START: char = '1';

/// A selectable symbol on the on-screen keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    /// A literal character key.
    Char(char),
    /// The shift toggle. Selecting it flips between lower and upper case.
    Caps,
    /// The key that closes the keyboard. Selected once after every sequence.
    Done,
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Glyph::Char(c) => write!(f, "{c:?}"),
            Glyph::Caps => f.write_str("<caps>"),
            Glyph::Done => f.write_str("<done>"),
        }
    }
}

/// One grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// A key that can take focus.
    Key(Glyph),
    /// A gap. Focus never enters it.
    Unselectable,
}

impl Cell {
    /// True if focus can enter this cell.
    pub fn is_selectable(&self) -> bool {
        matches!(self, Cell::Key(_))
    }

    fn from_legend(c: char) -> Self {
        match c {
            LEGEND_GAP => Cell::Unselectable,
            LEGEND_CAPS => Cell::Key(Glyph::Caps),
            LEGEND_DONE => Cell::Key(Glyph::Done),
            other => Cell::Key(Glyph::Char(other)),
        }
    }
}

/// Grid coordinate, zero-based from the top-left key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Row index.
    pub row: usize,
    /// Column index.
    pub col: usize,
}

impl Position {
    /// Create a position.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Number of single steps between two positions, ignoring gaps.
    pub fn manhattan(&self, other: Position) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A single-step focus movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Previous row.
    Up,
    /// Next row.
    Down,
    /// Previous column.
    Left,
    /// Next column.
    Right,
}

impl Direction {
    /// The remote command that moves focus this way.
    pub fn command(self) -> Command {
        match self {
            Direction::Up => Command::Up,
            Direction::Down => Command::Down,
            Direction::Left => Command::Left,
            Direction::Right => Command::Right,
        }
    }

    /// Direction from a command, if it is a move.
    pub fn from_command(command: Command) -> Option<Self> {
        match command {
            Command::Up => Some(Direction::Up),
            Command::Down => Some(Direction::Down),
            Command::Left => Some(Direction::Left),
            Command::Right => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Immutable on-screen keyboard grid.
///
/// Built once at startup and shared by reference with every [`crate::Navigator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyboardLayout {
    grid: Vec<Vec<Cell>>,
    index: HashMap<Glyph, Position>,
    start: Position,
}

impl KeyboardLayout {
    /// Build a layout from a grid of cells.
    ///
    /// `start` is the glyph focused when the keyboard opens.
    ///
    /// # Errors
    ///
    /// Returns a [`LayoutError`] if the grid is empty or ragged, a glyph is
    /// repeated, or the Caps, Done or start glyph is missing.
    pub fn new(grid: Vec<Vec<Cell>>, start: Glyph) -> Result<Self, LayoutError> {
        let width = grid.first().map_or(0, Vec::len);
        if width == 0 {
            return Err(LayoutError::Empty);
        }

        let mut index = HashMap::new();
        for (row, cells) in grid.iter().enumerate() {
            if cells.len() != width {
                return Err(LayoutError::Ragged { row, expected: width, found: cells.len() });
            }
            for (col, cell) in cells.iter().enumerate() {
                let Cell::Key(glyph) = *cell else { continue };
                let here = Position::new(row, col);
                if let Some(&first) = index.get(&glyph) {
                    return Err(LayoutError::DuplicateGlyph { glyph, first, second: here });
                }
                index.insert(glyph, here);
            }
        }

        for required in [Glyph::Caps, Glyph::Done] {
            if !index.contains_key(&required) {
                return Err(LayoutError::MissingGlyph(required));
            }
        }

        let start = index.get(&start).copied().ok_or(LayoutError::MissingGlyph(start))?;
        Ok(Self { grid, index, start })
    }

    /// Parse a layout from text rows.
    ///
    /// Legend: `~` is a gap, `^` is Caps, `$` is Done. Every other character
    /// is a literal key, so those three cannot be typed on a text-defined
    /// layout.
    ///
    /// # Errors
    ///
    /// Same as [`KeyboardLayout::new`].
    pub fn from_rows(rows: &[&str], start: char) -> Result<Self, LayoutError> {
        let grid = Self::parse_grid(rows);
        Self::new(grid, Glyph::Char(start))
    }

    /// The Roku on-screen keyboard.
    ///
    /// ```text
    /// ~1234567890~
    /// ~qwertyuiop~
    /// ^asdfghjkl@$
    /// ~~zxcvbnm-_~
    /// ~~~~~~~ <>.~
    /// ```
    ///
    /// Focus starts on `1`.
    pub fn roku() -> Self {
        let grid = Self::parse_grid(&ROKU_ROWS);
        let mut index = HashMap::new();
        for (row, cells) in grid.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                if let Cell::Key(glyph) = *cell {
                    index.entry(glyph).or_insert(Position::new(row, col));
                }
            }
        }
        let start = index.get(&Glyph::Char(ROKU_START)).copied().unwrap_or_default();
        Self { grid, index, start }
    }

    fn parse_grid(rows: &[&str]) -> Vec<Vec<Cell>> {
        rows.iter().map(|row| row.chars().map(Cell::from_legend).collect()).collect()
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.grid.len()
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.grid.first().map_or(0, Vec::len)
    }

    /// Where focus starts.
    pub fn start(&self) -> Position {
        self.start
    }

    /// Cell at `pos`. `None` if outside the grid.
    pub fn cell(&self, pos: Position) -> Option<Cell> {
        self.grid.get(pos.row).and_then(|row| row.get(pos.col)).copied()
    }

    /// Glyph at `pos`. `None` for gaps and positions outside the grid.
    pub fn glyph_at(&self, pos: Position) -> Option<Glyph> {
        match self.cell(pos)? {
            Cell::Key(glyph) => Some(glyph),
            Cell::Unselectable => None,
        }
    }

    /// Position of `glyph`. `None` if the layout has no such key.
    pub fn position_of(&self, glyph: Glyph) -> Option<Position> {
        self.index.get(&glyph).copied()
    }

    /// True if focus can rest on `pos`.
    pub fn is_selectable(&self, pos: Position) -> bool {
        self.cell(pos).is_some_and(|cell| cell.is_selectable())
    }

    /// The adjacent position in `direction`, if it is inside the grid.
    pub fn neighbor(&self, pos: Position, direction: Direction) -> Option<Position> {
        let next = match direction {
            Direction::Up => Position::new(pos.row.checked_sub(1)?, pos.col),
            Direction::Down => Position::new(pos.row + 1, pos.col),
            Direction::Left => Position::new(pos.row, pos.col.checked_sub(1)?),
            Direction::Right => Position::new(pos.row, pos.col + 1),
        };
        self.cell(next).map(|_| next)
    }

    /// The adjacent position in `direction`, if focus can move there.
    pub fn passable(&self, pos: Position, direction: Direction) -> Option<Position> {
        self.neighbor(pos, direction).filter(|&next| self.is_selectable(next))
    }

    /// All glyphs on the layout in row-major order.
    pub fn glyphs(&self) -> impl Iterator<Item = Glyph> + '_ {
        self.grid.iter().flatten().filter_map(|cell| match cell {
            Cell::Key(glyph) => Some(*glyph),
            Cell::Unselectable => None,
        })
    }

    /// All literal characters that can be typed on this layout.
    pub fn typeable(&self) -> impl Iterator<Item = char> + '_ {
        self.glyphs().filter_map(|glyph| match glyph {
            Glyph::Char(c) => Some(c),
            Glyph::Caps | Glyph::Done => None,
        })
    }
}

impl Default for KeyboardLayout {
    fn default() -> Self {
        Self::roku()
    }
}
