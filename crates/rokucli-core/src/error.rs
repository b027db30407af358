//! Error types for layout construction and navigation planning.
//!
//! Both are detected before any command reaches a device: a malformed layout
//! is rejected when it is built, and a plan either resolves every glyph or
//! fails as a whole.

use thiserror::Error;

use crate::layout::{Glyph, Position};

/// Errors raised while building a [`crate::KeyboardLayout`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// The grid has no rows or no columns.
    #[error("layout is empty")]
    Empty,

    /// A row has a different width than the first row.
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        /// Index of the offending row.
        row: usize,
        /// Width of the first row.
        expected: usize,
        /// Width of the offending row.
        found: usize,
    },

    /// A glyph appears more than once.
    #[error("glyph {glyph} appears at both {first} and {second}")]
    DuplicateGlyph {
        /// The repeated glyph.
        glyph: Glyph,
        /// Where it was first seen.
        first: Position,
        /// Where it was seen again.
        second: Position,
    },

    /// A required glyph (Caps, Done, or the start glyph) is absent.
    #[error("layout has no {0} key")]
    MissingGlyph(Glyph),
}

/// Errors raised while planning a typed sequence.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    /// The glyph does not exist on the layout.
    #[error("no key for {0} on the on-screen keyboard")]
    InvalidGlyph(Glyph),

    /// Neither a row step nor a column step toward the glyph is passable.
    #[error("cannot reach {glyph} from {at}: both directions are blocked")]
    Unreachable {
        /// The glyph being navigated to.
        glyph: Glyph,
        /// Cursor position where navigation stalled.
        at: Position,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_glyph() {
        let err = NavigationError::InvalidGlyph(Glyph::Char('!'));
        assert_eq!(err.to_string(), "no key for '!' on the on-screen keyboard");

        let err = NavigationError::Unreachable { glyph: Glyph::Caps, at: Position::new(1, 0) };
        assert_eq!(err.to_string(), "cannot reach <caps> from (1, 0): both directions are blocked");
    }

    #[test]
    fn layout_errors_describe_the_grid() {
        let err = LayoutError::Ragged { row: 2, expected: 12, found: 11 };
        assert_eq!(err.to_string(), "row 2 has 11 cells, expected 12");
        assert_eq!(LayoutError::MissingGlyph(Glyph::Done).to_string(), "layout has no <done> key");
    }
}
