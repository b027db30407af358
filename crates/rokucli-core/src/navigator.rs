//! Keyboard-to-remote navigation.
//!
//! Converts a string into the moves and selects that type it on the device's
//! on-screen keyboard. Planning is pure: [`Navigator::plan`] resolves every
//! glyph before producing a [`Plan`], so an untypeable character fails the
//! whole request without side effects.
//!
//! # Algorithm
//!
//! 1. Normalize: each uppercase character becomes `Caps, lowercase, Caps`,
//!    and [`Glyph::Done`] is appended.
//! 2. Start at the layout's start key.
//! 3. For each glyph, step one cell at a time: a row step toward the target
//!    if the cell in that direction is selectable, else a column step under
//!    the same condition. On the target, emit Select (and a settle wait after
//!    Caps).
//!
//! Every step reduces the Manhattan distance to the target by one, so a walk
//! ends in at most `rows + cols` steps or fails with
//! [`NavigationError::Unreachable`] when both axes are blocked.

use rokucli_proto::Command;

use crate::{
    error::NavigationError,
    layout::{Direction, Glyph, KeyboardLayout, Position},
};

/// One instruction of a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Send a command to the device.
    Send(Command),
    /// Wait for the device to apply a shift-state change.
    Settle,
}

/// Outcome of a single navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stride {
    /// Move focus one cell; the cursor is now at `to`.
    Move {
        /// Direction of travel.
        direction: Direction,
        /// Cursor position after the move.
        to: Position,
    },
    /// Cursor is on the target.
    Arrived,
    /// No passable step brings the cursor closer to the target.
    Blocked,
}

/// Ordered steps that type one string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Plan {
    steps: Vec<Step>,
    glyphs: usize,
}

impl Plan {
    /// All steps, in execution order.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Commands only, skipping settle waits.
    pub fn commands(&self) -> impl Iterator<Item = Command> + '_ {
        self.steps.iter().filter_map(|step| match step {
            Step::Send(command) => Some(*command),
            Step::Settle => None,
        })
    }

    /// Length of the normalized sequence (one Select per glyph).
    pub fn glyphs(&self) -> usize {
        self.glyphs
    }

    /// Number of Select commands.
    pub fn selects(&self) -> usize {
        self.commands().filter(|c| *c == Command::Select).count()
    }

    /// Number of directional commands.
    pub fn moves(&self) -> usize {
        self.commands().filter(Command::is_direction).count()
    }

    /// Number of settle waits.
    pub fn settles(&self) -> usize {
        self.steps.iter().filter(|step| **step == Step::Settle).count()
    }

    /// True if the plan has no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl IntoIterator for Plan {
    type Item = Step;
    type IntoIter = std::vec::IntoIter<Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}

/// Rewrite `raw` into the glyphs to select.
///
/// Uppercase characters are bracketed by [`Glyph::Caps`] and lowercased (all
/// characters of a multi-character lowercase mapping are kept inside the
/// bracket). [`Glyph::Done`] terminates the sequence.
pub fn normalize(raw: &str) -> Vec<Glyph> {
    let mut glyphs = Vec::with_capacity(raw.len() + 1);
    for c in raw.chars() {
        if c.is_uppercase() {
            glyphs.push(Glyph::Caps);
            glyphs.extend(c.to_lowercase().map(Glyph::Char));
            glyphs.push(Glyph::Caps);
        } else {
            glyphs.push(Glyph::Char(c));
        }
    }
    glyphs.push(Glyph::Done);
    glyphs
}

/// Plans keystrokes on a [`KeyboardLayout`].
#[derive(Debug, Clone, Copy)]
pub struct Navigator<'a> {
    layout: &'a KeyboardLayout,
}

impl<'a> Navigator<'a> {
    /// Create a navigator over `layout`.
    pub fn new(layout: &'a KeyboardLayout) -> Self {
        Self { layout }
    }

    /// The layout being navigated.
    pub fn layout(&self) -> &'a KeyboardLayout {
        self.layout
    }

    /// Plan the commands that type `raw`, starting from the layout's start
    /// key.
    ///
    /// # Errors
    ///
    /// - [`NavigationError::InvalidGlyph`] if any glyph is missing from the
    ///   layout. Checked for the whole string before any step is planned.
    /// - [`NavigationError::Unreachable`] if a walk stalls with both axes
    ///   blocked.
    pub fn plan(&self, raw: &str) -> Result<Plan, NavigationError> {
        let targets = normalize(raw)
            .into_iter()
            .map(|glyph| {
                self.layout
                    .position_of(glyph)
                    .map(|pos| (glyph, pos))
                    .ok_or(NavigationError::InvalidGlyph(glyph))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut plan = Plan { steps: Vec::new(), glyphs: targets.len() };
        let mut cursor = self.layout.start();
        for (glyph, target) in targets {
            cursor = self.walk(cursor, glyph, target, &mut plan.steps)?;
        }

        tracing::debug!(
            glyphs = plan.glyphs,
            moves = plan.moves(),
            settles = plan.settles(),
            "planned keyboard sequence"
        );
        Ok(plan)
    }

    /// Walk from `from` to `target` and select it.
    ///
    /// Returns the cursor position after the select, which is the reference
    /// point for the next glyph.
    fn walk(
        &self,
        from: Position,
        glyph: Glyph,
        target: Position,
        steps: &mut Vec<Step>,
    ) -> Result<Position, NavigationError> {
        let mut cursor = from;
        loop {
            match self.step(cursor, target) {
                Stride::Move { direction, to } => {
                    steps.push(Step::Send(direction.command()));
                    cursor = to;
                },
                Stride::Arrived => {
                    steps.push(Step::Send(Command::Select));
                    if glyph == Glyph::Caps {
                        steps.push(Step::Settle);
                    }
                    return Ok(cursor);
                },
                Stride::Blocked => return Err(NavigationError::Unreachable { glyph, at: cursor }),
            }
        }
    }

    /// Decide the next single step from `cursor` toward `target`.
    ///
    /// Rows are tried first. A step into an unselectable cell is never taken;
    /// a blocked row step falls through to the column check.
    pub fn step(&self, cursor: Position, target: Position) -> Stride {
        if cursor.row != target.row {
            let direction = if cursor.row < target.row { Direction::Down } else { Direction::Up };
            if let Some(to) = self.layout.passable(cursor, direction) {
                return Stride::Move { direction, to };
            }
        }

        if cursor.col != target.col {
            let direction =
                if cursor.col < target.col { Direction::Right } else { Direction::Left };
            if let Some(to) = self.layout.passable(cursor, direction) {
                return Stride::Move { direction, to };
            }
        }

        if cursor == target { Stride::Arrived } else { Stride::Blocked }
    }
}
