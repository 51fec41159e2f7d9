//! Moves and the line-oriented move list format.
//!
//! A move list holds one move per line, written as four comma-separated integers
//! `x_i,y_i,x_f,y_f`: the coordinates the soldier starts from followed by the
//! coordinates it ends on. Blank lines may only trail the last move, so the line a move
//! is read from is always its 1-based position in the list.

use std::{convert::TryFrom, fmt, str::FromStr};

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::board::Coordinate;

/// A single move as read from a move list. The components are kept exactly as
/// written, so they may lie outside the board.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Move {
    pub x_i: i32,
    pub y_i: i32,
    pub x_f: i32,
    pub y_f: i32,
}

impl Move {
    /// Construct a move from its source and destination components.
    pub fn new(x_i: i32, y_i: i32, x_f: i32, y_f: i32) -> Self {
        Self { x_i, y_i, x_f, y_f }
    }

    /// Construct the move between two on-board coordinates.
    pub fn between(from: Coordinate, to: Coordinate) -> Self {
        Self::new(from.x as i32, from.y as i32, to.x as i32, to.y as i32)
    }

    /// Raw `(x, y)` the soldier starts from.
    pub fn source(&self) -> (i32, i32) {
        (self.x_i, self.y_i)
    }

    /// Raw `(x, y)` the soldier ends on.
    pub fn destination(&self) -> (i32, i32) {
        (self.x_f, self.y_f)
    }

    /// `(dx, dy)` from source to destination. Widened so that any two components can be
    /// subtracted.
    pub fn displacement(&self) -> (i64, i64) {
        (
            i64::from(self.x_f) - i64::from(self.x_i),
            i64::from(self.y_f) - i64::from(self.y_i),
        )
    }

    /// Square halfway between source and destination, rounded toward the source for odd
    /// displacements. `None` if it is off the board.
    pub fn midpoint(&self) -> Option<Coordinate> {
        let (dx, dy) = self.displacement();
        let x = i32::try_from(i64::from(self.x_i) + dx / 2).ok()?;
        let y = i32::try_from(i64::from(self.y_i) + dy / 2).ok()?;
        Coordinate::try_new(x, y).ok()
    }

    /// Source and destination as board coordinates, or `None` if either is off the
    /// board.
    pub fn squares(&self) -> Option<(Coordinate, Coordinate)> {
        let source = Coordinate::try_new(self.x_i, self.y_i).ok()?;
        let destination = Coordinate::try_new(self.x_f, self.y_f).ok()?;
        Some((source, destination))
    }
}

impl From<(i32, i32, i32, i32)> for Move {
    fn from((x_i, y_i, x_f, y_f): (i32, i32, i32, i32)) -> Self {
        Self::new(x_i, y_i, x_f, y_f)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}, {}, {}, {}", self.x_i, self.y_i, self.x_f, self.y_f)
    }
}

/// Matcher for a single move line.
static MOVE_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?x)\s*
        (?P<x_i>[+-]?[0-9]+)\s*,\s*
        (?P<y_i>[+-]?[0-9]+)\s*,\s*
        (?P<x_f>[+-]?[0-9]+)\s*,\s*
        (?P<y_f>[+-]?[0-9]+)\s*$",
    )
    .expect("move line pattern is valid")
});

/// Error returned when a line of a move list is not a move.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
#[error("line {line}: {text:?} is not a move of the form x_i,y_i,x_f,y_f")]
pub struct ParseMoveError {
    /// 1-based line number within the move list. Zero when parsing a lone move.
    line: usize,

    /// The offending line.
    text: String,
}

impl ParseMoveError {
    fn new(line: usize, text: &str) -> Self {
        Self {
            line,
            text: text.to_owned(),
        }
    }

    /// 1-based number of the offending line.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Text of the offending line.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let captures = MOVE_LINE
            .captures(s)
            .ok_or_else(|| ParseMoveError::new(0, s))?;
        let component = |name: &str| -> Result<i32, ParseMoveError> {
            captures
                .name(name)
                .and_then(|m| m.as_str().parse().ok())
                .ok_or_else(|| ParseMoveError::new(0, s))
        };
        Ok(Self::new(
            component("x_i")?,
            component("y_i")?,
            component("x_f")?,
            component("y_f")?,
        ))
    }
}

/// Parse a whole move list, keeping the order of the lines. Trailing blank lines are
/// dropped; a blank line anywhere else is malformed.
pub fn parse(text: &str) -> Result<Vec<Move>, ParseMoveError> {
    let body = text.trim_end();
    if body.is_empty() {
        return Ok(Vec::new());
    }
    body.lines()
        .enumerate()
        .map(|(i, line)| {
            line.parse()
                .map_err(|_| ParseMoveError::new(i + 1, line))
        })
        .collect()
}
