use thiserror::Error;

use crate::{
    board::{Cell, Coordinate, SetCellError, Side},
    movelist::Move,
};

/// Fatal faults that stop a replay. An illegal move is not one of these: it ends the game
/// with an [`Outcome::Illegal`][crate::report::Outcome::Illegal] instead.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum GameError {
    /// A two-square jump over a square that does not hold an opposing soldier.
    #[error(
        "move {mv} by {mover} jumps over {midpoint}, which holds {found:?} instead of an \
         opposing soldier"
    )]
    InvalidCaptureGeometry {
        mv: Move,
        mover: Side,
        midpoint: Coordinate,
        found: Cell,
    },

    /// A move that passed validation starts from a square without a soldier of the mover.
    #[error("line {line}: move {mv} by {side} does not start from one of its soldiers")]
    NoSoldierAtSource { line: usize, mv: Move, side: Side },

    /// A move handed to [`apply`][crate::engine::apply] lands on a square that is not
    /// empty.
    #[error("line {line}: move {mv} lands on {found:?}")]
    BlockedDestination { line: usize, mv: Move, found: Cell },

    /// The board refused a write while a move was applied.
    #[error(transparent)]
    Board(#[from] SetCellError),
}
