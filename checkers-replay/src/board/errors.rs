//! Errors used by the [`Board`][crate::board::Board].

use thiserror::Error;

use crate::board::{Cell, Coordinate};

/// Error returned when raw coordinates fall outside the 8x8 grid.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("({x}, {y}) is outside the board")]
pub struct OutOfBounds {
    x: i32,
    y: i32,
}

impl OutOfBounds {
    pub(crate) fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The rejected `x` component.
    pub fn x(&self) -> i32 {
        self.x
    }

    /// The rejected `y` component.
    pub fn y(&self) -> i32 {
        self.y
    }
}

/// Reason why a cell could not be set.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotSetReason {
    /// The coordinate is not on the board.
    #[error("the coordinate is outside the board")]
    OutOfBounds,
    /// The cell is outside the checkers pattern and can never hold anything.
    #[error("the cell is not playable")]
    Unplayable,
    /// [`Cell::Forbidden`] is fixed by the board pattern and cannot be written.
    #[error("a cell cannot be made forbidden")]
    ForbiddenValue,
}

/// Error returned when trying to set a cell.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("could not set cell {coord} to {cell:?}: {reason}")]
pub struct SetCellError {
    #[source]
    reason: CannotSetReason,

    /// The targeted cell.
    coord: Coordinate,

    /// The value that was not written.
    cell: Cell,
}

impl SetCellError {
    pub(super) fn new(reason: CannotSetReason, coord: Coordinate, cell: Cell) -> Self {
        Self {
            reason,
            coord,
            cell,
        }
    }

    /// Get the reason the cell was not set.
    pub fn reason(&self) -> CannotSetReason {
        self.reason
    }

    /// Get the coordinate of the targeted cell.
    pub fn coord(&self) -> Coordinate {
        self.coord
    }

    /// Get the value that was not written.
    pub fn cell(&self) -> Cell {
        self.cell
    }
}
