//! Types that make up the game board.

use std::{fmt, mem};

use self::grid::Grid;
pub use self::{
    coordinate::{Coordinate, SIZE},
    errors::{CannotSetReason, OutOfBounds, SetCellError},
    roster::Roster,
};

mod coordinate;
mod errors;
mod grid;
mod roster;

/// Number of rows at each end of the board that start filled with soldiers.
const HOME_ROWS: usize = 3;

/// One of the two players. `First` moves up the board (increasing `y`), `Second` moves
/// down.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Side {
    First,
    Second,
}

impl Side {
    /// Both sides, in turn order.
    pub const ALL: [Side; 2] = [Side::First, Side::Second];

    /// Get the opponent of this side.
    pub fn opponent(self) -> Self {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }

    /// Sign of the `y` displacement of every move this side is allowed to make.
    pub fn forward(self) -> i32 {
        match self {
            Side::First => 1,
            Side::Second => -1,
        }
    }

    /// Player number, 1 for `First` and 2 for `Second`.
    pub fn number(self) -> u8 {
        match self {
            Side::First => 1,
            Side::Second => 2,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(match self {
            Side::First => "first",
            Side::Second => "second",
        })
    }
}

/// State of a single square of the board.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Cell {
    /// A playable square with nothing on it.
    Empty,
    /// A playable square holding a soldier of the given side.
    Occupied(Side),
    /// A square outside the checkers pattern. Nothing can ever stand here.
    Forbidden,
}

impl Cell {
    /// The side whose soldier occupies this cell, if any.
    pub fn occupant(self) -> Option<Side> {
        match self {
            Cell::Occupied(side) => Some(side),
            Cell::Empty | Cell::Forbidden => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Cell::Empty => f.pad("."),
            Cell::Occupied(side) => write!(f, "{}", side.number()),
            Cell::Forbidden => f.pad(" "),
        }
    }
}

/// The 8x8 checkers board together with the roster of soldiers of each side.
///
/// The grid and the rosters are two views of the same data. They are only ever changed
/// together through [`Board::set_cell`], so the roster of a side always holds exactly
/// the coordinates of the cells occupied by that side.
#[derive(Debug, Clone)]
pub struct Board {
    /// Cells of the board.
    grid: Grid,

    /// Soldiers of [`Side::First`].
    first: Roster,

    /// Soldiers of [`Side::Second`].
    second: Roster,
}

impl Board {
    /// Create a board in the standard starting layout: the three rows nearest `y = 0`
    /// are filled with `First` soldiers, the three rows nearest `y = 7` with `Second`
    /// soldiers.
    pub fn new() -> Self {
        let mut board = Self::empty();
        for coord in Self::coordinates().filter(Coordinate::is_playable) {
            let side = if coord.y < HOME_ROWS {
                Side::First
            } else if coord.y >= SIZE - HOME_ROWS {
                Side::Second
            } else {
                continue;
            };
            board.grid[coord] = Cell::Occupied(side);
            board.roster_mut(side).insert(coord);
        }
        board
    }

    /// Create a board with the checkers pattern applied but no soldiers on it.
    pub fn empty() -> Self {
        Self {
            grid: Grid::new(|coord| {
                if coord.is_playable() {
                    Cell::Empty
                } else {
                    Cell::Forbidden
                }
            }),
            first: Roster::new(Side::First),
            second: Roster::new(Side::Second),
        }
    }

    /// Iterate every coordinate of the board, row by row.
    pub fn coordinates() -> impl Iterator<Item = Coordinate> {
        (0..SIZE).flat_map(|y| (0..SIZE).map(move |x| Coordinate::new(x, y)))
    }

    /// Get the cell at the given raw coordinates.
    pub fn cell_at(&self, x: i32, y: i32) -> Result<Cell, OutOfBounds> {
        Coordinate::try_new(x, y).map(|coord| self.grid[coord])
    }

    /// Get the cell at the given [`Coordinate`]. Returns `None` if the coordinate is out
    /// of bounds.
    pub fn get(&self, coord: Coordinate) -> Option<Cell> {
        self.grid.get(coord).copied()
    }

    /// Replace the contents of a playable cell, returning what was there before. The
    /// rosters of any side that lost or gained a soldier are updated in the same call.
    pub fn set_cell(&mut self, coord: Coordinate, cell: Cell) -> Result<Cell, SetCellError> {
        match self.grid.get(coord) {
            None => return Err(SetCellError::new(CannotSetReason::OutOfBounds, coord, cell)),
            Some(Cell::Forbidden) => {
                return Err(SetCellError::new(CannotSetReason::Unplayable, coord, cell))
            }
            Some(_) if cell == Cell::Forbidden => {
                return Err(SetCellError::new(CannotSetReason::ForbiddenValue, coord, cell))
            }
            Some(_) => {}
        }
        let previous = mem::replace(&mut self.grid[coord], cell);
        if let Some(side) = previous.occupant() {
            self.roster_mut(side).remove(&coord);
        }
        if let Some(side) = cell.occupant() {
            self.roster_mut(side).insert(coord);
        }
        Ok(previous)
    }

    /// Get the roster of soldiers of the given side.
    pub fn roster(&self, side: Side) -> &Roster {
        match side {
            Side::First => &self.first,
            Side::Second => &self.second,
        }
    }

    /// Number of soldiers the given side has left.
    pub fn count(&self, side: Side) -> usize {
        self.roster(side).count()
    }

    /// Get an iterator over the rows of the board, starting at `y = 0`. Each row is an
    /// iterator over its cells.
    pub fn iter_rows<'a>(&'a self) -> impl 'a + Iterator<Item = impl 'a + Iterator<Item = Cell>> {
        (0..SIZE).map(move |y| (0..SIZE).map(move |x| self.grid[Coordinate::new(x, y)]))
    }

    fn roster_mut(&mut self, side: Side) -> &mut Roster {
        match side {
            Side::First => &mut self.first,
            Side::Second => &mut self.second,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    /// Render the board with a column header, one row per line.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, " ")?;
        for x in 0..SIZE {
            write!(f, " {}", x)?;
        }
        for (y, row) in self.iter_rows().enumerate() {
            write!(f, "\n{}", y)?;
            for cell in row {
                write!(f, " {}", cell)?;
            }
        }
        Ok(())
    }
}
