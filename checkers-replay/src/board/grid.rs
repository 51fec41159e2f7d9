//! Storage for the cells of the board.

use std::ops::{Index, IndexMut};

use crate::board::{Cell, Coordinate, SIZE};

/// Row-major storage of the 64 cells.
#[derive(Debug, Clone)]
pub(super) struct Grid {
    cells: Box<[Cell]>,
}

impl Grid {
    /// Build a grid, computing the initial value of every cell from its coordinate.
    pub(super) fn new(mut init: impl FnMut(Coordinate) -> Cell) -> Self {
        let cells = (0..SIZE * SIZE)
            .map(|i| init(Coordinate::new(i % SIZE, i / SIZE)))
            .collect();
        Self { cells }
    }

    /// Convert a coordinate to a linear index. Returns `None` if it is out of bounds.
    fn try_linearize(coord: Coordinate) -> Option<usize> {
        if coord.x < SIZE && coord.y < SIZE {
            Some(coord.y * SIZE + coord.x)
        } else {
            None
        }
    }

    /// Get a reference to the cell at the given [`Coordinate`].
    pub(super) fn get(&self, coord: Coordinate) -> Option<&Cell> {
        Self::try_linearize(coord).and_then(|i| self.cells.get(i))
    }

    /// Get a mutable reference to the cell at the given [`Coordinate`].
    pub(super) fn get_mut(&mut self, coord: Coordinate) -> Option<&mut Cell> {
        Self::try_linearize(coord).and_then(move |i| self.cells.get_mut(i))
    }
}

impl Index<Coordinate> for Grid {
    type Output = Cell;

    fn index(&self, coord: Coordinate) -> &Self::Output {
        self.get(coord).expect("coordinate out of bounds")
    }
}

impl IndexMut<Coordinate> for Grid {
    fn index_mut(&mut self, coord: Coordinate) -> &mut Self::Output {
        self.get_mut(coord).expect("coordinate out of bounds")
    }
}
