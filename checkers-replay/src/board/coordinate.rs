use std::{convert::TryFrom, fmt};

use crate::board::OutOfBounds;

/// Width and height of the board.
pub const SIZE: usize = 8;

/// The coordinates of a cell on the board. Does not by itself guarantee that the cell is
/// in bounds; use [`Coordinate::try_new`] to convert raw move components.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Coordinate {
    /// Horizontal position of the cell.
    pub x: usize,
    /// Vertical position of the cell. `First` starts at the low rows.
    pub y: usize,
}

impl Coordinate {
    /// Construct a [`Coordinate`] from the given `x` and `y`.
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Construct a [`Coordinate`] from signed components, failing if either lies outside
    /// the board.
    pub fn try_new(x: i32, y: i32) -> Result<Self, OutOfBounds> {
        match (usize::try_from(x), usize::try_from(y)) {
            (Ok(cx), Ok(cy)) if cx < SIZE && cy < SIZE => Ok(Self::new(cx, cy)),
            _ => Err(OutOfBounds::new(x, y)),
        }
    }

    /// Whether this is one of the dark squares soldiers are allowed to stand on.
    pub fn is_playable(&self) -> bool {
        (self.x + self.y) % 2 == 1
    }

    /// The coordinate displaced by `(dx, dy)`, if it is still on the board.
    pub fn offset(self, dx: i32, dy: i32) -> Option<Self> {
        Self::try_new(self.x as i32 + dx, self.y as i32 + dy).ok()
    }
}

impl From<(usize, usize)> for Coordinate {
    /// Construct a [`Coordinate`] from the given `(x, y)` pair.
    fn from((x, y): (usize, usize)) -> Self {
        Self::new(x, y)
    }
}

impl From<Coordinate> for (usize, usize) {
    /// Convert the [`Coordinate`] into an `(x, y)` pair.
    fn from(coord: Coordinate) -> Self {
        (coord.x, coord.y)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_new_bounds() {
        assert_eq!(Coordinate::try_new(0, 7), Ok(Coordinate::new(0, 7)));
        assert_eq!(Coordinate::try_new(-1, 3), Err(OutOfBounds::new(-1, 3)));
        assert_eq!(Coordinate::try_new(3, 8), Err(OutOfBounds::new(3, 8)));
    }

    #[test]
    fn playable_pattern() {
        assert!(Coordinate::new(1, 0).is_playable());
        assert!(Coordinate::new(0, 1).is_playable());
        assert!(!Coordinate::new(0, 0).is_playable());
        assert!(!Coordinate::new(7, 7).is_playable());
    }

    #[test]
    fn offset_stays_on_board() {
        let coord = Coordinate::new(1, 6);
        assert_eq!(coord.offset(1, 1), Some(Coordinate::new(2, 7)));
        assert_eq!(coord.offset(-2, 2), None);
        assert_eq!(coord.offset(-1, -1), Some(Coordinate::new(0, 5)));
    }
}
