use std::collections::{hash_set, HashSet};

use crate::board::{Coordinate, Side};

/// The soldiers one side still has on the board, as a set of coordinates.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Roster {
    /// Side these soldiers belong to.
    side: Side,

    /// Coordinates of the remaining soldiers.
    soldiers: HashSet<Coordinate>,
}

impl Roster {
    pub(super) fn new(side: Side) -> Self {
        Self {
            side,
            soldiers: HashSet::new(),
        }
    }

    /// The side this roster belongs to.
    pub fn side(&self) -> Side {
        self.side
    }

    /// Number of remaining soldiers.
    pub fn count(&self) -> usize {
        self.soldiers.len()
    }

    /// Whether a soldier of this side stands on `coord`.
    pub fn contains(&self, coord: &Coordinate) -> bool {
        self.soldiers.contains(coord)
    }

    /// Iterate the coordinates of the remaining soldiers, in no particular order.
    pub fn iter(&self) -> hash_set::Iter<Coordinate> {
        self.soldiers.iter()
    }

    pub(super) fn insert(&mut self, coord: Coordinate) -> bool {
        self.soldiers.insert(coord)
    }

    pub(super) fn remove(&mut self, coord: &Coordinate) -> bool {
        self.soldiers.remove(coord)
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Coordinate;
    type IntoIter = hash_set::Iter<'a, Coordinate>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
