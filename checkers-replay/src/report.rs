//! Final results of a replay.

use std::{cmp::Ordering, fmt};

use crate::{
    board::{Board, Side},
    movelist::Move,
};

/// Result of a game that ran to its natural end.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum GameResult {
    /// `First` has more soldiers left.
    First,
    /// `Second` has more soldiers left.
    Second,
    /// Both sides have the same number of soldiers left.
    Tie,
}

impl GameResult {
    /// Decide the result from the number of soldiers each side has left.
    pub fn from_counts(first: usize, second: usize) -> Self {
        match first.cmp(&second) {
            Ordering::Greater => GameResult::First,
            Ordering::Less => GameResult::Second,
            Ordering::Equal => GameResult::Tie,
        }
    }

    /// Decide the result from the soldiers left on `board`.
    pub fn tally(board: &Board) -> Self {
        Self::from_counts(board.count(Side::First), board.count(Side::Second))
    }

    /// The winning side, if the game was not tied.
    pub fn winner(self) -> Option<Side> {
        match self {
            GameResult::First => Some(Side::First),
            GameResult::Second => Some(Side::Second),
            GameResult::Tie => None,
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.winner() {
            Some(side) => fmt::Display::fmt(&side, f),
            None => f.pad("tie"),
        }
    }
}

/// How a replay ended.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Outcome {
    /// The side to move had nothing left to play.
    Finished(GameResult),
    /// The move on the given 1-based line of the move list was illegal.
    Illegal { line: usize, mv: Move },
    /// The move list ran out while the side to move could still play.
    Incomplete,
}

impl fmt::Display for Outcome {
    /// Single-line report of the outcome.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Outcome::Finished(result) => fmt::Display::fmt(result, f),
            Outcome::Illegal { line, mv } => write!(f, "line {} illegal move: {}", line, mv),
            Outcome::Incomplete => f.pad("incomplete game"),
        }
    }
}
