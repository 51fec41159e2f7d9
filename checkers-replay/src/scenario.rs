//! The four demo scenarios and the move lists that go with them.

use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::movelist::{self, Move, ParseMoveError};

/// A named move list.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Scenario {
    /// A complete game won by `First`.
    FirstSideDemo,
    /// A complete game won by `Second`.
    SecondSideDemo,
    /// A game cut short by an illegal move.
    IllegalMoveDemo,
    /// A game whose move list runs out before the end.
    IncompleteGameDemo,
}

impl Scenario {
    /// Every scenario.
    pub const ALL: [Scenario; 4] = [
        Scenario::FirstSideDemo,
        Scenario::SecondSideDemo,
        Scenario::IllegalMoveDemo,
        Scenario::IncompleteGameDemo,
    ];

    /// Name used to select this scenario.
    pub fn name(self) -> &'static str {
        match self {
            Scenario::FirstSideDemo => "first-side-demo",
            Scenario::SecondSideDemo => "second-side-demo",
            Scenario::IllegalMoveDemo => "illegal-move-demo",
            Scenario::IncompleteGameDemo => "incomplete-game-demo",
        }
    }

    /// Name of the file holding this scenario's move list.
    pub fn file_name(self) -> &'static str {
        match self {
            Scenario::FirstSideDemo => "white.txt",
            Scenario::SecondSideDemo => "black.txt",
            Scenario::IllegalMoveDemo => "illegal_move.txt",
            Scenario::IncompleteGameDemo => "incomplete.txt",
        }
    }

    /// Text of the copy of this scenario's move list built into the crate.
    pub fn bundled_moves(self) -> &'static str {
        match self {
            Scenario::FirstSideDemo => include_str!("../scenarios/white.txt"),
            Scenario::SecondSideDemo => include_str!("../scenarios/black.txt"),
            Scenario::IllegalMoveDemo => include_str!("../scenarios/illegal_move.txt"),
            Scenario::IncompleteGameDemo => include_str!("../scenarios/incomplete.txt"),
        }
    }

    /// Parse the bundled move list.
    pub fn load_bundled(self) -> Result<Vec<Move>, ParseMoveError> {
        movelist::parse(self.bundled_moves())
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Error returned when a scenario name is not recognized.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
#[error(
    "unknown scenario {0:?}, choose \"first-side-demo\", \"second-side-demo\", \
     \"illegal-move-demo\", or \"incomplete-game-demo\""
)]
pub struct UnknownScenario(String);

impl UnknownScenario {
    /// The name that was not recognized.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl FromStr for Scenario {
    type Err = UnknownScenario;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Scenario::ALL
            .iter()
            .copied()
            .find(|scenario| scenario.name() == s)
            .ok_or_else(|| UnknownScenario(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for &scenario in Scenario::ALL.iter() {
            assert_eq!(scenario.name().parse::<Scenario>(), Ok(scenario));
        }
    }

    #[test]
    fn unknown_names() {
        let err = "white".parse::<Scenario>().unwrap_err();
        assert_eq!(err.name(), "white");
        assert!("First-Side-Demo".parse::<Scenario>().is_err());
        assert!("".parse::<Scenario>().is_err());
    }

    #[test]
    fn bundled_lists_parse() {
        for &scenario in Scenario::ALL.iter() {
            let moves = scenario.load_bundled().unwrap();
            assert!(!moves.is_empty(), "{} has no moves", scenario);
        }
    }

    #[test]
    fn file_names_are_distinct() {
        let mut names: Vec<_> = Scenario::ALL.iter().map(|s| s.file_name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 4);
    }
}
