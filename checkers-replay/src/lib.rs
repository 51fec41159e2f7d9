//! Replays games of checkers from a list of moves.
//!
//! The moves are played from the standard starting layout, with `First` moving first.
//! Every move is checked against the rules before it is played: soldiers only move
//! forward, either one square diagonally onto an empty square or two squares diagonally
//! over an opposing soldier, which is captured. A capture may be followed by further
//! captures by the same side in the same turn. There are no kings.
//!
//! A replay ends in one of three ways, see [`Outcome`]:
//!
//! - an illegal move stops it at that move;
//! - the list runs out while the side to move can still play, leaving it incomplete;
//! - the list runs out and the side to move is stuck, in which case the side with more
//!   soldiers left wins.
//!
//! ```
//! use checkers_replay::{movelist, Outcome, Replay};
//!
//! let moves = movelist::parse("1,2,0,3\n0,5,0,4\n").unwrap();
//! let outcome = Replay::new(moves).run().unwrap();
//! assert_eq!(outcome.to_string(), "line 2 illegal move: 0, 5, 0, 4");
//! assert!(matches!(outcome, Outcome::Illegal { line: 2, .. }));
//! ```

pub mod board;
pub mod engine;
pub mod movelist;
pub mod report;
pub mod rules;
pub mod scenario;

pub use crate::{
    board::{Board, Cell, Coordinate, Side},
    engine::{GameError, Replay},
    movelist::Move,
    report::{GameResult, Outcome},
    rules::Verdict,
    scenario::{Scenario, UnknownScenario},
};
