//! Turn engine that replays a move list on a board.
//!
//! A [`Replay`] pulls moves one at a time, alternating between the two sides. A capture
//! keeps the turn going for as long as the following moves in the list are captures by
//! the same side. The replay ends when a move is illegal or when the list runs out.

use tracing::{debug, info, trace};

use crate::{
    board::{Board, Cell, Side},
    movelist::Move,
    report::{GameResult, Outcome},
    rules::{self, Verdict},
};

pub use self::errors::GameError;

mod errors;

/// Why a replay stopped.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum EndReason {
    /// Every move was played. `next` is the side whose turn it would have been.
    Exhausted { next: Side },
    /// The move on the given 1-based line was illegal and was not played.
    IllegalMove { line: usize, mv: Move },
}

/// State of a [`Replay`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum TurnState {
    /// `active` plays next, starting with the move at index `step`.
    AwaitingMove { active: Side, step: usize },
    /// No more moves will be played.
    Ended(EndReason),
}

/// One game, replayed from a list of moves. Owns the board for the length of the game.
#[derive(Debug, Clone)]
pub struct Replay {
    /// Board the moves are played on.
    board: Board,

    /// Full move list, in play order.
    moves: Vec<Move>,

    /// Where the replay currently is.
    state: TurnState,
}

impl Replay {
    /// Replay `moves` from the standard starting layout, `First` to move.
    pub fn new(moves: Vec<Move>) -> Self {
        Self::with_board(Board::default(), moves)
    }

    /// Replay `moves` from an arbitrary position, `First` to move.
    pub fn with_board(board: Board, moves: Vec<Move>) -> Self {
        let state = Self::next_state(Side::First, 0, moves.len());
        Self {
            board,
            moves,
            state,
        }
    }

    /// Get the board in its current state.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get the full move list.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Get the current state.
    pub fn state(&self) -> TurnState {
        self.state
    }

    /// Play one turn: the next move and any captures chained onto it. Does nothing once
    /// the replay has ended.
    pub fn play_turn(&mut self) -> Result<TurnState, GameError> {
        let (active, step) = match self.state {
            TurnState::AwaitingMove { active, step } => (active, step),
            TurnState::Ended(_) => return Ok(self.state),
        };
        let mv = self.moves[step];
        let verdict = rules::validate(&mv, active, &self.board)?;
        let mut next = step + 1;
        match verdict {
            Verdict::Illegal(reason) => {
                debug!("line {}: {} cannot play {}: {}", step + 1, active, mv, reason);
                self.state = TurnState::Ended(EndReason::IllegalMove { line: step + 1, mv });
                return Ok(self.state);
            }
            Verdict::SimpleStep => apply(&mut self.board, step + 1, &mv, active, verdict)?,
            Verdict::Capture { .. } => {
                apply(&mut self.board, step + 1, &mv, active, verdict)?;
                while let Some(&candidate) = self.moves.get(next) {
                    let chained = rules::validate(&candidate, active, &self.board)?;
                    if !chained.is_capture() {
                        break;
                    }
                    debug!("line {}: {} continues the capture", next + 1, active);
                    apply(&mut self.board, next + 1, &candidate, active, chained)?;
                    next += 1;
                }
            }
        }
        trace!("board after turn of {}:\n{}", active, self.board);
        self.state = Self::next_state(active.opponent(), next, self.moves.len());
        Ok(self.state)
    }

    /// Play turns until the replay ends and report the outcome.
    pub fn run(&mut self) -> Result<Outcome, GameError> {
        loop {
            if let TurnState::Ended(reason) = self.play_turn()? {
                let outcome = self.conclude(reason);
                info!("replay of {} moves ended: {}", self.moves.len(), outcome);
                return Ok(outcome);
            }
        }
    }

    /// The outcome of the replay, or `None` while moves remain to be played.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.state {
            TurnState::AwaitingMove { .. } => None,
            TurnState::Ended(reason) => Some(self.conclude(reason)),
        }
    }

    fn conclude(&self, reason: EndReason) -> Outcome {
        match reason {
            EndReason::IllegalMove { line, mv } => Outcome::Illegal { line, mv },
            EndReason::Exhausted { next } if rules::has_any_legal_move(next, &self.board) => {
                Outcome::Incomplete
            }
            EndReason::Exhausted { .. } => Outcome::Finished(GameResult::tally(&self.board)),
        }
    }

    fn next_state(active: Side, step: usize, len: usize) -> TurnState {
        if step < len {
            TurnState::AwaitingMove { active, step }
        } else {
            TurnState::Ended(EndReason::Exhausted { next: active })
        }
    }
}

/// Play a move that `validate` accepted. `line` is only used for error reporting.
///
/// The soldier leaves its source square and lands on the destination; a capture also
/// clears the jumped square. All writes go through [`Board::set_cell`], which keeps the
/// rosters of both sides in step with the grid. Every square is checked before the
/// first write, so an error leaves the board untouched.
pub fn apply(
    board: &mut Board,
    line: usize,
    mv: &Move,
    mover: Side,
    verdict: Verdict,
) -> Result<(), GameError> {
    let missing = GameError::NoSoldierAtSource {
        line,
        mv: *mv,
        side: mover,
    };
    let (source, destination) = mv.squares().ok_or(missing)?;
    if board.get(source) != Some(Cell::Occupied(mover)) {
        return Err(missing);
    }
    match board.get(destination) {
        Some(Cell::Empty) => {}
        found => {
            return Err(GameError::BlockedDestination {
                line,
                mv: *mv,
                found: found.unwrap_or(Cell::Forbidden),
            })
        }
    }
    if let Verdict::Capture { midpoint, prey } = verdict {
        let found = board.get(midpoint).unwrap_or(Cell::Forbidden);
        if found != Cell::Occupied(prey) || prey == mover {
            return Err(GameError::InvalidCaptureGeometry {
                mv: *mv,
                mover,
                midpoint,
                found,
            });
        }
    }
    board.set_cell(source, Cell::Empty)?;
    board.set_cell(destination, Cell::Occupied(mover))?;
    match verdict {
        Verdict::Capture { midpoint, prey } => {
            board.set_cell(midpoint, Cell::Empty)?;
            debug!(
                "line {}: {} plays {} capturing {} of {} ({} left)",
                line,
                mover,
                mv,
                midpoint,
                prey,
                board.count(prey)
            );
        }
        _ => debug!("line {}: {} plays {}", line, mover, mv),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{board::Coordinate, movelist};

    fn board_with(soldiers: &[(usize, usize, Side)]) -> Board {
        let mut board = Board::empty();
        for &(x, y, side) in soldiers {
            board
                .set_cell(Coordinate::new(x, y), Cell::Occupied(side))
                .unwrap();
        }
        board
    }

    fn moves(list: &[(i32, i32, i32, i32)]) -> Vec<Move> {
        list.iter().map(|&mv| mv.into()).collect()
    }

    #[test]
    fn alternates_sides() {
        let mut replay = Replay::new(moves(&[(1, 2, 0, 3), (0, 5, 1, 4)]));
        assert_eq!(
            replay.play_turn().unwrap(),
            TurnState::AwaitingMove {
                active: Side::Second,
                step: 1
            }
        );
        assert_eq!(
            replay.play_turn().unwrap(),
            TurnState::Ended(EndReason::Exhausted { next: Side::First })
        );
        assert_eq!(replay.board().cell_at(0, 3), Ok(Cell::Occupied(Side::First)));
        assert_eq!(replay.board().cell_at(1, 4), Ok(Cell::Occupied(Side::Second)));
        assert_eq!(replay.board().cell_at(1, 2), Ok(Cell::Empty));
        assert_eq!(replay.outcome(), Some(Outcome::Incomplete));
    }

    #[test]
    fn empty_move_list_is_incomplete() {
        let mut replay = Replay::new(Vec::new());
        assert_eq!(
            replay.state(),
            TurnState::Ended(EndReason::Exhausted { next: Side::First })
        );
        assert_eq!(replay.run().unwrap(), Outcome::Incomplete);
    }

    #[test]
    fn illegal_move_stops_the_replay() {
        let mut replay = Replay::new(moves(&[(1, 2, 0, 3), (0, 5, 0, 4), (5, 2, 4, 3)]));
        assert_eq!(
            replay.run().unwrap(),
            Outcome::Illegal {
                line: 2,
                mv: Move::new(0, 5, 0, 4)
            }
        );
        // The third move was never looked at.
        assert_eq!(replay.board().cell_at(5, 2), Ok(Cell::Occupied(Side::First)));
        assert_eq!(replay.board().count(Side::First), 12);
        assert_eq!(replay.board().count(Side::Second), 12);
    }

    #[test]
    fn capture_removes_prey() {
        let board = board_with(&[
            (1, 2, Side::First),
            (2, 3, Side::Second),
            (7, 6, Side::Second),
        ]);
        let mut replay = Replay::with_board(board, moves(&[(1, 2, 3, 4), (7, 6, 6, 5)]));
        assert_eq!(
            replay.play_turn().unwrap(),
            TurnState::AwaitingMove {
                active: Side::Second,
                step: 1
            }
        );
        assert_eq!(replay.board().cell_at(2, 3), Ok(Cell::Empty));
        assert_eq!(replay.board().cell_at(3, 4), Ok(Cell::Occupied(Side::First)));
        assert_eq!(replay.board().count(Side::First), 1);
        assert_eq!(replay.board().count(Side::Second), 1);
    }

    #[test]
    fn captures_chain_within_a_turn() {
        let board = board_with(&[
            (1, 2, Side::First),
            (2, 3, Side::Second),
            (4, 5, Side::Second),
            (7, 6, Side::Second),
        ]);
        let mut replay = Replay::with_board(
            board,
            moves(&[(1, 2, 3, 4), (3, 4, 5, 6), (7, 6, 6, 5)]),
        );
        assert_eq!(
            replay.play_turn().unwrap(),
            TurnState::AwaitingMove {
                active: Side::Second,
                step: 2
            }
        );
        assert_eq!(replay.board().count(Side::Second), 1);
        assert_eq!(replay.board().cell_at(5, 6), Ok(Cell::Occupied(Side::First)));

        // First can still step onto the last row, so the game is not over.
        assert_eq!(replay.run().unwrap(), Outcome::Incomplete);
    }

    #[test]
    fn step_does_not_chain_after_capture() {
        let board = board_with(&[
            (1, 2, Side::First),
            (2, 3, Side::Second),
            (7, 6, Side::Second),
        ]);
        // The second move is a legal step for First, but only captures chain, so it is
        // left for Second, for whom it goes backward.
        let mut replay = Replay::with_board(board, moves(&[(1, 2, 3, 4), (3, 4, 2, 5)]));
        assert_eq!(
            replay.play_turn().unwrap(),
            TurnState::AwaitingMove {
                active: Side::Second,
                step: 1
            }
        );
        assert_eq!(
            replay.run().unwrap(),
            Outcome::Illegal {
                line: 2,
                mv: Move::new(3, 4, 2, 5)
            }
        );
        assert_eq!(replay.board().cell_at(3, 4), Ok(Cell::Occupied(Side::First)));
    }

    #[test]
    fn step_never_starts_a_chain() {
        let board = board_with(&[
            (1, 2, Side::First),
            (5, 2, Side::First),
            (6, 3, Side::Second),
            (7, 6, Side::Second),
        ]);
        // A capture by First right after its own step must not be taken as part of the
        // same turn: it belongs to Second's turn and goes the wrong way for Second.
        let mut replay = Replay::with_board(board, moves(&[(1, 2, 0, 3), (5, 2, 7, 4)]));
        assert_eq!(
            replay.run().unwrap(),
            Outcome::Illegal {
                line: 2,
                mv: Move::new(5, 2, 7, 4)
            }
        );
        assert_eq!(replay.board().count(Side::Second), 2);
    }

    #[test]
    fn finished_when_side_to_move_is_stuck() {
        let board = board_with(&[
            (1, 2, Side::First),
            (2, 3, Side::Second),
            (6, 1, Side::Second),
            (3, 6, Side::First),
        ]);
        // First captures, Second steps onto the far row, First steps onto the far row.
        // Second's last soldier stands on its far row and cannot move.
        let mut replay = Replay::with_board(
            board,
            moves(&[(1, 2, 3, 4), (6, 1, 5, 0), (3, 6, 4, 7)]),
        );
        assert_eq!(replay.run().unwrap(), Outcome::Finished(GameResult::First));
        assert_eq!(replay.board().count(Side::First), 2);
        assert_eq!(replay.board().count(Side::Second), 1);
    }

    #[test]
    fn jump_over_friend_aborts() {
        let mut replay = Replay::new(moves(&[(0, 1, 2, 3)]));
        match replay.run() {
            Err(GameError::InvalidCaptureGeometry { mover, .. }) => {
                assert_eq!(mover, Side::First)
            }
            other => panic!("expected invalid capture geometry, got {:?}", other),
        }
    }

    #[test]
    fn move_from_empty_square_aborts() {
        let mut replay = Replay::new(moves(&[(2, 3, 3, 4)]));
        assert_eq!(
            replay.run(),
            Err(GameError::NoSoldierAtSource {
                line: 1,
                mv: Move::new(2, 3, 3, 4),
                side: Side::First,
            })
        );
        assert_eq!(replay.board().count(Side::First), 12);
    }

    #[test]
    fn move_from_off_board_aborts() {
        let mut replay = Replay::new(moves(&[(-1, 2, 0, 3)]));
        assert!(matches!(
            replay.run(),
            Err(GameError::NoSoldierAtSource { line: 1, .. })
        ));
    }

    #[test]
    fn extreme_components_end_the_game_as_illegal() {
        for text in &["-2147483648,2,0,3\n", "1,-2147483648,0,3\n", "2147483647,2,6,3\n"] {
            let moves = movelist::parse(text).unwrap();
            let mv = moves[0];
            let mut replay = Replay::new(moves);
            assert_eq!(replay.run(), Ok(Outcome::Illegal { line: 1, mv }));
            assert_eq!(replay.board().count(Side::First), 12);
        }
    }

    #[test]
    fn apply_to_blocked_destination_leaves_board_untouched() {
        let mut board = Board::new();
        let verdict = Verdict::SimpleStep;
        assert_eq!(
            apply(&mut board, 4, &Move::new(1, 2, 2, 1), Side::First, verdict),
            Err(GameError::BlockedDestination {
                line: 4,
                mv: Move::new(1, 2, 2, 1),
                found: Cell::Occupied(Side::First),
            })
        );
        assert!(matches!(
            apply(&mut board, 5, &Move::new(1, 2, 1, 3), Side::First, verdict),
            Err(GameError::BlockedDestination {
                found: Cell::Forbidden,
                ..
            })
        ));
        assert_eq!(board.cell_at(1, 2), Ok(Cell::Occupied(Side::First)));
        assert_eq!(board.count(Side::First), 12);
    }

    #[test]
    fn apply_capture_without_prey_leaves_board_untouched() {
        let mut board = board_with(&[(1, 2, Side::First)]);
        let verdict = Verdict::Capture {
            midpoint: Coordinate::new(2, 3),
            prey: Side::Second,
        };
        assert!(matches!(
            apply(&mut board, 1, &Move::new(1, 2, 3, 4), Side::First, verdict),
            Err(GameError::InvalidCaptureGeometry {
                found: Cell::Empty,
                ..
            })
        ));
        assert_eq!(board.cell_at(1, 2), Ok(Cell::Occupied(Side::First)));
        assert_eq!(board.cell_at(3, 4), Ok(Cell::Empty));
    }

    #[test]
    fn ended_replay_stays_ended() {
        let mut replay = Replay::new(moves(&[(1, 2, 1, 3)]));
        let ended = replay.play_turn().unwrap();
        assert_eq!(replay.play_turn().unwrap(), ended);
        assert_eq!(
            replay.outcome(),
            Some(Outcome::Illegal {
                line: 1,
                mv: Move::new(1, 2, 1, 3)
            })
        );
    }
}
