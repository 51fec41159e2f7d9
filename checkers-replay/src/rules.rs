//! Rules of checkers: validation of a single move and the scan for any available move.

use enumflags2::BitFlags;
use thiserror::Error;

use crate::{
    board::{Board, Cell, Coordinate, Side},
    engine::GameError,
    movelist::Move,
};

/// Which rule rejected an illegal move.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum Rejection {
    /// The destination lies outside the 8x8 board.
    #[error("the destination is outside the board")]
    OffBoard,
    /// The destination is one of the squares outside the checkers pattern.
    #[error("the destination is not a playable square")]
    Unplayable,
    /// A soldier of either side already stands on the destination.
    #[error("the destination is already occupied")]
    Occupied,
    /// Source and destination are the same square.
    #[error("the destination is the source")]
    Stationary,
    /// The move goes sideways or back toward the mover's home rows.
    #[error("the move does not go forward")]
    NotForward,
    /// The move covers more than two rows or columns.
    #[error("the move covers more than two squares")]
    TooFar,
    /// Rows and columns covered differ, or no column is crossed.
    #[error("the move is not diagonal")]
    NotDiagonal,
    /// The jumped-over square is off the board. Only possible when the source itself is.
    #[error("the jumped square is outside the board")]
    MidpointOffBoard,
}

/// Verdict on a proposed move.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Verdict {
    /// The move breaks a rule and may not be played.
    Illegal(Rejection),
    /// A one-square diagonal step into an empty cell.
    SimpleStep,
    /// A two-square diagonal jump over an opposing soldier, which is captured.
    Capture {
        /// The square jumped over.
        midpoint: Coordinate,
        /// Side that loses the soldier on `midpoint`.
        prey: Side,
    },
}

impl Verdict {
    /// True for [`Verdict::SimpleStep`] and [`Verdict::Capture`].
    pub fn is_legal(&self) -> bool {
        !matches!(self, Verdict::Illegal(_))
    }

    /// True for [`Verdict::Capture`].
    pub fn is_capture(&self) -> bool {
        matches!(self, Verdict::Capture { .. })
    }
}

/// Decide whether `mover` may play `mv` on `board`.
///
/// The checks run in a fixed order and the first failing one decides the
/// [`Rejection`]. A two-square jump whose midpoint is empty or holds one of the mover's
/// own soldiers is not an ordinary illegal move: the move list is malformed, and
/// [`GameError::InvalidCaptureGeometry`] is returned instead of a verdict.
pub fn validate(mv: &Move, mover: Side, board: &Board) -> Result<Verdict, GameError> {
    let reject = |reason: Rejection| -> Result<Verdict, GameError> { Ok(Verdict::Illegal(reason)) };

    match board.cell_at(mv.x_f, mv.y_f) {
        Err(_) => return reject(Rejection::OffBoard),
        Ok(Cell::Forbidden) => return reject(Rejection::Unplayable),
        Ok(Cell::Occupied(_)) => return reject(Rejection::Occupied),
        Ok(Cell::Empty) => {}
    }
    if mv.source() == mv.destination() {
        return reject(Rejection::Stationary);
    }
    let (dx, dy) = mv.displacement();
    if dy * i64::from(mover.forward()) <= 0 {
        return reject(Rejection::NotForward);
    }
    if dx.abs() > 2 || dy.abs() > 2 {
        return reject(Rejection::TooFar);
    }
    if dx.abs() != dy.abs() || dx == 0 {
        return reject(Rejection::NotDiagonal);
    }
    if dx.abs() == 1 {
        return Ok(Verdict::SimpleStep);
    }

    let midpoint = match mv.midpoint() {
        Some(midpoint) => midpoint,
        None => return reject(Rejection::MidpointOffBoard),
    };
    match board.get(midpoint) {
        Some(Cell::Occupied(prey)) if prey == mover.opponent() => {
            Ok(Verdict::Capture { midpoint, prey })
        }
        Some(found) => Err(GameError::InvalidCaptureGeometry {
            mv: *mv,
            mover,
            midpoint,
            found,
        }),
        None => reject(Rejection::MidpointOffBoard),
    }
}

/// The four forward destinations a soldier can try to reach.
#[derive(BitFlags, Debug, Copy, Clone, Eq, PartialEq)]
#[repr(u8)]
pub enum Reach {
    /// One square forward, toward decreasing `x`.
    StepLeft = 0b0001,
    /// One square forward, toward increasing `x`.
    StepRight = 0b0010,
    /// Two squares forward over a soldier, toward decreasing `x`.
    JumpLeft = 0b0100,
    /// Two squares forward over a soldier, toward increasing `x`.
    JumpRight = 0b1000,
}

impl Reach {
    /// All candidate destinations, steps before jumps.
    pub const ALL: [Reach; 4] = [
        Reach::StepLeft,
        Reach::StepRight,
        Reach::JumpLeft,
        Reach::JumpRight,
    ];

    /// Whether this candidate jumps over a square.
    pub fn is_jump(self) -> bool {
        matches!(self, Reach::JumpLeft | Reach::JumpRight)
    }

    /// `(dx, dy)` of this candidate for a soldier of `side`.
    fn delta(self, side: Side) -> (i32, i32) {
        let (dx, rows) = match self {
            Reach::StepLeft => (-1, 1),
            Reach::StepRight => (1, 1),
            Reach::JumpLeft => (-2, 2),
            Reach::JumpRight => (2, 2),
        };
        (dx, rows * side.forward())
    }

    /// The destination of this candidate for a soldier of `side` standing on `from`, if
    /// it is on the board.
    pub fn target(self, from: Coordinate, side: Side) -> Option<Coordinate> {
        let (dx, dy) = self.delta(side);
        from.offset(dx, dy)
    }
}

/// Candidate destinations that are open to the soldier of `side` on `from`.
///
/// A step is open when its destination is an empty square. A jump is open when its
/// destination is empty and the square jumped over does not hold one of the mover's own
/// soldiers. This is looser than [`validate`], which also requires the jumped square to
/// hold an opposing soldier; an open jump over an empty square always comes with an open
/// step onto that square, so the difference never changes [`has_any_legal_move`].
pub fn open_moves(from: Coordinate, side: Side, board: &Board) -> BitFlags<Reach> {
    let mut open = BitFlags::empty();
    for &reach in Reach::ALL.iter() {
        let target = match reach.target(from, side) {
            Some(target) => target,
            None => continue,
        };
        if board.get(target) != Some(Cell::Empty) {
            continue;
        }
        if reach.is_jump() {
            let (dx, dy) = reach.delta(side);
            let jumped = from.offset(dx / 2, dy / 2).and_then(|mid| board.get(mid));
            if jumped == Some(Cell::Occupied(side)) {
                continue;
            }
        }
        open |= reach;
    }
    open
}

/// Whether any soldier of `side` has somewhere to go.
pub fn has_any_legal_move(side: Side, board: &Board) -> bool {
    board
        .roster(side)
        .iter()
        .any(|&coord| !open_moves(coord, side, board).is_empty())
}
