//! Direction table and per-piece move resolution.
//!
//! Resolution is split in two: [`plan_move`] inspects the board and either
//! rejects the move or returns a [`MovePlan`] listing every capture and the
//! destination; [`execute`] then applies a plan. A rejected move therefore
//! never touches the board.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use crate::domain::board::{Board, PieceRef, Player, Square};
use crate::errors::domain::{DomainError, IllegalMoveKind};

/// The eight move codes, relative to the moving player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    L,
    R,
    F,
    B,
    FL,
    FR,
    BL,
    BR,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::L,
        Direction::R,
        Direction::F,
        Direction::B,
        Direction::FL,
        Direction::FR,
        Direction::BL,
        Direction::BR,
    ];

    /// `(Δrow, Δcol)` for one step. Forward/backward flip with the player.
    pub fn offset(self, player: Player) -> (i8, i8) {
        let fwd = player.forward();
        match self {
            Direction::L => (0, -1),
            Direction::R => (0, 1),
            Direction::F => (fwd, 0),
            Direction::B => (-fwd, 0),
            Direction::FL => (fwd, -1),
            Direction::FR => (fwd, 1),
            Direction::BL => (-fwd, -1),
            Direction::BR => (-fwd, 1),
        }
    }

    #[inline]
    pub fn is_diagonal(self) -> bool {
        matches!(
            self,
            Direction::FL | Direction::FR | Direction::BL | Direction::BR
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::L => "L",
            Direction::R => "R",
            Direction::F => "F",
            Direction::B => "B",
            Direction::FL => "FL",
            Direction::FR => "FR",
            Direction::BL => "BL",
            Direction::BR => "BR",
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Direction::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or(DomainError::illegal(IllegalMoveKind::UnknownDirection))
    }
}

/// Closed set of movable piece kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceKind {
    /// `P…`: one step in any direction.
    ShortRange,
    /// `H…1`: two steps along a straight line.
    LongRangeStraight,
    /// Any other `H…`: two steps along a diagonal.
    LongRangeDiagonal,
}

impl PieceKind {
    /// Classifies a roster name. Names that start with neither `P` nor `H`
    /// can be placed but never move.
    pub fn from_name(name: &str) -> Option<PieceKind> {
        match name.chars().next()? {
            'P' => Some(PieceKind::ShortRange),
            'H' if name.ends_with('1') => Some(PieceKind::LongRangeStraight),
            'H' => Some(PieceKind::LongRangeDiagonal),
            _ => None,
        }
    }

    /// Number of cells travelled.
    #[inline]
    pub fn reach(self) -> usize {
        match self {
            PieceKind::ShortRange => 1,
            PieceKind::LongRangeStraight | PieceKind::LongRangeDiagonal => 2,
        }
    }

    /// A direction is diagonal exactly when both offset components are
    /// non-zero; `H…1` takes the others, other `H…` names take only those.
    pub fn allows(self, direction: Direction) -> bool {
        match self {
            PieceKind::ShortRange => true,
            PieceKind::LongRangeStraight => !direction.is_diagonal(),
            PieceKind::LongRangeDiagonal => direction.is_diagonal(),
        }
    }
}

/// A validated move, ready to apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovePlan {
    pub from: Square,
    pub to: Square,
    /// Enemy-occupied path cells, in step order.
    pub captures: Vec<Square>,
}

/// Validates a move of the `mover`'s piece standing on `from`.
pub fn plan_move(
    board: &Board,
    mover: Player,
    from: Square,
    kind: PieceKind,
    direction: Direction,
) -> Result<MovePlan, DomainError> {
    if !kind.allows(direction) {
        return Err(DomainError::illegal(IllegalMoveKind::DirectionNotAllowed));
    }

    let (d_row, d_col) = direction.offset(mover);
    let mut path = Vec::with_capacity(kind.reach());
    let mut cursor = from;
    for _ in 0..kind.reach() {
        cursor = cursor
            .offset(d_row, d_col)
            .ok_or(DomainError::illegal(IllegalMoveKind::OffBoard))?;
        path.push(cursor);
    }
    let to = cursor;

    if board.get(to).is_some_and(|occupant| occupant.owner == mover) {
        return Err(DomainError::illegal(IllegalMoveKind::FriendlyDestination));
    }

    let mut captures = Vec::new();
    for square in path {
        let Some(occupant) = board.get(square) else {
            continue;
        };
        if occupant.owner == mover {
            continue;
        }
        let tracked = board
            .roster(occupant.owner)
            .entry_at(square)
            .is_some_and(|p| p.name == occupant.name);
        if !tracked {
            return Err(DomainError::invariant(format!(
                "capture target {occupant} on {square} has no roster entry"
            )));
        }
        captures.push(square);
    }

    Ok(MovePlan { from, to, captures })
}

/// Applies a plan produced by [`plan_move`] against the same board.
pub fn execute(board: &mut Board, plan: &MovePlan) -> Result<Vec<PieceRef>, DomainError> {
    let mut captured = Vec::with_capacity(plan.captures.len());
    for &square in &plan.captures {
        if let Some(piece) = board.capture(square)? {
            captured.push(piece);
        }
    }
    board.relocate(plan.from, plan.to)?;
    Ok(captured)
}
