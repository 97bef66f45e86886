use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

use crate::errors::domain::DomainError;

/// Width and height of the grid.
pub const BOARD_SIZE: usize = 5;

/// One of the two match participants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    A,
    B,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::A, Player::B];

    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }

    /// Row the player's roster is placed on during setup.
    #[inline]
    pub fn home_row(self) -> usize {
        match self {
            Player::A => 0,
            Player::B => BOARD_SIZE - 1,
        }
    }

    /// Sign of "forward" along the row axis (A advances toward higher rows).
    #[inline]
    pub fn forward(self) -> i8 {
        match self {
            Player::A => 1,
            Player::B => -1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Player::A => "A",
            Player::B => "B",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Player> {
        match tag {
            "A" => Some(Player::A),
            "B" => Some(Player::B),
            _ => None,
        }
    }

    #[inline]
    fn index(self) -> usize {
        match self {
            Player::A => 0,
            Player::B => 1,
        }
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// A cell coordinate that is always on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    row: usize,
    col: usize,
}

impl Square {
    /// Returns `None` unless both coordinates are in `[0, BOARD_SIZE)`.
    pub fn new(row: usize, col: usize) -> Option<Square> {
        (row < BOARD_SIZE && col < BOARD_SIZE).then_some(Square { row, col })
    }

    #[inline]
    pub fn row(self) -> usize {
        self.row
    }

    #[inline]
    pub fn col(self) -> usize {
        self.col
    }

    /// The square `(d_row, d_col)` away, or `None` when that leaves the board.
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Square> {
        let row = self.row as i16 + d_row as i16;
        let col = self.col as i16 + d_col as i16;
        if row < 0 || col < 0 {
            return None;
        }
        Square::new(row as usize, col as usize)
    }
}

impl Display for Square {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// Contents of an occupied cell: which side owns it and the piece's name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PieceRef {
    pub owner: Player,
    pub name: String,
}

impl PieceRef {
    pub fn new(owner: Player, name: impl Into<String>) -> Self {
        Self {
            owner,
            name: name.into(),
        }
    }

    /// Splits a wire label such as `"A-P1"` into owner and name.
    ///
    /// Labels without a recognised owner prefix yield `None` for the owner and
    /// the whole label as the name.
    pub fn split_label(label: &str) -> (Option<Player>, &str) {
        match label.split_once('-') {
            Some((tag, name)) => match Player::from_tag(tag) {
                Some(owner) => (Some(owner), name),
                None => (None, label),
            },
            None => (None, label),
        }
    }
}

/// Wire form `"<owner>-<name>"`.
impl Display for PieceRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}-{}", self.owner, self.name)
    }
}

/// A roster entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    pub name: String,
    pub square: Square,
}

/// Per-player ordered roster; order is setup order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    pieces: Vec<Piece>,
}

impl Roster {
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn find(&self, name: &str) -> Option<&Piece> {
        self.pieces.iter().find(|p| p.name == name)
    }

    pub fn entry_at(&self, square: Square) -> Option<&Piece> {
        self.pieces.iter().find(|p| p.square == square)
    }

    fn position_at(&self, square: Square) -> Option<usize> {
        self.pieces.iter().position(|p| p.square == square)
    }
}

/// The 5×5 grid plus both rosters. Every mutation keeps the two in agreement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    cells: [[Option<PieceRef>; BOARD_SIZE]; BOARD_SIZE],
    rosters: [Roster; 2],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Puts a piece on the grid without a roster entry, producing the drifted
    /// state that every mutation refuses to create.
    #[cfg(test)]
    pub(crate) fn with_untracked(mut self, owner: Player, name: &str, square: Square) -> Self {
        self.cells[square.row][square.col] = Some(PieceRef::new(owner, name));
        self
    }

    pub fn get(&self, square: Square) -> Option<&PieceRef> {
        self.cells[square.row][square.col].as_ref()
    }

    /// Bounds-checked lookup by raw coordinates.
    pub fn cell(&self, row: usize, col: usize) -> Option<&PieceRef> {
        Square::new(row, col).and_then(|sq| self.get(sq))
    }

    pub fn roster(&self, player: Player) -> &Roster {
        &self.rosters[player.index()]
    }

    pub fn rows(&self) -> &[[Option<PieceRef>; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// Linear scan for the cell holding `piece`.
    pub fn find(&self, piece: &PieceRef) -> Option<Square> {
        Self::squares().find(|&sq| self.get(sq).is_some_and(|occupant| occupant == piece))
    }

    /// All squares in row-major order.
    pub fn squares() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Square { row, col }))
    }

    /// Places a new piece for `owner`, appending it to the roster.
    pub fn place(&mut self, owner: Player, name: &str, square: Square) -> Result<(), DomainError> {
        if let Some(occupant) = self.get(square) {
            return Err(DomainError::invariant(format!(
                "cannot place {owner}-{name} on {square}, occupied by {occupant}"
            )));
        }
        self.cells[square.row][square.col] = Some(PieceRef::new(owner, name));
        self.rosters[owner.index()].pieces.push(Piece {
            name: name.to_string(),
            square,
        });
        Ok(())
    }

    /// Removes the piece at `square` from the grid and its owner's roster.
    ///
    /// An empty cell is a no-op. A cell whose occupant has no matching roster
    /// entry is a fault: the cell is left as is and an error returned.
    pub fn capture(&mut self, square: Square) -> Result<Option<PieceRef>, DomainError> {
        let Some(occupant) = self.get(square).cloned() else {
            return Ok(None);
        };
        let roster = &mut self.rosters[occupant.owner.index()];
        let Some(idx) = roster.position_at(square) else {
            return Err(DomainError::invariant(format!(
                "{occupant} on {square} has no roster entry"
            )));
        };
        roster.pieces.remove(idx);
        self.cells[square.row][square.col] = None;
        Ok(Some(occupant))
    }

    /// Moves the occupant of `from` onto the empty cell `to`.
    pub fn relocate(&mut self, from: Square, to: Square) -> Result<(), DomainError> {
        if self.get(to).is_some() {
            return Err(DomainError::invariant(format!(
                "relocation target {to} is occupied"
            )));
        }
        let Some(occupant) = self.cells[from.row][from.col].take() else {
            return Err(DomainError::invariant(format!("no piece on {from} to relocate")));
        };
        let roster = &mut self.rosters[occupant.owner.index()];
        let Some(idx) = roster.position_at(from) else {
            self.cells[from.row][from.col] = Some(occupant.clone());
            return Err(DomainError::invariant(format!(
                "{occupant} on {from} has no roster entry"
            )));
        };
        roster.pieces[idx].square = to;
        self.cells[to.row][to.col] = Some(occupant);
        Ok(())
    }

    /// Checks that grid and rosters describe the same set of pieces.
    pub fn check_consistency(&self) -> Result<(), DomainError> {
        for player in Player::ALL {
            for piece in self.roster(player).pieces() {
                let expected = PieceRef::new(player, piece.name.clone());
                if self.get(piece.square) != Some(&expected) {
                    return Err(DomainError::invariant(format!(
                        "roster entry {expected} at {} does not match the grid",
                        piece.square
                    )));
                }
            }
        }
        for square in Self::squares() {
            if let Some(occupant) = self.get(square) {
                let matches = self
                    .roster(occupant.owner)
                    .pieces()
                    .iter()
                    .filter(|p| p.square == square && p.name == occupant.name)
                    .count();
                if matches != 1 {
                    return Err(DomainError::invariant(format!(
                        "{occupant} on {square} resolves to {matches} roster entries"
                    )));
                }
            }
        }
        Ok(())
    }
}
