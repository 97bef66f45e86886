//! The match state machine: setup, turn-taking moves, win detection, reset.

use tracing::{debug, info};

use crate::domain::board::{Board, PieceRef, Player, Square, BOARD_SIZE};
use crate::domain::move_log::{MoveLog, MoveRecord};
use crate::domain::movement::{execute, plan_move, Direction, PieceKind};
use crate::errors::domain::{DomainError, IllegalMoveKind};

/// Derived phase of the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// At least one roster is still empty.
    Setup,
    /// Both rosters hold pieces.
    Active,
}

/// What happened after an accepted setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetupOutcome {
    pub player: Player,
    pub placed: usize,
    /// Player to act next.
    pub next: Player,
}

/// What happened after an accepted move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Turn passed to the other player.
    Continued { captured: Vec<PieceRef> },
    /// A roster emptied; the match has already been reset.
    Won { winner: Player, captured: Vec<PieceRef> },
}

/// The single live match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    board: Board,
    current_player: Player,
    log: MoveLog,
}

impl Default for Match {
    fn default() -> Self {
        Self::new()
    }
}

impl Match {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::A,
            log: MoveLog::new(),
        }
    }

    /// Builds a match mid-game from an arbitrary position.
    #[cfg(test)]
    pub(crate) fn from_position(board: Board, current_player: Player) -> Self {
        Self {
            board,
            current_player,
            log: MoveLog::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn log(&self) -> &MoveLog {
        &self.log
    }

    pub fn phase(&self) -> Phase {
        if Player::ALL
            .iter()
            .all(|&p| !self.board.roster(p).is_empty())
        {
            Phase::Active
        } else {
            Phase::Setup
        }
    }

    /// Places the current player's roster on their home row, one column per
    /// entry in submission order.
    pub fn setup<S: AsRef<str>>(&mut self, names: &[S]) -> Result<SetupOutcome, DomainError> {
        let player = self.current_player;
        if !self.board.roster(player).is_empty() {
            return Err(DomainError::SetupConflict(player));
        }
        if names.len() > BOARD_SIZE {
            return Err(DomainError::SetupOverflow(names.len()));
        }

        let mut board = self.board.clone();
        let row = player.home_row();
        for (col, name) in names.iter().enumerate() {
            let square = Square::new(row, col)
                .ok_or_else(|| DomainError::invariant(format!("home row column {col} missing")))?;
            board.place(player, name.as_ref(), square)?;
        }
        self.board = board;

        self.current_player = match self.phase() {
            Phase::Active => Player::A,
            Phase::Setup => player.opponent(),
        };

        info!(
            player = %player,
            placed = names.len(),
            next = %self.current_player,
            "setup completed"
        );

        Ok(SetupOutcome {
            player,
            placed: names.len(),
            next: self.current_player,
        })
    }

    /// Moves one of the current player's pieces.
    ///
    /// `character` is either a bare roster name or a wire label such as
    /// `"A-P1"`; a label naming the other side never resolves.
    pub fn play_move(&mut self, character: &str, code: &str) -> Result<MoveOutcome, DomainError> {
        if self.phase() != Phase::Active {
            return Err(DomainError::illegal(IllegalMoveKind::NotActive));
        }

        let player = self.current_player;
        let (owner, name) = PieceRef::split_label(character);
        if owner.is_some_and(|o| o != player) {
            return Err(DomainError::UnknownPiece(character.to_string()));
        }
        let from = self
            .board
            .roster(player)
            .find(name)
            .map(|p| p.square)
            .ok_or_else(|| DomainError::UnknownPiece(character.to_string()))?;

        let direction: Direction = code.parse()?;
        let kind = PieceKind::from_name(name)
            .ok_or(DomainError::illegal(IllegalMoveKind::UnmovablePiece))?;

        let plan = plan_move(&self.board, player, from, kind, direction)?;
        let mut board = self.board.clone();
        let captured = execute(&mut board, &plan)?;
        self.board = board;

        self.log.push(MoveRecord {
            player,
            piece: name.to_string(),
            direction,
        });
        debug!(
            player = %player,
            piece = name,
            direction = %direction,
            from = %plan.from,
            to = %plan.to,
            captured = captured.len(),
            "move applied"
        );

        let defeated = Player::ALL
            .into_iter()
            .find(|&p| self.board.roster(p).is_empty());
        if let Some(loser) = defeated {
            let winner = loser.opponent();
            info!(winner = %winner, moves = self.log.len(), "match won");
            self.reset();
            return Ok(MoveOutcome::Won { winner, captured });
        }

        self.current_player = player.opponent();
        Ok(MoveOutcome::Continued { captured })
    }

    /// Replaces the match with a fresh, empty one.
    pub fn reset(&mut self) {
        *self = Match::new();
    }
}
