use super::board::{Board, HEIGHT, WIDTH};
use super::{win, Player};
use crate::error::MoveError;

/// How a finished game ended. Absent while the game is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win(Player),
    Tie,
}

/// Semantic events a feedback collaborator (sound, animation) can react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    PieceMoved,
    GameEnded(Outcome),
}

/// Everything a renderer needs after an accepted move: where the piece
/// landed, who moved, and the resulting status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedPiece {
    pub row: usize,
    pub column: usize,
    pub mover: Player,
    pub outcome: Option<Outcome>,
}

impl PlacedPiece {
    /// The events this placement produced, in order: always `PieceMoved`,
    /// followed by `GameEnded` when the move finished the game.
    pub fn events(&self) -> impl Iterator<Item = GameEvent> {
        std::iter::once(GameEvent::PieceMoved).chain(self.outcome.map(GameEvent::GameEnded))
    }
}

/// Result of a legal `apply_move` call. A drop into a full column is an
/// expected no-op, not an error: nothing is placed and the same player is
/// still to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Placed(PlacedPiece),
    ColumnFull,
}

/// The turn state machine. Owns the board, whose turn it is, and the game
/// status; all mutation goes through [`apply_move`](GameState::apply_move).
/// Reset means replacing the whole value with [`GameState::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    outcome: Option<Outcome>,
    move_count: usize,
}

impl GameState {
    /// Create the initial game state: empty board, player One to move.
    pub fn new() -> Self {
        GameState {
            board: Board::new(),
            current_player: Player::One,
            outcome: None,
            move_count: 0,
        }
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Number of accepted placements so far.
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Columns that can still receive a piece; empty once the game is over.
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }

        (0..WIDTH)
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    /// Drop the current player's piece into `column`.
    ///
    /// On placement the piece lands on the lowest open cell, the win/tie
    /// check runs for the mover, and the turn passes only if the game
    /// continues. A full column is reported as [`MoveOutcome::ColumnFull`]
    /// and changes nothing. Out-of-range columns and moves after the game
    /// has ended are caller errors.
    pub fn apply_move(&mut self, column: usize) -> Result<MoveOutcome, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }
        if column >= WIDTH {
            return Err(MoveError::InvalidColumn(column));
        }

        let Some(row) = self.board.landing_row(column) else {
            return Ok(MoveOutcome::ColumnFull);
        };

        let mover = self.current_player;
        self.board.place(row, column, mover);
        self.move_count += 1;

        if win::wins_through(&self.board, row, column, mover) {
            self.outcome = Some(Outcome::Win(mover));
        } else if self.move_count == WIDTH * HEIGHT {
            self.outcome = Some(Outcome::Tie);
        } else {
            self.current_player = mover.other();
        }

        Ok(MoveOutcome::Placed(PlacedPiece {
            row,
            column,
            mover,
            outcome: self.outcome,
        }))
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
