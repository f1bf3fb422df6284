//! Core Connect Four game logic: board representation, player types, win
//! detection, and the turn state machine.

mod board;
mod player;
mod state;
pub mod win;

pub use board::{Board, Cell, HEIGHT, WIDTH};
pub use player::Player;
pub use state::{GameEvent, GameState, MoveOutcome, Outcome, PlacedPiece};
