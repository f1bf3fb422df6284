//! # Connect Four TUI
//!
//! Two-player Connect Four for the terminal. Pieces drop into columns and
//! stack on the lowest open cell; four in a row (horizontal, vertical, or
//! diagonal) wins, a full board ties.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, win detection, state machine
//! - [`ui`] — Terminal UI: key handling, input debounce, board rendering
//! - [`feedback`] — Injected sound/feedback collaborator
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod feedback;
pub mod game;
pub mod ui;
