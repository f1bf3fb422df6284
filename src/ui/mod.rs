//! Terminal input adapter and renderer: maps key presses to column indices,
//! holds the feedback debounce lock, and redraws the board.

mod app;
mod game_view;
mod input_lock;

pub use app::App;
pub use input_lock::InputLock;
