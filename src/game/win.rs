//! Win detection over a [`Board`] for an explicit player.
//!
//! Two forms with identical answers: [`connects_four`] scans every cell and
//! every direction (the reference form), [`wins_through`] only scans the four
//! lines passing through one cell and is what the state machine runs after a
//! placement.

use super::board::{Board, Cell, HEIGHT, WIDTH};
use super::Player;

/// Direction vectors as (row step, column step): right, down, down-right,
/// down-left. Four suffice because a run read backwards is the same run.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Does `player` have four aligned pieces anywhere on the board?
///
/// Exhaustive: tries every cell as the start of a 4-cell run in each
/// direction. A run counts only if all four coordinates are in bounds and
/// all four cells belong to `player`.
pub fn connects_four(board: &Board, player: Player) -> bool {
    for row in 0..HEIGHT {
        for col in 0..WIDTH {
            for (dr, dc) in DIRECTIONS {
                let all_match = (0..4).all(|step| {
                    let r = row as isize + dr * step;
                    let c = col as isize + dc * step;
                    in_bounds(r, c) && board.get(r as usize, c as usize) == Cell::Occupied(player)
                });
                if all_match {
                    return true;
                }
            }
        }
    }
    false
}

/// Does `player` have four aligned pieces on a line through `(row, col)`?
///
/// Equivalent to [`connects_four`] right after `player` placed at
/// `(row, col)`: a new win line must pass through the new piece. The cell
/// itself must already hold `player`'s piece.
pub fn wins_through(board: &Board, row: usize, col: usize, player: Player) -> bool {
    if board.get(row, col) != Cell::Occupied(player) {
        return false;
    }

    DIRECTIONS.iter().any(|&(dr, dc)| {
        let forward = run_length(board, row, col, player, dr, dc);
        let backward = run_length(board, row, col, player, -dr, -dc);
        1 + forward + backward >= 4
    })
}

/// Number of `player` pieces in a straight line from `(row, col)` stepping
/// by `(dr, dc)`, excluding the starting cell.
fn run_length(board: &Board, row: usize, col: usize, player: Player, dr: isize, dc: isize) -> usize {
    let mut count = 0;
    let mut r = row as isize + dr;
    let mut c = col as isize + dc;
    while in_bounds(r, c) && board.get(r as usize, c as usize) == Cell::Occupied(player) {
        count += 1;
        r += dr;
        c += dc;
    }
    count
}

fn in_bounds(row: isize, col: isize) -> bool {
    row >= 0 && row < HEIGHT as isize && col >= 0 && col < WIDTH as isize
}
