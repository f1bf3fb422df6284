use super::Player;

/// Number of columns a piece can be dropped into.
pub const WIDTH: usize = 7;
/// Number of rows; row 0 is the top, row `HEIGHT - 1` the bottom.
pub const HEIGHT: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Occupied(Player),
}

/// Pure grid bookkeeping: where pieces land and which cells are taken.
/// The board knows nothing about turns or winning.
///
/// Invariant: within any column, occupied cells form a contiguous run
/// anchored at the bottom row. `place` preserves this as long as callers
/// only place at rows produced by `landing_row`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; WIDTH]; HEIGHT],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; WIDTH]; HEIGHT],
        }
    }

    /// Get the cell at a specific position
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Row where a piece dropped into `col` would come to rest: the first
    /// empty cell scanning from the bottom row upward. `None` when the
    /// column is full. Callers must pass `col < WIDTH`.
    pub fn landing_row(&self, col: usize) -> Option<usize> {
        (0..HEIGHT).rev().find(|&row| self.cells[row][col] == Cell::Empty)
    }

    /// Write `player`'s piece into the given cell. The cell must be empty
    /// and `row` must have come from `landing_row` for that column,
    /// otherwise a piece would float.
    pub fn place(&mut self, row: usize, col: usize, player: Player) {
        debug_assert_eq!(self.cells[row][col], Cell::Empty);
        self.cells[row][col] = Cell::Occupied(player);
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        self.cells[0][col] != Cell::Empty
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..WIDTH).all(|col| self.is_column_full(col))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drop_into(board: &mut Board, col: usize, player: Player) -> usize {
        let row = board.landing_row(col).unwrap();
        board.place(row, col, player);
        row
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        for row in 0..HEIGHT {
            for col in 0..WIDTH {
                assert_eq!(board.get(row, col), Cell::Empty);
            }
        }
    }

    #[test]
    fn test_pieces_stack_from_the_bottom() {
        let mut board = Board::new();

        let row = drop_into(&mut board, 3, Player::One);
        assert_eq!(row, HEIGHT - 1);
        assert_eq!(board.get(HEIGHT - 1, 3), Cell::Occupied(Player::One));

        let row = drop_into(&mut board, 3, Player::Two);
        assert_eq!(row, HEIGHT - 2);
        assert_eq!(board.get(HEIGHT - 2, 3), Cell::Occupied(Player::Two));
    }

    #[test]
    fn test_landing_row_none_when_column_full() {
        let mut board = Board::new();
        for _ in 0..HEIGHT {
            drop_into(&mut board, 0, Player::One);
        }

        assert!(board.is_column_full(0));
        assert_eq!(board.landing_row(0), None);
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        assert!(!board.is_full());
        for col in 0..WIDTH {
            for _ in 0..HEIGHT {
                drop_into(&mut board, col, Player::One);
            }
        }
        assert!(board.is_full());
    }

    #[test]
    fn test_no_floating_pieces() {
        let mut board = Board::new();
        for &col in &[2, 4, 2, 2, 6, 4, 2] {
            drop_into(&mut board, col, Player::One);
        }

        // every column is a contiguous run anchored at the bottom
        for col in 0..WIDTH {
            let mut seen_occupied = false;
            for row in 0..HEIGHT {
                match board.get(row, col) {
                    Cell::Occupied(_) => seen_occupied = true,
                    Cell::Empty => assert!(!seen_occupied, "gap below a piece in column {col}"),
                }
            }
        }
    }
}
