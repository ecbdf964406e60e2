use serde::{Deserialize, Serialize};

use super::player::Player;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;
/// Length of a winning line.
pub const WIN_LEN: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

impl Cell {
    /// The player occupying this cell, if any
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Red => Some(Player::Red),
            Cell::Yellow => Some(Player::Yellow),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {0} is full")]
    ColumnFull(usize),
    #[error("column {0} is out of range")]
    InvalidColumn(usize),
}

/// Out-of-range cell query.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("cell ({row}, {col}) is outside the board")]
pub struct CoordinateError {
    pub row: usize,
    pub col: usize,
}

/// The playing grid plus the bookkeeping the search relies on: a per-column
/// next-free-row cache and a ply counter.
///
/// Row 0 is the top; pieces fall toward row `ROWS - 1`. The cache and the
/// counter are updated in the same step as any cell mutation, so a column's
/// filled cells are always contiguous from the bottom and the counter always
/// equals the number of non-empty cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
    next_free: [Option<usize>; COLS],
    turns: usize,
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
            next_free: [Some(ROWS - 1); COLS],
            turns: 0,
        }
    }

    /// Reset to the empty starting position in place
    pub fn reset(&mut self) {
        *self = Board::new();
    }

    /// Get the cell at a position. Callers guarantee bounds; the UI goes
    /// through [`Board::cell`] instead.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Checked cell access for query surfaces.
    pub fn cell(&self, row: usize, col: usize) -> Result<Cell, CoordinateError> {
        if row >= ROWS || col >= COLS {
            return Err(CoordinateError { row, col });
        }
        Ok(self.cells[row][col])
    }

    /// The row the next piece dropped in `col` would land in, or `None` when
    /// the column is full or out of range.
    pub fn landing_row(&self, col: usize) -> Option<usize> {
        self.next_free.get(col).copied().flatten()
    }

    /// Check whether a column can accept another piece
    pub fn can_play(&self, col: usize) -> bool {
        self.landing_row(col).is_some()
    }

    /// Columns that can accept a piece, in ascending order.
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..COLS).filter(|&col| self.can_play(col)).collect()
    }

    /// Drop a piece for `player` into a column and return the landing row.
    ///
    /// Does not touch the ply counter; callers pair this with
    /// [`Board::increment_turn`].
    pub fn play(&mut self, col: usize, player: Player) -> Result<usize, MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn(col));
        }
        let row = self.next_free[col].ok_or(MoveError::ColumnFull(col))?;
        self.cells[row][col] = player.to_cell();
        self.next_free[col] = row.checked_sub(1);
        Ok(row)
    }

    /// Take back the piece at `(row, col)`.
    ///
    /// Only valid on the cell just returned by [`Board::play`]; the search's
    /// simulate/undo protocol is the one caller.
    pub fn undo(&mut self, row: usize, col: usize) {
        self.cells[row][col] = Cell::Empty;
        self.next_free[col] = Some(row);
    }

    /// Number of plies played
    pub fn turns(&self) -> usize {
        self.turns
    }

    pub fn increment_turn(&mut self) {
        self.turns += 1;
    }

    pub fn decrement_turn(&mut self) {
        self.turns -= 1;
    }

    /// The side to move, derived from ply-counter parity
    pub fn current_player(&self) -> Player {
        if self.turns % 2 == 0 {
            Player::Red
        } else {
            Player::Yellow
        }
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.next_free.iter().all(Option::is_none)
    }

    /// Scan for a completed four-in-a-row.
    ///
    /// Orientation order is fixed (vertical, horizontal, down-right,
    /// up-right; row-major within each) so results are reproducible.
    pub fn check_winner(&self) -> Option<Player> {
        // Vertical
        for row in 0..=ROWS - WIN_LEN {
            for col in 0..COLS {
                if let Some(winner) = self.line_owner(row, col, 1, 0) {
                    return Some(winner);
                }
            }
        }

        // Horizontal
        for row in 0..ROWS {
            for col in 0..=COLS - WIN_LEN {
                if let Some(winner) = self.line_owner(row, col, 0, 1) {
                    return Some(winner);
                }
            }
        }

        // Diagonal (down-right)
        for row in 0..=ROWS - WIN_LEN {
            for col in 0..=COLS - WIN_LEN {
                if let Some(winner) = self.line_owner(row, col, 1, 1) {
                    return Some(winner);
                }
            }
        }

        // Diagonal (up-right)
        for row in WIN_LEN - 1..ROWS {
            for col in 0..=COLS - WIN_LEN {
                if let Some(winner) = self.line_owner(row, col, -1, 1) {
                    return Some(winner);
                }
            }
        }

        None
    }

    /// Owner of a full-length line starting at `(row, col)` stepping by
    /// `(dr, dc)`, if all its cells match and are non-empty.
    fn line_owner(&self, row: usize, col: usize, dr: i32, dc: i32) -> Option<Player> {
        let first = self.cells[row][col];
        if first == Cell::Empty {
            return None;
        }
        for i in 1..WIN_LEN as i32 {
            let r = (row as i32 + dr * i) as usize;
            let c = (col as i32 + dc * i) as usize;
            if self.cells[r][c] != first {
                return None;
            }
        }
        first.player()
    }

    /// First playable column, scanned left to right, where dropping a piece
    /// would complete a line for `player`.
    ///
    /// Runs at every search leaf, so it counts lines outward from the
    /// prospective landing cell instead of playing and undoing the move.
    pub fn find_immediate_win(&self, player: Player) -> Option<usize> {
        (0..COLS).find(|&col| self.can_play(col) && self.wins_at(col, player))
    }

    /// Would dropping a piece for `player` in `col` complete a line?
    fn wins_at(&self, col: usize, player: Player) -> bool {
        let Some(row) = self.landing_row(col) else {
            return false;
        };
        let piece = player.to_cell();

        // Vertical: the three cells below the landing cell
        if row + WIN_LEN - 1 < ROWS
            && self.cells[row + 1][col] == piece
            && self.cells[row + 2][col] == piece
            && self.cells[row + 3][col] == piece
        {
            return true;
        }

        // Horizontal and both diagonals: walk outward from the landing cell
        // along each line; the two arms together must hold three pieces.
        for dy in -1i32..=1 {
            let mut count = 0;
            for dx in [-1i32, 1] {
                let mut x = col as i32 + dx;
                let mut y = row as i32 + dx * dy;
                while x >= 0
                    && x < COLS as i32
                    && y >= 0
                    && y < ROWS as i32
                    && self.cells[y as usize][x as usize] == piece
                {
                    count += 1;
                    x += dx;
                    y += dx * dy;
                }
            }
            if count >= WIN_LEN as i32 - 1 {
                return true;
            }
        }

        false
    }

    /// Whether the search should stop descending here: the side to move has
    /// a winning drop available, or the board is full.
    ///
    /// Note this treats "a win is available next ply" the same as "a win is
    /// on the board"; the search only ever asks one ply ahead of a committed
    /// move, where the two coincide.
    pub fn is_terminal(&self) -> bool {
        self.find_immediate_win(self.current_player()).is_some() || self.is_full()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
