use crate::game::{Board, Player, COLS, ROWS, WIN_LEN};

use super::agent::Agent;

/// Score for a leaf where the computer has a winning drop available.
const COMPUTER_WIN: i64 = 100_000_000_000_000;
/// Score for a leaf where the human has a winning drop available. Smaller
/// in magnitude than [`COMPUTER_WIN`] on purpose; the imbalance is part of
/// the tuned evaluation and must not be "fixed" into a negation.
const HUMAN_WIN: i64 = -10_000_000_000_000;

/// Trait for evaluating a board position from a player's perspective.
pub trait Heuristic: Send {
    fn score(&self, board: &Board, player: Player) -> i64;
}

/// Positional evaluator over all 4-cell windows, plus a center-column bonus.
pub struct WindowHeuristic;

impl WindowHeuristic {
    /// Value of one window given how many cells each side holds in it.
    /// The defensive term is deliberately not the mirror of the offensive
    /// ones.
    fn score_window(own: usize, opp: usize, empty: usize) -> i64 {
        let mut score = if own == WIN_LEN {
            100
        } else if own == 3 && empty == 1 {
            5
        } else if own == 2 && empty == 2 {
            2
        } else {
            0
        };

        if opp == 3 && empty == 1 {
            score -= 4;
        }

        score
    }

    fn window_counts(
        board: &Board,
        player: Player,
        cells: impl Iterator<Item = (usize, usize)>,
    ) -> (usize, usize, usize) {
        let own_cell = player.to_cell();
        let opp_cell = player.other().to_cell();
        let mut own = 0;
        let mut opp = 0;
        let mut empty = 0;
        for (row, col) in cells {
            let cell = board.get(row, col);
            if cell == own_cell {
                own += 1;
            } else if cell == opp_cell {
                opp += 1;
            } else {
                empty += 1;
            }
        }
        (own, opp, empty)
    }
}

impl Heuristic for WindowHeuristic {
    fn score(&self, board: &Board, player: Player) -> i64 {
        let mut score = 0;

        // Center column control: +3 per piece of `player` in the middle
        // column. Counted on top of the window sum, so a center piece can
        // score twice; the emphasis is intentional.
        let center = COLS / 2;
        for row in 0..ROWS {
            if board.get(row, center) == player.to_cell() {
                score += 3;
            }
        }

        // Horizontal windows
        for row in 0..ROWS {
            for col in 0..=COLS - WIN_LEN {
                let (own, opp, empty) =
                    Self::window_counts(board, player, (0..WIN_LEN).map(|i| (row, col + i)));
                score += Self::score_window(own, opp, empty);
            }
        }

        // Vertical windows
        for col in 0..COLS {
            for row in 0..=ROWS - WIN_LEN {
                let (own, opp, empty) =
                    Self::window_counts(board, player, (0..WIN_LEN).map(|i| (row + i, col)));
                score += Self::score_window(own, opp, empty);
            }
        }

        // Diagonal windows (down-right)
        for row in 0..=ROWS - WIN_LEN {
            for col in 0..=COLS - WIN_LEN {
                let (own, opp, empty) =
                    Self::window_counts(board, player, (0..WIN_LEN).map(|i| (row + i, col + i)));
                score += Self::score_window(own, opp, empty);
            }
        }

        // Diagonal windows (up-right)
        for row in 0..=ROWS - WIN_LEN {
            for col in 0..=COLS - WIN_LEN {
                let (own, opp, empty) = Self::window_counts(
                    board,
                    player,
                    (0..WIN_LEN).map(|i| (row + WIN_LEN - 1 - i, col + i)),
                );
                score += Self::score_window(own, opp, empty);
            }
        }

        score
    }
}

/// Minimax agent with alpha-beta pruning.
///
/// Maximizes for `computer` and minimizes for the opponent, exploring
/// hypothetical lines by playing and exactly undoing moves on the shared
/// board. Must be invoked when the board says it is `computer`'s turn.
pub struct MinimaxAgent {
    computer: Player,
    depth: usize,
    heuristic: Box<dyn Heuristic>,
}

impl MinimaxAgent {
    /// `depth` is clamped to at least one ply.
    pub fn new(computer: Player, depth: usize) -> Self {
        MinimaxAgent {
            computer,
            depth: depth.max(1),
            heuristic: Box::new(WindowHeuristic),
        }
    }

    pub fn with_heuristic(computer: Player, depth: usize, heuristic: Box<dyn Heuristic>) -> Self {
        MinimaxAgent {
            computer,
            depth: depth.max(1),
            heuristic,
        }
    }

    /// One minimax node: returns the preferred column (if any) and its score.
    ///
    /// The preferred column starts as the first playable one and is replaced
    /// only by a strictly better score, so ties resolve to the lowest column
    /// and results are reproducible.
    fn minimax(
        &self,
        board: &mut Board,
        depth: usize,
        mut alpha: i64,
        mut beta: i64,
        maximizing: bool,
    ) -> (Option<usize>, i64) {
        let terminal = board.is_terminal();
        if depth == 0 || terminal {
            if terminal {
                let to_move = board.current_player();
                return match board.find_immediate_win(to_move) {
                    Some(col) if to_move == self.computer => (Some(col), COMPUTER_WIN),
                    Some(col) => (Some(col), HUMAN_WIN),
                    // Full board, nobody wins.
                    None => (None, 0),
                };
            }
            return (None, self.heuristic.score(board, self.computer));
        }

        let legal = board.legal_columns();
        let mut column = legal.first().copied();

        if maximizing {
            let mut best = i64::MIN;
            for &col in &legal {
                let row = board
                    .play(col, self.computer)
                    .expect("legal column accepts a piece");
                board.increment_turn();
                let (_, score) = self.minimax(board, depth - 1, alpha, beta, false);
                board.decrement_turn();
                board.undo(row, col);

                if score > best {
                    best = score;
                    column = Some(col);
                }
                alpha = alpha.max(best);
                if alpha >= beta {
                    break;
                }
            }
            (column, best)
        } else {
            let mut best = i64::MAX;
            for &col in &legal {
                let row = board
                    .play(col, self.computer.other())
                    .expect("legal column accepts a piece");
                board.increment_turn();
                let (_, score) = self.minimax(board, depth - 1, alpha, beta, true);
                board.decrement_turn();
                board.undo(row, col);

                if score < best {
                    best = score;
                    column = Some(col);
                }
                beta = beta.min(best);
                if alpha >= beta {
                    break;
                }
            }
            (column, best)
        }
    }
}

impl Agent for MinimaxAgent {
    fn choose_move(&mut self, board: &mut Board) -> Option<usize> {
        self.minimax(board, self.depth, i64::MIN, i64::MAX, true).0
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}
