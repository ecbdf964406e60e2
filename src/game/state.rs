use serde::{Deserialize, Serialize};

use crate::ai::Agent;

use super::board::{self, Board, Cell, CoordinateError};
use super::player::Player;

/// Where a game is in its life cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    NotStarted,
    InProgress,
    Won(Player),
    Drawn,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {0} is full")]
    ColumnFull(usize),
    #[error("column {0} is out of range")]
    InvalidColumn(usize),
    #[error("the game has not been started")]
    NotStarted,
    #[error("the game is already over")]
    GameOver,
}

/// What a successfully applied move did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveReport {
    /// Row the piece landed in.
    pub row: usize,
    /// Who played it.
    pub by: Player,
    /// Status after the move, so callers see a win or draw immediately.
    pub status: GameStatus,
}

/// A single game: the board plus its place in the
/// NotStarted → InProgress → Won/Drawn state machine.
///
/// Moves are applied for whichever side the turn parity says is up, so the
/// frontend never passes a player and cannot move out of turn. Scores live
/// in [`Session`](super::Session), which `reset` never touches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    status: GameStatus,
}

impl Game {
    pub fn new() -> Self {
        Game {
            board: Board::new(),
            status: GameStatus::NotStarted,
        }
    }

    /// Begin play on a fresh board
    pub fn start(&mut self) {
        self.board.reset();
        self.status = GameStatus::InProgress;
    }

    /// Reset for a new game; session scores are unaffected
    pub fn reset(&mut self) {
        self.start();
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side to move
    pub fn current_player(&self) -> Player {
        self.board.current_player()
    }

    /// Checked cell query for the frontend.
    pub fn cell(&self, row: usize, col: usize) -> Result<Cell, CoordinateError> {
        self.board.cell(row, col)
    }

    /// Whether `(row, col)` is where the side to move's piece would land.
    /// Used to enable input targets; always false once the game is over.
    pub fn is_drop_target(&self, row: usize, col: usize) -> bool {
        self.status == GameStatus::InProgress && self.board.landing_row(col) == Some(row)
    }

    /// Apply a move for the side to move.
    ///
    /// On success the piece is placed, the ply counter advances, and the
    /// status transitions to `Won` or `Drawn` the instant either condition
    /// holds. All errors leave the game untouched.
    pub fn apply(&mut self, col: usize) -> Result<MoveReport, MoveError> {
        match self.status {
            GameStatus::NotStarted => return Err(MoveError::NotStarted),
            GameStatus::Won(_) | GameStatus::Drawn => return Err(MoveError::GameOver),
            GameStatus::InProgress => {}
        }

        let player = self.board.current_player();
        let row = self.board.play(col, player).map_err(|e| match e {
            board::MoveError::ColumnFull(c) => MoveError::ColumnFull(c),
            board::MoveError::InvalidColumn(c) => MoveError::InvalidColumn(c),
        })?;
        self.board.increment_turn();

        if let Some(winner) = self.board.check_winner() {
            self.status = GameStatus::Won(winner);
        } else if self.board.is_full() {
            self.status = GameStatus::Drawn;
        }

        Ok(MoveReport {
            row,
            by: player,
            status: self.status,
        })
    }

    /// Ask an agent for a column on behalf of the side to move.
    ///
    /// The board is lent to the agent mutably for its simulate/undo
    /// exploration; the `&mut self` borrow keeps move application and search
    /// from overlapping on the same board. Returns `None` when the game is
    /// not in progress or no legal column exists.
    pub fn suggest_move(&mut self, agent: &mut dyn Agent) -> Option<usize> {
        if self.status != GameStatus::InProgress {
            return None;
        }
        agent.choose_move(&mut self.board)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::RandomAgent;

    /// 42 alternating plies that fill the board with no four-in-a-row.
    const DRAW_SEQUENCE: [usize; 42] = [
        0, 1, 2, 3, 4, 5, 6, //
        0, 1, 2, 3, 4, 5, 6, //
        1, 0, 3, 2, 5, 4, 0, //
        6, 2, 1, 4, 3, 6, 5, //
        0, 1, 2, 3, 4, 5, 6, //
        0, 1, 2, 3, 4, 5, 6,
    ];

    #[test]
    fn test_new_game_not_started() {
        let game = Game::new();
        assert_eq!(game.status(), GameStatus::NotStarted);
    }

    #[test]
    fn test_apply_before_start_fails() {
        let mut game = Game::new();
        assert_eq!(game.apply(3), Err(MoveError::NotStarted));
    }

    #[test]
    fn test_start_begins_play_with_red() {
        let mut game = Game::new();
        game.start();
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.current_player(), Player::Red);
    }

    #[test]
    fn test_apply_reports_row_mover_and_status() {
        let mut game = Game::new();
        game.start();

        let report = game.apply(3).unwrap();
        assert_eq!(report.row, 5);
        assert_eq!(report.by, Player::Red);
        assert_eq!(report.status, GameStatus::InProgress);

        let report = game.apply(3).unwrap();
        assert_eq!(report.row, 4);
        assert_eq!(report.by, Player::Yellow);
    }

    #[test]
    fn test_column_full_is_recoverable() {
        let mut game = Game::new();
        game.start();
        for _ in 0..6 {
            game.apply(0).unwrap();
        }
        assert_eq!(game.apply(0), Err(MoveError::ColumnFull(0)));
        // The game carries on elsewhere.
        assert!(game.apply(1).is_ok());
    }

    #[test]
    fn test_win_transition_and_terminal_status() {
        let mut game = Game::new();
        game.start();

        // Red builds 0..3 on the bottom row; Yellow answers one row up.
        for col in 0..3 {
            game.apply(col).unwrap();
            game.apply(col).unwrap();
        }
        let report = game.apply(3).unwrap();

        assert_eq!(report.status, GameStatus::Won(Player::Red));
        assert_eq!(game.status(), GameStatus::Won(Player::Red));
        assert_eq!(game.apply(4), Err(MoveError::GameOver));
    }

    #[test]
    fn test_draw_transition() {
        let mut game = Game::new();
        game.start();

        for (ply, &col) in DRAW_SEQUENCE.iter().enumerate() {
            let report = game.apply(col).unwrap();
            if ply < DRAW_SEQUENCE.len() - 1 {
                assert_eq!(report.status, GameStatus::InProgress, "ply {ply}");
            } else {
                assert_eq!(report.status, GameStatus::Drawn);
            }
        }

        assert_eq!(game.status(), GameStatus::Drawn);
        assert!(game.board().is_full());
        assert_eq!(game.board().check_winner(), None);
        assert_eq!(game.apply(0), Err(MoveError::GameOver));
    }

    #[test]
    fn test_drop_target_tracks_landing_row() {
        let mut game = Game::new();
        assert!(!game.is_drop_target(5, 3));

        game.start();
        assert!(game.is_drop_target(5, 3));
        assert!(!game.is_drop_target(4, 3));

        game.apply(3).unwrap();
        assert!(game.is_drop_target(4, 3));
        assert!(!game.is_drop_target(5, 3));
    }

    #[test]
    fn test_reset_gives_fresh_board() {
        let mut game = Game::new();
        game.start();
        game.apply(2).unwrap();
        game.apply(4).unwrap();

        game.reset();
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.board(), &crate::game::Board::new());
    }

    #[test]
    fn test_suggest_move_requires_game_in_progress() {
        let mut game = Game::new();
        let mut agent = RandomAgent::new();
        assert_eq!(game.suggest_move(&mut agent), None);

        game.start();
        let col = game.suggest_move(&mut agent);
        assert!(col.is_some_and(|c| game.board().can_play(c)));
    }

    #[test]
    fn test_game_snapshot_round_trip() {
        let mut game = Game::new();
        game.start();
        for col in [3, 2, 3, 4] {
            game.apply(col).unwrap();
        }

        let json = serde_json::to_string(&game).unwrap();
        let restored: Game = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, game);
        assert_eq!(restored.status(), GameStatus::InProgress);
    }
}
