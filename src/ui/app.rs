use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{backend::Backend, Terminal};

use crate::ai::MinimaxAgent;
use crate::game::{Game, GameStatus, MoveError, Player, Session, COLS};

/// The human plays Red and moves first; the computer answers as Yellow.
const HUMAN: Player = Player::Red;
const COMPUTER: Player = Player::Yellow;

pub struct App {
    game: Game,
    session: Session,
    agent: MinimaxAgent,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(depth: usize) -> Self {
        let mut game = Game::new();
        game.start();
        App {
            game,
            session: Session::new(),
            agent: MinimaxAgent::new(COMPUTER, depth),
            selected_column: COLS / 2,
            should_quit: false,
            message: None,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_column < COLS - 1 {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char('r') => {
                // New game; session scores carry over.
                self.game.reset();
                self.selected_column = COLS / 2;
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    /// Drop the human's piece in the selected column, then let the computer
    /// answer.
    fn drop_piece(&mut self) {
        if self.game.status() != GameStatus::InProgress {
            self.message = Some("Game over! Press 'r' for a new game.".to_string());
            return;
        }

        match self.game.apply(self.selected_column) {
            Ok(report) => {
                if self.conclude(report.status) {
                    return;
                }
                self.computer_reply();
            }
            Err(MoveError::ColumnFull(_)) => {
                self.message = Some("Column is full!".to_string());
            }
            Err(MoveError::InvalidColumn(_)) => {
                self.message = Some("Invalid column!".to_string());
            }
            Err(MoveError::NotStarted) => {
                self.message = Some("Press 'r' to start a new game.".to_string());
            }
            Err(MoveError::GameOver) => {
                self.message = Some("Game is over!".to_string());
            }
        }
    }

    fn computer_reply(&mut self) {
        if let Some(col) = self.game.suggest_move(&mut self.agent) {
            if let Ok(report) = self.game.apply(col) {
                self.conclude(report.status);
            }
        }
    }

    /// Record a finished game in the session and surface a message.
    /// Returns true when the game just ended.
    fn conclude(&mut self, status: GameStatus) -> bool {
        match status {
            GameStatus::Won(player) => {
                self.session.record_win(player);
                self.message = Some(if player == HUMAN {
                    "You win!".to_string()
                } else {
                    "The computer wins!".to_string()
                });
                true
            }
            GameStatus::Drawn => {
                self.message = Some("It's a draw!".to_string());
                true
            }
            _ => false,
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.game,
            &self.session,
            self.selected_column,
            &self.message,
        );
    }
}
