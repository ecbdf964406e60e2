use serde::{Deserialize, Serialize};

use super::player::Player;

/// Cumulative per-player win counts for one sitting.
///
/// Owned by the frontend and handed into score updates explicitly; it
/// outlives any single [`Game`](super::Game) and is untouched by resets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    wins: [u32; 2],
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a completed game won by `player`. Draws are not recorded.
    pub fn record_win(&mut self, player: Player) {
        self.wins[player.index()] += 1;
    }

    pub fn wins(&self, player: Player) -> u32 {
        self.wins[player.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Game;

    #[test]
    fn test_starts_at_zero() {
        let session = Session::new();
        assert_eq!(session.wins(Player::Red), 0);
        assert_eq!(session.wins(Player::Yellow), 0);
    }

    #[test]
    fn test_counters_are_independent() {
        let mut session = Session::new();
        session.record_win(Player::Red);
        session.record_win(Player::Red);
        session.record_win(Player::Yellow);
        assert_eq!(session.wins(Player::Red), 2);
        assert_eq!(session.wins(Player::Yellow), 1);
    }

    #[test]
    fn test_scores_survive_game_reset() {
        let mut session = Session::new();
        let mut game = Game::new();
        game.start();

        session.record_win(Player::Yellow);
        game.reset();

        assert_eq!(session.wins(Player::Yellow), 1);
    }
}
