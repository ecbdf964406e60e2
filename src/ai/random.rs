use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::game::Board;

use super::agent::Agent;

/// An agent that picks uniformly at random among legal columns. Useful as a
/// baseline opponent in tests.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn choose_move(&mut self, board: &mut Board) -> Option<usize> {
        let legal = board.legal_columns();
        if legal.is_empty() {
            return None;
        }
        Some(legal[self.rng.random_range(0..legal.len())])
    }

    fn name(&self) -> &str {
        "Random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selects_legal_column() {
        let mut agent = RandomAgent::new();
        let mut board = Board::new();

        for _ in 0..100 {
            let col = agent.choose_move(&mut board).unwrap();
            assert!(board.can_play(col));
        }
    }

    #[test]
    fn test_none_when_no_columns_remain() {
        let mut board = Board::new();
        for col in 0..crate::game::COLS {
            for _ in 0..crate::game::ROWS {
                board.play(col, board.current_player()).unwrap();
                board.increment_turn();
            }
        }
        assert!(board.is_full());

        let mut agent = RandomAgent::new();
        assert_eq!(agent.choose_move(&mut board), None);
    }

    #[test]
    fn test_random_agent_name() {
        let agent = RandomAgent::new();
        assert_eq!(agent.name(), "Random");
    }
}
