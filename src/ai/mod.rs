//! Adversarial move selection: the agent seam, minimax search with
//! alpha-beta pruning and a window-based positional evaluator, and a random
//! baseline.

mod agent;
mod minimax;
mod random;

pub use agent::Agent;
pub use minimax::{Heuristic, MinimaxAgent, WindowHeuristic};
pub use random::RandomAgent;
