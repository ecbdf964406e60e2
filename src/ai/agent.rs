use crate::game::Board;

/// Interface for anything that can pick a column for the side to move.
pub trait Agent {
    /// Choose a column on the given board, or `None` if no legal column
    /// exists.
    ///
    /// The board is borrowed mutably so search implementations can explore
    /// hypothetical lines in place; it must come back in exactly the state
    /// it was received.
    fn choose_move(&mut self, board: &mut Board) -> Option<usize>;

    /// Display name for the frontend.
    fn name(&self) -> &str;
}
