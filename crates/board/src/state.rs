//! The full game position.

use std::fmt::Display;

use crate::{Board, Color};

/// Board plus the side to move.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameState {
    /// Piece positions.
    pub board: Board,
    /// Whose turn it is to move.
    pub turn: Color,
}

impl GameState {
    #[inline]
    pub const fn new(board: Board, turn: Color) -> Self {
        Self { board, turn }
    }

    /// Standard starting layout with white to move.
    pub fn starting() -> Self {
        Self {
            board: Board::starting_position(),
            turn: Color::White,
        }
    }
}

impl Default for GameState {
    #[inline]
    fn default() -> Self {
        Self::starting()
    }
}

impl Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Turn: {}", self.turn)?;
        write!(f, "{}", self.board)
    }
}
