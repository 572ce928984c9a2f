//! Applying moves and classifying the resulting position.

use kestrel_board::{Color, GameState, Move, Square};
use tracing::{debug, info};

use crate::attacks::is_king_in_check;
use crate::legal::{has_legal_moves, is_legal_move, legal_destinations};
use crate::movegen::Destinations;

/// State of the game after a move, from the point of view of the side now to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Not in check.
    Ongoing,
    /// In check, with at least one legal reply.
    Check,
    /// In check without a legal reply. The game is over.
    Checkmate { winner: Color },
}

impl Outcome {
    #[inline]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Checkmate { .. })
    }
}

/// Apply `m`, hand the turn over and classify the position for the new side to move.
///
/// `m` must already have passed [`is_legal_move`]; it is applied unconditionally. Positions with
/// no legal moves and no check are reported as [`Outcome::Ongoing`].
pub fn make_move(state: &mut GameState, m: Move) -> Outcome {
    let captured = state.board.apply_unchecked(m);
    state.turn = !state.turn;

    let outcome = if !is_king_in_check(&state.board, state.turn) {
        Outcome::Ongoing
    } else if has_legal_moves(&state.board, state.turn) {
        Outcome::Check
    } else {
        Outcome::Checkmate {
            winner: !state.turn,
        }
    };

    debug!(%m, ?captured, ?outcome, "move applied");

    outcome
}

/// Reasons [`Game::play`] refuses a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PlayError {
    #[error("the game is over, {winner} won")]
    GameOver { winner: Color },
    #[error("no piece at {0}")]
    EmptySquare(Square),
    #[error("it is {expected}'s turn")]
    WrongSide { expected: Color },
    #[error("illegal move {0}")]
    IllegalMove(Move),
}

/// One game from a given position until checkmate.
#[derive(Debug, Clone, Default)]
pub struct Game {
    state: GameState,
    winner: Option<Color>,
}

impl Game {
    /// Game from the standard starting position.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Game continuing from an arbitrary position.
    #[inline]
    pub const fn from_state(state: GameState) -> Self {
        Self {
            state,
            winner: None,
        }
    }

    #[inline]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    /// Side that delivered checkmate, once there is one.
    #[inline]
    pub const fn winner(&self) -> Option<Color> {
        self.winner
    }

    #[inline]
    pub const fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Legal destinations from `square` for whichever piece stands there.
    #[inline]
    pub fn legal_destinations(&self, square: Square) -> Destinations {
        legal_destinations(&self.state.board, square)
    }

    /// Play a move for the side to move.
    ///
    /// The position is only changed when `Ok` is returned.
    pub fn play(&mut self, m: Move) -> Result<Outcome, PlayError> {
        if let Some(winner) = self.winner {
            return Err(PlayError::GameOver { winner });
        }

        let Some(color) = self.state.board.color_at(m.from) else {
            return Err(PlayError::EmptySquare(m.from));
        };

        if color != self.state.turn {
            return Err(PlayError::WrongSide {
                expected: self.state.turn,
            });
        }

        if !is_legal_move(&self.state.board, m) {
            return Err(PlayError::IllegalMove(m));
        }

        let outcome = make_move(&mut self.state, m);

        if let Outcome::Checkmate { winner } = outcome {
            info!(%winner, "checkmate");
            self.winner = Some(winner);
        }

        Ok(outcome)
    }
}
