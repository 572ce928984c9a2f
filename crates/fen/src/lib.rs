//! Fen de/serialization utilities.
//!
//! Only piece placement and the side to move carry meaning here. Castling, en passant and the
//! move clocks are accepted after them and ignored.

use nom::Finish;

use kestrel_board::GameState;

pub mod de;
pub mod ser;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FenError {
    /// Input could not be parsed from this point on.
    #[error("malformed fen near `{0}`")]
    Syntax(String),
}

/// Parse a game state from the given fen string.
#[inline]
pub fn from_str(s: &str) -> Result<GameState, FenError> {
    de::parse(s)
        .finish()
        .map(|(_, state)| state)
        .map_err(|e| FenError::Syntax(e.input.to_owned()))
}

/// Format a game state as a fen string.
#[inline]
pub fn to_string(state: &GameState) -> String {
    ser::format(state)
}
