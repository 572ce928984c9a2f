//! Move legality and game outcome for standard chess without castling, en passant or promotion.
//!
//! Everything here works on a borrowed [`Board`](kestrel_board::Board) or an owned
//! [`GameState`](kestrel_board::GameState); nothing is global.

pub mod attacks;
pub mod game;
pub mod legal;
pub mod movegen;

pub use attacks::{find_king, is_king_in_check, is_square_attacked};
pub use game::{make_move, Game, Outcome, PlayError};
pub use legal::{has_legal_moves, is_legal_move, legal_destinations};
pub use movegen::{Destinations, Generator};
