//! Legality filter.
//!
//! A move is tried on a scratch copy of the board and the mover's king is tested for check there.
//! The caller's board is only ever borrowed, so it is left exactly as it was whatever the verdict.

use kestrel_board::{Board, Color, Move, Square};
use tracing::trace;

use crate::attacks::is_king_in_check;
use crate::movegen::{Destinations, Generator};

/// Whether `m` is pseudo-legal and does not leave the mover's own king in check.
///
/// An empty source square is never legal.
pub fn is_legal_move(board: &Board, m: Move) -> bool {
    let Some(mover) = board.color_at(m.from) else {
        return false;
    };

    if !Generator::new(board).is_pseudo_legal(m) {
        trace!(%m, "not a pseudo-legal move");
        return false;
    }

    let legal = keeps_king_safe(board, m, mover);
    trace!(%m, legal, "king safety checked");

    legal
}

/// Whether `color` has at least one legal move. Stops at the first one found.
pub fn has_legal_moves(board: &Board, color: Color) -> bool {
    let generator = Generator::new(board);

    board.squares_of(color).any(|from| {
        generator
            .pseudo_moves(from)
            .into_iter()
            .any(|to| keeps_king_safe(board, Move::new(from, to), color))
    })
}

/// Pseudo-legal destinations of the piece on `square` that pass [`is_legal_move`], in
/// generation order.
pub fn legal_destinations(board: &Board, square: Square) -> Destinations {
    let Some(mover) = board.color_at(square) else {
        return Destinations::new();
    };

    let mut moves = Generator::new(board).pseudo_moves(square);
    moves.retain(|to| keeps_king_safe(board, Move::new(square, *to), mover));

    moves
}

/// Play `m` on a scratch board and test `mover`'s king there.
///
/// `m` must already be pseudo-legal.
#[inline]
fn keeps_king_safe(board: &Board, m: Move, mover: Color) -> bool {
    let mut scratch = board.clone();
    scratch.apply_unchecked(m);

    !is_king_in_check(&scratch, mover)
}
