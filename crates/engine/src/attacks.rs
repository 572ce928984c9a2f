//! Attack oracle and check detection.

use kestrel_board::{Board, Color, PieceKind, Square};

use crate::movegen::Generator;

/// Whether any piece of `attacker` has `target` among its pseudo-legal destinations.
///
/// This is a pure threat query: it does not matter whether the attacking move would itself be
/// legal. For pawns that means their pushes count and their diagonals only count when an enemy
/// stands there, which for an occupied target like a king is the usual notion of attack.
pub fn is_square_attacked(board: &Board, target: Square, attacker: Color) -> bool {
    let generator = Generator::new(board);

    board
        .squares_of(attacker)
        .any(|square| generator.pseudo_moves(square).contains(&target))
}

/// First king of `color` in row-major order.
pub fn find_king(board: &Board, color: Color) -> Option<Square> {
    board
        .squares_of(color)
        .find(|&square| matches!(board.get(square), Some(p) if p.kind == PieceKind::King))
}

/// Whether the king of `color` is attacked by the other side.
///
/// A board without that king is never in check.
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    find_king(board, color).is_some_and(|king| is_square_attacked(board, king, !color))
}
