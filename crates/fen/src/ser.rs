//! Fen serializer.

use kestrel_board::{Color, GameState, Square};

/// Format the placement and side to move.
///
/// Castling and en passant are never available, so those fields are always `-`.
pub fn format(state: &GameState) -> String {
    let mut out = String::with_capacity(64);

    for row in 0..8 {
        let mut gap = 0u8;

        for col in 0..8 {
            let piece = Square::at(row, col).and_then(|square| state.board.get(square));

            match piece {
                Some(piece) => {
                    if gap > 0 {
                        out.push((b'0' + gap) as char);
                        gap = 0;
                    }
                    out.push(piece.as_char());
                }
                None => gap += 1,
            }
        }

        if gap > 0 {
            out.push((b'0' + gap) as char);
        }
        if row < 7 {
            out.push('/');
        }
    }

    out.push_str(match state.turn {
        Color::White => " w",
        Color::Black => " b",
    });
    out.push_str(" - - 0 1");

    out
}
