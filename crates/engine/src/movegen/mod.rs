//! Pseudo-legal move generator.
//!
//! Destinations follow the piece's movement pattern and ignore whether the mover's own king is
//! left in check. See [`crate::legal`] for that.

use kestrel_board::{Board, Color, Move, PieceKind, Square};
use smallvec::SmallVec;

use tables::*;
use PieceKind::*;

mod tables;

/// Ordered destinations for one piece.
///
/// A queen in the open reaches 27 squares, so this never spills.
pub type Destinations = SmallVec<[Square; 32]>;

/// Move generator over a borrowed board.
#[derive(Debug, Clone, Copy)]
pub struct Generator<'a> {
    board: &'a Board,
}

impl<'a> Generator<'a> {
    #[inline]
    pub const fn new(board: &'a Board) -> Self {
        Self { board }
    }

    /// Destinations of the piece on `square`, empty for an empty square.
    ///
    /// The order is fixed by the step and ray tables.
    pub fn pseudo_moves(&self, square: Square) -> Destinations {
        let mut moves = Destinations::new();

        let Some(piece) = self.board.get(square) else {
            return moves;
        };

        match piece.kind {
            Pawn => self.pawn_moves(square, piece.color, &mut moves),
            Knight => self.step_moves(square, piece.color, &KNIGHT_OFFSETS, &mut moves),
            Bishop => self.sliding_moves(square, piece.color, &DIAGONAL_RAYS, &mut moves),
            Rook => self.sliding_moves(square, piece.color, &ORTHOGONAL_RAYS, &mut moves),
            Queen => {
                self.sliding_moves(square, piece.color, &DIAGONAL_RAYS, &mut moves);
                self.sliding_moves(square, piece.color, &ORTHOGONAL_RAYS, &mut moves);
            }
            King => self.step_moves(square, piece.color, &KING_OFFSETS, &mut moves),
        }

        moves
    }

    /// Whether `m.to` is among the pseudo-legal destinations of `m.from`.
    #[inline]
    pub fn is_pseudo_legal(&self, m: Move) -> bool {
        self.pseudo_moves(m.from).contains(&m.to)
    }

    /// Empty or enemy-occupied.
    #[inline]
    fn can_land(&self, square: Square, color: Color) -> bool {
        self.board.color_at(square) != Some(color)
    }

    fn step_moves(
        &self,
        square: Square,
        color: Color,
        offsets: &[(i8, i8)],
        moves: &mut Destinations,
    ) {
        for &(d_row, d_col) in offsets {
            if let Some(to) = square.offset(d_row, d_col) {
                if self.can_land(to, color) {
                    moves.push(to);
                }
            }
        }
    }

    fn sliding_moves(
        &self,
        square: Square,
        color: Color,
        rays: &[(i8, i8)],
        moves: &mut Destinations,
    ) {
        for &(d_row, d_col) in rays {
            let mut cursor = square;

            while let Some(to) = cursor.offset(d_row, d_col) {
                match self.board.color_at(to) {
                    None => moves.push(to),
                    Some(other) => {
                        if other != color {
                            moves.push(to);
                        }
                        break;
                    }
                }

                cursor = to;
            }
        }
    }

    fn pawn_moves(&self, square: Square, color: Color, moves: &mut Destinations) {
        let forward = color.forward();

        // captures share this row, whether or not the double push below is generated
        let Some(single) = square.offset(forward, 0) else {
            return;
        };

        if self.board.get(single).is_none() {
            moves.push(single);

            if square.row() == color.pawn_row() {
                if let Some(double) = single.offset(forward, 0) {
                    if self.board.get(double).is_none() {
                        moves.push(double);
                    }
                }
            }
        }

        for d_col in PAWN_CAPTURES {
            if let Some(to) = single.offset(0, d_col) {
                if self.board.color_at(to) == Some(color.opposite()) {
                    moves.push(to);
                }
            }
        }
    }
}

#[cfg(test)]
mod test {
    use kestrel_board::{Piece, Square};

    use super::*;

    struct MoveTester {
        pub name: &'static str,
        pub sq: &'static str,
        pub fen: &'static str,
        pub result: &'static [&'static str],
    }

    impl MoveTester {
        pub fn check(&self) {
            let state = kestrel_fen::from_str(self.fen)
                .unwrap_or_else(|_| panic!("`{}` failed due to bad fen", self.name));
            let square = Square::parse(self.sq)
                .unwrap_or_else(|| panic!("`{}` failed due to bad square", self.name));

            let result: Vec<String> = Generator::new(&state.board)
                .pseudo_moves(square)
                .iter()
                .map(Square::to_string)
                .collect();

            assert_eq!(result, self.result, "`{}` failed", self.name);
        }
    }

    const START: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1";

    #[test]
    fn knight_moves() {
        let tests = [
            MoveTester {
                name: "start knight",
                sq: "b1",
                fen: START,
                result: &["c3", "a3"],
            },
            MoveTester {
                name: "knight middle",
                sq: "d4",
                fen: "4k3/8/8/8/3N4/8/8/4K3 w - - 0 1",
                result: &["e2", "c2", "e6", "c6", "f3", "b3", "f5", "b5"],
            },
            MoveTester {
                name: "knight blocked by own pieces",
                sq: "d4",
                fen: "4k3/8/2P1p3/8/3N4/5P2/8/4K3 w - - 0 1",
                result: &["e2", "c2", "e6", "b3", "f5", "b5"],
            },
        ];

        for test in tests {
            test.check();
        }
    }

    #[test]
    fn king_moves() {
        let tests = [
            MoveTester {
                name: "king corner",
                sq: "a1",
                fen: "4k3/8/8/8/8/8/8/K7 w - - 0 1",
                result: &["a2", "b1", "b2"],
            },
            MoveTester {
                name: "king start",
                sq: "e1",
                fen: START,
                result: &[],
            },
        ];

        for test in tests {
            test.check();
        }
    }

    #[test]
    fn sliding_moves() {
        let tests = [
            MoveTester {
                name: "rook stops at own piece",
                sq: "a1",
                fen: "4k3/8/8/8/P7/8/8/R3K3 w - - 0 1",
                result: &["a2", "a3", "b1", "c1", "d1"],
            },
            MoveTester {
                name: "rook captures and stops",
                sq: "d4",
                fen: "4k3/3p4/8/8/1p1R4/8/8/4K3 w - - 0 1",
                result: &["d3", "d2", "d1", "d5", "d6", "d7", "e4", "f4", "g4", "h4", "c4", "b4"],
            },
            MoveTester {
                name: "bishop start",
                sq: "c1",
                fen: START,
                result: &[],
            },
            MoveTester {
                name: "queen diagonals before files",
                sq: "h8",
                fen: "6pq/6P1/8/8/8/8/8/k6K b - - 0 1",
                result: &["g7", "h7", "h6", "h5", "h4", "h3", "h2", "h1"],
            },
        ];

        for test in tests {
            test.check();
        }
    }

    #[test]
    fn pawn_moves() {
        let tests = [
            MoveTester {
                name: "white double push",
                sq: "e2",
                fen: START,
                result: &["e3", "e4"],
            },
            MoveTester {
                name: "black double push",
                sq: "d7",
                fen: START,
                result: &["d6", "d5"],
            },
            MoveTester {
                name: "double push blocked on far square",
                sq: "e2",
                fen: "4k3/8/8/8/4n3/8/4P3/4K3 w - - 0 1",
                result: &["e3"],
            },
            MoveTester {
                name: "blocked pawn cannot jump",
                sq: "e2",
                fen: "4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1",
                result: &[],
            },
            MoveTester {
                name: "no double push off the start row",
                sq: "e3",
                fen: "4k3/8/8/8/8/4P3/8/4K3 w - - 0 1",
                result: &["e4"],
            },
            MoveTester {
                name: "captures only enemies",
                sq: "e4",
                fen: "4k3/8/8/3p1P2/4P3/8/8/4K3 w - - 0 1",
                result: &["e5", "d5"],
            },
            MoveTester {
                name: "black captures downwards",
                sq: "e5",
                fen: "4k3/8/8/4p3/3P1N2/8/8/4K3 b - - 0 1",
                result: &["e4", "d4", "f4"],
            },
            MoveTester {
                name: "pawn on last row is stuck",
                sq: "a8",
                fen: "P3k3/8/8/8/8/8/8/4K3 w - - 0 1",
                result: &[],
            },
        ];

        for test in tests {
            test.check();
        }
    }

    #[test]
    fn pawn_capture_uses_single_step_row() {
        // an enemy on the double push row is out of reach even when the double push is open
        MoveTester {
            name: "enemy two rows ahead",
            sq: "e2",
            fen: "4k3/8/8/8/3n4/8/4P3/4K3 w - - 0 1",
            result: &["e3", "e4"],
        }
        .check();

        MoveTester {
            name: "enemy one row ahead with double push",
            sq: "e2",
            fen: "4k3/8/8/8/8/3n4/4P3/4K3 w - - 0 1",
            result: &["e3", "e4", "d3"],
        }
        .check();

        MoveTester {
            name: "black mirror",
            sq: "d7",
            fen: "4k3/3p4/8/4N3/8/8/8/4K3 b - - 0 1",
            result: &["d6", "d5"],
        }
        .check();
    }

    #[test]
    fn empty_square() {
        let board = kestrel_board::Board::starting_position();
        let e4 = Square::parse("e4").unwrap();

        assert!(Generator::new(&board).pseudo_moves(e4).is_empty());
    }

    #[test]
    fn color_of_mover_comes_from_board() {
        // black rook generated on a white-to-move state
        let state = kestrel_fen::from_str("r3k3/8/8/8/8/8/8/R3K3 w - - 0 1").unwrap();
        let a8 = Square::parse("a8").unwrap();
        let moves = Generator::new(&state.board).pseudo_moves(a8);

        assert_eq!(state.board.get(a8), Piece::from_char('r'));
        assert!(moves.contains(&Square::parse("a1").unwrap()));
        assert!(!moves.contains(&Square::parse("e8").unwrap()));
    }
}
