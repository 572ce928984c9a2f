use std::fmt::Display;
use std::str::FromStr;

use strum::EnumCount;

pub mod bitboard;
pub mod moves;
pub mod piece;
pub mod state;

pub use bitboard::*;
pub use moves::*;
pub use piece::*;
pub use state::*;
pub use strum::IntoEnumIterator;

/// A position on the board.
///
/// Stored as `row * 8 + col`, where row 0 is rank 8 and col 0 is file a.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square(pub(crate) u8);

impl Square {
    /// Whether a (row, col) pair lies on the board.
    #[inline]
    pub const fn is_valid(row: i32, col: i32) -> bool {
        row >= 0 && row < 8 && col >= 0 && col < 8
    }

    /// The square at a particular row and column.
    #[inline]
    pub const fn at(row: i32, col: i32) -> Option<Self> {
        if !Self::is_valid(row, col) {
            return None;
        }

        Some(Self((row * 8 + col) as u8))
    }

    #[inline]
    pub const fn from_index_unchecked(index: u8) -> Self {
        Self(index)
    }

    /// Row of this square, 0 being the top (rank 8).
    #[inline]
    pub const fn row(&self) -> u8 {
        self.0 / 8
    }

    /// Column of this square, 0 being file a.
    #[inline]
    pub const fn col(&self) -> u8 {
        self.0 % 8
    }

    /// The square shifted by a (row, col) delta, if it stays on the board.
    #[inline]
    pub const fn offset(&self, d_row: i8, d_col: i8) -> Option<Self> {
        Self::at(
            self.row() as i32 + d_row as i32,
            self.col() as i32 + d_col as i32,
        )
    }

    /// Parse a coordinate such as `e2`, [`None`] standing for a malformed one.
    #[inline]
    pub fn parse(s: &str) -> Option<Self> {
        s.parse().ok()
    }
}

/// Reasons a coordinate string is not a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ParseSquareError {
    #[error("expected a file and a rank, found {0} characters")]
    Length(usize),
    #[error("file `{0}` is not within a-h")]
    File(char),
    #[error("rank `{0}` is not within 1-8")]
    Rank(char),
}

impl FromStr for Square {
    type Err = ParseSquareError;

    /// Determine a square's position from a `<file a-h><rank 1-8>` coordinate.
    ///
    /// The file letter is case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let &[raw_file, rank] = s.as_bytes() else {
            return Err(ParseSquareError::Length(s.chars().count()));
        };

        let file = raw_file.to_ascii_lowercase();
        if !(b'a'..=b'h').contains(&file) {
            return Err(ParseSquareError::File(raw_file as char));
        }
        if !(b'1'..=b'8').contains(&rank) {
            return Err(ParseSquareError::Rank(rank as char));
        }

        let row = 8 - (rank - b'0');
        let col = file - b'a';

        Ok(Self(row * 8 + col))
    }
}

impl Display for Square {
    /// Format the square as a coordinate.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{}",
            (b'a' + self.col()) as char,
            (b'8' - self.row()) as char
        )
    }
}

/// Represents the board and all the pieces on it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    /// Cell contents, indexed by [`Square`].
    cells: [Option<Piece>; 64],
    /// Color masks, kept in sync with `cells`.
    color_bb: [BitBoard; Color::COUNT],
}

impl Default for Board {
    #[inline]
    fn default() -> Self {
        Self {
            cells: [None; 64],
            color_bb: [BitBoard::ZERO; Color::COUNT],
        }
    }
}

impl Board {
    const BACK_ROW: [PieceKind; 8] = [
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Rook,
    ];

    /// Standard layout, black on rows 0-1 and white on rows 6-7.
    pub fn starting_position() -> Self {
        let mut board = Self::default();

        for (col, kind) in Self::BACK_ROW.into_iter().enumerate() {
            let col = col as u8;

            board.set(Square(col), Some(Piece::new(Color::Black, kind)));
            board.set(Square(8 + col), Some(Piece::new(Color::Black, PieceKind::Pawn)));
            board.set(Square(48 + col), Some(Piece::new(Color::White, PieceKind::Pawn)));
            board.set(Square(56 + col), Some(Piece::new(Color::White, kind)));
        }

        board
    }

    /// Get the piece at a certain square.
    #[inline]
    pub const fn get(&self, square: Square) -> Option<Piece> {
        self.cells[square.0 as usize]
    }

    /// Get the color at a certain square.
    #[inline]
    pub const fn color_at(&self, square: Square) -> Option<Color> {
        match self.cells[square.0 as usize] {
            Some(piece) => Some(piece.color),
            None => None,
        }
    }

    /// Whether both squares are occupied, by pieces of different colors.
    #[inline]
    pub fn are_opponents(&self, a: Square, b: Square) -> bool {
        match (self.color_at(a), self.color_at(b)) {
            (Some(a), Some(b)) => a != b,
            _ => false,
        }
    }

    /// Get the bitboard associated with a certain color.
    #[inline]
    pub const fn get_color_bb(&self, color: Color) -> BitBoard {
        self.color_bb[color as u8 as usize]
    }

    /// Squares owned by a color, in row-major order.
    #[inline]
    pub const fn squares_of(&self, color: Color) -> SetIter {
        self.get_color_bb(color).set_iter()
    }

    /// Number of pieces a color has on the board.
    #[inline]
    pub const fn pieces_of(&self, color: Color) -> u32 {
        self.get_color_bb(color).count()
    }

    /// Set a piece on the board.
    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        if let Some(old) = self.cells[square.0 as usize] {
            self.color_bb[old.color as u8 as usize].set(square, false);
        }
        if let Some(new) = piece {
            self.color_bb[new.color as u8 as usize].set(square, true);
        }

        self.cells[square.0 as usize] = piece;
    }

    /// Move whatever occupies `from` onto `to`, leaving `from` empty.
    ///
    /// No rules are checked. Returns the piece previously on `to`.
    pub fn apply_unchecked(&mut self, m: Move) -> Option<Piece> {
        let moving = self.get(m.from);
        let captured = self.get(m.to);

        self.set(m.to, moving);
        self.set(m.from, None);

        captured
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        const FILES: &str = "  a b c d e f g h";

        writeln!(f, "{FILES}")?;

        for row in 0..8u8 {
            let rank = 8 - row;
            write!(f, "{rank} ")?;

            for col in 0..8 {
                match self.cells[(row * 8 + col) as usize] {
                    Some(piece) => write!(f, "{} ", piece.as_char())?,
                    None => write!(f, ". ")?,
                }
            }

            writeln!(f, "{rank}")?;
        }

        writeln!(f, "{FILES}")
    }
}


#[cfg(test)]
mod board_tests {
    use super::*;

    fn sq(s: &str) -> Square {
        Square::parse(s).unwrap()
    }

    #[test]
    fn starting_counts() {
        let board = Board::starting_position();

        for color in [Color::White, Color::Black] {
            assert_eq!(board.pieces_of(color), 16);

            let kings = board
                .squares_of(color)
                .filter(|&square| board.get(square).map(|p| p.kind) == Some(PieceKind::King))
                .count();
            assert_eq!(kings, 1);
        }

        assert_eq!(board.get(sq("e1")), Some(Piece::new(Color::White, PieceKind::King)));
        assert_eq!(board.get(sq("d8")), Some(Piece::new(Color::Black, PieceKind::Queen)));
        assert_eq!(board.get(sq("e4")), None);
    }

    #[test]
    fn color_queries() {
        let board = Board::starting_position();

        assert_eq!(board.color_at(sq("a2")), Some(Color::White));
        assert_eq!(board.color_at(sq("a7")), Some(Color::Black));
        assert_eq!(board.color_at(sq("a4")), None);

        assert!(board.are_opponents(sq("a2"), sq("a7")));
        assert!(!board.are_opponents(sq("a2"), sq("b2")));
        assert!(!board.are_opponents(sq("a2"), sq("a4")));
        assert!(!board.are_opponents(sq("a4"), sq("a5")));
    }

    #[test]
    fn apply_keeps_masks_in_sync() {
        let mut board = Board::starting_position();

        let captured = board.apply_unchecked(Move::new(sq("d1"), sq("d7")));

        assert_eq!(captured, Some(Piece::new(Color::Black, PieceKind::Pawn)));
        assert_eq!(board.get(sq("d1")), None);
        assert_eq!(board.color_at(sq("d7")), Some(Color::White));
        assert_eq!(board.pieces_of(Color::White), 16);
        assert_eq!(board.pieces_of(Color::Black), 15);
        assert!(!board.get_color_bb(Color::Black).get(sq("d7")));
    }

    #[test]
    fn render() {
        let rendered = GameState::starting().to_string();
        let lines: Vec<_> = rendered.lines().collect();

        assert_eq!(lines[0], "Turn: White");
        assert_eq!(lines[1], "  a b c d e f g h");
        assert_eq!(lines[2], "8 r n b q k b n r 8");
        assert_eq!(lines[5], "5 . . . . . . . . 5");
        assert_eq!(lines[9], "1 R N B Q K B N R 1");
        assert_eq!(lines[10], "  a b c d e f g h");
    }
}
