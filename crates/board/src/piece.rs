//! Piece specific definitions.

use std::ops::Not;

use strum::{Display, EnumCount, EnumIter, FromRepr};

/// Represents a player or a piece's color.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumCount, EnumIter, FromRepr)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Get the opposite color for this player.
    #[inline]
    pub const fn opposite(&self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    /// Row pawns of this color start on.
    #[inline]
    pub const fn pawn_row(&self) -> u8 {
        match self {
            Self::White => 6,
            Self::Black => 1,
        }
    }

    /// Row delta of a pawn advancing for this color.
    ///
    /// White moves towards row 0 (rank 8), black towards row 7 (rank 1).
    #[inline]
    pub const fn forward(&self) -> i8 {
        match self {
            Self::White => -1,
            Self::Black => 1,
        }
    }
}

impl Not for Color {
    type Output = Self;

    /// Does [`Color::opposite`].
    #[inline]
    fn not(self) -> Self::Output {
        self.opposite()
    }
}

/// All possible piece types.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumCount, EnumIter, FromRepr)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Uppercase letter for this kind.
    #[inline]
    #[rustfmt::skip]
    pub const fn as_char(&self) -> char {
        match self {
            Self::Pawn   => 'P',
            Self::Knight => 'N',
            Self::Bishop => 'B',
            Self::Rook   => 'R',
            Self::Queen  => 'Q',
            Self::King   => 'K',
        }
    }

    /// Case-insensitive inverse of [`PieceKind::as_char`].
    #[inline]
    pub const fn from_char(c: char) -> Option<Self> {
        let kind = match c.to_ascii_uppercase() {
            'P' => Self::Pawn,
            'N' => Self::Knight,
            'B' => Self::Bishop,
            'R' => Self::Rook,
            'Q' => Self::Queen,
            'K' => Self::King,
            _ => return None,
        };

        Some(kind)
    }
}

/// Piece belonging to a side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    /// Standard representation for this piece, uppercase for white and lowercase for black.
    #[inline]
    pub const fn as_char(&self) -> char {
        let c = self.kind.as_char();

        match self.color {
            Color::White => c,
            Color::Black => c.to_ascii_lowercase(),
        }
    }

    /// Parse a piece letter, the case selecting the color.
    #[inline]
    pub const fn from_char(c: char) -> Option<Self> {
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };

        match PieceKind::from_char(c) {
            Some(kind) => Some(Self { color, kind }),
            None => None,
        }
    }
}
