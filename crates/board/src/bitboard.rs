//! BitBoard utilities.

use std::fmt::Display;

use derive_more::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

use crate::Square;

/// Represents the 8x8 grid as a bitboard.
///
/// Bit `n` is the square with index `n`, so bit 0 is `a8` and bit 63 is `h1`.
#[repr(transparent)]
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    // num traits
    Not,
    BitAnd,
    BitAndAssign,
    BitOr,
    BitOrAssign,
    BitXor,
    BitXorAssign,
)]
pub struct BitBoard(pub u64);

impl BitBoard {
    pub const ZERO: Self = Self(0);

    /// Get the value at this position.
    #[inline]
    pub const fn get(&self, square: Square) -> bool {
        self.0 & (1 << square.0) != 0
    }

    /// Set the value at this position.
    #[inline]
    pub fn set(&mut self, square: Square, value: bool) {
        let reset = !(1 << square.0);
        let mask = u64::from(value) << square.0;
        self.0 = (self.0 & reset) | mask;
    }

    /// Check if all bits are set to 0.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Number of set squares.
    #[inline]
    pub const fn count(&self) -> u32 {
        self.0.count_ones()
    }

    /// Iterate over the set squares in ascending index order (row-major, top-left first).
    #[inline]
    pub const fn set_iter(&self) -> SetIter {
        SetIter(self.0)
    }
}

impl PartialEq<u64> for BitBoard {
    #[inline]
    fn eq(&self, other: &u64) -> bool {
        self.0.eq(other)
    }
}

impl Display for BitBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for index in 0..64 {
            write!(f, "{} ", self.get(Square::from_index_unchecked(index)) as u8)?;

            if index % 8 == 7 {
                writeln!(f)?;
            }
        }

        Ok(())
    }
}

/// Iterator over the set squares of a [`BitBoard`].
#[derive(Debug, Clone)]
pub struct SetIter(u64);

impl Iterator for SetIter {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.0 == 0 {
            return None;
        }

        let index = self.0.trailing_zeros() as u8;
        // clear lowest set bit
        self.0 &= self.0 - 1;

        Some(Square::from_index_unchecked(index))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for SetIter {}
