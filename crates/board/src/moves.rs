use std::fmt::Display;

use crate::Square;

/// A move from one square to another.
///
/// Only the endpoints are recorded, the moving piece is whatever occupies `from`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }
}

impl Display for Move {
    /// Formats as the two coordinates the console accepts, e.g. `e2 e4`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.from, self.to)
    }
}
