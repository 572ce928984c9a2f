//! Console commands.

use std::str::FromStr;

use kestrel_board::{Move, ParseSquareError, Square};

/// One line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Leave the session.
    Quit,
    /// Print the current position as fen.
    Fen,
    /// List the legal destinations of a square.
    Moves(Square),
    /// Play a move, given as two coordinates.
    Play(Move),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("empty input")]
    Empty,
    #[error("Invalid position format! Use 'e2' to 'e4'.")]
    Position(#[from] ParseSquareError),
    #[error("expected a move such as 'e2 e4', 'moves e2', 'fen' or 'quit'")]
    Unknown,
}

/// Words read so far that do not form a command yet.
///
/// A lone coordinate or a bare `moves` waits for the next line, so `e2` and `e4` may be
/// entered separately.
#[derive(Debug, Default)]
pub struct Pending(Vec<String>);

impl Pending {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Add a line of input, returning a command once the words are complete.
    pub fn feed(&mut self, line: &str) -> Option<Result<Command, CommandError>> {
        self.0.extend(line.split_whitespace().map(str::to_owned));

        if let [word] = self.0.as_slice() {
            if word == "moves" || Square::parse(word).is_some() {
                return None;
            }
        }

        let words = std::mem::take(&mut self.0);
        Some(words.join(" ").parse())
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let words: Vec<&str> = s.split_whitespace().collect();

        match words.as_slice() {
            [] => Err(CommandError::Empty),
            ["quit"] => Ok(Self::Quit),
            ["fen"] => Ok(Self::Fen),
            ["moves", square] => Ok(Self::Moves(square.parse()?)),
            [from, to] => Ok(Self::Play(Move::new(from.parse()?, to.parse()?))),
            _ => Err(CommandError::Unknown),
        }
    }
}
