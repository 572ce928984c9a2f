//! Fen parser implementation.
//!
//! <https://en.wikipedia.org/wiki/Forsyth%E2%80%93Edwards_Notation>

use nom::branch::alt;
use nom::character::complete::{char, one_of, space0, space1};
use nom::combinator::{map, map_opt, verify};
use nom::multi::{many1, separated_list1};
use nom::sequence::Tuple;
use nom::IResult;

use kestrel_board::{Board, Color, GameState, Piece, Square};

/// A single placement character.
#[derive(Debug, Clone, Copy)]
enum Cell {
    /// Run of empty squares.
    Gap(u8),
    Piece(Piece),
}

impl Cell {
    #[inline]
    const fn width(&self) -> u32 {
        match self {
            Self::Gap(n) => *n as u32,
            Self::Piece(_) => 1,
        }
    }
}

fn parse_cell(input: &str) -> IResult<&str, Cell> {
    alt((
        map(one_of("12345678"), |c| Cell::Gap(c as u8 - b'0')),
        map_opt(one_of("PNBRQKpnbrqk"), |c| Piece::from_char(c).map(Cell::Piece)),
    ))(input)
}

fn parse_row(input: &str) -> IResult<&str, Vec<Cell>> {
    verify(many1(parse_cell), |cells: &[Cell]| {
        cells.iter().map(Cell::width).sum::<u32>() == 8
    })(input)
}

fn parse_board(input: &str) -> IResult<&str, Board> {
    let (input, rows) = verify(separated_list1(char('/'), parse_row), |rows: &[Vec<Cell>]| {
        rows.len() == 8
    })(input)?;

    let mut board = Board::default();

    // fen lists rank 8 first, which is row 0
    for (row, cells) in rows.into_iter().enumerate() {
        let mut col = 0;

        for cell in cells {
            match cell {
                Cell::Gap(n) => col += n as i32,
                Cell::Piece(piece) => {
                    if let Some(square) = Square::at(row as i32, col) {
                        board.set(square, Some(piece));
                    }
                    col += 1;
                }
            }
        }
    }

    Ok((input, board))
}

fn parse_active_color(input: &str) -> IResult<&str, Color> {
    map(one_of("wbWB"), |c| match c {
        'w' | 'W' => Color::White,
        _ => Color::Black,
    })(input)
}

/// Parse a game state from the provided FEN string.
///
/// Parsing stops after the active color; the remaining input is returned untouched.
pub fn parse(input: &str) -> IResult<&str, GameState> {
    let (input, (_, board, _, turn)) =
        (space0, parse_board, space1, parse_active_color).parse(input)?;

    Ok((input, GameState { board, turn }))
}
