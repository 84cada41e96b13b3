//! Board representation for m,n,k games

pub mod bitboard;
pub mod board;


// Re-exports
pub use bitboard::Bitboard;
pub use board::{Board, Ray};

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// Largest row or column count (one letter per column)
pub const MAX_DIM: u8 = 26;

/// The two sides of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
pub enum Side {
    X,
    O,
}

impl Side {
    /// Get the other side
    #[inline]
    pub fn opponent(self) -> Side {
        match self {
            Side::X => Side::O,
            Side::O => Side::X,
        }
    }

    #[inline]
    pub fn symbol(self) -> char {
        match self {
            Side::X => 'X',
            Side::O => 'O',
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Side {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "X" | "x" => Ok(Side::X),
            "O" | "o" => Ok(Side::O),
            other => Err(format!("expected X or O, got {other:?}")),
        }
    }
}

/// Contents of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Taken(Side),
}

impl Cell {
    #[inline]
    pub fn side(self) -> Option<Side> {
        match self {
            Cell::Empty => None,
            Cell::Taken(side) => Some(side),
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// Position on the board, ordered row-major
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }
}

/// One of the four line axes. Each axis is scanned in both signs.
///
/// The declaration order is the scan order; ties between axes go to the
/// one declared first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// (1, 1)
    Diagonal,
    /// (1, -1)
    AntiDiagonal,
    /// (1, 0)
    Vertical,
    /// (0, 1)
    Horizontal,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Diagonal,
        Direction::AntiDiagonal,
        Direction::Vertical,
        Direction::Horizontal,
    ];

    /// Forward (row, col) step
    #[inline]
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Direction::Diagonal => (1, 1),
            Direction::AntiDiagonal => (1, -1),
            Direction::Vertical => (1, 0),
            Direction::Horizontal => (0, 1),
        }
    }

    /// Backward (row, col) step
    #[inline]
    pub const fn reversed(self) -> (i8, i8) {
        let (dr, dc) = self.delta();
        (-dr, -dc)
    }

    /// Both signed steps, forward first
    #[inline]
    pub const fn signs(self) -> [(i8, i8); 2] {
        [self.delta(), self.reversed()]
    }
}

/// Build a board from rows of `X`, `O` and `.` characters.
#[cfg(test)]
pub(crate) fn board_from(rows: &[&str], win_len: u8) -> Board {
    let cols = rows[0].len() as u8;
    let mut board = Board::new(rows.len() as u8, cols, win_len).unwrap();
    for (r, line) in rows.iter().enumerate() {
        for (c, ch) in line.chars().enumerate() {
            let pos = Pos::new(r as u8, c as u8);
            match ch {
                'X' => board.place(pos, Side::X).unwrap(),
                'O' => board.place(pos, Side::O).unwrap(),
                _ => {}
            }
        }
    }
    board
}
