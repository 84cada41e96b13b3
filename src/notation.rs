//! Text notation for cells and board sizes
//!
//! A cell is written as its column letter followed by its 1-based row, top
//! row first: `B1` is row 0, column 1. A board size is written `RxC`.

use crate::board::{Board, Pos, MAX_DIM};
use crate::error::NotationError;

/// Column letter for a 0-based column
#[inline]
pub fn column_label(col: u8) -> char {
    (b'A' + col) as char
}

/// 1-based row label
#[inline]
pub fn row_label(row: u8) -> u16 {
    row as u16 + 1
}

/// Format a cell as e.g. `C2`
pub fn format_cell(pos: Pos) -> String {
    format!("{}{}", column_label(pos.col), row_label(pos.row))
}

/// Parse a cell like `C2` and check it lies on `board`.
pub fn parse_cell(text: &str, board: &Board) -> Result<Pos, NotationError> {
    let text = text.trim();
    let mut chars = text.chars();
    let letter = chars
        .next()
        .filter(char::is_ascii_uppercase)
        .ok_or_else(|| NotationError::Malformed(text.to_string()))?;
    let digits = chars.as_str();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(NotationError::Malformed(text.to_string()));
    }

    let off_board = || NotationError::OffBoard(text.to_string(), board.rows(), board.cols());
    let col = letter as u8 - b'A';
    let row: u16 = digits.parse().map_err(|_| off_board())?;
    if row == 0 || row > board.rows() as u16 || col >= board.cols() {
        return Err(off_board());
    }
    Ok(Pos::new((row - 1) as u8, col))
}

/// Parse a board size like `3x4` into (rows, cols), each 1..=26.
pub fn parse_size(text: &str) -> Result<(u8, u8), NotationError> {
    let text = text.trim();
    let err = || NotationError::Size(text.to_string());
    let (rows, cols) = text.split_once('x').ok_or_else(err)?;
    let parse = |part: &str| -> Result<u8, NotationError> {
        if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(err());
        }
        part.parse::<u8>()
            .ok()
            .filter(|n| (1..=MAX_DIM).contains(n))
            .ok_or_else(err)
    };
    Ok((parse(rows)?, parse(cols)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_cell() {
        assert_eq!(format_cell(Pos::new(0, 0)), "A1");
        assert_eq!(format_cell(Pos::new(1, 2)), "C2");
        assert_eq!(format_cell(Pos::new(25, 25)), "Z26");
    }

    #[test]
    fn test_parse_cell() {
        let board = Board::new(3, 4, 3).unwrap();
        assert_eq!(parse_cell("B1", &board), Ok(Pos::new(0, 1)));
        assert_eq!(parse_cell(" D3 ", &board), Ok(Pos::new(2, 3)));
    }

    #[test]
    fn test_parse_cell_rejects_malformed() {
        let board = Board::new(3, 3, 3).unwrap();
        for text in ["", "B", "1B", "b1", "B-1", "B1x", "BB1"] {
            assert!(
                matches!(parse_cell(text, &board), Err(NotationError::Malformed(_))),
                "{text:?} should be malformed"
            );
        }
    }

    #[test]
    fn test_parse_cell_rejects_off_board() {
        let board = Board::new(3, 3, 3).unwrap();
        for text in ["D1", "A0", "A4", "C99999"] {
            assert!(
                matches!(parse_cell(text, &board), Err(NotationError::OffBoard(..))),
                "{text:?} should be off the board"
            );
        }
    }

    #[test]
    fn test_round_trip_corner() {
        let board = Board::new(26, 26, 5).unwrap();
        let pos = Pos::new(25, 25);
        assert_eq!(parse_cell(&format_cell(pos), &board), Ok(pos));
    }

    #[test]
    fn test_parse_size() {
        assert_eq!(parse_size("3x4"), Ok((3, 4)));
        assert_eq!(parse_size("26x26"), Ok((26, 26)));
        for text in ["3", "3x", "x3", "0x3", "27x3", "3X4", "3x4x5", "-3x4", "3 x 4"] {
            assert!(parse_size(text).is_err(), "{text:?} should be rejected");
        }
    }
}
