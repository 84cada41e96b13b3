//! Board structure with empty-cell tracking

use super::bitboard::Bitboard;
use super::{Cell, Pos, Side, MAX_DIM};
use crate::error::{ConfigError, MoveError};

/// Game board: an R x C grid, the win length K, and the number of empty
/// cells left.
#[derive(Debug, Clone)]
pub struct Board {
    rows: u8,
    cols: u8,
    win_len: u8,
    /// X marks
    x: Bitboard,
    /// O marks
    o: Bitboard,
    /// Always equal to the number of `Cell::Empty` cells
    empty: usize,
}

impl Board {
    /// Create an empty board, validating the dimensions and win length.
    pub fn new(rows: u8, cols: u8, win_len: u8) -> Result<Self, ConfigError> {
        if rows == 0 || rows > MAX_DIM {
            return Err(ConfigError::Rows(rows));
        }
        if cols == 0 || cols > MAX_DIM {
            return Err(ConfigError::Cols(cols));
        }
        let max = rows.min(cols);
        if win_len == 0 || win_len > max {
            return Err(ConfigError::WinLength { win_len, max });
        }

        Ok(Self {
            rows,
            cols,
            win_len,
            x: Bitboard::new(rows, cols),
            o: Bitboard::new(rows, cols),
            empty: rows as usize * cols as usize,
        })
    }

    /// Empty board with the same dimensions and win length
    pub fn cleared(&self) -> Self {
        Self {
            rows: self.rows,
            cols: self.cols,
            win_len: self.win_len,
            x: Bitboard::new(self.rows, self.cols),
            o: Bitboard::new(self.rows, self.cols),
            empty: self.rows as usize * self.cols as usize,
        }
    }

    #[inline]
    pub fn rows(&self) -> u8 {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Marks in a row needed to win
    #[inline]
    pub fn win_len(&self) -> u8 {
        self.win_len
    }

    /// Number of empty cells left
    #[inline]
    pub fn empty_count(&self) -> usize {
        self.empty
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.empty == 0
    }

    /// Range check shared by every scan
    #[inline]
    pub fn in_bounds(&self, row: i16, col: i16) -> bool {
        row >= 0 && row < self.rows as i16 && col >= 0 && col < self.cols as i16
    }

    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// Center cell (R/2, C/2)
    #[inline]
    pub fn center(&self) -> Pos {
        Pos::new(self.rows / 2, self.cols / 2)
    }

    /// Get cell at position. Positions off the board read as empty.
    #[inline]
    pub fn get(&self, pos: Pos) -> Cell {
        if !self.contains(pos) {
            Cell::Empty
        } else if self.x.get(pos) {
            Cell::Taken(Side::X)
        } else if self.o.get(pos) {
            Cell::Taken(Side::O)
        } else {
            Cell::Empty
        }
    }

    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.contains(pos) && !self.x.get(pos) && !self.o.get(pos)
    }

    /// Place a mark on an empty cell.
    ///
    /// Fails without touching the board if the cell is off the board or
    /// already taken.
    pub fn place(&mut self, pos: Pos, side: Side) -> Result<(), MoveError> {
        if !self.contains(pos) {
            return Err(MoveError::OutOfBounds {
                row: pos.row,
                col: pos.col,
            });
        }
        if !self.is_empty(pos) {
            return Err(MoveError::Occupied {
                row: pos.row,
                col: pos.col,
            });
        }

        self.marks_mut(side).set(pos);
        self.empty -= 1;
        Ok(())
    }

    /// Bitboard of a side's marks
    #[inline]
    pub fn marks(&self, side: Side) -> &Bitboard {
        match side {
            Side::X => &self.x,
            Side::O => &self.o,
        }
    }

    #[inline]
    fn marks_mut(&mut self, side: Side) -> &mut Bitboard {
        match side {
            Side::X => &mut self.x,
            Side::O => &mut self.o,
        }
    }

    /// All positions, row-major
    pub fn positions(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| Pos::new(row, col)))
    }

    /// Walk from `from` (exclusive) by `step` until the edge of the board.
    #[inline]
    pub fn ray(&self, from: Pos, step: (i8, i8)) -> Ray {
        Ray {
            row: from.row as i16,
            col: from.col as i16,
            dr: step.0 as i16,
            dc: step.1 as i16,
            rows: self.rows as i16,
            cols: self.cols as i16,
        }
    }

    /// In-bounds neighbor one `step` away
    #[inline]
    pub fn neighbor(&self, from: Pos, step: (i8, i8)) -> Option<Pos> {
        self.ray(from, step).next()
    }
}

/// Successive in-bounds positions along a signed step
#[derive(Debug, Clone)]
pub struct Ray {
    row: i16,
    col: i16,
    dr: i16,
    dc: i16,
    rows: i16,
    cols: i16,
}

impl Iterator for Ray {
    type Item = Pos;

    fn next(&mut self) -> Option<Pos> {
        if self.dr == 0 && self.dc == 0 {
            return None;
        }
        self.row += self.dr;
        self.col += self.dc;
        if self.row < 0 || self.row >= self.rows || self.col < 0 || self.col >= self.cols {
            // Park the ray so it stays exhausted
            self.dr = 0;
            self.dc = 0;
            return None;
        }
        Some(Pos::new(self.row as u8, self.col as u8))
    }
}
