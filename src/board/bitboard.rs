//! Bitboard over a rows x cols grid

use super::Pos;

/// One bit per cell, row-major, packed into u64 words.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Bitboard {
    bits: Vec<u64>,
    cols: u8,
    cells: usize,
}

impl Bitboard {
    /// Create empty bitboard for a rows x cols grid
    pub fn new(rows: u8, cols: u8) -> Self {
        let cells = rows as usize * cols as usize;
        Self {
            bits: vec![0; cells.div_ceil(64)],
            cols,
            cells,
        }
    }

    #[inline]
    fn index(&self, pos: Pos) -> usize {
        pos.row as usize * self.cols as usize + pos.col as usize
    }

    /// Set a bit at position
    #[inline]
    pub fn set(&mut self, pos: Pos) {
        let idx = self.index(pos);
        self.bits[idx / 64] |= 1u64 << (idx % 64);
    }

    /// Check if bit is set at position
    #[inline]
    pub fn get(&self, pos: Pos) -> bool {
        let idx = self.index(pos);
        idx < self.cells && (self.bits[idx / 64] >> (idx % 64)) & 1 == 1
    }

    /// Count total set bits (popcount)
    #[inline]
    pub fn count(&self) -> u32 {
        self.bits.iter().map(|b| b.count_ones()).sum()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits.iter().all(|&b| b == 0)
    }

    /// Iterate over set positions in row-major order
    pub fn iter_ones(&self) -> BitboardIter<'_> {
        BitboardIter {
            board: self,
            word_idx: 0,
            current_word: self.bits.first().copied().unwrap_or(0),
        }
    }
}

/// Iterator over set bits in a Bitboard
pub struct BitboardIter<'a> {
    board: &'a Bitboard,
    word_idx: usize,
    current_word: u64,
}

impl Iterator for BitboardIter<'_> {
    type Item = Pos;

    fn next(&mut self) -> Option<Self::Item> {
        while self.current_word == 0 {
            self.word_idx += 1;
            if self.word_idx >= self.board.bits.len() {
                return None;
            }
            self.current_word = self.board.bits[self.word_idx];
        }

        let bit_pos = self.current_word.trailing_zeros() as usize;
        let idx = self.word_idx * 64 + bit_pos;

        // Clear the bit we just found
        self.current_word &= self.current_word - 1;

        let cols = self.board.cols as usize;
        Some(Pos::new((idx / cols) as u8, (idx % cols) as u8))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get() {
        let mut bb = Bitboard::new(26, 26);
        let pos = Pos::new(25, 25);
        assert!(!bb.get(pos));
        bb.set(pos);
        assert!(bb.get(pos));
        assert_eq!(bb.count(), 1);
        assert!(!bb.get(Pos::new(25, 24)));
    }

    #[test]
    fn test_iter_ones_row_major() {
        let mut bb = Bitboard::new(10, 7);
        let cells = [Pos::new(9, 6), Pos::new(0, 3), Pos::new(4, 0), Pos::new(9, 1)];
        for pos in cells {
            bb.set(pos);
        }
        let found: Vec<Pos> = bb.iter_ones().collect();
        assert_eq!(
            found,
            vec![Pos::new(0, 3), Pos::new(4, 0), Pos::new(9, 1), Pos::new(9, 6)]
        );
    }

    #[test]
    fn test_word_boundary() {
        // 8x8 = 64 cells fills exactly one word
        let mut bb = Bitboard::new(8, 8);
        bb.set(Pos::new(7, 7));
        bb.set(Pos::new(0, 0));
        assert_eq!(bb.iter_ones().count(), 2);
        assert_eq!(bb.bits.len(), 1);
    }
}
