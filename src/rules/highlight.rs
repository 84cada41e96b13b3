//! Winning-run highlight layer
//!
//! Highlighting is kept apart from the board: the renderer reads the cell
//! and the flag independently.

use crate::board::{Bitboard, Board, Cell};

use super::win::WinRecord;

/// Flag every cell of the winning run described by `record`.
///
/// Walks out from the anchor in both signs of the winning axis while the
/// cells hold the winner's mark.
#[must_use]
pub fn highlight_win(board: &Board, record: &WinRecord) -> Bitboard {
    let mut flags = Bitboard::new(board.rows(), board.cols());
    let winner = Cell::Taken(record.side);
    if board.get(record.anchor) != winner {
        return flags;
    }

    flags.set(record.anchor);
    for step in record.direction.signs() {
        for pos in board
            .ray(record.anchor, step)
            .take_while(|&p| board.get(p) == winner)
        {
            flags.set(pos);
        }
    }
    flags
}
