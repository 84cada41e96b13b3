//! Win detection: longest run through a cell along the four axes
//!
//! A side wins when the mark it just placed sits on a run of at least K
//! of its own marks along a row, a column or either diagonal.

use crate::board::{Board, Cell, Direction, Pos, Side};

/// Run length along one axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    /// Marks in the run, counting the origin cell
    pub len: usize,
    pub direction: Direction,
}

/// A detected winning run, anchored at the winning move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinRecord {
    pub anchor: Pos,
    pub direction: Direction,
    pub side: Side,
}

/// Marks of `side` adjacent to `pos` along one signed step
#[inline]
pub(crate) fn count_own(board: &Board, pos: Pos, step: (i8, i8), side: Side) -> usize {
    board
        .ray(pos, step)
        .take_while(|&p| board.get(p) == Cell::Taken(side))
        .count()
}

/// Length of the run through `pos` along `direction`, treating `pos` itself
/// as one of `side`'s marks.
#[inline]
pub fn run_length(board: &Board, pos: Pos, side: Side, direction: Direction) -> usize {
    1 + direction
        .signs()
        .into_iter()
        .map(|step| count_own(board, pos, step, side))
        .sum::<usize>()
}

/// Longest run through `pos` over all four axes.
///
/// Ties go to the axis that comes first in [`Direction::ALL`].
pub fn longest_run(board: &Board, pos: Pos, side: Side) -> Run {
    let mut best = Run {
        len: 0,
        direction: Direction::ALL[0],
    };
    for direction in Direction::ALL {
        let len = run_length(board, pos, side, direction);
        if len > best.len {
            best = Run { len, direction };
        }
    }
    best
}

/// Check whether the mark at `pos` completes a run of K for `side`.
///
/// Returns the record needed to highlight the run.
#[must_use]
pub fn check_win(board: &Board, pos: Pos, side: Side) -> Option<WinRecord> {
    let run = longest_run(board, pos, side);
    (run.len >= board.win_len() as usize).then_some(WinRecord {
        anchor: pos,
        direction: run.direction,
        side,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::board_from;

    #[test]
    fn test_horizontal_win() {
        let board = board_from(&["XXX.", "....", "...."], 3);
        assert_eq!(
            check_win(&board, Pos::new(0, 1), Side::X),
            Some(WinRecord {
                anchor: Pos::new(0, 1),
                direction: Direction::Horizontal,
                side: Side::X,
            })
        );
        assert!(check_win(&board, Pos::new(0, 1), Side::O).is_none());
    }

    #[test]
    fn test_one_short_is_not_a_win() {
        // K-1 on each axis
        let rows = board_from(&["XX..", "....", "...."], 3);
        assert!(check_win(&rows, Pos::new(0, 0), Side::X).is_none());

        let cols = board_from(&["O...", "O...", "...."], 3);
        assert!(check_win(&cols, Pos::new(1, 0), Side::O).is_none());

        let diag = board_from(&["X...", ".X..", "...."], 3);
        assert!(check_win(&diag, Pos::new(1, 1), Side::X).is_none());

        let anti = board_from(&["...X", "..X.", "...."], 3);
        assert!(check_win(&anti, Pos::new(0, 3), Side::X).is_none());
    }

    #[test]
    fn test_exact_k_on_each_axis() {
        let cols = board_from(&[".O..", ".O..", ".O.."], 3);
        let win = check_win(&cols, Pos::new(2, 1), Side::O).unwrap();
        assert_eq!(win.direction, Direction::Vertical);

        let diag = board_from(&["X...", ".X..", "..X."], 3);
        let win = check_win(&diag, Pos::new(0, 0), Side::X).unwrap();
        assert_eq!(win.direction, Direction::Diagonal);

        let anti = board_from(&["...X", "..X.", ".X.."], 3);
        let win = check_win(&anti, Pos::new(1, 2), Side::X).unwrap();
        assert_eq!(win.direction, Direction::AntiDiagonal);
    }

    #[test]
    fn test_run_is_symmetric_around_origin() {
        let board = board_from(&["XX.XX"], 1);
        // Filling the gap joins both halves
        assert_eq!(run_length(&board, Pos::new(0, 2), Side::X, Direction::Horizontal), 5);
        assert_eq!(longest_run(&board, Pos::new(0, 2), Side::X).len, 5);
    }

    #[test]
    fn test_longer_than_k_still_wins() {
        let board = board_from(&["XXXX", "....", "...."], 3);
        assert!(check_win(&board, Pos::new(0, 3), Side::X).is_some());
    }

    #[test]
    fn test_tie_goes_to_first_axis() {
        // Horizontal and vertical both length 2; vertical is scanned first
        let board = board_from(&["XX.", "X..", "..."], 3);
        let run = longest_run(&board, Pos::new(0, 0), Side::X);
        assert_eq!(run, Run { len: 2, direction: Direction::Vertical });

        // Isolated mark: every axis is 1, first axis reported
        let board = board_from(&["...", ".X.", "..."], 3);
        let run = longest_run(&board, Pos::new(1, 1), Side::X);
        assert_eq!(run, Run { len: 1, direction: Direction::Diagonal });
    }

    #[test]
    fn test_k_one_wins_immediately() {
        let board = board_from(&["X"], 1);
        assert!(check_win(&board, Pos::new(0, 0), Side::X).is_some());
    }

    #[test]
    fn test_opponent_marks_break_run() {
        let board = board_from(&["XOXX", "....", "...."], 3);
        assert_eq!(longest_run(&board, Pos::new(0, 2), Side::X).len, 2);
        assert!(check_win(&board, Pos::new(0, 2), Side::X).is_none());
    }
}
