//! Line potential of empty cells
//!
//! These checks look at a candidate empty cell as if `side` had just
//! played there and ask how far the resulting runs could still grow
//! before an opponent mark or the board edge stops them.

use crate::board::{Board, Cell, Direction, Pos, Side};

use super::win::Run;

/// Whether `side` could still complete K in a row through `pos`.
///
/// For each axis this counts `side`'s run through the (hypothetically
/// filled) cell plus the non-opponent cells beyond both ends of that run.
/// Axes where that total reaches K are finishable. Returns the longest own
/// run among the finishable axes, or `None` when every axis is blocked.
#[must_use]
pub fn finishability(board: &Board, pos: Pos, side: Side) -> Option<Run> {
    let own = Cell::Taken(side);
    let blocker = Cell::Taken(side.opponent());
    let win_len = board.win_len() as usize;

    let mut best: Option<Run> = None;
    for direction in Direction::ALL {
        let mut len = 1;
        let mut room = 0;
        for step in direction.signs() {
            let mut ray = board.ray(pos, step).peekable();
            while ray.next_if(|&p| board.get(p) == own).is_some() {
                len += 1;
            }
            room += ray.take_while(|&p| board.get(p) != blocker).count();
        }

        if len + room < win_len {
            continue;
        }
        if best.map_or(true, |b| len > b.len) {
            best = Some(Run { len, direction });
        }
    }
    best
}

/// Whether the run of `side` through `pos` along `direction` is open at
/// both ends: the first cell past the run on each side is empty and on the
/// board.
#[must_use]
pub fn space_around(board: &Board, pos: Pos, direction: Direction, side: Side) -> bool {
    let own = Cell::Taken(side);
    direction.signs().into_iter().all(|step| {
        board
            .ray(pos, step)
            .find(|&p| board.get(p) != own)
            .is_some_and(|p| board.get(p).is_empty())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::board_from;

    #[test]
    fn test_completing_cell_is_finishable() {
        let board = board_from(&["XX.", "...", "..."], 3);
        let run = finishability(&board, Pos::new(0, 2), Side::X).unwrap();
        assert_eq!(run, Run { len: 3, direction: Direction::Horizontal });
    }

    #[test]
    fn test_blocked_line_is_not_finishable() {
        // Row 0 is capped by O and every other axis runs into the O row
        let board = board_from(&["X.O", "OOO", "..."], 3);
        assert!(finishability(&board, Pos::new(0, 1), Side::X).is_none());
    }

    #[test]
    fn test_edge_limits_room() {
        // K=4: the row through (0,1) has only three non-O cells
        let mut board = Board::new(4, 4, 4).unwrap();
        board.place(Pos::new(0, 0), Side::X).unwrap();
        board.place(Pos::new(0, 3), Side::O).unwrap();
        // The column still has room for four
        let run = finishability(&board, Pos::new(0, 1), Side::X).unwrap();
        assert_eq!(run, Run { len: 1, direction: Direction::Vertical });
    }

    #[test]
    fn test_own_marks_beyond_gap_count_as_room() {
        let mut board = Board::new(5, 5, 5).unwrap();
        for col in [0, 2, 4] {
            board.place(Pos::new(2, col), Side::X).unwrap();
        }
        // Own run is (2,0), the candidate and (2,2); (2,3) and (2,4) are room
        let run = finishability(&board, Pos::new(2, 1), Side::X).unwrap();
        assert_eq!(run, Run { len: 3, direction: Direction::Horizontal });
    }

    #[test]
    fn test_k_one_always_finishable() {
        let board = board_from(&["X..O"], 1);
        let run = finishability(&board, Pos::new(0, 1), Side::X).unwrap();
        assert_eq!(run, Run { len: 2, direction: Direction::Horizontal });
    }

    #[test]
    fn test_longest_finishable_run_is_reported() {
        let board = board_from(&["X.X", ".X.", "..."], 3);
        // Candidate (0,1): horizontal gives 3, vertical gives 2
        let run = finishability(&board, Pos::new(0, 1), Side::X).unwrap();
        assert_eq!(run, Run { len: 3, direction: Direction::Horizontal });
    }

    #[test]
    fn test_space_around_open_run() {
        let board = board_from(&[".....", ".XX..", "....."], 3);
        assert!(space_around(&board, Pos::new(1, 3), Direction::Horizontal, Side::X));
    }

    #[test]
    fn test_space_around_blocked_by_opponent() {
        let board = board_from(&[".....", "OXX..", "....."], 3);
        assert!(!space_around(&board, Pos::new(1, 3), Direction::Horizontal, Side::X));
    }

    #[test]
    fn test_space_around_blocked_by_edge() {
        let board = board_from(&["XX.", "...", "..."], 3);
        assert!(!space_around(&board, Pos::new(0, 2), Direction::Horizontal, Side::X));
        // Vertical through (0,2) hits the top edge immediately
        assert!(!space_around(&board, Pos::new(0, 2), Direction::Vertical, Side::X));
        // Diagonal through (1,1): (0,0) is X, then the edge
        assert!(!space_around(&board, Pos::new(1, 1), Direction::Diagonal, Side::X));
        assert!(space_around(&board, Pos::new(1, 1), Direction::Horizontal, Side::X));
    }
}
