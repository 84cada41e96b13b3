//! Candidate frontiers
//!
//! A side's frontier is the set of empty cells next to at least one of its
//! marks (any of the eight neighbors). The engine only looks at these
//! cells. Frontiers are updated incrementally after each placement so move
//! selection never has to rescan the whole board.
//!
//! Candidates are kept in a `BTreeSet`, so iteration is always row-major.

use std::collections::BTreeSet;

use crate::board::{Board, Direction, Pos, Side};

/// Empty cells adjacent to one side's marks, ordered by (row, col)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frontier {
    cells: BTreeSet<Pos>,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        self.cells.contains(&pos)
    }

    /// Smallest candidate in (row, col) order
    #[inline]
    pub fn first(&self) -> Option<Pos> {
        self.cells.first().copied()
    }

    /// Candidates in (row, col) order
    pub fn iter(&self) -> impl Iterator<Item = Pos> + '_ {
        self.cells.iter().copied()
    }

    /// Grow the frontier around a freshly placed mark.
    fn extend_around(&mut self, board: &Board, pos: Pos) {
        for direction in Direction::ALL {
            for step in direction.signs() {
                if let Some(next) = board.neighbor(pos, step) {
                    if board.is_empty(next) {
                        self.cells.insert(next);
                    }
                }
            }
        }
    }

    /// Brute-force frontier of `side`: every empty cell with a `side`
    /// neighbor.
    pub fn scan(board: &Board, side: Side) -> Self {
        let mut frontier = Self::new();
        for pos in board.marks(side).iter_ones() {
            frontier.extend_around(board, pos);
        }
        frontier
    }
}

/// Both sides' frontiers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frontiers {
    x: Frontier,
    o: Frontier,
}

impl Frontiers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild both frontiers from scratch
    pub fn scan(board: &Board) -> Self {
        Self {
            x: Frontier::scan(board, Side::X),
            o: Frontier::scan(board, Side::O),
        }
    }

    #[inline]
    pub fn get(&self, side: Side) -> &Frontier {
        match side {
            Side::X => &self.x,
            Side::O => &self.o,
        }
    }

    #[inline]
    fn get_mut(&mut self, side: Side) -> &mut Frontier {
        match side {
            Side::X => &mut self.x,
            Side::O => &mut self.o,
        }
    }

    /// Update after `side` has been placed at `pos` on `board`.
    ///
    /// `pos` leaves both frontiers; only `side`'s frontier grows.
    pub fn on_placement(&mut self, board: &Board, pos: Pos, side: Side) {
        debug_assert!(!board.is_empty(pos), "update runs after the placement");
        self.x.cells.remove(&pos);
        self.o.cells.remove(&pos);
        self.get_mut(side).extend_around(board, pos);
    }
}
