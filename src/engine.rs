//! Move engine for the computer side
//!
//! The engine is a single-ply greedy heuristic. It never searches ahead;
//! it scores the cells in both frontiers by the runs they would make and
//! picks by a fixed priority:
//!
//! 1. **Opening**: empty board, play the center
//! 2. **Adjacent**: no own marks yet, play next to the opponent
//! 3. **Completion**: a move that makes K in a row
//! 4. **Progress / Shadow**: nothing useful of our own, fall back
//! 5. **Block**: the opponent is one move from an open K-1 (or K)
//! 6. **NearWin**: make our own open K-1
//! 7. **Offense**: otherwise extend our longest finishable run
//!
//! Frontiers are iterated in (row, col) order, so every tie resolves the
//! same way on every run.
//!
//! # Example
//!
//! ```
//! use mnk::{Board, Engine, Frontiers, Pos, Side};
//!
//! let mut board = Board::new(3, 3, 3).unwrap();
//! let mut frontiers = Frontiers::new();
//! for pos in [Pos::new(0, 0), Pos::new(0, 1)] {
//!     board.place(pos, Side::X).unwrap();
//!     frontiers.on_placement(&board, pos, Side::X);
//! }
//!
//! let engine = Engine::new();
//! assert_eq!(engine.select_move(&board, &frontiers, Side::X), Some(Pos::new(0, 2)));
//! ```

use std::time::Instant;

use tracing::{debug, instrument};

use crate::board::{Board, Pos, Side};
use crate::rules::{finishability, longest_run, space_around, Run};
use crate::search::{Frontier, Frontiers};

/// Which rule of the priority list produced the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionKind {
    /// Empty board: the center cell
    Opening,
    /// No own marks yet: first cell next to the opponent
    Adjacent,
    /// Completes K in a row
    Completion,
    /// No runs worth anything on either side: first own candidate
    Progress,
    /// No finishable own candidate: the opponent's best cell
    Shadow,
    /// Blocks the opponent's threat
    Block,
    /// Makes an open run of K-1
    NearWin,
    /// Extends the longest finishable own run
    Offense,
}

/// Result of a move selection with details for display and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    /// Chosen cell, `None` only on a full board
    pub best_move: Option<Pos>,
    /// Run length behind the choice (own or opponent's, depending on kind)
    pub run: usize,
    pub kind: SelectionKind,
    /// Frontier cells evaluated
    pub candidates: usize,
    /// Time taken in microseconds
    pub time_us: u64,
}

impl MoveResult {
    #[inline]
    fn new(pos: Pos, run: usize, kind: SelectionKind, candidates: usize, start: Instant) -> Self {
        Self {
            best_move: Some(pos),
            run,
            kind,
            candidates,
            time_us: start.elapsed().as_micros() as u64,
        }
    }

    #[inline]
    fn no_move(start: Instant) -> Self {
        Self {
            best_move: None,
            run: 0,
            kind: SelectionKind::Progress,
            candidates: 0,
            time_us: start.elapsed().as_micros() as u64,
        }
    }
}

/// Best cell found in one frontier scan
#[derive(Debug, Clone, Copy)]
struct Candidate {
    pos: Pos,
    run: Run,
}

/// Scan `frontier` in order, keeping the cell with the longest run.
///
/// A later cell with an equal run takes over when its run is open at both
/// ends.
fn best_candidate<F>(board: &Board, frontier: &Frontier, side: Side, eval: F) -> Option<Candidate>
where
    F: Fn(&Board, Pos, Side) -> Option<Run>,
{
    let mut best: Option<Candidate> = None;
    for pos in frontier.iter() {
        let Some(run) = eval(board, pos, side) else {
            continue;
        };
        let better = match best {
            None => true,
            Some(b) if run.len > b.run.len => true,
            Some(b) if run.len == b.run.len => space_around(board, pos, run.direction, side),
            Some(_) => false,
        };
        if better {
            best = Some(Candidate { pos, run });
        }
    }
    best
}

/// Greedy single-ply move engine.
///
/// The engine holds no state between moves; the frontiers it reads are
/// owned by the game session.
#[derive(Debug, Clone, Copy, Default)]
pub struct Engine;

impl Engine {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Get the move for `side`, or `None` on a full board.
    #[must_use]
    pub fn select_move(&self, board: &Board, frontiers: &Frontiers, side: Side) -> Option<Pos> {
        self.select_move_with_stats(board, frontiers, side).best_move
    }

    /// Get the move for `side` together with the rule that chose it.
    #[must_use]
    #[instrument(level = "debug", skip(self, board, frontiers))]
    pub fn select_move_with_stats(
        &self,
        board: &Board,
        frontiers: &Frontiers,
        side: Side,
    ) -> MoveResult {
        let start = Instant::now();
        let result = self.decide(board, frontiers, side, start);
        debug!(
            kind = ?result.kind,
            best_move = ?result.best_move,
            run = result.run,
            candidates = result.candidates,
            time_us = result.time_us,
            "move selected"
        );
        result
    }

    fn decide(&self, board: &Board, frontiers: &Frontiers, side: Side, start: Instant) -> MoveResult {
        use SelectionKind::*;

        if board.is_full() {
            return MoveResult::no_move(start);
        }

        let opponent = side.opponent();
        let own = frontiers.get(side);
        let theirs = frontiers.get(opponent);
        let win_len = board.win_len() as usize;

        // 1-2. Nothing of ours on the board yet
        if own.is_empty() {
            return match theirs.first() {
                None => MoveResult::new(board.center(), 0, Opening, 0, start),
                Some(pos) => MoveResult::new(pos, 0, Adjacent, theirs.len(), start),
            };
        }

        // 3-4. Our best finishable cell; a completing move ends the search
        let mine = best_candidate(board, own, side, finishability);
        if let Some(m) = mine {
            if m.run.len >= win_len {
                return MoveResult::new(m.pos, m.run.len, Completion, own.len(), start);
            }
        }

        // 5. The opponent's longest run through each of its candidates
        let threat = best_candidate(board, theirs, opponent, |b, p, s| Some(longest_run(b, p, s)));
        let evaluated = own.len() + theirs.len();

        let mine = match (mine, threat) {
            // 6. Own frontier is non-empty here
            (None, None) => {
                let pos = own.first().unwrap_or_else(|| board.center());
                return MoveResult::new(pos, 0, Progress, evaluated, start);
            }
            (None, Some(t)) => return MoveResult::new(t.pos, t.run.len, Shadow, evaluated, start),
            (Some(m), _) => m,
        };

        // 7. Block a threat one move from completion
        if let Some(t) = threat {
            let open = || space_around(board, t.pos, t.run.direction, opponent);
            if t.run.len >= win_len || (t.run.len + 1 == win_len && open()) {
                return MoveResult::new(t.pos, t.run.len, Block, evaluated, start);
            }
        }

        // 8. Open K-1 of our own
        if mine.run.len + 1 == win_len && space_around(board, mine.pos, mine.run.direction, side) {
            return MoveResult::new(mine.pos, mine.run.len, NearWin, evaluated, start);
        }

        // 9. Best offensive option
        MoveResult::new(mine.pos, mine.run.len, Offense, evaluated, start)
    }
}
