//! One game from first move to win or tie
//!
//! A session owns the board, both candidate frontiers and the highlight
//! layer, and runs every move through the same steps: place the mark,
//! update the frontiers, check for a win, highlight the winning run, check
//! for a full board, pass the turn.

use tracing::{debug, info, instrument};

use crate::board::{Bitboard, Board, Pos, Side};
use crate::config::GameConfig;
use crate::engine::{Engine, MoveResult};
use crate::error::{ConfigError, MoveError};
use crate::rules::{check_win, highlight_win, WinRecord};
use crate::search::Frontiers;

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win { side: Side, record: WinRecord },
    Tie,
}

/// Game session state
#[derive(Debug, Clone)]
pub struct Session {
    config: GameConfig,
    board: Board,
    frontiers: Frontiers,
    highlights: Bitboard,
    engine: Engine,
    turn: Side,
    outcome: Option<Outcome>,
    history: Vec<(Pos, Side)>,
    last_selection: Option<MoveResult>,
}

impl Session {
    /// Start a game with a fresh board.
    #[instrument(level = "info")]
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let board = Board::new(config.rows, config.cols, config.win_len)?;
        info!(
            rows = config.rows,
            cols = config.cols,
            win_len = config.win_len,
            first = %config.first_side(),
            "new game"
        );
        Ok(Self::with_board(config, board))
    }

    /// A new game with the same settings
    pub fn restart(&self) -> Self {
        info!("restarting with the same settings");
        Self::with_board(self.config, self.board.cleared())
    }

    fn with_board(config: GameConfig, board: Board) -> Self {
        Self {
            highlights: Bitboard::new(board.rows(), board.cols()),
            frontiers: Frontiers::new(),
            engine: Engine::new(),
            turn: config.first_side(),
            outcome: None,
            history: Vec::new(),
            last_selection: None,
            board,
            config,
        }
    }

    #[inline]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn frontiers(&self) -> &Frontiers {
        &self.frontiers
    }

    /// Cells of the winning run; empty until someone wins
    #[inline]
    pub fn highlights(&self) -> &Bitboard {
        &self.highlights
    }

    #[inline]
    pub fn is_highlighted(&self, pos: Pos) -> bool {
        self.highlights.get(pos)
    }

    /// Side to move
    #[inline]
    pub fn turn(&self) -> Side {
        self.turn
    }

    #[inline]
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    #[inline]
    pub fn history(&self) -> &[(Pos, Side)] {
        &self.history
    }

    #[inline]
    pub fn last_move(&self) -> Option<Pos> {
        self.history.last().map(|&(pos, _)| pos)
    }

    /// The engine's most recent decision
    #[inline]
    pub fn last_selection(&self) -> Option<&MoveResult> {
        self.last_selection.as_ref()
    }

    /// Check if the engine is to move
    pub fn is_computer_turn(&self) -> bool {
        !self.is_over() && self.config.computer_side() == Some(self.turn)
    }

    /// End-of-game line as the players see it
    pub fn outcome_message(&self) -> Option<String> {
        let message = match (self.outcome?, self.config.computer_side()) {
            (Outcome::Tie, _) => "It's a tie.".to_string(),
            (Outcome::Win { side, .. }, Some(computer)) if side == computer => "You lost.".to_string(),
            (Outcome::Win { .. }, Some(_)) => "You won!".to_string(),
            (Outcome::Win { side, .. }, None) => format!("Player {side} won!"),
        };
        Some(message)
    }

    /// Play a human move for the side to move.
    pub fn play(&mut self, pos: Pos) -> Result<Option<Outcome>, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        if self.is_computer_turn() {
            return Err(MoveError::NotYourTurn);
        }
        self.apply(pos)
    }

    /// Let the engine play for the side to move.
    ///
    /// Returns the cell played.
    pub fn play_computer(&mut self) -> Result<Pos, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        let result = self
            .engine
            .select_move_with_stats(&self.board, &self.frontiers, self.turn);
        self.last_selection = Some(result);
        let pos = result.best_move.ok_or(MoveError::GameOver)?;
        self.apply(pos)?;
        Ok(pos)
    }

    /// Engine recommendation for the side to move, without playing it
    pub fn suggest(&self) -> Option<MoveResult> {
        if self.is_over() {
            return None;
        }
        Some(
            self.engine
                .select_move_with_stats(&self.board, &self.frontiers, self.turn),
        )
    }

    /// Place, update frontiers, check for a win or tie, pass the turn.
    fn apply(&mut self, pos: Pos) -> Result<Option<Outcome>, MoveError> {
        let side = self.turn;
        self.board.place(pos, side)?;
        self.frontiers.on_placement(&self.board, pos, side);
        self.history.push((pos, side));
        debug!(?pos, %side, empty = self.board.empty_count(), "placed");

        if let Some(record) = check_win(&self.board, pos, side) {
            self.highlights = highlight_win(&self.board, &record);
            self.outcome = Some(Outcome::Win { side, record });
            info!(%side, moves = self.history.len(), "game won");
        } else if self.board.is_full() {
            self.outcome = Some(Outcome::Tie);
            info!(moves = self.history.len(), "game tied");
        } else {
            self.turn = side.opponent();
        }
        Ok(self.outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Opponent;
    use crate::engine::SelectionKind;

    fn hotseat(rows: u8, cols: u8, win_len: u8) -> Session {
        Session::new(GameConfig {
            rows,
            cols,
            win_len,
            opponent: Opponent::Human,
            ..GameConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_new_session() {
        let session = Session::new(GameConfig::default()).unwrap();
        assert_eq!(session.turn(), Side::X);
        assert!(!session.is_over());
        assert!(!session.is_computer_turn());
        assert_eq!(session.board().empty_count(), 9);
        assert!(session.highlights().is_empty());
        assert_eq!(session.outcome_message(), None);
    }

    #[test]
    fn test_invalid_config() {
        let config = GameConfig { win_len: 4, ..GameConfig::default() };
        assert!(matches!(
            Session::new(config),
            Err(ConfigError::WinLength { win_len: 4, max: 3 })
        ));
    }

    #[test]
    fn test_computer_moves_first() {
        let config = GameConfig { human_first: false, ..GameConfig::default() };
        let mut session = Session::new(config).unwrap();
        assert_eq!(session.turn(), Side::O);
        assert!(session.is_computer_turn());
        assert_eq!(session.play(Pos::new(0, 0)), Err(MoveError::NotYourTurn));

        let pos = session.play_computer().unwrap();
        assert_eq!(pos, Pos::new(1, 1));
        assert_eq!(session.last_selection().unwrap().kind, SelectionKind::Opening);
        assert_eq!(session.turn(), Side::X);
        assert!(session.frontiers().get(Side::O).contains(Pos::new(0, 0)));
    }

    #[test]
    fn test_hotseat_win_highlights_row() {
        let mut session = hotseat(3, 3, 3);
        for pos in [(0, 0), (1, 0), (0, 1), (1, 1)] {
            assert_eq!(session.play(Pos::new(pos.0, pos.1)), Ok(None));
        }
        let outcome = session.play(Pos::new(0, 2)).unwrap();
        assert!(matches!(outcome, Some(Outcome::Win { side: Side::X, .. })));

        for col in 0..3 {
            assert!(session.is_highlighted(Pos::new(0, col)));
        }
        assert_eq!(session.highlights().count(), 3);
        assert_eq!(session.outcome_message().as_deref(), Some("Player X won!"));
        assert_eq!(session.play(Pos::new(2, 2)), Err(MoveError::GameOver));
    }

    #[test]
    fn test_tie_on_full_board() {
        let mut session = hotseat(3, 3, 3);
        // X O X / X O O / O X X
        let moves = [(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 1), (2, 0), (2, 2)];
        let mut outcome = None;
        for (row, col) in moves {
            outcome = session.play(Pos::new(row, col)).unwrap();
        }
        assert_eq!(outcome, Some(Outcome::Tie));
        assert_eq!(session.outcome_message().as_deref(), Some("It's a tie."));
        assert!(session.highlights().is_empty());
        assert_eq!(session.board().empty_count(), 0);
    }

    #[test]
    fn test_rejected_move_changes_nothing() {
        let mut session = hotseat(3, 3, 3);
        session.play(Pos::new(1, 1)).unwrap();
        let frontiers = session.frontiers().clone();

        assert_eq!(
            session.play(Pos::new(1, 1)),
            Err(MoveError::Occupied { row: 1, col: 1 })
        );
        assert_eq!(
            session.play(Pos::new(5, 0)),
            Err(MoveError::OutOfBounds { row: 5, col: 0 })
        );
        assert_eq!(session.turn(), Side::O);
        assert_eq!(session.board().empty_count(), 8);
        assert_eq!(session.frontiers(), &frontiers);
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_suggest_does_not_play() {
        let mut session = hotseat(3, 3, 3);
        session.play(Pos::new(0, 0)).unwrap();
        session.play(Pos::new(2, 2)).unwrap();
        session.play(Pos::new(0, 1)).unwrap();
        let hint = session.suggest().unwrap();
        // O must block the top row
        assert_eq!(hint.best_move, Some(Pos::new(0, 2)));
        assert_eq!(session.history().len(), 3);
    }

    #[test]
    fn test_outcome_message_against_computer() {
        // Human O against the computer on a 1x1 board: X wins at once
        let config = GameConfig {
            rows: 1,
            cols: 1,
            win_len: 1,
            human_side: Side::O,
            human_first: false,
            ..GameConfig::default()
        };
        let mut session = Session::new(config).unwrap();
        session.play_computer().unwrap();
        assert_eq!(session.outcome_message().as_deref(), Some("You lost."));

        let config = GameConfig { rows: 1, cols: 1, win_len: 1, ..GameConfig::default() };
        let mut session = Session::new(config).unwrap();
        session.play(Pos::new(0, 0)).unwrap();
        assert_eq!(session.outcome_message().as_deref(), Some("You won!"));
    }

    #[test]
    fn test_restart_is_fresh() {
        let mut session = hotseat(4, 5, 3);
        session.play(Pos::new(0, 0)).unwrap();
        let fresh = session.restart();
        assert_eq!(fresh.board().empty_count(), 20);
        assert_eq!(fresh.board().rows(), 4);
        assert_eq!(fresh.board().cols(), 5);
        assert!(fresh.history().is_empty());
        assert!(fresh.frontiers().get(Side::X).is_empty());
        assert_eq!(fresh.turn(), Side::X);
        // The old session is untouched
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_engine_against_itself_finishes() {
        for (rows, cols, win_len) in [(3, 3, 3), (5, 5, 4), (7, 9, 5), (26, 26, 5)] {
            let mut session = hotseat(rows, cols, win_len);
            while !session.is_over() {
                session.play_computer().unwrap();
                assert!(session.history().len() <= rows as usize * cols as usize);
            }
            match session.outcome().unwrap() {
                Outcome::Win { side, .. } => {
                    assert_eq!(session.history().last().unwrap().1, side);
                    assert!(session.highlights().count() >= win_len as u32);
                }
                Outcome::Tie => assert!(session.board().is_full()),
            }
        }
    }
}
