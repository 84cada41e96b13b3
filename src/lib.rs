//! m,n,k game engine
//!
//! Two players, X and O, take turns marking cells of an R x C board. The
//! first to line up K marks horizontally, vertically or diagonally wins; a
//! full board with no such line is a tie. Boards go up to 26 x 26.
//!
//! # Architecture
//!
//! - [`board`]: Board storage, sides, positions and scan directions
//! - [`rules`]: Win detection, finishability and win highlighting
//! - [`search`]: Candidate frontiers around each side's marks
//! - [`engine`]: Greedy single-ply move selection
//! - [`session`]: One game from first move to outcome
//! - [`config`], [`cli`]: Settings from TOML files and the command line
//! - [`notation`]: `B1`-style cell names and `RxC` board sizes
//! - [`term`], [`ui`]: Terminal and egui front ends
//!
//! # Quick Start
//!
//! ```
//! use mnk::{GameConfig, Opponent, Outcome, Session};
//!
//! let config = GameConfig { rows: 4, cols: 4, win_len: 3, opponent: Opponent::Human, ..GameConfig::default() };
//! let mut session = Session::new(config).unwrap();
//!
//! // Let the engine play both sides
//! while !session.is_over() {
//!     session.play_computer().unwrap();
//! }
//! match session.outcome() {
//!     Some(Outcome::Win { side, .. }) => println!("{side} won"),
//!     _ => println!("tie"),
//! }
//! ```
//!
//! # Move Priority
//!
//! For the side to move the engine picks, in order:
//! 1. The center on an empty board, or a cell next to the opponent
//! 2. A cell that completes K in a row
//! 3. A cell that blocks the opponent's K, or an open K-1
//! 4. A cell that gives an open K-1 of its own
//! 5. The cell with the longest finishable run

pub mod board;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod notation;
pub mod rules;
pub mod search;
pub mod session;
pub mod term;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Direction, Pos, Side, MAX_DIM};
pub use config::{GameConfig, Opponent};
pub use engine::{Engine, MoveResult, SelectionKind};
pub use error::{ConfigError, MoveError, NotationError, TermError};
pub use search::{Frontier, Frontiers};
pub use session::{Outcome, Session};
