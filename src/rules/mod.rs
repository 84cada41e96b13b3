//! Game rules for m,n,k games
//!
//! This module implements the line scans everything else is built on:
//! - Win detection (longest run through a cell)
//! - Line potential of empty cells (finishability, open ends)
//! - Winning-run highlighting

pub mod highlight;
pub mod potential;
pub mod win;

// Re-exports for convenient access
pub use highlight::highlight_win;
pub use potential::{finishability, space_around};
pub use win::{check_win, longest_run, run_length, Run, WinRecord};
