//! GUI module for the m,n,k game
//!
//! A native window built with egui/eframe.

mod app;
mod board_view;
mod setup;
mod theme;

pub use app::MnkApp;
