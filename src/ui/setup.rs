//! New-game settings window

use egui::{Align2, Context, RichText, Slider};

use crate::board::{Side, MAX_DIM};
use crate::config::{GameConfig, Opponent};

use super::theme::*;

/// Editable copy of the game settings
#[derive(Debug, Clone)]
pub struct SetupForm {
    config: GameConfig,
}

impl SetupForm {
    pub fn new(config: GameConfig) -> Self {
        Self { config }
    }

    /// Settings as currently entered, always valid
    pub fn config(&self) -> GameConfig {
        self.config
    }

    /// Show the window. Returns true when the user starts a game.
    pub fn show(&mut self, ctx: &Context) -> bool {
        let mut start = false;

        egui::Window::new("New game")
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                let config = &mut self.config;

                ui.label(RichText::new("BOARD").size(10.0).color(TEXT_MUTED));
                ui.add(Slider::new(&mut config.rows, 1..=MAX_DIM).text("rows"));
                ui.add(Slider::new(&mut config.cols, 1..=MAX_DIM).text("columns"));

                // Keep K reachable when the board shrinks
                let max = config.rows.min(config.cols);
                config.win_len = config.win_len.clamp(1, max);
                ui.add(Slider::new(&mut config.win_len, 1..=max).text("in a row to win"));

                ui.add_space(8.0);
                ui.label(RichText::new("PLAYERS").size(10.0).color(TEXT_MUTED));
                ui.horizontal(|ui| {
                    ui.label("You play");
                    ui.radio_value(&mut config.human_side, Side::X, "X");
                    ui.radio_value(&mut config.human_side, Side::O, "O");
                });
                ui.checkbox(&mut config.human_first, "You move first");
                ui.horizontal(|ui| {
                    ui.radio_value(&mut config.opponent, Opponent::Computer, "vs computer");
                    ui.radio_value(&mut config.opponent, Opponent::Human, "two players");
                });

                ui.add_space(12.0);
                ui.vertical_centered(|ui| {
                    if ui.button(RichText::new("Start").size(14.0).strong()).clicked() {
                        start = true;
                    }
                });
            });

        start
    }
}

