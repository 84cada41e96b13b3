//! Main application for the m,n,k GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};
use tracing::{debug, warn};

use crate::board::{Pos, Side};
use crate::config::{GameConfig, Opponent};
use crate::engine::MoveResult;
use crate::notation::format_cell;
use crate::session::{Outcome, Session};

use super::board_view::BoardView;
use super::setup::SetupForm;
use super::theme::*;

/// Main m,n,k application
pub struct MnkApp {
    session: Session,
    setup: SetupForm,
    show_setup: bool,
    board_view: BoardView,
    show_engine: bool,
    /// Engine suggestion for the side to move
    hint: Option<MoveResult>,
    message: Option<String>,
}

impl MnkApp {
    /// Open on `session`, optionally with the settings window showing
    pub fn new(_cc: &eframe::CreationContext<'_>, session: Session, show_setup: bool) -> Self {
        Self {
            setup: SetupForm::new(*session.config()),
            session,
            show_setup,
            board_view: BoardView::default(),
            show_engine: true,
            hint: None,
            message: None,
        }
    }

    fn start(&mut self, config: GameConfig) {
        match Session::new(config) {
            Ok(session) => {
                self.session = session;
                self.show_setup = false;
                self.hint = None;
                self.message = None;
            }
            Err(err) => self.message = Some(err.to_string()),
        }
    }

    fn restart(&mut self) {
        self.session = self.session.restart();
        self.hint = None;
        self.message = None;
    }

    fn open_setup(&mut self) {
        self.setup = SetupForm::new(*self.session.config());
        self.show_setup = true;
    }

    fn request_hint(&mut self) {
        if self.session.is_over() || self.session.is_computer_turn() {
            return;
        }
        self.hint = self.session.suggest();
    }

    fn play_human(&mut self, pos: Pos) {
        match self.session.play(pos) {
            Ok(_) => {
                self.hint = None;
                self.message = None;
            }
            Err(err) => self.message = Some(err.to_string()),
        }
    }

    /// Computer moves run inside the frame update
    fn play_computer(&mut self) {
        match self.session.play_computer() {
            Ok(pos) => debug!(cell = %format_cell(pos), "computer played"),
            Err(err) => {
                warn!(%err, "computer could not move");
                self.message = Some(err.to_string());
            }
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New settings (N)").clicked() {
                        self.open_setup();
                        ui.close_menu();
                    }
                    if ui.button("Restart (R)").clicked() {
                        self.restart();
                        ui.close_menu();
                    }
                    if ui.button("Hint (H)").clicked() {
                        self.request_hint();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_engine, "Engine card (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let config = self.session.config();
                    let mode = match config.opponent {
                        Opponent::Computer => format!("vs computer - you: {}", config.human_side),
                        Opponent::Human => "two players".to_string(),
                    };
                    ui.label(format!(
                        "{}x{}, {} in a row | {mode}",
                        config.rows, config.cols, config.win_len
                    ));
                });
            });
        });
    }

    /// Render the side panel with game info
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                if self.show_engine {
                    self.render_engine_card(ui);
                    ui.add_space(10.0);
                }

                if let Some(outcome) = self.session.outcome() {
                    self.render_game_over_card(ui, outcome);
                    ui.add_space(10.0);
                }

                if let Some(msg) = &self.message {
                    Self::render_message_card(ui, msg);
                }
            });
    }

    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("X").size(20.0).strong().color(X_MARK));
            ui.label(RichText::new("O").size(20.0).strong().color(O_MARK));
            ui.add_space(4.0);
            ui.label(RichText::new("M,N,K").size(22.0).strong().color(TEXT_PRIMARY));
        });
    }

    fn side_color(side: Side) -> egui::Color32 {
        match side {
            Side::X => X_MARK,
            Side::O => O_MARK,
        }
    }

    /// Side to move and who controls it
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let turn = self.session.turn();
            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 22.0, Self::side_color(turn));
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    turn.symbol(),
                    egui::FontId::proportional(26.0),
                    TEXT_PRIMARY,
                );

                ui.add_space(12.0);
                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(RichText::new(format!("{turn} to move")).size(18.0).strong().color(TEXT_PRIMARY));

                    let status = if self.session.is_over() {
                        ("Game over", WIN_HIGHLIGHT)
                    } else if self.session.is_computer_turn() {
                        ("Computer", STATUS_WARNING)
                    } else {
                        ("Your turn", STATUS_OK)
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });

            ui.add_space(6.0);
            ui.label(
                RichText::new(format!(
                    "Move #{} | {} empty",
                    self.session.history().len(),
                    self.session.board().empty_count()
                ))
                .size(11.0)
                .color(TEXT_SECONDARY),
            );
        });
    }

    /// Last engine decision, or the pending hint
    fn render_engine_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ENGINE").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let (title, result) = match (&self.hint, self.session.last_selection()) {
                (Some(hint), _) => ("Hint", Some(hint)),
                (None, last) => ("Last move", last),
            };
            let Some(result) = result else {
                ui.label(RichText::new("No engine moves yet").size(10.0).color(TEXT_MUTED));
                return;
            };

            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label(RichText::new(format!("{title}: {:?}", result.kind)).size(11.0).strong().color(STATUS_OK));
                    ui.label(RichText::new(format!("Run: {}", result.run)).size(10.0).color(TEXT_SECONDARY));
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                    ui.vertical(|ui| {
                        ui.label(RichText::new(format!("{}us", result.time_us)).size(10.0).color(TEXT_SECONDARY));
                        ui.label(RichText::new(format!("{} cells", result.candidates)).size(10.0).color(TEXT_MUTED));
                    });
                });
            });

            if let Some(pos) = result.best_move {
                ui.add_space(4.0);
                ui.label(RichText::new(format!("-> {}", format_cell(pos))).size(12.0).strong().color(HINT));
            }
        });
    }

    fn render_game_over_card(&mut self, ui: &mut egui::Ui, outcome: Outcome) {
        let text = self.session.outcome_message().unwrap_or_default();
        let accent = match outcome {
            Outcome::Win { side, .. } => Self::side_color(side),
            Outcome::Tie => TEXT_SECONDARY,
        };

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(egui::Color32::from_rgb(180, 255, 180)));
                    ui.add_space(8.0);
                    ui.label(RichText::new(text).size(20.0).strong().color(accent));
                    ui.add_space(12.0);

                    ui.horizontal(|ui| {
                        if ui.button(RichText::new("Play again").size(14.0)).clicked() {
                            self.restart();
                        }
                        if ui.button(RichText::new("New settings").size(14.0)).clicked() {
                            self.open_setup();
                        }
                    });
                });
            });
    }

    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let interactive =
                !self.show_setup && !self.session.is_over() && !self.session.is_computer_turn();
            let hint = self.hint.and_then(|h| h.best_move);

            ui.vertical_centered(|ui| {
                if let Some(pos) = self.board_view.show(ui, &self.session, hint, interactive) {
                    self.play_human(pos);
                }
            });
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let (new_settings, restart, hint, toggle_engine) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::N),
                i.key_pressed(egui::Key::R),
                i.key_pressed(egui::Key::H),
                i.key_pressed(egui::Key::D),
            )
        });

        if new_settings {
            self.open_setup();
        }
        if restart {
            self.restart();
        }
        if hint {
            self.request_hint();
        }
        if toggle_engine {
            self.show_engine = !self.show_engine;
        }
    }
}

impl eframe::App for MnkApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        if !self.show_setup {
            self.handle_input(ctx);
        }

        let computer_to_move = !self.show_setup && self.session.is_computer_turn();
        if computer_to_move {
            self.play_computer();
        }

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        if self.show_setup && self.setup.show(ctx) {
            self.start(self.setup.config());
        }

        // Redraw so a computer reply to this frame's click shows at once
        if computer_to_move || self.session.is_computer_turn() {
            ctx.request_repaint();
        }
    }
}
