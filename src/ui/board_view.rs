//! Board rendering and click handling

use egui::{Color32, CornerRadius, FontId, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::board::{Board, Cell, Pos, Side};
use crate::notation::{column_label, row_label};
use crate::session::Session;

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Side of one square cell in points
    cell_size: f32,
    /// Area covered by the cells, without the label margin
    grid_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 60.0,
            grid_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell if any
    pub fn show(&mut self, ui: &mut egui::Ui, session: &Session, hint: Option<Pos>, interactive: bool) -> Option<Pos> {
        let board = session.board();
        let rows = board.rows() as f32;
        let cols = board.cols() as f32;

        // Fit square cells into the available space
        let available = ui.available_size() - Vec2::splat(20.0);
        self.cell_size = ((available.x - BOARD_MARGIN) / cols)
            .min((available.y - BOARD_MARGIN) / rows)
            .max(8.0);
        let size = Vec2::new(cols * self.cell_size + BOARD_MARGIN, rows * self.cell_size + BOARD_MARGIN);

        let (response, painter) = ui.allocate_painter(size, Sense::click());
        self.grid_rect = Rect::from_min_size(
            response.rect.min + Vec2::splat(BOARD_MARGIN),
            Vec2::new(cols * self.cell_size, rows * self.cell_size),
        );

        painter.rect_filled(self.grid_rect, CornerRadius::same(4), BOARD_BG);
        self.draw_highlights(&painter, session);
        self.draw_grid(&painter, board);
        self.draw_labels(&painter, board);
        self.draw_marks(&painter, board);

        if let Some(pos) = session.last_move() {
            self.draw_last_move_marker(&painter, pos);
        }
        if let Some(pos) = hint {
            self.draw_hint(&painter, pos);
        }

        if !interactive {
            return None;
        }

        let pointer = response.hover_pos()?;
        let pos = self.screen_to_board(board, pointer)?;
        if board.is_empty(pos) {
            self.draw_mark(&painter, pos, session.turn(), true);
            if response.clicked() {
                return Some(pos);
            }
        } else {
            painter.rect_filled(self.cell_rect(pos).shrink(2.0), CornerRadius::same(2), hover_invalid());
        }
        None
    }

    /// Background fill for cells in the highlight layer
    fn draw_highlights(&self, painter: &Painter, session: &Session) {
        for pos in session.highlights().iter_ones() {
            painter.rect_filled(self.cell_rect(pos).shrink(1.0), CornerRadius::ZERO, WIN_CELL_BG);
        }
    }

    fn draw_grid(&self, painter: &Painter, board: &Board) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let rect = self.grid_rect;

        for col in 0..=board.cols() {
            let x = rect.min.x + col as f32 * self.cell_size;
            painter.line_segment([Pos2::new(x, rect.min.y), Pos2::new(x, rect.max.y)], stroke);
        }
        for row in 0..=board.rows() {
            let y = rect.min.y + row as f32 * self.cell_size;
            painter.line_segment([Pos2::new(rect.min.x, y), Pos2::new(rect.max.x, y)], stroke);
        }
    }

    /// Column letters above the grid, 1-based row numbers to its left
    fn draw_labels(&self, painter: &Painter, board: &Board) {
        let font = FontId::proportional(12.0_f32.min(self.cell_size * 0.6).max(8.0));
        let half = self.cell_size * 0.5;

        for col in 0..board.cols() {
            let x = self.grid_rect.min.x + col as f32 * self.cell_size + half;
            let pos = Pos2::new(x, self.grid_rect.min.y - BOARD_MARGIN * 0.5);
            painter.text(pos, egui::Align2::CENTER_CENTER, column_label(col), font.clone(), LABEL);
        }
        for row in 0..board.rows() {
            let y = self.grid_rect.min.y + row as f32 * self.cell_size + half;
            let pos = Pos2::new(self.grid_rect.min.x - BOARD_MARGIN * 0.5, y);
            painter.text(pos, egui::Align2::CENTER_CENTER, row_label(row).to_string(), font.clone(), LABEL);
        }
    }

    fn draw_marks(&self, painter: &Painter, board: &Board) {
        for pos in board.positions() {
            if let Cell::Taken(side) = board.get(pos) {
                self.draw_mark(painter, pos, side, false);
            }
        }
    }

    /// X as two strokes, O as a ring
    fn draw_mark(&self, painter: &Painter, pos: Pos, side: Side, preview_only: bool) {
        let center = self.cell_center(pos);
        let r = self.cell_size * MARK_RATIO;
        let width = (self.cell_size * MARK_WIDTH_RATIO).max(1.5);

        let color = match side {
            Side::X => X_MARK,
            Side::O => O_MARK,
        };
        let color = if preview_only { preview(color) } else { color };
        let stroke = Stroke::new(width, color);

        match side {
            Side::X => {
                painter.line_segment([center + Vec2::new(-r, -r), center + Vec2::new(r, r)], stroke);
                painter.line_segment([center + Vec2::new(-r, r), center + Vec2::new(r, -r)], stroke);
            }
            Side::O => {
                painter.circle_stroke(center, r, stroke);
            }
        }
    }

    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        let corner = self.cell_rect(pos).min + Vec2::splat(LAST_MOVE_MARKER_RADIUS + 3.0);
        painter.circle_filled(corner, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    fn draw_hint(&self, painter: &Painter, pos: Pos) {
        let rect = self.cell_rect(pos).shrink(3.0);
        painter.rect_stroke(rect, CornerRadius::same(3), Stroke::new(2.0, HINT), egui::StrokeKind::Inside);
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            "?",
            FontId::proportional(self.cell_size * 0.4),
            Color32::from_rgba_unmultiplied(HINT.r(), HINT.g(), HINT.b(), 160),
        );
    }

    fn cell_rect(&self, pos: Pos) -> Rect {
        let min = self.grid_rect.min
            + Vec2::new(pos.col as f32 * self.cell_size, pos.row as f32 * self.cell_size);
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }

    fn cell_center(&self, pos: Pos) -> Pos2 {
        self.cell_rect(pos).center()
    }

    /// Convert screen coordinates to a board cell
    pub fn screen_to_board(&self, board: &Board, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.grid_rect.min;
        let col = (relative.x / self.cell_size).floor();
        let row = (relative.y / self.cell_size).floor();
        if !row.is_finite() || !col.is_finite() {
            return None;
        }

        let (row, col) = (row as i16, col as i16);
        board
            .in_bounds(row, col)
            .then(|| Pos::new(row as u8, col as u8))
    }
}
