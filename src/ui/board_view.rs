//! Board rendering for the Icebreaker GUI

use egui::{CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::board::{Pos, GRID_COLS, GRID_ROWS};
use crate::rules::{GameSession, Phase};

use super::theme::*;

/// Board view handles rendering and input for the ice grid
pub struct BoardView {
    /// Board drawing area from the last frame
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Pixel footprint of the full grid including padding
    pub fn desired_size() -> Vec2 {
        let w = GRID_COLS as f32 * CELL_SIZE + (GRID_COLS as f32 - 1.0) * CELL_GAP;
        let h = GRID_ROWS as f32 * CELL_SIZE + (GRID_ROWS as f32 - 1.0) * CELL_GAP;
        Vec2::new(w + 2.0 * BOARD_PADDING, h + 2.0 * BOARD_PADDING)
    }

    /// Render the grid and both players; returns the cell clicked this
    /// frame, if any. Clicks land on cells regardless of legality - the
    /// session rejects illegal ones so the player can be re-prompted.
    pub fn show(&mut self, ui: &mut egui::Ui, session: &GameSession) -> Option<Pos> {
        let (response, painter) = ui.allocate_painter(Self::desired_size(), Sense::click());
        self.board_rect = response.rect;

        // Board area background
        painter.rect_filled(self.board_rect, CornerRadius::same(8), BOARD_AREA_BG);

        // Ice cells
        for row in 0..GRID_ROWS {
            for col in 0..GRID_COLS {
                let pos = Pos::new(col as u8, row as u8);
                self.draw_cell(&painter, pos, session.board().is_broken(pos));
            }
        }

        // Player discs
        for id in [crate::board::PlayerId::P0, crate::board::PlayerId::P1] {
            let player = session.player(id);
            let highlight = !session.is_over() && id == session.active();
            self.draw_player(&painter, player.pos, PLAYER_COLORS[id.index()], highlight);
        }

        // Hover preview and click, ignored once the game is over
        let mut clicked_pos = None;
        if !session.is_over() {
            if let Some(pointer_pos) = response.hover_pos() {
                if let Some(pos) = self.screen_to_cell(pointer_pos) {
                    let is_valid = match session.phase() {
                        Phase::Move => session.can_move_to(pos),
                        Phase::Break => session.can_break_at(pos),
                        Phase::Over { .. } => false,
                    };

                    let tint = if is_valid { hover_valid() } else { hover_invalid() };
                    painter.rect_filled(self.cell_rect(pos), CornerRadius::same(CELL_CORNER_RADIUS), tint);

                    if response.clicked() {
                        clicked_pos = Some(pos);
                    }
                }
            }
        }

        clicked_pos
    }

    /// Draw one cell as intact ice or open water
    fn draw_cell(&self, painter: &Painter, pos: Pos, broken: bool) {
        let rect = self.cell_rect(pos);
        let corner = CornerRadius::same(CELL_CORNER_RADIUS);

        if broken {
            painter.rect_filled(rect, corner, WATER_CELL);
            // Darker inset suggests depth
            painter.rect_filled(rect.shrink(CELL_SIZE * 0.18), corner, WATER_CELL_DEEP);
        } else {
            painter.rect_filled(rect, corner, ICE_CELL);
            painter.rect_stroke(
                rect,
                corner,
                Stroke::new(1.0, ICE_CELL_OUTLINE),
                egui::StrokeKind::Inside,
            );
        }
    }

    /// Draw a player disc, with a ring around the active player
    fn draw_player(&self, painter: &Painter, pos: Pos, color: egui::Color32, highlight: bool) {
        let center = self.cell_rect(pos).center();
        let radius = CELL_SIZE * PLAYER_RADIUS_RATIO;

        // Drop shadow
        painter.circle_filled(
            center + Vec2::new(2.0, 2.0),
            radius,
            egui::Color32::from_rgba_unmultiplied(0, 0, 0, 60),
        );
        painter.circle_filled(center, radius, color);

        if highlight {
            painter.circle_stroke(center, radius + 3.0, Stroke::new(2.5, ACTIVE_RING));
        }
    }

    /// Screen rectangle of a cell
    fn cell_rect(&self, pos: Pos) -> Rect {
        let min = self.board_rect.min
            + Vec2::new(
                BOARD_PADDING + pos.col as f32 * (CELL_SIZE + CELL_GAP),
                BOARD_PADDING + pos.row as f32 * (CELL_SIZE + CELL_GAP),
            );
        Rect::from_min_size(min, Vec2::splat(CELL_SIZE))
    }

    /// Map a pointer position to the cell under it. Clicks in the gaps
    /// between cells (and in the padding) map to nothing, matching the
    /// original's box hit-testing.
    pub fn screen_to_cell(&self, screen_pos: Pos2) -> Option<Pos> {
        let rel = screen_pos - self.board_rect.min - Vec2::splat(BOARD_PADDING);
        if rel.x < 0.0 || rel.y < 0.0 {
            return None;
        }

        let pitch = CELL_SIZE + CELL_GAP;
        let col = (rel.x / pitch).floor() as i32;
        let row = (rel.y / pitch).floor() as i32;

        // Inside the cell itself, not the trailing gap
        if rel.x - col as f32 * pitch > CELL_SIZE || rel.y - row as f32 * pitch > CELL_SIZE {
            return None;
        }

        if Pos::is_valid(col, row) {
            Some(Pos::new(col as u8, row as u8))
        } else {
            None
        }
    }
}
