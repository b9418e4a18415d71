//! The in-game screen: board, side panel, reset and quit controls

use std::time::{Duration, Instant};

use egui::{Context, CornerRadius, Frame, RichText, SidePanel};

use crate::board::{PlayerId, Pos};
use crate::rules::{BreakOutcome, GameSession, Phase};

use super::board_view::BoardView;
use super::theme::*;

/// How a game screen ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    /// A player trapped their opponent
    Won(PlayerId),
    /// The quit button was confirmed
    Quit,
}

/// One play-through of the game: session state plus the view-local bits
/// (status message, quit confirmation) that reset with it
pub struct GameView {
    session: GameSession,
    board_view: BoardView,
    message: Option<String>,
    /// Quit needs a second click to confirm; reset clears this
    quit_clicks: u8,
    /// When the game ended; the trapped message stays visible briefly
    /// before the end screen takes over
    finished_at: Option<Instant>,
}

/// How long the final board stays on screen after a win
const GAME_OVER_HOLD: Duration = Duration::from_secs(2);

impl Default for GameView {
    fn default() -> Self {
        Self::new()
    }
}

impl GameView {
    pub fn new() -> Self {
        Self {
            session: GameSession::new(),
            board_view: BoardView::default(),
            message: None,
            quit_clicks: 0,
            finished_at: None,
        }
    }

    /// Render one frame; returns an outcome when this screen is done
    pub fn show(&mut self, ctx: &Context) -> Option<GameOutcome> {
        let mut outcome = self.render_side_panel(ctx);
        self.render_board(ctx);

        if outcome.is_none() {
            if let Some(winner) = self.session.winner() {
                let finished = *self.finished_at.get_or_insert_with(Instant::now);
                if finished.elapsed() >= GAME_OVER_HOLD {
                    outcome = Some(GameOutcome::Won(winner));
                } else {
                    ctx.request_repaint_after(GAME_OVER_HOLD - finished.elapsed());
                }
            }
        }
        outcome
    }

    /// Forward a cell click to whichever half-turn the session awaits
    fn handle_cell_click(&mut self, pos: Pos) {
        let result = match self.session.phase() {
            Phase::Move => self.session.attempt_move(pos).map(|()| None),
            Phase::Break => self.session.attempt_break(pos).map(Some),
            Phase::Over { .. } => return,
        };

        match result {
            Ok(Some(BreakOutcome::Trapped { loser, .. })) => {
                self.message = Some(format!("{loser} TRAPPED!!"));
            }
            Ok(Some(BreakOutcome::TurnPassed { .. })) => {
                self.message = Some(format!("ice broken at {pos}"));
            }
            Ok(None) => {
                self.message = None;
            }
            Err(err) => {
                log::trace!("rejected click at {pos}: {err}");
                self.message = Some(format!("INVALID - {err}"));
            }
        }
    }

    fn render_board(&mut self, ctx: &Context) {
        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(BOARD_AREA_BG))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    let extra = (ui.available_height() - BoardView::desired_size().y) / 2.0;
                    if extra > 0.0 {
                        ui.add_space(extra);
                    }
                    if let Some(pos) = self.board_view.show(ui, &self.session) {
                        self.handle_cell_click(pos);
                    }
                });
            });
    }

    fn render_side_panel(&mut self, ctx: &Context) -> Option<GameOutcome> {
        let mut outcome = None;

        SidePanel::right("info_panel")
            .min_width(220.0)
            .max_width(260.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title_card(ui);
                ui.add_space(12.0);
                self.render_turn_card(ui);
                ui.add_space(10.0);

                if let Some(out) = self.render_actions_card(ui) {
                    outcome = Some(out);
                }

                if let Some(msg) = self.message.clone() {
                    ui.add_space(10.0);
                    self.render_message_card(ui, &msg);
                }

                if let Some(winner) = self.session.winner() {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui, winner);
                }
            });

        outcome
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
            ui.label(RichText::new("ICEBREAKER").size(22.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("trap your opponent").size(11.0).color(TEXT_MUTED));
        });
    }

    /// Whose turn it is, where they stand, and which half-turn is due
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let active = self.session.active();
            let player = self.session.active_player();

            ui.horizontal(|ui| {
                let (rect, _) =
                    ui.allocate_exact_size(egui::Vec2::new(40.0, 40.0), egui::Sense::hover());
                ui.painter()
                    .circle_filled(rect.center(), 16.0, PLAYER_COLORS[active.index()]);

                ui.add_space(10.0);
                ui.vertical(|ui| {
                    ui.label(
                        RichText::new(format!("{active} : {}", player.pos))
                            .size(15.0)
                            .strong()
                            .color(TEXT_PRIMARY),
                    );
                    let (prompt, color) = match self.session.phase() {
                        Phase::Move => ("MOVE", STATUS_OK),
                        Phase::Break => ("BREAK ICE", STATUS_WARN),
                        Phase::Over { .. } => ("GAME OVER", WIN_HIGHLIGHT),
                    };
                    ui.label(RichText::new(prompt).size(12.0).color(color));
                });
            });

            ui.add_space(6.0);
            ui.label(
                RichText::new(format!(
                    "Turn {} - {} cells broken",
                    self.session.turn_count(),
                    self.session.board().broken_count()
                ))
                .size(11.0)
                .color(TEXT_SECONDARY),
            );
        });
    }

    fn render_actions_card(&mut self, ui: &mut egui::Ui) -> Option<GameOutcome> {
        let mut outcome = None;

        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if ui.button("Reset").clicked() {
                    self.reset();
                }
                ui.add_space(4.0);

                let quit_label = if self.quit_clicks == 0 { "Quit" } else { "Quit?" };
                if ui.button(quit_label).clicked() {
                    self.quit_clicks += 1;
                    if self.quit_clicks == 1 {
                        self.message = Some("Are you sure?".to_string());
                    } else {
                        log::info!("quit confirmed");
                        outcome = Some(GameOutcome::Quit);
                    }
                }
            });
        });

        outcome
    }

    fn render_message_card(&self, ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(MESSAGE_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    fn render_game_over_card(&self, ui: &mut egui::Ui, winner: PlayerId) {
        Frame::new()
            .fill(GAME_OVER_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(14.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(TEXT_SECONDARY));
                    ui.add_space(6.0);
                    ui.label(
                        RichText::new(format!("{winner} WINS!"))
                            .size(18.0)
                            .strong()
                            .color(WIN_HIGHLIGHT),
                    );
                });
            });
    }

    /// Back to defaults: fresh board, spawn positions, player 0 to move,
    /// message and quit confirmation cleared
    fn reset(&mut self) {
        self.session.reset();
        self.message = Some("RESET".to_string());
        self.quit_clicks = 0;
        self.finished_at = None;
    }
}
