//! Shared menu-screen rendering
//!
//! The start and end screens are the same decorated full-window panel
//! with a title, some body text, and two buttons. Both flows compose
//! this one helper rather than one screen inheriting from the other.

use egui::{Align2, Color32, Context, CornerRadius, FontId, RichText, Stroke, Vec2};

use super::theme::*;

/// Which of the two menu buttons was pressed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Top button (Start Game / Play Again)
    Primary,
    /// Bottom button (Exit Game)
    Secondary,
}

/// Draw a full-window menu screen and report the button pressed, if any.
///
/// `body` lines render between the title and the buttons; `footer` sits
/// at the bottom of the window (credits on the start screen, scoreboard
/// detail on the end screen).
pub fn show(
    ctx: &Context,
    title: &str,
    body: &[String],
    primary_label: &str,
    secondary_label: &str,
    footer: &str,
) -> Option<MenuChoice> {
    let mut choice = None;

    egui::CentralPanel::default()
        .frame(egui::Frame::new().fill(MENU_BG))
        .show(ctx, |ui| {
            draw_decorations(ui);

            ui.vertical_centered(|ui| {
                ui.add_space(70.0);
                ui.label(
                    RichText::new(title)
                        .size(30.0)
                        .strong()
                        .color(TEXT_PRIMARY),
                );

                ui.add_space(24.0);
                for line in body {
                    ui.label(RichText::new(line).size(16.0).color(TEXT_SECONDARY));
                    ui.add_space(4.0);
                }

                ui.add_space(40.0);
                if menu_button(ui, primary_label).clicked() {
                    choice = Some(MenuChoice::Primary);
                }
                ui.add_space(14.0);
                if menu_button(ui, secondary_label).clicked() {
                    choice = Some(MenuChoice::Secondary);
                }

                let remaining = ui.available_height();
                if remaining > 60.0 {
                    ui.add_space(remaining - 60.0);
                }
                ui.label(RichText::new(footer).size(12.0).color(TEXT_MUTED));
            });
        });

    choice
}

/// Decorative frame around the central area, echoing the original's
/// outlined rectangle
fn draw_decorations(ui: &mut egui::Ui) {
    let rect = ui.max_rect().shrink2(Vec2::new(40.0, 100.0));
    ui.painter().rect_stroke(
        rect,
        CornerRadius::same(10),
        Stroke::new(2.0, MENU_FRAME),
        egui::StrokeKind::Inside,
    );

    // A few ice shards in the corners for flavor
    for (corner, offset) in [
        (rect.left_top(), Vec2::new(18.0, 18.0)),
        (rect.right_top(), Vec2::new(-18.0, 18.0)),
        (rect.left_bottom(), Vec2::new(18.0, -18.0)),
        (rect.right_bottom(), Vec2::new(-18.0, -18.0)),
    ] {
        ui.painter().text(
            corner + offset,
            Align2::CENTER_CENTER,
            "*",
            FontId::proportional(20.0),
            Color32::from_rgba_unmultiplied(200, 255, 255, 140),
        );
    }
}

/// A fixed-size menu button in the theme style
fn menu_button(ui: &mut egui::Ui, label: &str) -> egui::Response {
    ui.add_sized(
        Vec2::new(160.0, 44.0),
        egui::Button::new(RichText::new(label).size(16.0).color(TEXT_PRIMARY))
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8)),
    )
}
