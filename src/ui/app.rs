//! Main application for the Icebreaker GUI
//!
//! Drives the three screens (start, game, end) and keeps the scoreboard
//! across repeated plays in one run.

use egui::Context;

use crate::board::PlayerId;

use super::game_view::{GameOutcome, GameView};
use super::menu::{self, MenuChoice};

/// Which screen is showing
enum Screen {
    Start,
    Playing(Box<GameView>),
    End { winner: PlayerId },
}

/// Screen change requested by the frame just rendered
enum Transition {
    StartGame,
    Finished(PlayerId),
    Exit,
}

/// Main Icebreaker application
pub struct IcebreakerApp {
    screen: Screen,
    /// Wins per player across plays in this run
    scoreboard: [u32; 2],
}

impl Default for IcebreakerApp {
    fn default() -> Self {
        Self {
            screen: Screen::Start,
            scoreboard: [0, 0],
        }
    }
}

impl IcebreakerApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    fn render_start_screen(ctx: &Context) -> Option<Transition> {
        let choice = menu::show(
            ctx,
            "Welcome to Icebreaker!",
            &[
                "Take turns: step to a neighboring ice cell,".to_string(),
                "then break one cell anywhere on the grid.".to_string(),
                "Trap your opponent to win.".to_string(),
            ],
            "Start Game",
            "Exit Game",
            "Icebreaker - a two-player ice grid game",
        );

        match choice {
            Some(MenuChoice::Primary) => Some(Transition::StartGame),
            Some(MenuChoice::Secondary) => Some(Transition::Exit),
            None => None,
        }
    }

    fn render_end_screen(ctx: &Context, winner: PlayerId, scoreboard: [u32; 2]) -> Option<Transition> {
        let choice = menu::show(
            ctx,
            &format!("{winner} wins!"),
            &[
                "SCOREBOARD".to_string(),
                format!("Player 0: {}", scoreboard[0]),
                format!("Player 1: {}", scoreboard[1]),
            ],
            "Play Again",
            "Exit Game",
            "Thanks for playing",
        );

        match choice {
            Some(MenuChoice::Primary) => Some(Transition::StartGame),
            Some(MenuChoice::Secondary) => Some(Transition::Exit),
            None => None,
        }
    }
}

impl eframe::App for IcebreakerApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let scoreboard = self.scoreboard;

        let transition = match &mut self.screen {
            Screen::Start => Self::render_start_screen(ctx),
            Screen::Playing(game) => match game.show(ctx) {
                Some(GameOutcome::Won(winner)) => Some(Transition::Finished(winner)),
                Some(GameOutcome::Quit) => Some(Transition::Exit),
                None => None,
            },
            Screen::End { winner } => Self::render_end_screen(ctx, *winner, scoreboard),
        };

        match transition {
            Some(Transition::StartGame) => {
                log::info!("new game started");
                self.screen = Screen::Playing(Box::new(GameView::new()));
            }
            Some(Transition::Finished(winner)) => {
                self.scoreboard[winner.index()] += 1;
                self.screen = Screen::End { winner };
            }
            Some(Transition::Exit) => {
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
            None => {}
        }
    }
}
