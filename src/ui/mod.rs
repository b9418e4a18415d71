//! GUI module for the Icebreaker game
//!
//! This module provides a native Rust GUI using egui/eframe.

mod app;
mod board_view;
mod game_view;
mod menu;
mod theme;

pub use app::IcebreakerApp;
