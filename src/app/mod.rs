mod messages;
mod state;
mod update;
mod view;

pub use state::App;

use crate::config::{AppConfig, ThemeMode};
use anyhow::{Context, Result};
use iced::{Size, Theme, window};
use timeline_core::SlideSet;

/// Helper to launch the app with the loaded configuration and slides.
pub fn run_app(config: AppConfig, slides: SlideSet) -> Result<()> {
    let window_settings = window::Settings {
        size: Size::new(config.window_width, config.window_height),
        ..window::Settings::default()
    };
    let app = App::new(config, slides)?;

    iced::application("Scroll Timeline", App::update, App::view)
        .window(window_settings)
        .subscription(App::subscription)
        .theme(|app: &App| {
            if matches!(app.config.theme, ThemeMode::Night) {
                Theme::Dark
            } else {
                Theme::Light
            }
        })
        .run_with(move || App::bootstrap(app))
        .context("Failed to start the GUI")
}
