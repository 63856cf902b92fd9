use super::super::state::App;
use crate::config::ThemeMode;
use timeline_core::resolve_spacing_for;
use tracing::{debug, info};

impl App {
    pub(super) fn handle_window_resized(&mut self, width: f32, height: f32) {
        self.viewport.update(width, height);
        let spacing = resolve_spacing_for(self.viewport.width);
        if spacing == self.spacing {
            return;
        }
        debug!(
            old = self.spacing.px(),
            new = spacing.px(),
            width = self.viewport.width,
            "Marker spacing changed"
        );
        self.spacing = spacing;
        self.timeline.on_resize(spacing);
    }

    pub(super) fn handle_toggle_theme(&mut self) {
        self.config.theme = match self.config.theme {
            ThemeMode::Day => ThemeMode::Night,
            ThemeMode::Night => ThemeMode::Day,
        };
        info!(theme = ?self.config.theme, "Toggled theme");
    }
}
