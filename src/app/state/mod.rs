mod constants;
mod viewport;

use crate::config::{AppConfig, Variant};
use anyhow::Result;
use iced::Task;
use timeline_core::{
    Anchor, MarkerSlot, Slide, SlideSet, Spacing, TimelineController, TimelineState,
    marker_slots, resolve_spacing_for,
};

use super::messages::Message;

pub(crate) use constants::*;
pub(in crate::app) use viewport::ViewportState;

/// Core application state composed of sub-models.
pub struct App {
    pub(super) config: AppConfig,
    pub(super) slides: SlideSet,
    pub(super) variant: Variant,
    pub(super) timeline: TimelineController,
    pub(super) spacing: Spacing,
    pub(super) viewport: ViewportState,
}

impl App {
    pub(super) fn new(config: AppConfig, slides: SlideSet) -> Result<App> {
        let viewport = ViewportState::new(config.window_width, config.window_height);
        let spacing = resolve_spacing_for(viewport.width);
        let timeline = TimelineController::new(slides.len(), spacing)?;
        tracing::debug!(
            slides = slides.len(),
            spacing = spacing.px(),
            width = viewport.width,
            "Initialized timeline"
        );
        Ok(App {
            variant: config.variant,
            config,
            slides,
            timeline,
            spacing,
            viewport,
        })
    }

    pub(super) fn bootstrap(app: App) -> (App, Task<Message>) {
        (app, Task::none())
    }

    pub(super) fn state(&self) -> TimelineState {
        self.timeline.state()
    }

    pub(super) fn active_slide(&self) -> Option<&Slide> {
        self.slides.get(self.state().active_index)
    }

    pub(super) fn anchor(&self) -> Anchor {
        Anchor::new(self.config.anchor_pct(self.variant) as f64)
    }

    /// Marker slots for the current state, positioned against the window
    /// width.
    pub(super) fn marker_slots(&self) -> Vec<MarkerSlot> {
        let anchor_x = self.anchor().x(self.viewport.width as f64);
        marker_slots(&self.state(), self.slides.len(), anchor_x)
    }

    /// Passed markers are hidden only when scrolling sideways, where the
    /// slide panels themselves travel under the crosshair.
    pub(super) fn hides_passed_markers(&self) -> bool {
        matches!(self.variant, Variant::Horizontal)
    }
}

#[cfg(test)]
pub(in crate::app) mod test_support {
    use super::*;

    pub(in crate::app) fn build_test_app(variant: Variant, width: f32) -> App {
        let mut config = AppConfig::default();
        config.variant = variant;
        config.window_width = width;
        config.window_height = 800.0;
        App::new(config, SlideSet::builtin()).expect("builtin slides build an app")
    }
}
