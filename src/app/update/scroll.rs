use super::super::state::App;
use crate::config::Variant;
use timeline_core::ScrollSample;
use tracing::{debug, trace};

impl App {
    pub(super) fn handle_scrolled(
        &mut self,
        offset_x: f32,
        offset_y: f32,
        viewport_width: f32,
        viewport_height: f32,
        content_width: f32,
        content_height: f32,
    ) {
        let sample = match self.variant {
            Variant::Vertical => Self::sample_axis(offset_y, content_height, viewport_height),
            Variant::Horizontal => Self::sample_axis(offset_x, content_width, viewport_width),
            Variant::Click => {
                trace!("Ignoring scroll while the click variant is active");
                return;
            }
        };
        if let Err(err) = sample.validate() {
            debug!(%err, variant = %self.variant, "Scroll sample substituted with start");
        }

        let previous = self.state().active_index;
        let state = self.timeline.on_scroll(sample, self.spacing);
        trace!(
            progress = state.progress.value(),
            offset = state.translation_offset,
            "Timeline scrolled"
        );
        if state.active_index != previous {
            debug!(
                from = previous,
                to = state.active_index,
                variant = %self.variant,
                "Active slide changed"
            );
        }
    }

    fn sample_axis(offset: f32, content: f32, viewport: f32) -> ScrollSample {
        ScrollSample::from_extent(offset as f64, content as f64, viewport as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::state::test_support::build_test_app;
    use crate::config::Variant;
    use timeline_core::Progress;

    #[test]
    fn vertical_scroll_walks_through_buckets() {
        let mut app = build_test_app(Variant::Vertical, 1280.0);
        // Four slides, one viewport (760px) each: 2280px of travel.
        let scroll_to = |app: &mut super::App, y: f32| {
            app.handle_scrolled(0.0, y, 1280.0, 760.0, 1280.0, 3040.0);
            app.state().active_index
        };

        assert_eq!(scroll_to(&mut app, 0.0), 0);
        assert_eq!(scroll_to(&mut app, 569.0), 0);
        assert_eq!(scroll_to(&mut app, 570.0), 1);
        assert_eq!(scroll_to(&mut app, 1140.0), 2);
        assert_eq!(scroll_to(&mut app, 1710.0), 3);
        assert_eq!(scroll_to(&mut app, 2280.0), 3);
        assert_eq!(app.state().progress, Progress::END);
        assert_eq!(app.state().translation_offset, -600.0);
    }

    #[test]
    fn horizontal_scroll_reads_x_axis() {
        let mut app = build_test_app(Variant::Horizontal, 1000.0);
        app.handle_scrolled(1500.0, 900.0, 1000.0, 760.0, 4000.0, 760.0);

        let state = app.state();
        assert_eq!(state.progress, Progress::new(0.5));
        assert_eq!(state.active_index, 2);
        assert_eq!(state.translation_offset, -330.0);
    }

    #[test]
    fn collapsed_scroll_range_resets_to_start() {
        let mut app = build_test_app(Variant::Vertical, 1280.0);
        app.handle_scrolled(0.0, 1200.0, 1280.0, 760.0, 1280.0, 3040.0);
        assert_eq!(app.state().active_index, 2);

        app.handle_scrolled(0.0, 40.0, 1280.0, 760.0, 1280.0, 700.0);

        assert_eq!(app.state().progress, Progress::START);
        assert_eq!(app.state().active_index, 0);
        assert_eq!(app.state().translation_offset, 0.0);
    }

    #[test]
    fn click_variant_ignores_scroll() {
        let mut app = build_test_app(Variant::Click, 1280.0);
        app.handle_scrolled(0.0, 2000.0, 1280.0, 760.0, 1280.0, 3040.0);
        assert_eq!(app.state().active_index, 0);
        assert_eq!(app.state().progress, Progress::START);
    }
}
