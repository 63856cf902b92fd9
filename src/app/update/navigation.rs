use super::super::state::App;
use super::Effect;
use crate::config::Variant;
use iced::widget::scrollable::RelativeOffset;
use tracing::{debug, info, warn};

impl App {
    pub(super) fn handle_marker_clicked(&mut self, index: usize) {
        if self.variant.is_scroll_driven() {
            debug!(index, variant = %self.variant, "Marker clicks only drive the click variant");
            return;
        }
        let previous = self.state().active_index;
        match self.timeline.on_click(index, self.spacing) {
            Ok(state) => {
                if state.active_index != previous {
                    debug!(
                        from = previous,
                        to = state.active_index,
                        offset = state.translation_offset,
                        "Active slide changed"
                    );
                }
            }
            Err(err) => warn!(%err, "Ignoring marker click"),
        }
    }

    pub(super) fn handle_variant_selected(&mut self, variant: Variant, effects: &mut Vec<Effect>) {
        if variant == self.variant {
            return;
        }
        info!(from = %self.variant, to = %variant, "Switching timeline variant");
        self.variant = variant;
        self.timeline.reset(self.spacing);
        effects.push(Effect::SnapScroll(RelativeOffset::START));
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::state::test_support::build_test_app;
    use super::*;
    use timeline_core::Progress;

    #[test]
    fn click_moves_track_to_marker() {
        let mut app = build_test_app(Variant::Click, 1280.0);
        app.handle_marker_clicked(2);

        let state = app.state();
        assert_eq!(state.active_index, 2);
        assert!((state.progress.value() - 2.0 / 3.0).abs() < 1e-12);
        assert!((state.translation_offset + 400.0).abs() < 1e-9);
        assert_eq!(
            app.active_slide().map(|slide| slide.title.as_str()),
            Some("Deep Analytics")
        );
    }

    #[test]
    fn out_of_range_click_keeps_state() {
        let mut app = build_test_app(Variant::Click, 1280.0);
        app.handle_marker_clicked(1);
        let before = app.state();

        app.handle_marker_clicked(9);

        assert_eq!(app.state(), before);
    }

    #[test]
    fn clicks_are_ignored_by_scroll_variants() {
        let mut app = build_test_app(Variant::Horizontal, 1280.0);
        app.handle_marker_clicked(3);
        assert_eq!(app.state().active_index, 0);
    }

    #[test]
    fn switching_variant_resets_and_snaps_scroll() {
        let mut app = build_test_app(Variant::Click, 1280.0);
        app.handle_marker_clicked(3);

        let mut effects = Vec::new();
        app.handle_variant_selected(Variant::Vertical, &mut effects);

        assert_eq!(app.variant, Variant::Vertical);
        assert_eq!(app.state().progress, Progress::START);
        assert_eq!(app.state().active_index, 0);
        assert_eq!(effects, vec![Effect::SnapScroll(RelativeOffset::START)]);
    }

    #[test]
    fn selecting_current_variant_is_a_no_op() {
        let mut app = build_test_app(Variant::Vertical, 1280.0);
        let mut effects = Vec::new();
        app.handle_variant_selected(Variant::Vertical, &mut effects);
        assert!(effects.is_empty());
    }
}
