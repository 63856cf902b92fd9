//! Timeline Progress Controller.
//!
//! Maps a [`Progress`] to the active slide and to the horizontal shift of
//! the marker track. The free functions are pure; [`TimelineController`]
//! only remembers the last state so callers can keep a valid picture when
//! an input is rejected.

use crate::error::TimelineError;
use crate::progress::{Progress, ScrollSample};
use crate::spacing::Spacing;

/// How a continuous progress value is turned into a slide index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexRule {
    /// `[0, 1]` is cut into `N` equal buckets; the index is the bucket that
    /// contains the progress. Used for scroll input.
    Bucket,
    /// `round(progress * (N - 1))`. Used for click input, where progress is
    /// always an exact marker position.
    Nearest,
}

/// Output of one controller evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimelineState {
    pub progress: Progress,
    pub active_index: usize,
    pub translation_offset: f64,
    pub spacing: Spacing,
}

impl TimelineState {
    pub fn at_start(spacing: Spacing) -> Self {
        Self {
            progress: Progress::START,
            active_index: 0,
            translation_offset: 0.0,
            spacing,
        }
    }
}

pub fn active_index(progress: Progress, slide_count: usize, rule: IndexRule) -> usize {
    if slide_count <= 1 {
        return 0;
    }
    let last = slide_count - 1;
    let progress = progress.value();
    match rule {
        IndexRule::Bucket => {
            let step = 1.0 / slide_count as f64;
            (1..slide_count)
                .rev()
                .find(|&k| progress >= k as f64 * step)
                .unwrap_or(0)
        }
        IndexRule::Nearest => ((progress * last as f64).round() as usize).min(last),
    }
}

/// Shift applied to the marker row so the marker under `progress` sits on
/// the crosshair. Always within `[-(spacing * (N - 1)), 0]`.
pub fn translation_offset(progress: Progress, spacing: Spacing, slide_count: usize) -> f64 {
    let track = spacing.px() * slide_count.saturating_sub(1) as f64;
    let raw = -(progress.value() * spacing.px() * slide_count.saturating_sub(1) as f64);
    if raw.is_nan() {
        return 0.0;
    }
    raw.clamp(-track, 0.0)
}

pub fn compute(
    progress: Progress,
    spacing: Spacing,
    slide_count: usize,
    rule: IndexRule,
) -> TimelineState {
    if slide_count <= 1 {
        return TimelineState::at_start(spacing);
    }
    TimelineState {
        progress,
        active_index: active_index(progress, slide_count, rule),
        translation_offset: translation_offset(progress, spacing, slide_count),
        spacing,
    }
}

/// Holds the slide count and the last computed [`TimelineState`].
#[derive(Debug, Clone)]
pub struct TimelineController {
    slide_count: usize,
    last_rule: IndexRule,
    state: TimelineState,
}

impl TimelineController {
    pub fn new(slide_count: usize, spacing: Spacing) -> Result<Self, TimelineError> {
        if slide_count == 0 {
            return Err(TimelineError::InvalidSlideCount);
        }
        Ok(Self {
            slide_count,
            last_rule: IndexRule::Bucket,
            state: TimelineState::at_start(spacing),
        })
    }

    pub fn state(&self) -> TimelineState {
        self.state
    }

    pub fn on_scroll(&mut self, sample: ScrollSample, spacing: Spacing) -> TimelineState {
        self.last_rule = IndexRule::Bucket;
        self.state = compute(sample.progress(), spacing, self.slide_count, IndexRule::Bucket);
        self.state
    }

    /// Jump to marker `index`. Out-of-range indices leave the state untouched.
    pub fn on_click(
        &mut self,
        index: usize,
        spacing: Spacing,
    ) -> Result<TimelineState, TimelineError> {
        if index >= self.slide_count {
            return Err(TimelineError::InvalidIndex {
                index,
                slide_count: self.slide_count,
            });
        }
        let progress = Progress::from_click(index, self.slide_count);
        self.last_rule = IndexRule::Nearest;
        self.state = compute(progress, spacing, self.slide_count, IndexRule::Nearest);
        Ok(self.state)
    }

    /// Re-evaluate the current progress against a new spacing.
    pub fn on_resize(&mut self, spacing: Spacing) -> TimelineState {
        self.state = compute(self.state.progress, spacing, self.slide_count, self.last_rule);
        self.state
    }

    pub fn reset(&mut self, spacing: Spacing) -> TimelineState {
        self.last_rule = IndexRule::Bucket;
        self.state = TimelineState::at_start(spacing);
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spacing(px: f64) -> Spacing {
        Spacing::new(px).expect("valid spacing")
    }

    #[test]
    fn bucket_index_is_bounded_and_monotonic() {
        for n in 2..=12 {
            let mut previous = 0usize;
            for step in 0..=1000 {
                let progress = Progress::new(step as f64 / 1000.0);
                let idx = active_index(progress, n, IndexRule::Bucket);
                assert!(idx < n);
                assert!(idx >= previous, "index went backwards for n={n}");
                previous = idx;
            }
        }
    }

    #[test]
    fn bucket_boundaries_hit_ends() {
        for n in 2..=12 {
            assert_eq!(active_index(Progress::START, n, IndexRule::Bucket), 0);
            assert_eq!(active_index(Progress::END, n, IndexRule::Bucket), n - 1);
        }
    }

    #[test]
    fn bucket_edges_are_inclusive() {
        for n in 2..=12usize {
            let step = 1.0 / n as f64;
            for k in 0..n {
                let progress = Progress::new(step * k as f64);
                assert_eq!(
                    active_index(progress, n, IndexRule::Bucket),
                    k,
                    "edge {k} of {n}"
                );
            }
        }
    }

    #[test]
    fn bucket_matches_quarter_thresholds() {
        let idx = |p: f64| active_index(Progress::new(p), 4, IndexRule::Bucket);
        assert_eq!(idx(0.24), 0);
        assert_eq!(idx(0.25), 1);
        assert_eq!(idx(0.49), 1);
        assert_eq!(idx(0.5), 2);
        assert_eq!(idx(0.74), 2);
        assert_eq!(idx(0.75), 3);
    }

    #[test]
    fn nearest_recovers_click_positions() {
        for n in 2..=8 {
            for i in 0..n {
                let progress = Progress::from_click(i, n);
                assert_eq!(active_index(progress, n, IndexRule::Nearest), i);
            }
        }
    }

    #[test]
    fn nearest_index_is_bounded_and_monotonic() {
        for n in 2..=12 {
            let mut previous = 0usize;
            for step in 0..=1000 {
                let progress = Progress::new(step as f64 / 1000.0);
                let idx = active_index(progress, n, IndexRule::Nearest);
                assert!(idx < n);
                assert!(idx >= previous, "index went backwards for n={n}");
                previous = idx;
            }
            assert_eq!(active_index(Progress::END, n, IndexRule::Nearest), n - 1);
        }
    }

    #[test]
    fn translation_stays_within_track() {
        let s = spacing(220.0);
        for n in 1..=6 {
            let track = 220.0 * (n as f64 - 1.0).max(0.0);
            for step in 0..=100 {
                let offset = translation_offset(Progress::new(step as f64 / 100.0), s, n);
                assert!(offset <= 0.0 && offset >= -track, "n={n} offset={offset}");
            }
        }
    }

    #[test]
    fn translation_at_end_rests_on_last_marker() {
        let offset = translation_offset(Progress::END, spacing(200.0), 4);
        assert_eq!(offset, -600.0);
    }

    #[test]
    fn click_scenario_moves_track_two_markers() {
        let mut controller = TimelineController::new(4, spacing(200.0)).expect("controller");
        let state = controller.on_click(2, spacing(200.0)).expect("valid click");
        assert!((state.progress.value() - 2.0 / 3.0).abs() < 1e-12);
        assert_eq!(state.active_index, 2);
        assert!((state.translation_offset + 400.0).abs() < 1e-9);
    }

    #[test]
    fn scroll_scenario_at_top() {
        let mut controller = TimelineController::new(4, spacing(200.0)).expect("controller");
        let state = controller.on_scroll(ScrollSample::new(0.0, 1000.0), spacing(200.0));
        assert_eq!(state.progress, Progress::START);
        assert_eq!(state.active_index, 0);
        assert_eq!(state.translation_offset, 0.0);
    }

    #[test]
    fn invalid_click_keeps_prior_state() {
        let mut controller = TimelineController::new(4, spacing(180.0)).expect("controller");
        let before = controller.on_scroll(ScrollSample::new(600.0, 1000.0), spacing(180.0));

        let err = controller.on_click(4, spacing(180.0)).unwrap_err();

        assert_eq!(
            err,
            TimelineError::InvalidIndex {
                index: 4,
                slide_count: 4
            }
        );
        assert_eq!(controller.state(), before);
    }

    #[test]
    fn repeated_inputs_give_identical_output() {
        let mut controller = TimelineController::new(4, spacing(140.0)).expect("controller");
        let sample = ScrollSample::new(333.0, 1000.0);
        let first = controller.on_scroll(sample, spacing(140.0));
        let second = controller.on_scroll(sample, spacing(140.0));
        assert_eq!(first, second);
        assert_eq!(
            compute(first.progress, spacing(140.0), 4, IndexRule::Bucket),
            first
        );
    }

    #[test]
    fn single_slide_never_moves() {
        let mut controller = TimelineController::new(1, spacing(200.0)).expect("controller");
        let scrolled = controller.on_scroll(ScrollSample::new(900.0, 1000.0), spacing(200.0));
        assert_eq!(scrolled.progress, Progress::START);
        assert_eq!(scrolled.active_index, 0);
        assert_eq!(scrolled.translation_offset, 0.0);

        let clicked = controller.on_click(0, spacing(200.0)).expect("only marker");
        assert_eq!(clicked.active_index, 0);
        assert_eq!(clicked.translation_offset, 0.0);
    }

    #[test]
    fn zero_slides_rejected() {
        assert_eq!(
            TimelineController::new(0, spacing(200.0)).unwrap_err(),
            TimelineError::InvalidSlideCount
        );
    }

    #[test]
    fn resize_rescales_offset_but_keeps_progress() {
        let mut controller = TimelineController::new(4, spacing(200.0)).expect("controller");
        controller
            .on_click(3, spacing(200.0))
            .expect("valid click");

        let resized = controller.on_resize(spacing(140.0));

        assert_eq!(resized.progress, Progress::END);
        assert_eq!(resized.active_index, 3);
        assert_eq!(resized.translation_offset, -420.0);
        assert_eq!(resized.spacing, spacing(140.0));
    }
}
