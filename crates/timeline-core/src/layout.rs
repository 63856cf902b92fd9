//! Marker placement relative to the crosshair.
//!
//! The track is positioned so that marker 0 is centred on the crosshair
//! when the translation offset is zero; each later marker sits one spacing
//! further right. All values are in logical pixels from the left edge of
//! the timeline band.

use crate::controller::TimelineState;

/// Scale applied to the active marker bubble.
pub const ACTIVE_MARKER_SCALE: f32 = 1.25;
/// Scale applied to every other marker bubble.
pub const IDLE_MARKER_SCALE: f32 = 0.9;
pub const IDLE_MARKER_OPACITY: f32 = 0.7;
/// Markers this far (px) left of the crosshair count as already passed.
const PASSED_TOLERANCE_PX: f64 = 0.5;

/// Crosshair position as a percentage of the viewport width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    percent: f64,
}

impl Anchor {
    pub fn new(percent: f64) -> Self {
        let percent = if percent.is_finite() {
            percent.clamp(0.0, 100.0)
        } else {
            0.0
        };
        Self { percent }
    }

    pub fn percent(self) -> f64 {
        self.percent
    }

    pub fn x(self, viewport_width: f64) -> f64 {
        viewport_width.max(0.0) * self.percent / 100.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerSlot {
    pub index: usize,
    /// Left edge of the marker's slot (one spacing wide).
    pub left: f64,
    pub center: f64,
    pub passed: bool,
    pub active: bool,
    pub scale: f32,
    pub opacity: f32,
}

impl MarkerSlot {
    /// Whether the slot should be drawn. Markers centered left of the band
    /// are off screen; passed markers are dropped only when asked.
    pub fn is_drawable(&self, hide_passed: bool) -> bool {
        self.center >= 0.0 && !(hide_passed && self.passed)
    }
}

pub fn marker_slots(state: &TimelineState, slide_count: usize, anchor_x: f64) -> Vec<MarkerSlot> {
    let spacing = state.spacing.px();
    (0..slide_count)
        .map(|index| {
            let relative = index as f64 * spacing + state.translation_offset;
            let center = anchor_x + relative;
            let active = index == state.active_index;
            MarkerSlot {
                index,
                left: center - spacing / 2.0,
                center,
                passed: relative < -PASSED_TOLERANCE_PX,
                active,
                scale: if active {
                    ACTIVE_MARKER_SCALE
                } else {
                    IDLE_MARKER_SCALE
                },
                opacity: if active { 1.0 } else { IDLE_MARKER_OPACITY },
            }
        })
        .collect()
}

/// "Step 01"-style label for a zero-based slide index.
pub fn step_label(index: usize) -> String {
    format!("Step {:02}", index + 1)
}
