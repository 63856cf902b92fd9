//! Scroll-driven slide timeline math.
//!
//! Converts scroll offsets and marker clicks into a normalized progress, the
//! active slide index, and the horizontal offset of the marker track. Also
//! resolves marker spacing from the viewport width. Nothing here touches a
//! rendering surface; measurements are passed in as plain numbers.

pub mod controller;
pub mod error;
pub mod layout;
pub mod progress;
pub mod slides;
pub mod spacing;

pub use controller::{
    IndexRule, TimelineController, TimelineState, active_index, compute, translation_offset,
};
pub use error::TimelineError;
pub use layout::{Anchor, MarkerSlot, marker_slots, step_label};
pub use progress::{Progress, ScrollSample};
pub use slides::{Slide, SlideIcon, SlideSet};
pub use spacing::{Spacing, resolve_spacing, resolve_spacing_for, validate_width};
