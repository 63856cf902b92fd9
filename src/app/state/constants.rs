use iced::Color;
use iced::widget::scrollable::Id as ScrollId;
use once_cell::sync::Lazy;

/// Layout constants for the timeline scene.
pub(crate) const TIMELINE_BAND_HEIGHT_PX: f32 = 180.0;
pub(crate) const MARKER_BUBBLE_PX: f32 = 64.0;
pub(crate) const MARKER_BORDER_PX: f32 = 4.0;
pub(crate) const GUIDE_LINE_PX: f32 = 2.0;
pub(crate) const NAV_BAR_HEIGHT_PX: f32 = 40.0;
pub(crate) const TITLE_SIZE_PX: f32 = 40.0;
pub(crate) const SUBTITLE_SIZE_PX: f32 = 24.0;
pub(crate) const BODY_SIZE_PX: f32 = 18.0;
pub(crate) const LABEL_SIZE_PX: f32 = 14.0;

pub(crate) const ACCENT_ACTIVE: Color = Color::from_rgb(0.918, 0.345, 0.047);
pub(crate) const ACCENT_IDLE: Color = Color::from_rgb(0.984, 0.573, 0.235);
pub(crate) const GUIDE_LINE: Color = Color::from_rgb(0.118, 0.161, 0.231);

pub(crate) static TIMELINE_SCROLL_ID: Lazy<ScrollId> =
    Lazy::new(|| ScrollId::new("timeline-scroll"));
