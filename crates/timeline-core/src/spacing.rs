//! Responsive marker spacing.
//!
//! The viewport width picks one of four fixed spacings. The table is
//! evaluated narrowest bucket first. The widest bucket is intentionally
//! smaller than the one before it; that is the observed layout and is kept
//! as is until product decides otherwise.

use crate::error::TimelineError;

/// Pixel distance between adjacent timeline markers.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Spacing(f64);

impl Spacing {
    pub fn new(px: f64) -> Result<Self, TimelineError> {
        if px.is_finite() && px > 0.0 {
            Ok(Spacing(px))
        } else {
            Err(TimelineError::InvalidSpacing { spacing: px })
        }
    }

    pub fn px(self) -> f64 {
        self.0
    }
}

/// `(max_width_inclusive, spacing_px)`, narrowest first.
pub const SPACING_BREAKPOINTS: [(u32, f64); 3] = [(480, 140.0), (768, 180.0), (1024, 220.0)];
/// Spacing used above the last breakpoint.
pub const WIDE_SPACING_PX: f64 = 200.0;

pub fn validate_width(width: i64) -> Result<u32, TimelineError> {
    if width < 0 {
        return Err(TimelineError::OutOfRangeWidth { width });
    }
    Ok(u32::try_from(width).unwrap_or(u32::MAX))
}

/// Spacing for a viewport `width` in pixels. Negative widths are treated as
/// zero.
pub fn resolve_spacing(width: i64) -> Spacing {
    let width = validate_width(width).unwrap_or_else(|err| {
        tracing::debug!(%err, "Treating viewport width as 0");
        0
    });
    let px = SPACING_BREAKPOINTS
        .iter()
        .find(|(max_width, _)| width <= *max_width)
        .map(|(_, px)| *px)
        .unwrap_or(WIDE_SPACING_PX);
    Spacing(px)
}

/// Convenience for windowing toolkits that report logical sizes as floats.
/// Fractional pixels are truncated.
pub fn resolve_spacing_for(width: f32) -> Spacing {
    if !width.is_finite() {
        return resolve_spacing(0);
    }
    resolve_spacing(width as i64)
}
