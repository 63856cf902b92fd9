//! Normalized progress through the interactive range.
//!
//! Every input (a scroll offset or a clicked marker) is reduced to a
//! [`Progress`] value before anything else is derived from it. The value is
//! clamped on construction, so downstream math never sees NaN or a value
//! outside `[0, 1]`.

use crate::error::TimelineError;

/// Position through the scroll or click range, always within `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Progress(f64);

impl Progress {
    pub const START: Progress = Progress(0.0);
    pub const END: Progress = Progress(1.0);

    /// Clamp `raw` into `[0, 1]`. NaN collapses to the start.
    pub fn new(raw: f64) -> Self {
        if raw.is_nan() {
            return Progress::START;
        }
        Progress(raw.clamp(0.0, 1.0))
    }

    /// Progress for a click on marker `index` of `slide_count` markers.
    ///
    /// A single-slide timeline has nowhere to travel, so it always reports
    /// the start. The index is expected to be validated by the caller.
    pub fn from_click(index: usize, slide_count: usize) -> Self {
        if slide_count <= 1 {
            return Progress::START;
        }
        Progress::new(index as f64 / (slide_count - 1) as f64)
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

/// Raw scroll measurement supplied by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollSample {
    pub offset: f64,
    pub total: f64,
}

impl ScrollSample {
    pub fn new(offset: f64, total: f64) -> Self {
        Self { offset, total }
    }

    /// Build a sample from a scroll container's extent: the scrollable
    /// distance is whatever the content overhangs the viewport.
    pub fn from_extent(offset: f64, content_len: f64, viewport_len: f64) -> Self {
        Self {
            offset,
            total: content_len - viewport_len,
        }
    }

    pub fn validate(&self) -> Result<(), TimelineError> {
        if !self.total.is_finite() || self.total <= 0.0 {
            return Err(TimelineError::DegenerateRange { total: self.total });
        }
        if !self.offset.is_finite() {
            return Err(TimelineError::NonFiniteOffset);
        }
        Ok(())
    }

    /// `offset / total`, clamped. A collapsed range (content no taller than
    /// the viewport) or a non-finite offset yields [`Progress::START`].
    pub fn progress(&self) -> Progress {
        match self.validate() {
            Ok(()) => Progress::new(self.offset / self.total),
            Err(err) => {
                tracing::trace!(%err, "Substituting start progress for scroll sample");
                Progress::START
            }
        }
    }
}
