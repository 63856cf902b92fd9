/// Last known window geometry, in logical pixels.
pub struct ViewportState {
    pub(in crate::app) width: f32,
    pub(in crate::app) height: f32,
}

impl ViewportState {
    pub(in crate::app) fn new(width: f32, height: f32) -> Self {
        Self {
            width: sanitize_extent(width),
            height: sanitize_extent(height),
        }
    }

    pub(in crate::app) fn update(&mut self, width: f32, height: f32) {
        self.width = sanitize_extent(width);
        self.height = sanitize_extent(height);
    }

    /// Height available below the navigation bar.
    pub(in crate::app) fn body_height(&self) -> f32 {
        (self.height - super::NAV_BAR_HEIGHT_PX).max(1.0)
    }
}

fn sanitize_extent(value: f32) -> f32 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}
