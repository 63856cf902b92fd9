use crate::config::Variant;

/// Messages emitted by the UI.
#[derive(Debug, Clone)]
pub enum Message {
    Scrolled {
        offset_x: f32,
        offset_y: f32,
        viewport_width: f32,
        viewport_height: f32,
        content_width: f32,
        content_height: f32,
    },
    MarkerClicked(usize),
    WindowResized {
        width: f32,
        height: f32,
    },
    VariantSelected(Variant),
    ToggleTheme,
}
