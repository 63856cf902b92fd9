pub(crate) fn default_window_width() -> f32 {
    1280.0
}

pub(crate) fn default_window_height() -> f32 {
    800.0
}

pub(crate) fn default_variant() -> crate::config::Variant {
    crate::config::Variant::Click
}

pub(crate) fn default_vertical_anchor_pct() -> f32 {
    18.0
}

pub(crate) fn default_horizontal_anchor_pct() -> f32 {
    8.0
}

pub(crate) fn default_click_anchor_pct() -> f32 {
    18.0
}

pub(crate) fn default_log_level() -> crate::config::LogLevel {
    crate::config::LogLevel::Info
}
