use super::defaults;
use super::models::{AppConfig, LogLevel, ThemeMode, Variant};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub(super) struct ConfigTables {
    #[serde(default)]
    appearance: AppearanceConfig,
    #[serde(default)]
    window: WindowConfig,
    #[serde(default)]
    timeline: TimelineConfig,
    #[serde(default)]
    content: ContentConfig,
    #[serde(default)]
    logging: LoggingConfig,
}

impl From<ConfigTables> for AppConfig {
    fn from(tables: ConfigTables) -> Self {
        AppConfig {
            theme: tables.appearance.theme,
            window_width: tables.window.width,
            window_height: tables.window.height,
            variant: tables.timeline.variant,
            vertical_anchor_pct: tables.timeline.vertical_anchor_pct,
            horizontal_anchor_pct: tables.timeline.horizontal_anchor_pct,
            click_anchor_pct: tables.timeline.click_anchor_pct,
            slides_path: tables.content.slides_path,
            log_level: tables.logging.log_level,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct AppearanceConfig {
    #[serde(default)]
    theme: ThemeMode,
}

#[derive(Debug, Clone, Deserialize)]
struct WindowConfig {
    #[serde(default = "defaults::default_window_width")]
    width: f32,
    #[serde(default = "defaults::default_window_height")]
    height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            width: defaults::default_window_width(),
            height: defaults::default_window_height(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct TimelineConfig {
    #[serde(default = "defaults::default_variant")]
    variant: Variant,
    #[serde(default = "defaults::default_vertical_anchor_pct")]
    vertical_anchor_pct: f32,
    #[serde(default = "defaults::default_horizontal_anchor_pct")]
    horizontal_anchor_pct: f32,
    #[serde(default = "defaults::default_click_anchor_pct")]
    click_anchor_pct: f32,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        TimelineConfig {
            variant: defaults::default_variant(),
            vertical_anchor_pct: defaults::default_vertical_anchor_pct(),
            horizontal_anchor_pct: defaults::default_horizontal_anchor_pct(),
            click_anchor_pct: defaults::default_click_anchor_pct(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ContentConfig {
    #[serde(default)]
    slides_path: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct LoggingConfig {
    #[serde(default = "defaults::default_log_level")]
    log_level: LogLevel,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            log_level: defaults::default_log_level(),
        }
    }
}
