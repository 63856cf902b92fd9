use serde::Deserialize;
use std::str::FromStr;

/// High-level app configuration, flattened from the TOML tables.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub theme: ThemeMode,
    pub window_width: f32,
    pub window_height: f32,
    pub variant: Variant,
    pub vertical_anchor_pct: f32,
    pub horizontal_anchor_pct: f32,
    pub click_anchor_pct: f32,
    pub slides_path: Option<String>,
    pub log_level: LogLevel,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            theme: ThemeMode::Day,
            window_width: crate::config::defaults::default_window_width(),
            window_height: crate::config::defaults::default_window_height(),
            variant: crate::config::defaults::default_variant(),
            vertical_anchor_pct: crate::config::defaults::default_vertical_anchor_pct(),
            horizontal_anchor_pct: crate::config::defaults::default_horizontal_anchor_pct(),
            click_anchor_pct: crate::config::defaults::default_click_anchor_pct(),
            slides_path: None,
            log_level: crate::config::defaults::default_log_level(),
        }
    }
}

impl AppConfig {
    /// Crosshair position for a variant, in percent of the window width.
    pub fn anchor_pct(&self, variant: Variant) -> f32 {
        match variant {
            Variant::Vertical => self.vertical_anchor_pct,
            Variant::Horizontal => self.horizontal_anchor_pct,
            Variant::Click => self.click_anchor_pct,
        }
    }
}

/// Theme mode.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeMode {
    Day,
    Night,
}

impl Default for ThemeMode {
    fn default() -> Self {
        ThemeMode::Day
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ThemeMode::Day => "Day",
            ThemeMode::Night => "Night",
        };
        write!(f, "{}", label)
    }
}

/// Which input drives the timeline.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// The page scrolls down through a section one viewport tall per slide.
    Vertical,
    /// The page scrolls sideways through one viewport-wide panel per slide.
    Horizontal,
    /// No scrolling; markers are clicked directly.
    Click,
}

impl Variant {
    pub const ALL: [Variant; 3] = [Variant::Click, Variant::Vertical, Variant::Horizontal];

    pub fn is_scroll_driven(self) -> bool {
        !matches!(self, Variant::Click)
    }
}

impl Default for Variant {
    fn default() -> Self {
        Variant::Click
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Variant::Vertical => "Vertical Scroll",
            Variant::Horizontal => "Horizontal Scroll",
            Variant::Click => "Icons Click",
        };
        write!(f, "{}", label)
    }
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "vertical" => Ok(Variant::Vertical),
            "horizontal" => Ok(Variant::Horizontal),
            "click" => Ok(Variant::Click),
            other => Err(format!(
                "unknown variant `{other}` (expected vertical, horizontal or click)"
            )),
        }
    }
}

/// Supported logging verbosity levels.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::Info
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

impl LogLevel {
    pub fn as_filter_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}
