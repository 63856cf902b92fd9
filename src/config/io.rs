use super::models::AppConfig;
use super::tables::ConfigTables;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Load configuration from the given path, falling back to defaults on error.
pub fn load_config(path: &Path) -> AppConfig {
    let contents = match fs::read_to_string(path) {
        Ok(data) => {
            info!(path = %path.display(), "Loaded base config");
            data
        }
        Err(err) => {
            warn!(
                path = %path.display(),
                "Falling back to default config: {err}"
            );
            return AppConfig::default();
        }
    };

    match parse_config(&contents) {
        Ok(cfg) => {
            debug!("Parsed configuration from disk");
            cfg
        }
        Err(err) => {
            warn!(path = %path.display(), "Invalid config TOML: {err:#}");
            AppConfig::default()
        }
    }
}

fn parse_config(contents: &str) -> Result<AppConfig> {
    let tables: ConfigTables = toml::from_str(contents).context("parsing config tables")?;
    let mut config = AppConfig::from(tables);
    clamp_config(&mut config);
    Ok(config)
}

fn clamp_config(config: &mut AppConfig) {
    let clamp_pct = |value: f32, fallback: f32| {
        if value.is_finite() {
            value.clamp(0.0, 100.0)
        } else {
            fallback
        }
    };
    config.vertical_anchor_pct = clamp_pct(
        config.vertical_anchor_pct,
        super::defaults::default_vertical_anchor_pct(),
    );
    config.horizontal_anchor_pct = clamp_pct(
        config.horizontal_anchor_pct,
        super::defaults::default_horizontal_anchor_pct(),
    );
    config.click_anchor_pct = clamp_pct(
        config.click_anchor_pct,
        super::defaults::default_click_anchor_pct(),
    );
    if !config.window_width.is_finite() || config.window_width < 1.0 {
        config.window_width = super::defaults::default_window_width();
    }
    if !config.window_height.is_finite() || config.window_height < 1.0 {
        config.window_height = super::defaults::default_window_height();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LogLevel, ThemeMode, Variant};

    #[test]
    fn empty_document_yields_defaults() {
        let config = parse_config("").expect("empty config parses");
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn reads_sectioned_tables() {
        let config = parse_config(
            r#"
[appearance]
theme = "night"

[window]
width = 900.0

[timeline]
variant = "horizontal"
horizontal_anchor_pct = 12.5

[content]
slides_path = "conf/slides.toml"

[logging]
log_level = "debug"
"#,
        )
        .expect("valid config");

        assert_eq!(config.theme, ThemeMode::Night);
        assert_eq!(config.window_width, 900.0);
        assert_eq!(config.window_height, 800.0);
        assert_eq!(config.variant, Variant::Horizontal);
        assert_eq!(config.horizontal_anchor_pct, 12.5);
        assert_eq!(config.vertical_anchor_pct, 18.0);
        assert_eq!(config.slides_path.as_deref(), Some("conf/slides.toml"));
        assert_eq!(config.log_level, LogLevel::Debug);
    }

    #[test]
    fn anchors_are_clamped_to_percentages() {
        let config = parse_config(
            "[timeline]\nvertical_anchor_pct = 140.0\nclick_anchor_pct = -3.0\n",
        )
        .expect("valid config");
        assert_eq!(config.vertical_anchor_pct, 100.0);
        assert_eq!(config.click_anchor_pct, 0.0);
    }

    #[test]
    fn unknown_variant_is_an_error() {
        assert!(parse_config("[timeline]\nvariant = \"diagonal\"\n").is_err());
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join(format!(
            "scroll-timeline-missing-{}.toml",
            std::process::id()
        ));
        assert_eq!(load_config(&path), AppConfig::default());
    }
}
