//! Entry point for the scroll timeline demo.
//!
//! Responsibilities here are intentionally minimal:
//! - Parse the optional variant argument.
//! - Load user configuration from `conf/config.toml`.
//! - Load slide content, either from the configured file or the built-in set.
//! - Launch the GUI application.

mod app;
mod config;

use crate::app::run_app;
use crate::config::{Variant, load_config};
use anyhow::{Context, Result, anyhow};
use std::env;
use std::fs;
use std::path::Path;
use timeline_core::SlideSet;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*, reload};

type ReloadHandle = reload::Handle<EnvFilter, tracing_subscriber::Registry>;

fn main() {
    let reload_handle = init_tracing();
    if let Err(err) = run(&reload_handle) {
        error!("{err:?}");
        std::process::exit(1);
    }
}

fn run(reload_handle: &ReloadHandle) -> Result<()> {
    let variant_override = parse_args()?;
    let mut config = load_config(Path::new("conf/config.toml"));
    if let Some(variant) = variant_override {
        info!(%variant, "Variant overridden from command line");
        config.variant = variant;
    }
    set_log_level(reload_handle, config.log_level.as_filter_str());

    let slides = load_slides(config.slides_path.as_deref())?;
    info!(
        variant = %config.variant,
        slides = slides.len(),
        theme = %config.theme,
        level = %config.log_level,
        "Starting scroll timeline"
    );
    run_app(config, slides)
}

fn parse_args() -> Result<Option<Variant>> {
    let mut args = env::args().skip(1);
    let Some(arg) = args.next() else {
        return Ok(None);
    };
    arg.parse::<Variant>()
        .map(Some)
        .map_err(|err| anyhow!("{err}\nUsage: scroll-timeline [vertical|horizontal|click]"))
}

fn load_slides(path: Option<&str>) -> Result<SlideSet> {
    let Some(path) = path else {
        return Ok(SlideSet::builtin());
    };
    let contents =
        fs::read_to_string(path).with_context(|| format!("Failed to read slides from {path}"))?;
    let slides = SlideSet::from_toml_str(&contents)
        .with_context(|| format!("Failed to parse slides from {path}"))?;
    info!(%path, count = slides.len(), "Loaded slides");
    Ok(slides)
}

fn init_tracing() -> ReloadHandle {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let (filter_layer, handle) = reload::Layer::new(env_filter);
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_filter(filter_layer),
        )
        .init();
    handle
}

fn set_log_level(handle: &ReloadHandle, level: &str) {
    let parsed = EnvFilter::builder()
        .parse(level)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(err) = handle.modify(|filter| *filter = parsed) {
        warn!(%level, "Failed to update log level from config: {err}");
    } else {
        info!(%level, "Applied log level from config");
    }
}
