//! Setup for the application logging.
//!
//! It redirects the log info to the standard output with the log threshold
//! and the style defined in the configuration.
//!
//! Thresholds:
//!
//! - `Off`
//! - `Error`
//! - `Warn`
//! - `Info`
//! - `Debug`
//! - `Trace`
//!
//! Styles: `full`, `pretty`, `compact` and `json`.
//!
//! Refer to the [configuration crate documentation](https://docs.rs/torrust-scrape-tracker-configuration) to know how to change log settings.
use std::sync::Once;

use torrust_scrape_tracker_configuration::{Configuration, LogStyle, Threshold};
use tracing::info;
use tracing::level_filters::LevelFilter;

static INIT: Once = Once::new();

/// It redirects the log info to the standard output with the log threshold
/// and style defined in the configuration. With the `off` threshold nothing
/// is installed.
pub fn setup(cfg: &Configuration) {
    let tracing_level = map_to_tracing_level_filter(&cfg.logging.threshold);

    if tracing_level == LevelFilter::OFF {
        return;
    }

    let style = TraceStyle::from(cfg.logging.style);

    INIT.call_once(|| {
        tracing_stdout_init(tracing_level, &style);
    });
}

fn map_to_tracing_level_filter(threshold: &Threshold) -> LevelFilter {
    match threshold {
        Threshold::Off => LevelFilter::OFF,
        Threshold::Error => LevelFilter::ERROR,
        Threshold::Warn => LevelFilter::WARN,
        Threshold::Info => LevelFilter::INFO,
        Threshold::Debug => LevelFilter::DEBUG,
        Threshold::Trace => LevelFilter::TRACE,
    }
}

fn tracing_stdout_init(filter: LevelFilter, style: &TraceStyle) {
    let builder = tracing_subscriber::fmt().with_max_level(filter).with_ansi(true);

    let () = match style {
        TraceStyle::Default => builder.init(),
        TraceStyle::Pretty => builder.pretty().init(),
        TraceStyle::Compact => builder.compact().init(),
        TraceStyle::Json => builder.json().init(),
    };

    info!("Logging initialized with the {style}");
}

#[derive(Debug)]
pub enum TraceStyle {
    Default,
    Pretty,
    Compact,
    Json,
}

impl From<LogStyle> for TraceStyle {
    fn from(style: LogStyle) -> Self {
        match style {
            LogStyle::Full => TraceStyle::Default,
            LogStyle::Pretty => TraceStyle::Pretty,
            LogStyle::Compact => TraceStyle::Compact,
            LogStyle::Json => TraceStyle::Json,
        }
    }
}

impl std::fmt::Display for TraceStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let style = match self {
            TraceStyle::Default => "Default Style",
            TraceStyle::Pretty => "Pretty Style",
            TraceStyle::Compact => "Compact Style",
            TraceStyle::Json => "Json Format",
        };

        f.write_str(style)
    }
}
