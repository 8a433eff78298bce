//! Logging setup using simplelog
//!
//! Logs go to stderr by default. Set `TINY_STORE_DEMO_LOG` to a file path to
//! write them there instead. The level comes from `RUST_LOG`.

use anyhow::{Context, Result};
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode, WriteLogger};
use std::fs::File;

const LOG_FILE_ENV: &str = "TINY_STORE_DEMO_LOG";

fn level_from(value: Option<&str>) -> LevelFilter {
    match value.map(str::to_lowercase).as_deref() {
        Some("error") => LevelFilter::Error,
        Some("warn") => LevelFilter::Warn,
        Some("info") => LevelFilter::Info,
        Some("debug") => LevelFilter::Debug,
        Some("trace") => LevelFilter::Trace,
        _ => LevelFilter::Info,
    }
}

/// Initialize logging
pub fn init() -> Result<()> {
    let level = level_from(std::env::var("RUST_LOG").ok().as_deref());

    // Configure simplelog with timestamps
    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_time_offset_to_local()
        .unwrap_or_else(|c| c) // Fallback if local time offset fails
        .build();

    match std::env::var_os(LOG_FILE_ENV) {
        Some(path) => {
            let file = File::create(&path)
                .with_context(|| format!("Failed to create log file {}", path.to_string_lossy()))?;
            WriteLogger::init(level, config, file).context("Failed to initialize logger")
        }
        None => TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto)
            .context("Failed to initialize logger"),
    }
}
