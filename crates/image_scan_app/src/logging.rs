//! Logging initialization for the `image_scan` binary.
//!
//! Stdout carries the report, so every log line goes to stderr.

use log::LevelFilter;
use simplelog::{ColorChoice, Config, ConfigBuilder, TermLogger, TerminalMode};

/// Install a stderr terminal logger at `level`.
///
/// Failure to install (a logger already set) is ignored.
pub fn initialize(level: LevelFilter) {
    let _ = TermLogger::init(level, build_config(), TerminalMode::Stderr, ColorChoice::Auto);
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}
