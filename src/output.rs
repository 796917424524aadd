//! # Output Configuration
//!
//! Controls CLI output appearance (color and emoji) based on terminal
//! capabilities and user preferences.
//!
//! Respects `--color=never|always|auto`, `NO_COLOR` (per
//! <https://no-color.org/>), `CLICOLOR=0`, `CLICOLOR_FORCE=1`, and
//! `TERM=dumb`.

use std::env;
use std::io::IsTerminal;

/// Output configuration for controlling colors and emojis.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Whether colors and emojis should be used in output.
    pub use_color: bool,
}

impl OutputConfig {
    /// Create an output configuration from environment and CLI flag.
    ///
    /// `--color=always` forces colors on (overriding `NO_COLOR`),
    /// `--color=never` forces them off, and `--color=auto` detects from the
    /// environment.
    pub fn from_env_and_flag(color_flag: &str) -> Self {
        let use_color = match color_flag.to_lowercase().as_str() {
            "always" => true,
            "never" => false,
            _ => Self::detect_color_support(),
        };

        Self { use_color }
    }

    /// Detect whether color output is supported based on environment.
    fn detect_color_support() -> bool {
        // The presence of NO_COLOR (even empty) disables colors
        if env::var_os("NO_COLOR").is_some() {
            return false;
        }

        if env::var("CLICOLOR").is_ok_and(|v| v == "0") {
            return false;
        }

        if env::var("CLICOLOR_FORCE").is_ok_and(|v| v != "0" && !v.is_empty()) {
            return true;
        }

        if env::var("TERM").is_ok_and(|v| v == "dumb") {
            return false;
        }

        std::io::stdout().is_terminal()
    }
}

/// Pick the emoji or its plain-text fallback depending on the output
/// configuration.
pub fn emoji<'a>(config: &OutputConfig, emoji: &'a str, fallback: &'a str) -> &'a str {
    if config.use_color {
        emoji
    } else {
        fallback
    }
}
