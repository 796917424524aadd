//! # Validate Command Implementation
//!
//! Parses and semantically validates a machine configuration without
//! generating anything. This is a safe, read-only operation.
//!
//! Two layers are checked:
//!
//! - **Parsing**: YAML syntax and the schema (unknown top-level keys fail
//!   with a "did you mean" hint when a close known key exists).
//! - **Semantics**: target paths, environment variable names, sysctl keys,
//!   package specs, user and service names.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use imageprep::config;
use imageprep::defaults::DEFAULT_CONFIG_FILE;
use imageprep::output::{emoji, OutputConfig};
use imageprep::suggestions;

/// Arguments for the validate command
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Configuration file(s) to validate, merged in order
    #[arg(short, long, value_name = "PATH")]
    pub config: Vec<PathBuf>,
}

/// Execute the `validate` command.
pub fn execute(args: ValidateArgs, color_flag: &str) -> Result<()> {
    let out = OutputConfig::from_env_and_flag(color_flag);
    let paths = if args.config.is_empty() {
        vec![PathBuf::from(DEFAULT_CONFIG_FILE)]
    } else {
        args.config.clone()
    };

    for path in &paths {
        if !path.exists() {
            return Err(suggestions::config_not_found(path));
        }
        println!(
            "{} Validating configuration: {}",
            emoji(&out, "🔍", "[SCAN]"),
            path.display()
        );
    }

    let config = match config::load_all(&paths) {
        Ok(config) => {
            println!(
                "{} Configuration parsed successfully",
                emoji(&out, "✅", "[OK]")
            );
            config
        }
        Err(e) => {
            println!(
                "{} Configuration parsing failed: {}",
                emoji(&out, "❌", "[ERR]"),
                e
            );
            return Err(e.into());
        }
    };

    let issues = config.validate();
    if issues.is_empty() {
        println!("{} Configuration is valid", emoji(&out, "✅", "[OK]"));
        return Ok(());
    }

    for issue in &issues {
        println!("{} {}", emoji(&out, "❌", "[ERR]"), issue);
    }
    Err(suggestions::validation_failed(issues.len()))
}
