//! # Minify Command Implementation
//!
//! Loads one or more configuration documents, merges them, and prints the
//! normalized result. Useful for auditing what the pipeline will actually
//! see after multi-document merging, and for committing one canonical file.

use anyhow::Result;
use clap::{Args, ValueEnum};
use std::path::PathBuf;

use imageprep::config;
use imageprep::defaults::DEFAULT_CONFIG_FILE;
use imageprep::suggestions;

/// Output format of the normalized configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MinifyFormat {
    /// YAML (default)
    Yaml,
    /// JSON
    Json,
}

/// Arguments for the minify command
#[derive(Args, Debug)]
pub struct MinifyArgs {
    /// Configuration file(s), merged in order
    #[arg(short, long, value_name = "PATH")]
    pub config: Vec<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = MinifyFormat::Yaml)]
    pub format: MinifyFormat,
}

/// Execute the `minify` command.
pub fn execute(args: MinifyArgs) -> Result<()> {
    let paths = if args.config.is_empty() {
        vec![PathBuf::from(DEFAULT_CONFIG_FILE)]
    } else {
        args.config.clone()
    };

    for path in &paths {
        if !path.exists() {
            return Err(suggestions::config_not_found(path));
        }
    }

    let config = config::load_all(&paths)?;

    let rendered = match args.format {
        MinifyFormat::Yaml => serde_yaml::to_string(&config)?,
        MinifyFormat::Json => format!("{}\n", serde_json::to_string_pretty(&config)?),
    };
    print!("{rendered}");

    Ok(())
}
