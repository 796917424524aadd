//! # Generate Command Implementation
//!
//! Runs the full phase pipeline over the merged configuration and renders
//! the provisioning artifact, either as an executable POSIX-sh script or as
//! JSON for downstream tooling. The artifact goes to stdout unless
//! `-o/--output` names a file.

use anyhow::Result;
use clap::{Args, ValueEnum};
use std::path::PathBuf;

use imageprep::config;
use imageprep::context::SystemContext;
use imageprep::defaults::DEFAULT_CONFIG_FILE;
use imageprep::output::{emoji, OutputConfig};
use imageprep::phases::orchestrator;
use imageprep::suggestions;

/// Output format of the rendered artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Executable POSIX-sh script
    Sh,
    /// Structured JSON (commands + filesystem)
    Json,
}

/// Arguments for the generate command
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Configuration file(s), merged in order
    #[arg(short, long, value_name = "PATH")]
    pub config: Vec<PathBuf>,

    /// Write the artifact to a file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Artifact format
    #[arg(long, value_enum, default_value_t = OutputFormat::Sh)]
    pub format: OutputFormat,

    /// Capture build logs into this directory before cleanup truncates them
    #[arg(long, value_name = "DIR")]
    pub capture_logs: Option<String>,

    /// Suppress the summary line
    #[arg(short, long)]
    pub quiet: bool,
}

/// Execute the `generate` command.
pub fn execute(args: GenerateArgs, color_flag: &str) -> Result<()> {
    let out = OutputConfig::from_env_and_flag(color_flag);
    let config_paths = config_paths(&args.config);

    for path in &config_paths {
        if !path.exists() {
            return Err(suggestions::config_not_found(path));
        }
    }

    let config = config::load_all(&config_paths)?;

    let issues = config.validate();
    if !issues.is_empty() {
        for issue in &issues {
            eprintln!("{} {}", emoji(&out, "❌", "[ERR]"), issue);
        }
        return Err(suggestions::validation_failed(issues.len()));
    }

    let ctx = SystemContext {
        capture_logs: args.capture_logs,
    };

    let (commands, filesystem) = orchestrator::apply_phases(&config, &ctx)?;

    let artifact = match args.format {
        OutputFormat::Sh => orchestrator::render_script(&commands, &filesystem),
        OutputFormat::Json => orchestrator::render_json(&commands, &filesystem)?,
    };

    match &args.output {
        Some(path) => {
            std::fs::write(path, &artifact)?;
            if !args.quiet {
                eprintln!(
                    "{} Wrote {} commands and {} files to {}",
                    emoji(&out, "✅", "[OK]"),
                    commands.len(),
                    filesystem.len(),
                    path.display()
                );
            }
        }
        None => print!("{artifact}"),
    }

    Ok(())
}

fn config_paths(given: &[PathBuf]) -> Vec<PathBuf> {
    if given.is_empty() {
        vec![PathBuf::from(DEFAULT_CONFIG_FILE)]
    } else {
        given.to_vec()
    }
}
