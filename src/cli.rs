//! CLI argument parsing and command dispatch

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands;

/// imageprep - Turn a declarative machine configuration into a provisioning script
#[derive(Parser, Debug)]
#[command(name = "imageprep")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Colorize output (always, never, auto)
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL", default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the phase pipeline and render the provisioning artifact
    Generate(commands::generate::GenerateArgs),
    /// Load, merge, and print the normalized configuration
    Minify(commands::minify::MinifyArgs),
    /// Validate a machine configuration without generating anything
    Validate(commands::validate::ValidateArgs),
    /// Scaffold a starter machine.yaml configuration
    Init(commands::init::InitArgs),
    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        // Logging goes to stderr; the rendered artifact owns stdout.
        let _ = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(self.log_level.as_str()),
        )
        .try_init();

        match self.command {
            Commands::Generate(args) => commands::generate::execute(args, &self.color),
            Commands::Minify(args) => commands::minify::execute(args),
            Commands::Validate(args) => commands::validate::execute(args, &self.color),
            Commands::Init(args) => commands::init::execute(args, &self.color),
            Commands::Completions(args) => commands::completions::execute(args),
        }
    }
}
