//! # Init Command Implementation
//!
//! Creates a starter `machine.yaml` configuration file: either a commented
//! example covering the common sections, or an empty skeleton.

use anyhow::Result;
use clap::Args;
use std::fs;
use std::path::PathBuf;

use imageprep::defaults::DEFAULT_CONFIG_FILE;
use imageprep::output::{emoji, OutputConfig};

const MINIMAL_TEMPLATE: &str = r#"# Machine configuration for imageprep.
# Every section is optional; populated sections map to pipeline phases.

packages:
  - curl
  # Restrict an entry to one OS family with a #tag marker:
  # - "socat #alpine"
  # Remove a package with a leading '!':
  # - "!cloud-guest-utils"

# environment:
#   LANG: C.UTF-8

# sysctls:
#   net.ipv4.ip_forward: "1"

# timezone: UTC

# files:
#   /etc/motd: |
#     provisioned by imageprep

# users:
#   - name: deploy
#     groups: [wheel]
#     sudo: true

# services:
#   - sshd

# Strip build residue from the image (caches, logs, host keys, machine-id):
cleanup: true
"#;

const EMPTY_TEMPLATE: &str = "# Machine configuration for imageprep.\n";

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path of the configuration file to create
    #[arg(value_name = "PATH", default_value = DEFAULT_CONFIG_FILE)]
    pub path: PathBuf,

    /// Create an empty configuration file
    #[arg(long)]
    pub empty: bool,

    /// Overwrite an existing configuration file
    #[arg(short, long)]
    pub force: bool,
}

/// Execute the `init` command.
pub fn execute(args: InitArgs, color_flag: &str) -> Result<()> {
    let out = OutputConfig::from_env_and_flag(color_flag);

    if args.path.exists() && !args.force {
        anyhow::bail!(
            "{} already exists (use --force to overwrite)",
            args.path.display()
        );
    }

    let template = if args.empty {
        EMPTY_TEMPLATE
    } else {
        MINIMAL_TEMPLATE
    };
    fs::write(&args.path, template)?;

    println!(
        "{} Created {}",
        emoji(&out, "✅", "[OK]"),
        args.path.display()
    );
    Ok(())
}
