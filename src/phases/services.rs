//! Services phase: `services` list → enable-and-start commands.

use super::Phase;
use crate::config::Config;
use crate::context::SystemContext;
use crate::error::Result;
use crate::filesystem::Filesystem;
use crate::script::Commands;

/// Enables and starts the configured service units.
///
/// `--now` covers both live provisioning and image builds; on an image
/// build the start is a no-op inside most chroots and is therefore
/// fail-open.
#[derive(Debug, Clone, Copy, Default)]
pub struct Services;

impl Phase for Services {
    fn name(&self) -> &'static str {
        "services"
    }

    fn apply(&self, config: &Config, _ctx: &SystemContext) -> Result<(Commands, Filesystem)> {
        let mut cmds = Commands::new();
        for service in &config.services {
            cmds = cmds.add(format!("systemctl enable --now {service} || true"));
        }
        Ok((cmds, Filesystem::new()))
    }
}
