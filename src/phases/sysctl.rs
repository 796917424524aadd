//! Sysctl phase: `sysctls` map → drop-in file plus a reload command.

use super::Phase;
use crate::config::Config;
use crate::context::SystemContext;
use crate::defaults::SYSCTL_DROPIN;
use crate::error::Result;
use crate::filesystem::{FileEntry, Filesystem};
use crate::script::Commands;

/// Writes kernel parameters to a sysctl drop-in and reloads.
///
/// The drop-in keeps the parameters across reboots; `sysctl --system` makes
/// them effective during provisioning itself (container networking and the
/// like frequently depend on that).
#[derive(Debug, Clone, Copy, Default)]
pub struct Sysctl;

impl Phase for Sysctl {
    fn name(&self) -> &'static str {
        "sysctl"
    }

    fn apply(&self, config: &Config, _ctx: &SystemContext) -> Result<(Commands, Filesystem)> {
        let mut fs = Filesystem::new();
        let mut cmds = Commands::new();

        if !config.sysctls.is_empty() {
            let mut content = String::new();
            for (key, value) in &config.sysctls {
                content.push_str(&format!("{key} = {value}\n"));
            }
            fs.add(SYSCTL_DROPIN, FileEntry::new(content));
            cmds = cmds.add("sysctl --system");
        }

        Ok((cmds, fs))
    }
}
