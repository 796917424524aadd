//! Timezone phase: `timezone` → localtime symlink plus `/etc/timezone`.

use super::Phase;
use crate::config::Config;
use crate::context::SystemContext;
use crate::error::{Error, Result};
use crate::filesystem::{FileEntry, Filesystem};
use crate::script::Commands;

/// Sets the target timezone.
///
/// Emits the `localtime` symlink command and writes `/etc/timezone` for the
/// distributions that read it. A timezone containing whitespace or quotes
/// is a phase error: it cannot be interpolated into a fragment safely.
#[derive(Debug, Clone, Copy, Default)]
pub struct Timezone;

impl Phase for Timezone {
    fn name(&self) -> &'static str {
        "timezone"
    }

    fn apply(&self, config: &Config, _ctx: &SystemContext) -> Result<(Commands, Filesystem)> {
        let mut fs = Filesystem::new();
        let mut cmds = Commands::new();

        if let Some(tz) = &config.timezone {
            if tz.chars().any(|c| c.is_whitespace() || c == '\'' || c == '"') {
                return Err(Error::Phase {
                    phase: self.name().to_string(),
                    message: format!("timezone '{tz}' cannot be used in a shell fragment"),
                });
            }
            cmds = cmds.add(format!(
                "ln -sf /usr/share/zoneinfo/{tz} /etc/localtime"
            ));
            fs.add("/etc/timezone", FileEntry::new(format!("{tz}\n")));
        }

        Ok((cmds, fs))
    }
}
