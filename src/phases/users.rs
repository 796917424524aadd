//! Users phase: `users` list → account creation commands plus sudoers
//! drop-ins.

use super::Phase;
use crate::config::Config;
use crate::context::SystemContext;
use crate::error::Result;
use crate::filesystem::{FileEntry, Filesystem};
use crate::script::Commands;

/// Creates user accounts, their groups, and optional sudo drop-ins.
///
/// Creation commands are idempotent (`groupadd -f`, `id || useradd`) so
/// re-running the script on a machine that already has the accounts is
/// harmless. The sudoers drop-in is a filesystem entry with mode 0440, the
/// mode sudo insists on.
#[derive(Debug, Clone, Copy, Default)]
pub struct Users;

impl Phase for Users {
    fn name(&self) -> &'static str {
        "users"
    }

    fn apply(&self, config: &Config, _ctx: &SystemContext) -> Result<(Commands, Filesystem)> {
        let mut fs = Filesystem::new();
        let mut cmds = Commands::new();

        for user in &config.users {
            let name = &user.name;

            for group in &user.groups {
                cmds = cmds.add(format!("groupadd -f {group}"));
            }

            let shell = user
                .shell
                .as_deref()
                .map(|s| format!(" -s {s}"))
                .unwrap_or_default();
            cmds = cmds.add(format!(
                "id -u {name} >/dev/null 2>&1 || useradd -m{shell} {name}"
            ));

            for group in &user.groups {
                cmds = cmds.add(format!("usermod -aG {group} {name}"));
            }

            if user.sudo {
                fs.add(
                    format!("/etc/sudoers.d/{name}"),
                    FileEntry::new(format!("{name} ALL=(ALL) NOPASSWD:ALL\n"))
                        .with_permissions("0440")
                        .with_owner("root:root"),
                );
            }
        }

        Ok((cmds, fs))
    }
}
