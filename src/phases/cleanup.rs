//! Cleanup phase: strip build residue so the image is small and clone-safe.
//!
//! Skipped entirely unless `cleanup: true` is set. When enabled it emits,
//! in order:
//!
//! 1. One tagged cache-cleanup batch per registered base OS family. All
//!    families are emitted unconditionally; a multi-stage or unioned build
//!    strategy selects the relevant subset downstream.
//! 2. The log-capture block, when the run context requests it. This must
//!    precede the tail: the tail truncates the logs being captured.
//! 3. A fixed literal tail. Ordering within the tail is a hard contract:
//!    journal vacuum assumes rotation completed, and the zero-fill trick
//!    must follow every deletion to maximize reclaimable space.
//!
//! Fragments that are best-effort hygiene carry `|| true`; bookkeeping
//! steps expected to succeed (log truncation, journal rotation, the
//! completion marker) do not, so their failure surfaces at execution time.

use super::Phase;
use crate::config::Config;
use crate::context::SystemContext;
use crate::error::Result;
use crate::filesystem::Filesystem;
use crate::pkg::PackageManager;
use crate::script::Commands;

/// The fixed literal tail, appended after the per-family cache cleanup and
/// the optional log-capture block.
const TAIL: [&str; 17] = [
    "rm -rf /tmp/* || true",
    "rm -rf /usr/share/man/* || true",
    "rm -rf /usr/share/doc/* || true",
    "rm /etc/netplan/50-cloud-init.yaml || true",
    "rm /etc/udev/rules.d/70-persistent-net.rules || true",
    "rm -f /etc/ssh/{ssh_host_dsa_key,ssh_host_dsa_key.pub,ssh_host_ecdsa_key,ssh_host_ecdsa_key.pub,ssh_host_ed25519_key,ssh_host_ed25519_key.pub,ssh_host_rsa_key,ssh_host_rsa_key.pub} || true",
    "sed -i '/^\\(HWADDR\\|UUID\\)=/d' /etc/sysconfig/network-scripts/ifcfg-* || true",
    "find /var/cache -type f -exec rm -rf {} \\;",
    "find /var/log -type f | while read -r f; do echo -ne '' > \"$f\"; done;",
    "cloud-init clean",
    "journalctl --rotate",
    "sleep 5",
    "journalctl --vacuum-time=1s",
    "echo > /etc/machine-id",
    "echo > /root/.bash_history",
    "echo Finished cleanup on $(date) > /var/log/cleanup.log",
    "dd if=/dev/zero of=/EMPTY bs=1M 2>/dev/null || true; rm -f /EMPTY",
];

/// The cleanup phase. Holds the injected base-family list so tests can run
/// it against fake families.
#[derive(Debug)]
pub struct Cleanup {
    families: Vec<Box<dyn PackageManager>>,
}

impl Cleanup {
    /// Cleanup over an explicit family list.
    pub fn new(families: Vec<Box<dyn PackageManager>>) -> Self {
        Self { families }
    }
}

impl Phase for Cleanup {
    fn name(&self) -> &'static str {
        "cleanup"
    }

    fn apply(&self, config: &Config, ctx: &SystemContext) -> Result<(Commands, Filesystem)> {
        let fs = Filesystem::new();
        let mut cmds = Commands::new();

        if !config.cleanup.is_enabled() {
            return Ok((cmds, fs));
        }

        for family in &self.families {
            cmds = cmds.add_all(
                family
                    .cleanup_caches()
                    .with_tags(family.tags().iter().copied()),
            );
        }

        cmds = cmds.add_all(ctx.capture_log_commands());

        for fragment in TAIL {
            cmds = cmds.add(fragment);
        }

        Ok((cmds, fs))
    }
}
