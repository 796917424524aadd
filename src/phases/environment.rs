//! Environment phase: `environment` map → `/etc/environment` overlay entry.

use super::Phase;
use crate::config::Config;
use crate::context::SystemContext;
use crate::defaults::ENVIRONMENT_FILE;
use crate::error::Result;
use crate::filesystem::{FileEntry, Filesystem};
use crate::script::Commands;

/// Writes `/etc/environment` from the configured map.
///
/// Purely a filesystem phase: no commands are emitted, the target reads the
/// file on login. Keys are written sorted so the entry is byte-stable.
#[derive(Debug, Clone, Copy, Default)]
pub struct Environment;

impl Phase for Environment {
    fn name(&self) -> &'static str {
        "environment"
    }

    fn apply(&self, config: &Config, _ctx: &SystemContext) -> Result<(Commands, Filesystem)> {
        let mut fs = Filesystem::new();

        if !config.environment.is_empty() {
            let mut content = String::new();
            for (key, value) in &config.environment {
                content.push_str(&format!("{key}={value}\n"));
            }
            fs.add(ENVIRONMENT_FILE, FileEntry::new(content));
        }

        Ok((Commands::new(), fs))
    }
}
