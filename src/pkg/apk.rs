//! apk family: Alpine.

use super::PackageManager;
use crate::script::Commands;

/// Package manager for Alpine.
#[derive(Debug, Clone, Copy, Default)]
pub struct Apk;

impl PackageManager for Apk {
    fn name(&self) -> &'static str {
        "apk"
    }

    fn tags(&self) -> &[&'static str] {
        &["alpine"]
    }

    fn update_cache(&self) -> Commands {
        Commands::new().add("apk update")
    }

    fn install(&self, packages: &[&str]) -> Commands {
        Commands::new().add(format!("apk add --no-cache {}", packages.join(" ")))
    }

    fn remove(&self, packages: &[&str]) -> Commands {
        Commands::new().add(format!("apk del {}", packages.join(" ")))
    }

    fn cleanup_caches(&self) -> Commands {
        Commands::new().add("rm -rf /var/cache/apk/* || true")
    }
}
