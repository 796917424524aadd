//! dnf family: RPM-based distributions.

use super::PackageManager;
use crate::script::Commands;

/// Package manager for dnf/yum-based distributions.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dnf;

impl PackageManager for Dnf {
    fn name(&self) -> &'static str {
        "dnf"
    }

    fn tags(&self) -> &[&'static str] {
        &["redhat", "centos", "fedora"]
    }

    fn update_cache(&self) -> Commands {
        Commands::new().add("dnf -y makecache")
    }

    fn install(&self, packages: &[&str]) -> Commands {
        Commands::new().add(format!("dnf -y install {}", packages.join(" ")))
    }

    fn remove(&self, packages: &[&str]) -> Commands {
        Commands::new().add(format!("dnf -y remove {}", packages.join(" ")))
    }

    fn cleanup_caches(&self) -> Commands {
        Commands::new()
            .add("dnf -y clean all")
            .add("rm -rf /var/cache/dnf || true")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_install() {
        let cmds = Dnf.install(&["socat"]);
        assert_eq!(cmds.get_commands()[0].cmd, "dnf -y install socat");
    }

    #[test]
    fn test_cleanup_caches_shape() {
        let cmds = Dnf.cleanup_caches();
        assert_eq!(cmds.len(), 2);
        assert!(cmds.get_commands()[1].cmd.ends_with("|| true"));
    }
}
