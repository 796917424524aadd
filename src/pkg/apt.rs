//! apt family: Debian and Ubuntu derivatives.

use super::PackageManager;
use crate::script::Commands;

/// Package manager for apt-based distributions.
#[derive(Debug, Clone, Copy, Default)]
pub struct Apt;

// Every apt invocation pins DEBIAN_FRONTEND so image builds cannot hang on
// a debconf prompt.
const APT_ENV: &str = "DEBIAN_FRONTEND=noninteractive";

impl PackageManager for Apt {
    fn name(&self) -> &'static str {
        "apt"
    }

    fn tags(&self) -> &[&'static str] {
        &["debian", "ubuntu"]
    }

    fn update_cache(&self) -> Commands {
        Commands::new().add(format!("{APT_ENV} apt-get -y update"))
    }

    fn install(&self, packages: &[&str]) -> Commands {
        Commands::new().add(format!(
            "{APT_ENV} apt-get -y install {}",
            packages.join(" ")
        ))
    }

    fn remove(&self, packages: &[&str]) -> Commands {
        Commands::new().add(format!(
            "{APT_ENV} apt-get -y purge {}",
            packages.join(" ")
        ))
    }

    fn cleanup_caches(&self) -> Commands {
        Commands::new()
            .add(format!("{APT_ENV} apt-get -y autoremove --purge || true"))
            .add(format!("{APT_ENV} apt-get -y clean"))
            .add("rm -rf /var/lib/apt/lists/* || true")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_install_single_fragment() {
        let cmds = Apt.install(&["socat", "curl"]);
        assert_eq!(cmds.len(), 1);
        assert_eq!(
            cmds.get_commands()[0].cmd,
            "DEBIAN_FRONTEND=noninteractive apt-get -y install socat curl"
        );
    }

    #[test]
    fn test_remove_purges() {
        let cmds = Apt.remove(&["cloud-guest-utils"]);
        assert!(cmds.get_commands()[0].cmd.contains("purge cloud-guest-utils"));
    }

    #[test]
    fn test_cleanup_caches_shape() {
        let cmds = Apt.cleanup_caches();
        assert_eq!(cmds.len(), 3);
        assert!(cmds.get_commands()[0].cmd.ends_with("|| true"));
        assert!(cmds.get_commands()[2].cmd.starts_with("rm -rf /var/lib/apt/lists"));
    }
}
