//! Packages phase: the `packages` list → per-family tagged batches.
//!
//! The phase stays OS-agnostic by delegating every fragment to the
//! [`PackageManager`] capability of each registered family and tagging the
//! batch with that family's tags. A `#tag` marker on an entry restricts it
//! to families carrying the tag; entries without markers apply everywhere.

use super::Phase;
use crate::config::{Config, PackageSpec};
use crate::context::SystemContext;
use crate::error::{Error, Result};
use crate::filesystem::Filesystem;
use crate::pkg::PackageManager;
use crate::script::Commands;

/// Installs and removes packages per OS family.
#[derive(Debug)]
pub struct Packages {
    families: Vec<Box<dyn PackageManager>>,
}

impl Packages {
    /// Packages phase over an explicit family list.
    pub fn new(families: Vec<Box<dyn PackageManager>>) -> Self {
        Self { families }
    }
}

impl Phase for Packages {
    fn name(&self) -> &'static str {
        "packages"
    }

    fn apply(&self, config: &Config, _ctx: &SystemContext) -> Result<(Commands, Filesystem)> {
        let fs = Filesystem::new();
        let mut cmds = Commands::new();

        if config.packages.is_empty() {
            return Ok((cmds, fs));
        }

        let specs = config
            .packages
            .iter()
            .map(|raw| {
                PackageSpec::parse(raw).ok_or_else(|| Error::Phase {
                    phase: self.name().to_string(),
                    message: format!("malformed package spec '{raw}'"),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        for family in &self.families {
            let tags = family.tags();

            let install: Vec<&str> = specs
                .iter()
                .filter(|s| !s.remove && s.applies_to(tags))
                .map(|s| s.name.as_str())
                .collect();
            let remove: Vec<&str> = specs
                .iter()
                .filter(|s| s.remove && s.applies_to(tags))
                .map(|s| s.name.as_str())
                .collect();

            let mut batch = Commands::new();
            if !install.is_empty() {
                batch = batch
                    .add_all(family.update_cache())
                    .add_all(family.install(&install));
            }
            if !remove.is_empty() {
                batch = batch.add_all(family.remove(&remove));
            }

            cmds = cmds.add_all(batch.with_tags(tags.iter().copied()));
        }

        Ok((cmds, fs))
    }
}
