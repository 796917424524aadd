//! Files phase: the `files` map → filesystem overlay entries.

use super::Phase;
use crate::config::Config;
use crate::context::SystemContext;
use crate::error::{Error, Result};
use crate::filesystem::{FileEntry, Filesystem};
use crate::path;
use crate::script::Commands;

/// Copies configured file contents into the overlay.
///
/// A relative or unclean target path is a phase error rather than a skip:
/// silently writing to the wrong place inside an image is the worst
/// possible outcome.
#[derive(Debug, Clone, Copy, Default)]
pub struct Files;

impl Phase for Files {
    fn name(&self) -> &'static str {
        "files"
    }

    fn apply(&self, config: &Config, _ctx: &SystemContext) -> Result<(Commands, Filesystem)> {
        let mut fs = Filesystem::new();

        for (target, content) in &config.files {
            if !path::is_clean_absolute(target) {
                return Err(Error::Phase {
                    phase: self.name().to_string(),
                    message: format!("target path '{target}' must be clean and absolute"),
                });
            }
            fs.add(target.clone(), FileEntry::new(content.clone()));
        }

        Ok((Commands::new(), fs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse;

    #[test]
    fn test_empty_section_is_noop() {
        let (cmds, fs) = Files.apply(&Config::default(), &SystemContext::new()).unwrap();
        assert!(cmds.is_empty());
        assert!(fs.is_empty());
    }

    #[test]
    fn test_entries_copied() {
        let config = parse("files:\n  /etc/motd: \"welcome\\n\"\n  /etc/issue: \"\\n\"").unwrap();
        let (cmds, fs) = Files.apply(&config, &SystemContext::new()).unwrap();

        assert!(cmds.is_empty());
        assert_eq!(fs.len(), 2);
        assert_eq!(fs.get("/etc/motd").unwrap().content, "welcome\n");
    }

    #[test]
    fn test_relative_path_is_phase_error() {
        let config = parse("files:\n  etc/motd: nope").unwrap();
        let err = Files.apply(&config, &SystemContext::new()).unwrap_err();
        assert!(err.to_string().contains("Phase 'files' failed"));
    }
}
