//! Literal command phases: `pre_commands`, `commands`, `post_commands`.
//!
//! The three sections share one mechanism (copy the configured fragments
//! verbatim, in order) but occupy different pipeline slots, so each is its
//! own phase. Fragments are emitted untagged and unmodified; whether a
//! fragment tolerates its own failure is the author's choice via `|| true`.

use super::Phase;
use crate::config::Config;
use crate::context::SystemContext;
use crate::error::Result;
use crate::filesystem::Filesystem;
use crate::script::Commands;

fn literal(fragments: &[String]) -> (Commands, Filesystem) {
    let mut cmds = Commands::new();
    for fragment in fragments {
        cmds = cmds.add(fragment.as_str());
    }
    (cmds, Filesystem::new())
}

/// Emits `pre_commands`, the first slot of the pipeline.
#[derive(Debug, Clone, Copy, Default)]
pub struct PreCommands;

impl Phase for PreCommands {
    fn name(&self) -> &'static str {
        "pre-commands"
    }

    fn apply(&self, config: &Config, _ctx: &SystemContext) -> Result<(Commands, Filesystem)> {
        Ok(literal(&config.pre_commands))
    }
}

/// Emits `commands`, after the declarative sections.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuntimeCommands;

impl Phase for RuntimeCommands {
    fn name(&self) -> &'static str {
        "commands"
    }

    fn apply(&self, config: &Config, _ctx: &SystemContext) -> Result<(Commands, Filesystem)> {
        Ok(literal(&config.commands))
    }
}

/// Emits `post_commands`, the last slot before cleanup.
#[derive(Debug, Clone, Copy, Default)]
pub struct PostCommands;

impl Phase for PostCommands {
    fn name(&self) -> &'static str {
        "post-commands"
    }

    fn apply(&self, config: &Config, _ctx: &SystemContext) -> Result<(Commands, Filesystem)> {
        Ok(literal(&config.post_commands))
    }
}
