//! Orchestrator for the phase pipeline.
//!
//! Invokes every registered phase in the fixed order with the same `Config`
//! and `SystemContext`, concatenates their command sequences (per-phase
//! internal order preserved, phases never interleaved), and merges their
//! filesystem overlays into one artifact. Per-phase instances are discarded
//! after aggregation; ownership of the output transfers to the caller.
//!
//! Rendering of the aggregated artifact also lives here: the script form
//! materializes filesystem entries as heredocs before the command body, so
//! commands can rely on the files existing.

use crate::config::Config;
use crate::context::SystemContext;
use crate::defaults::{HEREDOC_MARKER, SCRIPT_HEADER};
use crate::error::Result;
use crate::filesystem::Filesystem;
use crate::path;
use crate::script::Commands;
use serde::Serialize;

use super::registered_phases;

/// Run the full pipeline.
///
/// An error from any phase aborts the run; partial output is discarded.
pub fn apply_phases(config: &Config, ctx: &SystemContext) -> Result<(Commands, Filesystem)> {
    let mut all_commands = Commands::new();
    let mut filesystem = Filesystem::new();

    let phases = registered_phases();
    log::info!("applying {} phases", phases.len());

    for phase in phases {
        let (cmds, fs) = phase.apply(config, ctx)?;
        log::debug!(
            "phase {}: {} commands, {} files",
            phase.name(),
            cmds.len(),
            fs.len()
        );
        all_commands = all_commands.add_all(cmds);
        filesystem.merge(fs);
    }

    log::info!(
        "pipeline produced {} commands and {} files",
        all_commands.len(),
        filesystem.len()
    );
    Ok((all_commands, filesystem))
}

/// Render the aggregated artifact as an executable POSIX-sh script.
pub fn render_script(commands: &Commands, filesystem: &Filesystem) -> String {
    let mut script = String::from(SCRIPT_HEADER);

    for (target, entry) in filesystem.entries() {
        let quoted = path::shell_quote(target);
        script.push('\n');
        script.push_str(&format!("mkdir -p {}\n", path::shell_quote(path::parent_dir(target))));
        script.push_str(&format!("cat > {quoted} <<'{HEREDOC_MARKER}'\n"));
        script.push_str(&entry.content);
        if !entry.content.ends_with('\n') {
            script.push('\n');
        }
        script.push_str(&format!("{HEREDOC_MARKER}\n"));
        script.push_str(&format!("chmod {} {quoted}\n", entry.permissions));
        if let Some(owner) = &entry.owner {
            script.push_str(&format!("chown {owner} {quoted}\n"));
        }
    }

    if !commands.is_empty() {
        script.push('\n');
        script.push_str(&commands.to_script());
        script.push('\n');
    }

    script
}

#[derive(Serialize)]
struct Artifact<'a> {
    commands: &'a Commands,
    filesystem: &'a Filesystem,
}

/// Render the aggregated artifact as JSON, for downstream consumers that
/// want structure instead of a script.
pub fn render_json(commands: &Commands, filesystem: &Filesystem) -> Result<String> {
    let artifact = Artifact {
        commands,
        filesystem,
    };
    Ok(serde_json::to_string_pretty(&artifact)?)
}
