//! Run-scoped context supplied by the orchestrator.
//!
//! [`SystemContext`] carries options that belong to a single pipeline run
//! rather than to the declarative document: today that is the log-capture
//! destination. Like [`Config`](crate::config::Config) it is constructed
//! once per run and passed read-only to every phase.

use crate::script::Commands;

/// Per-run options, distinct from the declarative configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SystemContext {
    /// Destination directory for captured logs; `None` disables capture.
    pub capture_logs: Option<String>,
}

impl SystemContext {
    /// Context with every option at its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Context with log capture into `dest`.
    pub fn with_capture_logs<S: Into<String>>(dest: S) -> Self {
        Self {
            capture_logs: Some(dest.into()),
        }
    }

    /// The command block that preserves build logs before cleanup truncates
    /// them. Empty when capture is disabled.
    ///
    /// The cleanup phase appends this between the package-cache cleanup
    /// batches and its fixed tail, so the copies happen while the logs still
    /// exist.
    pub fn capture_log_commands(&self) -> Commands {
        let dest = match &self.capture_logs {
            Some(dest) => dest,
            None => return Commands::new(),
        };

        Commands::new()
            .add(format!("mkdir -p {dest}"))
            .add(format!(
                "cp /var/log/cloud-init.log /var/log/cloud-init-output.log {dest} 2>/dev/null || true"
            ))
            .add(format!("journalctl -b --no-pager > {dest}/journal.log || true"))
    }
}
