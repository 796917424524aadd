//! Default values and well-known target paths for imageprep.
//!
//! Centralized so commands and phases stay consistent.

/// Configuration file looked up when `-c/--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "machine.yaml";

/// Target path of the environment file written by the environment phase.
pub const ENVIRONMENT_FILE: &str = "/etc/environment";

/// Target path of the sysctl drop-in written by the sysctl phase.
pub const SYSCTL_DROPIN: &str = "/etc/sysctl.d/99-imageprep.conf";

/// Shebang and failure mode of the rendered provisioning script.
///
/// `set -e` is what makes the per-fragment `|| true` convention meaningful:
/// unguarded fragments abort the run, guarded ones cannot.
pub const SCRIPT_HEADER: &str = "#!/bin/sh\nset -e\n";

/// Heredoc delimiter used when rendering filesystem entries into a script.
pub const HEREDOC_MARKER: &str = "EOF_IMAGEPREP";
