//! Phase pipeline: one stateless unit per feature of the configuration
//! language.
//!
//! ## Overview
//!
//! Every feature of the declarative document is implemented as a [`Phase`]:
//! a stateless unit mapping `(Config, SystemContext)` to an ordered
//! [`Commands`] sequence plus a [`Filesystem`] overlay. Phases never read or
//! write hidden global state, never mutate their inputs, and never see each
//! other's output; the orchestrator owns aggregation.
//!
//! The pipeline order is the explicit list in [`registered_phases`]:
//!
//! 1. pre-commands
//! 2. environment
//! 3. timezone
//! 4. sysctl
//! 5. packages
//! 6. users
//! 7. files
//! 8. services
//! 9. commands
//! 10. post-commands
//! 11. cleanup
//!
//! Cleanup runs last: its disk zero-fill step only reclaims space freed by
//! everything that ran before it.

use crate::config::Config;
use crate::context::SystemContext;
use crate::error::Result;
use crate::filesystem::Filesystem;
use crate::pkg;
use crate::script::Commands;

pub mod cleanup;
pub mod commands;
pub mod environment;
pub mod files;
pub mod orchestrator;
pub mod packages;
pub mod services;
pub mod sysctl;
pub mod timezone;
pub mod users;

/// A stateless unit of provisioning logic.
///
/// Implementations must be safely callable any number of times with
/// identical inputs and produce identical output; dynamic content (e.g. a
/// `$(date)` expression) is deferred to execution time by leaving it
/// unevaluated in the fragment text.
///
/// An `Err` means the phase could not produce a valid command sequence at
/// all (unrecoverable configuration problem) and aborts the pipeline.
/// Anticipated runtime failures of the emitted fragments are not errors
/// here; they are handled per fragment with the `|| true` convention.
pub trait Phase {
    /// Stable name used in logs and error messages.
    fn name(&self) -> &'static str;

    /// Produce this phase's commands and filesystem entries.
    fn apply(&self, config: &Config, ctx: &SystemContext) -> Result<(Commands, Filesystem)>;
}

/// The pipeline's phase list, in invocation order.
///
/// Registration is explicit so the order is auditable here rather than
/// spread across the codebase. Phases that iterate OS families receive the
/// injected base-family list.
pub fn registered_phases() -> Vec<Box<dyn Phase>> {
    vec![
        Box::new(commands::PreCommands),
        Box::new(environment::Environment),
        Box::new(timezone::Timezone),
        Box::new(sysctl::Sysctl),
        Box::new(packages::Packages::new(pkg::base_package_managers())),
        Box::new(users::Users),
        Box::new(files::Files),
        Box::new(services::Services),
        Box::new(commands::RuntimeCommands),
        Box::new(commands::PostCommands),
        Box::new(cleanup::Cleanup::new(pkg::base_package_managers())),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registered_phase_order() {
        let names: Vec<_> = registered_phases().iter().map(|p| p.name()).collect();
        assert_eq!(
            names,
            vec![
                "pre-commands",
                "environment",
                "timezone",
                "sysctl",
                "packages",
                "users",
                "files",
                "services",
                "commands",
                "post-commands",
                "cleanup",
            ]
        );
    }

    #[test]
    fn test_empty_config_produces_empty_pipeline() {
        let config = Config::default();
        let ctx = SystemContext::default();

        for phase in registered_phases() {
            let (cmds, fs) = phase.apply(&config, &ctx).unwrap();
            assert!(cmds.is_empty(), "phase {} emitted commands", phase.name());
            assert!(fs.is_empty(), "phase {} emitted files", phase.name());
        }
    }

    #[test]
    fn test_phases_do_not_depend_on_each_other() {
        // Applying a phase twice with the same inputs yields identical
        // output regardless of what ran before it.
        let config = crate::config::parse("cleanup: true\npackages: [socat]").unwrap();
        let ctx = SystemContext::default();

        for phase in registered_phases() {
            let first = phase.apply(&config, &ctx).unwrap();
            let second = phase.apply(&config, &ctx).unwrap();
            assert_eq!(first, second, "phase {} is not deterministic", phase.name());
        }
    }
}
