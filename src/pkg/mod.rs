//! Package-manager capability, one variant per base OS family.
//!
//! Phases never embed OS-specific package commands; they call a
//! [`PackageManager`] and tag the resulting fragments with the family's
//! tags. The set of base families a pipeline knows about is an explicit,
//! injected list ([`base_package_managers`]) handed to the phases that need
//! it, so tests can substitute fake families.
//!
//! ## Structure
//!
//! Each family lives in its own module:
//! - [`apt`]: Debian and Ubuntu derivatives
//! - [`dnf`]: RPM-based distributions
//! - [`apk`]: Alpine

pub mod apk;
pub mod apt;
pub mod dnf;

pub use apk::Apk;
pub use apt::Apt;
pub use dnf::Dnf;

use crate::script::Commands;

/// Per-OS-family capability consumed by phases.
///
/// Implementations return finished [`Commands`] sequences; the caller is
/// responsible for tagging them (via [`Commands::with_tags`]) so the final
/// artifact records which family each fragment targets.
pub trait PackageManager: std::fmt::Debug + Send + Sync {
    /// Short name of the package manager, e.g. `"apt"`.
    fn name(&self) -> &'static str;

    /// Identifying tags for the OS family this manager serves.
    fn tags(&self) -> &[&'static str];

    /// Refresh the package metadata cache.
    fn update_cache(&self) -> Commands;

    /// Install the given packages.
    fn install(&self, packages: &[&str]) -> Commands;

    /// Remove the given packages.
    fn remove(&self, packages: &[&str]) -> Commands;

    /// Purge package caches to shrink the image.
    fn cleanup_caches(&self) -> Commands;
}

/// The base operating-system families a default pipeline emits for.
///
/// Order is significant: it fixes the order of per-family command batches
/// in every phase that iterates the families.
pub fn base_package_managers() -> Vec<Box<dyn PackageManager>> {
    vec![Box::new(Apt), Box::new(Dnf), Box::new(Apk)]
}
