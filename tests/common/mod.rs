//! Shared test utilities for integration and E2E tests.
//!
//! Add `mod common;` to a test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new().with_minimal_config();
//!     // ... test code
//! }
//! ```

use assert_fs::prelude::*;
use std::path::Path;

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    pub use assert_cmd::cargo::cargo_bin_cmd;
    pub use assert_fs::prelude::*;
    #[allow(unused_imports)]
    pub use assert_fs::TempDir;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::configs;
    pub use super::TestFixture;
}

/// Common configuration YAML snippets for testing.
#[allow(dead_code)]
pub mod configs {
    /// Minimal valid configuration: one package, cleanup on.
    pub const MINIMAL: &str = "packages:\n  - socat\ncleanup: true\n";

    /// Cleanup explicitly disabled.
    pub const CLEANUP_OFF: &str = "packages:\n  - socat\ncleanup: false\n";

    /// Configuration touching every declarative section.
    pub const FULL: &str = r#"
pre_commands:
  - echo start
timezone: UTC
environment:
  LANG: C.UTF-8
sysctls:
  net.ipv4.ip_forward: "1"
packages:
  - socat
  - "!cloud-guest-utils #debian"
files:
  /etc/motd: "provisioned\n"
users:
  - name: deploy
    groups: [wheel]
    sudo: true
services:
  - sshd
post_commands:
  - echo done
cleanup: true
"#;

    /// Invalid YAML for error testing.
    pub const INVALID_YAML: &str = "packages: [unclosed";

    /// Parses but fails semantic validation (relative files path).
    pub const INVALID_SEMANTICS: &str = "files:\n  etc/motd: nope\n";

    /// Unknown top-level key with a close known sibling.
    pub const TYPO_KEY: &str = "sysclts:\n  vm.swappiness: \"10\"\n";
}

/// A test fixture that provides a temporary directory with optional config.
///
/// Simplifies the common pattern of creating a temp directory and
/// populating it with a `machine.yaml` configuration file.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

impl TestFixture {
    /// Create a new test fixture with an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Add a `machine.yaml` configuration file with the given content.
    pub fn with_config(self, content: &str) -> Self {
        self.temp_dir
            .child("machine.yaml")
            .write_str(content)
            .expect("Failed to write config file");
        self
    }

    /// Add the minimal valid configuration.
    #[allow(dead_code)]
    pub fn with_minimal_config(self) -> Self {
        self.with_config(configs::MINIMAL)
    }

    /// Add a file with the given path and content.
    #[allow(dead_code)]
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.temp_dir
            .child(path)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Get the path to the config file.
    #[allow(dead_code)]
    pub fn config_path(&self) -> std::path::PathBuf {
        self.temp_dir.path().join("machine.yaml")
    }

    /// Create a child path in the temp directory.
    #[allow(dead_code)]
    pub fn child(&self, path: &str) -> assert_fs::fixture::ChildPath {
        self.temp_dir.child(path)
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
