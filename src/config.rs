//! # Configuration Schema and Parsing
//!
//! This module defines the data structures that represent a declarative
//! machine-configuration document, as well as the logic for parsing,
//! merging, and validating it.
//!
//! ## Key Components
//!
//! - **[`Config`]**: the declarative root. Every field is optional; each
//!   populated section is picked up by exactly one phase of the pipeline.
//! - **[`Toggle`]**: a three-value flag (`Unset` / `Enabled` / `Disabled`)
//!   used where "not mentioned" must stay distinguishable from an explicit
//!   `false`, e.g. the `cleanup` section.
//! - **[`PackageSpec`]**: the parsed form of one entry in the `packages`
//!   list (`name`, removal marker, OS-family markers).
//!
//! ## Parsing and merging
//!
//! [`parse`] turns one YAML document into a `Config`; [`load_all`] loads a
//! sequence of files and merges them in order. Merge semantics: lists
//! append, maps extend with later documents winning per key, and scalar
//! fields are overridden by the last document that sets them.
//!
//! Unknown top-level keys are rejected at parse time; when an unknown key is
//! close to a known one, the error carries a "did you mean" hint.

use crate::error::{Error, Result};
use crate::suggestions;
use serde::de::Deserializer;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

/// Top-level keys accepted in a configuration document, used for
/// unknown-key suggestions.
const KNOWN_FIELDS: [&str; 11] = [
    "pre_commands",
    "commands",
    "post_commands",
    "packages",
    "environment",
    "sysctls",
    "timezone",
    "files",
    "users",
    "services",
    "cleanup",
];

/// A three-value flag: unset, explicitly enabled, or explicitly disabled.
///
/// Serialized as a plain YAML bool; an absent key deserializes to `Unset`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Toggle {
    /// The key was not present in any document.
    #[default]
    Unset,
    /// Explicit `true`.
    Enabled,
    /// Explicit `false`.
    Disabled,
}

impl Toggle {
    /// True only for an explicit `true`.
    pub fn is_enabled(self) -> bool {
        matches!(self, Toggle::Enabled)
    }

    /// True when the key was absent.
    pub fn is_unset(&self) -> bool {
        matches!(self, Toggle::Unset)
    }
}

impl From<bool> for Toggle {
    fn from(value: bool) -> Self {
        if value {
            Toggle::Enabled
        } else {
            Toggle::Disabled
        }
    }
}

impl<'de> Deserialize<'de> for Toggle {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        bool::deserialize(deserializer).map(Toggle::from)
    }
}

impl Serialize for Toggle {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Toggle::Unset => serializer.serialize_none(),
            Toggle::Enabled => serializer.serialize_bool(true),
            Toggle::Disabled => serializer.serialize_bool(false),
        }
    }
}

/// A user account to create on the target machine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct User {
    /// Account name.
    pub name: String,
    /// Supplementary groups; created when missing.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<String>,
    /// Login shell; target default when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shell: Option<String>,
    /// Grant passwordless sudo via a sudoers drop-in.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub sudo: bool,
}

/// The declarative root of a machine configuration.
///
/// Read-only to phases: the orchestrator constructs one `Config` per run and
/// passes it by shared reference to every phase.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Literal fragments emitted before everything else.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub pre_commands: Vec<String>,

    /// Literal fragments emitted after the declarative sections.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub commands: Vec<String>,

    /// Literal fragments emitted after `commands`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub post_commands: Vec<String>,

    /// Package list. `!name` removes; trailing `#tag` markers restrict the
    /// entry to OS families carrying that tag.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub packages: Vec<String>,

    /// Entries for `/etc/environment`.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub environment: BTreeMap<String, String>,

    /// Kernel parameters for a sysctl drop-in.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub sysctls: BTreeMap<String, String>,

    /// IANA timezone name, e.g. `Europe/Amsterdam`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,

    /// Files to materialize: absolute target path to literal content.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub files: BTreeMap<String, String>,

    /// User accounts to create.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub users: Vec<User>,

    /// Service units to enable and start.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub services: Vec<String>,

    /// Whether the cleanup phase runs. Unset and `false` both produce no
    /// cleanup output; only an explicit `true` enables it.
    #[serde(skip_serializing_if = "Toggle::is_unset")]
    pub cleanup: Toggle,
}

impl Config {
    /// Merge another document into this one.
    ///
    /// Lists append, maps extend (later wins per key), scalars are
    /// overridden by the later document when it sets them.
    pub fn merge(&mut self, other: Config) {
        self.pre_commands.extend(other.pre_commands);
        self.commands.extend(other.commands);
        self.post_commands.extend(other.post_commands);
        self.packages.extend(other.packages);
        self.environment.extend(other.environment);
        self.sysctls.extend(other.sysctls);
        self.files.extend(other.files);
        self.users.extend(other.users);
        self.services.extend(other.services);
        if other.timezone.is_some() {
            self.timezone = other.timezone;
        }
        if !other.cleanup.is_unset() {
            self.cleanup = other.cleanup;
        }
    }

    /// Semantic validation of a parsed configuration.
    ///
    /// Returns every issue found rather than stopping at the first, so the
    /// `validate` command can report them all in one run.
    pub fn validate(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();

        let env_name = regex_or_skip(r"^[A-Za-z_][A-Za-z0-9_]*$");
        let sysctl_key = regex_or_skip(r"^[a-z0-9_]+(\.[A-Za-z0-9_/*-]+)+$");
        let user_name = regex_or_skip(r"^[a-z_][a-z0-9_-]*$");
        let unit_name = regex_or_skip(r"^[A-Za-z0-9:_.@-]+$");
        let timezone = regex_or_skip(r"^[A-Za-z0-9_+-]+(/[A-Za-z0-9_+-]+)*$");

        for key in self.environment.keys() {
            if !matches(&env_name, key) {
                issues.push(ValidationIssue::new(
                    format!("environment.{key}"),
                    "not a valid environment variable name",
                ));
            }
        }

        for key in self.sysctls.keys() {
            if !matches(&sysctl_key, key) {
                issues.push(ValidationIssue::new(
                    format!("sysctls.{key}"),
                    "not a valid sysctl key (expected dotted form like net.ipv4.ip_forward)",
                ));
            }
        }

        if let Some(tz) = &self.timezone {
            if !matches(&timezone, tz) {
                issues.push(ValidationIssue::new(
                    "timezone",
                    "not a valid timezone name (expected Area/Location)",
                ));
            }
        }

        for path in self.files.keys() {
            if !crate::path::is_clean_absolute(path) {
                issues.push(ValidationIssue::new(
                    format!("files.{path}"),
                    "target path must be absolute and free of '.'/'..' segments",
                ));
            }
        }

        for (idx, raw) in self.packages.iter().enumerate() {
            match PackageSpec::parse(raw) {
                Some(spec) if !spec.name.is_empty() => {}
                _ => issues.push(ValidationIssue::new(
                    format!("packages[{idx}]"),
                    "empty or malformed package spec",
                )),
            }
        }

        for user in &self.users {
            if !matches(&user_name, &user.name) {
                issues.push(ValidationIssue::new(
                    format!("users.{}", user.name),
                    "not a valid account name",
                ));
            }
        }

        for service in &self.services {
            if !matches(&unit_name, service) {
                issues.push(ValidationIssue::new(
                    format!("services.{service}"),
                    "not a valid service unit name",
                ));
            }
        }

        issues
    }
}

fn regex_or_skip(pattern: &str) -> Option<regex::Regex> {
    // Patterns are fixed literals; a pattern that fails to compile skips
    // its check rather than panicking.
    regex::Regex::new(pattern).ok()
}

fn matches(re: &Option<regex::Regex>, value: &str) -> bool {
    re.as_ref().map(|re| re.is_match(value)).unwrap_or(true)
}

/// One semantic problem found by [`Config::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Dotted path of the offending field.
    pub field: String,
    /// Human-readable description.
    pub message: String,
}

impl ValidationIssue {
    fn new<F: Into<String>, M: Into<String>>(field: F, message: M) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Convert into a hard error, for strict validation.
    pub fn into_error(self) -> Error {
        Error::Validation {
            field: self.field,
            message: self.message,
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// One parsed entry of the `packages` list.
///
/// Syntax: `name`, `!name` (remove instead of install), and optional
/// trailing `#tag` markers restricting the entry to matching OS families,
/// e.g. `socat #alpine` or `!cloud-guest-utils #debian #ubuntu`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageSpec {
    /// Package name as the target's package manager knows it.
    pub name: String,
    /// Remove instead of install.
    pub remove: bool,
    /// Family tags the entry is restricted to; empty means all families.
    pub tags: Vec<String>,
}

impl PackageSpec {
    /// Parse a raw list entry. Returns `None` for an entry with no name.
    pub fn parse(raw: &str) -> Option<Self> {
        let mut tokens = raw.split_whitespace();
        let head = tokens.next()?;

        let (remove, name) = match head.strip_prefix('!') {
            Some(rest) => (true, rest),
            None => (false, head),
        };
        if name.is_empty() {
            return None;
        }

        let mut tags = Vec::new();
        for token in tokens {
            match token.strip_prefix('#') {
                Some(tag) if !tag.is_empty() => tags.push(tag.to_string()),
                _ => return None,
            }
        }

        Some(Self {
            name: name.to_string(),
            remove,
            tags,
        })
    }

    /// Whether this entry applies to a family identified by `family_tags`.
    pub fn applies_to(&self, family_tags: &[&str]) -> bool {
        self.tags.is_empty() || self.tags.iter().any(|t| family_tags.contains(&t.as_str()))
    }
}

/// Parse a single YAML document into a [`Config`].
///
/// An empty document is a valid, empty configuration. Unknown top-level
/// keys fail with a hint when a close known key exists.
pub fn parse(input: &str) -> Result<Config> {
    if input.trim().is_empty() {
        return Ok(Config::default());
    }

    serde_yaml::from_str(input).map_err(|e| config_parse_error(&e.to_string()))
}

fn config_parse_error(message: &str) -> Error {
    let hint = unknown_field(message)
        .and_then(|field| suggestions::find_similar(&field, &KNOWN_FIELDS))
        .map(|known| format!("Did you mean '{known}'?"));

    Error::ConfigParse {
        message: message.to_string(),
        hint,
    }
}

/// Extract the offending key from a serde "unknown field" message.
fn unknown_field(message: &str) -> Option<String> {
    let rest = message.strip_prefix("unknown field `").or_else(|| {
        message
            .find("unknown field `")
            .map(|idx| &message[idx + "unknown field `".len()..])
    })?;
    let end = rest.find('`')?;
    Some(rest[..end].to_string())
}

/// Load and parse a configuration file.
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Config> {
    let content = std::fs::read_to_string(path.as_ref())?;
    parse(&content)
}

/// Load several configuration files and merge them in order.
pub fn load_all<P: AsRef<Path>>(paths: &[P]) -> Result<Config> {
    let mut merged = Config::default();
    for path in paths {
        merged.merge(from_file(path)?);
    }
    Ok(merged)
}
