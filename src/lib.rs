//! # imageprep
//!
//! This library translates a declarative machine-configuration document
//! into an ordered sequence of provisioning operations (shell command
//! fragments) and a filesystem overlay, targeted at heterogeneous
//! operating-system families. It is used by the `imageprep` command-line
//! tool but can be embedded in any application that needs to turn a machine
//! description into a provisioning artifact.
//!
//! ## Quick Example
//!
//! ```
//! use imageprep::config;
//! use imageprep::context::SystemContext;
//! use imageprep::phases::orchestrator;
//!
//! let config = config::parse("cleanup: true").unwrap();
//! let ctx = SystemContext::new();
//!
//! let (commands, filesystem) = orchestrator::apply_phases(&config, &ctx).unwrap();
//! assert!(!commands.is_empty());
//! assert!(filesystem.is_empty());
//!
//! let script = orchestrator::render_script(&commands, &filesystem);
//! assert!(script.starts_with("#!/bin/sh"));
//! ```
//!
//! ## Core Concepts
//!
//! - **Configuration (`config`)**: the schema of the declarative document
//!   and the logic for parsing, merging, and validating it.
//! - **Command sequences (`script`)**: an ordered, tag-annotated builder
//!   for shell fragments; insertion order is the execution order contract.
//! - **Filesystem overlay (`filesystem`)**: the path-to-content map
//!   produced alongside the command sequence.
//! - **Package managers (`pkg`)**: the per-OS-family capability phases use
//!   instead of embedding OS-specific strings.
//! - **Phases (`phases`)**: one stateless unit per configuration feature,
//!   invoked by the orchestrator in a fixed, auditable order.
//!
//! ## Execution Flow
//!
//! The orchestrator applies every registered phase with the same `Config`
//! and `SystemContext`, concatenates the command sequences, merges the
//! overlays, and renders the result as a POSIX-sh script or JSON. Nothing
//! is ever executed here: the artifact describes operations for an
//! external executor.

pub mod config;
pub mod context;
pub mod defaults;
pub mod error;
pub mod filesystem;
pub mod output;
pub mod path;
pub mod phases;
pub mod pkg;
pub mod script;
pub mod suggestions;

#[cfg(test)]
mod script_proptest;
