//! # CLI Command Implementations
//!
//! One module per subcommand of the `imageprep` command-line tool. Each
//! module contains an `Args` struct (derived with `clap`) and an `execute`
//! function that performs the command's logic by calling into the
//! `imageprep` library.

pub mod completions;
pub mod generate;
pub mod init;
pub mod minify;
pub mod validate;
