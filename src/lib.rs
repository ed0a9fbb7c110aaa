//! Core library for `fix_filenames`.
//!
//! Normalizes whitespace in every filename below a root directory and
//! resolves name collisions with `_n` suffixes. The binary is thin glue over
//! [`Renamer`]; everything that touches the tree lives here so it can be
//! tested without spawning a process.

pub mod cli;
pub mod collision;
pub mod config;
pub mod errors;
pub mod normalize;
pub mod output;
pub mod renamer;
pub mod shutdown;

pub use collision::{DEFAULT_MAX_SUFFIX_ATTEMPTS, resolve_collision};
pub use config::{Config, LogLevel, default_config_path, load_config, load_config_from_xml_path};
pub use errors::FixNamesError;
pub use normalize::{normalize, split_extension};
pub use renamer::{RenameOutcome, Renamer, RunSummary, SkipReason, process};
