//! CLI definition and parsing.
//! Defines Args and provides parse() for command-line handling.
//!
//! Notes:
//! - ROOT falls back to $FIX_FILENAMES_ROOT, then to `<root>` in the config file.
//! - --debug is a shorthand for --log-level debug.

use clap::{Parser, ValueHint};
use std::path::PathBuf;

use crate::config::types::{Config, LogLevel};

/// Normalize whitespace in filenames under a directory tree.
/// CLI flags override config values (which are loaded from XML if present).
#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Strip stray whitespace from filenames in a directory tree, resolving collisions with _N suffixes"
)]
pub struct Args {
    /// Directory tree to process.
    #[arg(value_name = "ROOT", env = "FIX_FILENAMES_ROOT", value_hint = ValueHint::DirPath)]
    pub root: Option<PathBuf>,

    /// Read settings from this XML file instead of the default location.
    #[arg(long, value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Enable debug logging (equivalent to `--log-level debug`).
    #[arg(
        short = 'd',
        long,
        help = "Enable debug logging (shorthand for --log-level debug)"
    )]
    pub debug: bool,

    /// Set log level. One of: quiet, normal, info, debug.
    #[arg(long, help = "Set log level: quiet, normal, info, debug")]
    pub log_level: Option<String>,

    /// Give up on an entry after this many `_n` candidates are taken.
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u64).range(1..))]
    pub max_suffix_attempts: Option<u64>,

    /// Print where fix_filenames will look for the config file, then exit.
    #[arg(
        long,
        help = "Print the config file location used by fix_filenames and exit"
    )]
    pub print_config: bool,

    /// Emit logs in structured JSON (includes timestamp, level, and structured fields).
    #[arg(long, help = "Emit logs in structured JSON")]
    pub json: bool,
}

impl Args {
    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > None (use config default).
    pub fn effective_log_level(&self) -> Option<LogLevel> {
        if self.debug {
            return Some(LogLevel::Debug);
        }
        self.log_level.as_deref().and_then(LogLevel::parse)
    }

    /// Apply CLI overrides to a loaded Config (in-place). No-ops for unset flags.
    pub fn apply_overrides(&self, cfg: &mut Config) {
        if let Some(root) = &self.root {
            cfg.root = Some(root.clone());
        }
        if let Some(level) = self.effective_log_level() {
            cfg.log_level = level;
        }
        if let Some(n) = self.max_suffix_attempts {
            cfg.max_suffix_attempts = n;
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}
