//! Typed error definitions for fix_filenames.
//! Provides a small set of well-known failure modes for better logs and tests.
//!
//! Root-level errors abort the run before any rename; per-entry errors are
//! reported by the renamer and the walk moves on.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FixNamesError {
    #[error("No root directory configured; pass ROOT, set FIX_FILENAMES_ROOT, or add <root> to the config file")]
    NoRoot,

    #[error("Root directory does not exist: {0}")]
    RootMissing(PathBuf),

    #[error("Root path is not a directory: {0}")]
    RootNotDirectory(PathBuf),

    #[error("Cannot read root directory {path}: {source}")]
    RootUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to rename '{from}' -> '{to}': {source}")]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("No free name for '{name}' in {dir} after {attempts} attempts")]
    CollisionSearchExhausted {
        dir: PathBuf,
        name: String,
        attempts: u64,
    },

    #[error("Cannot walk {path}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("{failed} entries could not be renamed")]
    EntriesFailed { failed: usize },

    #[error("Operation interrupted by user")]
    Interrupted,
}

impl FixNamesError {
    /// Stable numeric code attached to structured log events.
    pub fn code(&self) -> u16 {
        match self {
            FixNamesError::NoRoot => 2,
            FixNamesError::RootMissing(_) => 3,
            FixNamesError::RootNotDirectory(_) => 4,
            FixNamesError::RootUnreadable { .. } => 5,
            FixNamesError::Rename { .. } => 10,
            FixNamesError::CollisionSearchExhausted { .. } => 11,
            FixNamesError::Walk { .. } => 12,
            FixNamesError::EntriesFailed { .. } => 20,
            FixNamesError::Interrupted => 130,
        }
    }

    /// Short machine-friendly label used as the `kind` field in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            FixNamesError::NoRoot => "no_root",
            FixNamesError::RootMissing(_) => "root_missing",
            FixNamesError::RootNotDirectory(_) => "root_not_directory",
            FixNamesError::RootUnreadable { .. } => "root_unreadable",
            FixNamesError::Rename { .. } => "rename_failed",
            FixNamesError::CollisionSearchExhausted { .. } => "collision_exhausted",
            FixNamesError::Walk { .. } => "walk_failed",
            FixNamesError::EntriesFailed { .. } => "entries_failed",
            FixNamesError::Interrupted => "interrupted",
        }
    }

    /// True for errors that abort the whole run rather than a single entry.
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            FixNamesError::Rename { .. }
                | FixNamesError::CollisionSearchExhausted { .. }
                | FixNamesError::Walk { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn per_entry_errors_are_not_fatal() {
        let e = FixNamesError::CollisionSearchExhausted {
            dir: PathBuf::from("/tmp"),
            name: "a.txt".into(),
            attempts: 3,
        };
        assert!(!e.is_fatal());
        assert_eq!(e.code(), 11);
        assert!(FixNamesError::RootMissing(PathBuf::from("/nope")).is_fatal());
        assert!(FixNamesError::Interrupted.is_fatal());
    }

    #[test]
    fn rename_error_message_names_both_paths() {
        let e = FixNamesError::Rename {
            from: PathBuf::from("/d/a .txt"),
            to: PathBuf::from("/d/a.txt"),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        };
        let msg = e.to_string();
        assert!(msg.contains("/d/a .txt"));
        assert!(msg.contains("/d/a.txt"));
        assert_eq!(e.kind(), "rename_failed");
    }
}
