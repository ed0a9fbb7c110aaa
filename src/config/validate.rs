//! Root validation.
//! The root must exist, be a directory and be listable before any rename happens.

use std::fs;
use std::path::Path;
use tracing::debug;

use crate::errors::FixNamesError;

use super::types::Config;

/// Check that `root` is an existing, readable directory.
pub fn validate_root(root: &Path) -> Result<(), FixNamesError> {
    if !root.exists() {
        return Err(FixNamesError::RootMissing(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(FixNamesError::RootNotDirectory(root.to_path_buf()));
    }
    fs::read_dir(root).map_err(|source| FixNamesError::RootUnreadable {
        path: root.to_path_buf(),
        source,
    })?;
    debug!(root = %root.display(), "root readable");
    Ok(())
}

impl Config {
    /// Return the configured root after validating it.
    pub fn validate(&self) -> Result<&Path, FixNamesError> {
        let root = self.root.as_deref().ok_or(FixNamesError::NoRoot)?;
        validate_root(root)?;
        Ok(root)
    }
}
