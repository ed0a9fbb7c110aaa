//! Collision resolution for normalized names.
//!
//! Policy: when the normalized name is already taken in the same directory,
//! append `_n` before the extension (n = 1, 2, ...) and take the first free
//! candidate. The search is capped; hitting the cap is an error for that
//! entry, never an overwrite.
//!
//! Notes:
//! - Occupancy is judged with `symlink_metadata`, so a dangling symlink still
//!   holds its name.
//! - This only decides the name from current filesystem state. The renamer is
//!   sequential, so nothing else in this process can take the name between the
//!   check and the rename.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::trace;

use crate::errors::FixNamesError;
use crate::normalize::split_extension;

/// Default cap on `_n` candidates tried for one entry.
pub const DEFAULT_MAX_SUFFIX_ATTEMPTS: u64 = 10_000;

/// True if any directory entry (file, dir, or symlink, even dangling) exists at `path`.
pub fn occupied(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok()
}

/// Find the first free `"{base}_{n}{ext}"` in `dir` for an occupied `normalized` name.
///
/// Examples, with `a.txt` and `a_1.txt` present:
/// - `"a.txt"` -> `dir/a_2.txt`
/// - `".env"` -> `dir/.env_1`
/// - `"archive.tar.gz"` -> `dir/archive.tar_1.gz`
pub fn resolve_collision(
    dir: &Path,
    normalized: &str,
    max_attempts: u64,
) -> Result<PathBuf, FixNamesError> {
    let (base, ext) = split_extension(normalized);

    for counter in 1..=max_attempts {
        let candidate = dir.join(format!("{base}_{counter}{ext}"));
        if !occupied(&candidate) {
            return Ok(candidate);
        }
        if counter == 3 {
            trace!(name = normalized, dir = %dir.display(), "collision: several numbered variants taken, still searching");
        }
    }

    Err(FixNamesError::CollisionSearchExhausted {
        dir: dir.to_path_buf(),
        name: normalized.to_string(),
        attempts: max_attempts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;

    #[test]
    fn first_free_suffix_starts_at_one() {
        let dir = assert_fs::TempDir::new().unwrap();
        dir.child("photo.jpg").touch().unwrap();
        let got = resolve_collision(dir.path(), "photo.jpg", 10).unwrap();
        assert_eq!(got, dir.path().join("photo_1.jpg"));
    }

    #[test]
    fn occupied_sees_directories_too() {
        let dir = assert_fs::TempDir::new().unwrap();
        dir.child("sub").create_dir_all().unwrap();
        assert!(occupied(&dir.path().join("sub")));
        assert!(!occupied(&dir.path().join("nope")));
    }
}
