//! Tree-wide filename normalization.
//!
//! Walks the root once, depth-first. Each directory's listing is read in full
//! and sorted before any of its entries is touched (walkdir collects the whole
//! listing when a sorter is set), so renames never feed new names back into
//! the pass. Only non-directory entries are renamed; symlinks are renamed
//! themselves, never followed.
//!
//! A failing entry is reported and counted; the walk carries on with the next
//! one. Root problems abort before anything is renamed.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};
use walkdir::{DirEntry, WalkDir};

use crate::collision::{DEFAULT_MAX_SUFFIX_ATTEMPTS, occupied, resolve_collision};
use crate::config::{Config, validate_root};
use crate::errors::FixNamesError;
use crate::normalize::{is_unusable, normalize};
use crate::output as out;
use crate::shutdown;

/// Why an entry was left alone even though it was looked at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The name is not valid UTF-8, so there is no text to normalize.
    NotUtf8,
    /// Normalization leaves nothing usable (empty, `.` or `..`).
    Unusable(String),
}

/// Result of handling a single directory entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameOutcome {
    /// Name already normalized; nothing done.
    Unchanged,
    /// Entry was renamed. `conflict` is true if the normalized name was taken
    /// and a `_n` suffix was used instead.
    Renamed {
        from: PathBuf,
        to: PathBuf,
        conflict: bool,
    },
    /// Entry was looked at but deliberately left alone.
    Skipped { path: PathBuf, reason: SkipReason },
}

/// Counters for one pass over the tree.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Non-directory entries examined
    pub scanned: usize,
    pub renamed: usize,
    /// Renames that needed a `_n` suffix
    pub conflicts: usize,
    pub unchanged: usize,
    pub skipped: usize,
    /// Entries (or unreadable subdirectories) that failed
    pub failed: usize,
}

impl RunSummary {
    fn record(&mut self, outcome: &RenameOutcome) {
        match outcome {
            RenameOutcome::Unchanged => self.unchanged += 1,
            RenameOutcome::Renamed { conflict, .. } => {
                self.renamed += 1;
                if *conflict {
                    self.conflicts += 1;
                }
            }
            RenameOutcome::Skipped { .. } => self.skipped += 1,
        }
    }
}

/// Normalizes every filename below a root directory.
#[derive(Debug, Clone)]
pub struct Renamer {
    root: PathBuf,
    max_suffix_attempts: u64,
}

impl Renamer {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            max_suffix_attempts: DEFAULT_MAX_SUFFIX_ATTEMPTS,
        }
    }

    /// Build from a resolved Config; fails with `NoRoot` if no root was configured.
    pub fn from_config(cfg: &Config) -> Result<Self, FixNamesError> {
        let root = cfg.root.clone().ok_or(FixNamesError::NoRoot)?;
        Ok(Self::new(root).with_max_suffix_attempts(cfg.max_suffix_attempts))
    }

    /// Cap on `_n` candidates per entry. Values below 1 are raised to 1.
    pub fn with_max_suffix_attempts(mut self, attempts: u64) -> Self {
        self.max_suffix_attempts = attempts.max(1);
        self
    }

    /// Normalize every file under the root.
    ///
    /// Returns `Err` only for fatal problems (invalid root, interrupt). Entry
    /// failures are reported as they happen and counted in `RunSummary::failed`.
    pub fn process(&self) -> Result<RunSummary, FixNamesError> {
        validate_root(&self.root)?;

        let mut summary = RunSummary::default();
        let walker = WalkDir::new(&self.root)
            .follow_links(false)
            .sort_by_file_name();

        for item in walker {
            if shutdown::is_requested() {
                warn!(root = %self.root.display(), "stopping: shutdown requested");
                return Err(FixNamesError::Interrupted);
            }

            let entry = match item {
                Ok(entry) => entry,
                Err(err) => {
                    let path = err
                        .path()
                        .map(Path::to_path_buf)
                        .unwrap_or_else(|| self.root.clone());
                    report_entry_error(&FixNamesError::Walk { path, source: err });
                    summary.failed += 1;
                    continue;
                }
            };

            if !is_renamable(&entry) {
                continue;
            }
            summary.scanned += 1;

            match self.process_entry(entry.path()) {
                Ok(outcome) => summary.record(&outcome),
                Err(e) if e.is_fatal() => return Err(e),
                Err(e) => {
                    report_entry_error(&e);
                    summary.failed += 1;
                }
            }
        }

        info!(
            root = %self.root.display(),
            scanned = summary.scanned,
            renamed = summary.renamed,
            conflicts = summary.conflicts,
            skipped = summary.skipped,
            failed = summary.failed,
            "normalization pass finished"
        );
        Ok(summary)
    }

    /// Normalize the name of a single entry in place.
    pub fn process_entry(&self, path: &Path) -> Result<RenameOutcome, FixNamesError> {
        let Some(original) = path.file_name().and_then(OsStr::to_str) else {
            debug!(path = %path.display(), "skipping name that is not valid UTF-8");
            return Ok(RenameOutcome::Skipped {
                path: path.to_path_buf(),
                reason: SkipReason::NotUtf8,
            });
        };

        let normalized = normalize(original);
        if normalized == original {
            return Ok(RenameOutcome::Unchanged);
        }
        if is_unusable(&normalized) {
            out::print_warn(&format!(
                "Skipping '{}': name is only whitespace or dots",
                path.display()
            ));
            return Ok(RenameOutcome::Skipped {
                path: path.to_path_buf(),
                reason: SkipReason::Unusable(normalized),
            });
        }

        let dir = path.parent().unwrap_or_else(|| Path::new(""));
        let mut target = dir.join(&normalized);
        let mut conflict = false;

        // Any existing entry counts, including another hard link to this file:
        // renaming onto it would be a silent no-op.
        if occupied(&target) {
            target = resolve_collision(dir, &normalized, self.max_suffix_attempts)?;
            conflict = true;
        }

        fs::rename(path, &target).map_err(|source| FixNamesError::Rename {
            from: path.to_path_buf(),
            to: target.clone(),
            source,
        })?;

        if conflict {
            let new_name = target
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            out::print_user(&format!("Conflict fixed: {normalized} -> {new_name}"));
            debug!(dir = %dir.display(), taken = %normalized, chosen = %new_name, "collision resolved");
        }
        out::print_user(&format!(
            "Renaming -> {}  -->  {}",
            path.display(),
            target.display()
        ));
        debug!(from = %path.display(), to = %target.display(), conflict, "renamed");

        Ok(RenameOutcome::Renamed {
            from: path.to_path_buf(),
            to: target,
            conflict,
        })
    }
}

/// Normalize every file under `root` with default settings.
pub fn process(root: &Path) -> Result<RunSummary, FixNamesError> {
    Renamer::new(root).process()
}

// Files and non-directory symlinks below the root.
fn is_renamable(entry: &DirEntry) -> bool {
    if entry.depth() == 0 {
        return false;
    }
    let ft = entry.file_type();
    if ft.is_dir() {
        return false;
    }
    if ft.is_symlink() {
        return !entry.path().is_dir();
    }
    true
}

fn report_entry_error(e: &FixNamesError) {
    error!(code = e.code(), kind = e.kind(), error = %e, "entry failed");
    out::print_error(&e.to_string());
}
