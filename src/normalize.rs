//! Filename whitespace normalization.
//!
//! The transform is fixed and has no options:
//! 1. trim leading/trailing whitespace
//! 2. drop any whitespace run directly before a `.` (`"file .txt"` -> `"file.txt"`)
//! 3. collapse runs of two or more whitespace characters into one space
//!
//! Single spaces between words survive. Applying it twice yields the same
//! result as applying it once.

use std::sync::LazyLock;

use regex::Regex;

static SPACE_BEFORE_DOT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+\.").expect("static regex"));
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s{2,}").expect("static regex"));

/// Compute the normalized form of a single filename (no directory part).
pub fn normalize(name: &str) -> String {
    let trimmed = name.trim();
    let no_space_before_dot = SPACE_BEFORE_DOT.replace_all(trimmed, ".");
    WHITESPACE_RUN
        .replace_all(&no_space_before_dot, " ")
        .into_owned()
}

/// Split a filename into `(base, ext)` at the last `.`, with `ext` keeping the dot.
///
/// Leading dots never start an extension, so `.env` and `..cfg` have none.
/// - `"archive.tar.gz"` -> `("archive.tar", ".gz")`
/// - `"file."` -> `("file", ".")`
/// - `"README"` -> `("README", "")`
pub fn split_extension(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(idx) if name[..idx].chars().any(|c| c != '.') => name.split_at(idx),
        _ => (name, ""),
    }
}

/// True if `name` cannot be used as a directory entry name at all.
pub(crate) fn is_unusable(name: &str) -> bool {
    name.is_empty() || name == "." || name == ".."
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tabs_and_mixed_whitespace_before_dot_are_removed() {
        assert_eq!(normalize("notes \t .md"), "notes.md");
        assert_eq!(normalize("a\u{a0}.txt"), "a.txt");
    }

    #[test]
    fn single_tab_between_words_is_kept() {
        assert_eq!(normalize("a\tb.txt"), "a\tb.txt");
        assert_eq!(normalize("a \tb.txt"), "a b.txt");
    }

    #[test]
    fn leading_whitespace_is_trimmed() {
        assert_eq!(normalize("   lead.txt"), "lead.txt");
    }

    #[test]
    fn whitespace_only_name_becomes_unusable() {
        let n = normalize("   ");
        assert!(is_unusable(&n));
        assert!(is_unusable(&normalize(" . ")));
        assert!(!is_unusable("x"));
    }

    #[test]
    fn split_extension_cases() {
        assert_eq!(split_extension("a.txt"), ("a", ".txt"));
        assert_eq!(split_extension("archive.tar.gz"), ("archive.tar", ".gz"));
        assert_eq!(split_extension(".env"), (".env", ""));
        assert_eq!(split_extension("..cfg"), ("..cfg", ""));
        assert_eq!(split_extension(".env.local"), (".env", ".local"));
        assert_eq!(split_extension("file."), ("file", "."));
        assert_eq!(split_extension("README"), ("README", ""));
    }
}
