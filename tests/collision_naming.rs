use std::fs;
use tempfile::tempdir;

use fix_filenames::{FixNamesError, resolve_collision};

#[test]
fn existing_numbered_variant_is_skipped() {
    let td = tempdir().unwrap();
    let dir = td.path();
    fs::write(dir.join("a.txt"), b"a").unwrap();
    fs::write(dir.join("a_1.txt"), b"a1").unwrap();
    let got = resolve_collision(dir, "a.txt", 100).unwrap();
    assert_eq!(got, dir.join("a_2.txt"));
}

#[test]
fn suffix_goes_before_last_extension_only() {
    let td = tempdir().unwrap();
    let dir = td.path();
    fs::write(dir.join("archive.tar.gz"), b"x").unwrap();
    let got = resolve_collision(dir, "archive.tar.gz", 100).unwrap();
    assert_eq!(got, dir.join("archive.tar_1.gz"));
}

#[test]
fn dotfile_gets_suffix_at_end() {
    let td = tempdir().unwrap();
    let dir = td.path();
    fs::write(dir.join(".env"), b"x").unwrap();
    let got = resolve_collision(dir, ".env", 100).unwrap();
    assert_eq!(got, dir.join(".env_1"));
}

#[test]
fn name_without_extension() {
    let td = tempdir().unwrap();
    let dir = td.path();
    fs::write(dir.join("Makefile"), b"x").unwrap();
    fs::write(dir.join("Makefile_1"), b"x").unwrap();
    let got = resolve_collision(dir, "Makefile", 100).unwrap();
    assert_eq!(got, dir.join("Makefile_2"));
}

#[cfg(unix)]
#[test]
fn dangling_symlink_occupies_its_name() {
    use std::os::unix::fs::symlink;
    let td = tempdir().unwrap();
    let dir = td.path();
    fs::write(dir.join("a.txt"), b"x").unwrap();
    symlink(dir.join("missing-target"), dir.join("a_1.txt")).unwrap();
    let got = resolve_collision(dir, "a.txt", 100).unwrap();
    assert_eq!(got, dir.join("a_2.txt"));
}

#[test]
fn exhausted_search_is_an_error() {
    let td = tempdir().unwrap();
    let dir = td.path();
    fs::write(dir.join("a.txt"), b"x").unwrap();
    for n in 1..=3 {
        fs::write(dir.join(format!("a_{n}.txt")), b"x").unwrap();
    }
    let err = resolve_collision(dir, "a.txt", 3).unwrap_err();
    match err {
        FixNamesError::CollisionSearchExhausted { name, attempts, .. } => {
            assert_eq!(name, "a.txt");
            assert_eq!(attempts, 3);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
