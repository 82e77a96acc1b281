//! Architecture enforcement tests.
//!
//! Directory creation for workspace names must go through
//! `dirmap::fs::DirCreator`, so that every build is observable, testable
//! with the recording creator, and ordered by the workspace. These tests
//! catch code that bypasses the seam.

use std::fs;
use std::path::Path;

/// Files allowed to create directories directly.
///
/// - `fs/tokio_fs.rs` - The `DirCreator` implementation itself
/// - `core/config/mod.rs` - Parent directory of a layout file being written
const ALLOWED: &[&str] = &["fs/tokio_fs.rs", "core/config/mod.rs"];

/// Filesystem calls that create directories.
const FORBIDDEN: &[&str] = &["fs::create_dir_all(", "fs::create_dir(", "DirBuilder"];

/// Collect every `.rs` file under `dir`.
fn rust_files(dir: &Path, out: &mut Vec<std::path::PathBuf>) {
    for entry in fs::read_dir(dir).expect("read src dir") {
        let path = entry.expect("dir entry").path();
        if path.is_dir() {
            rust_files(&path, out);
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            out.push(path);
        }
    }
}

/// The part of a source file before its `#[cfg(test)]` module.
fn non_test_source(contents: &str) -> &str {
    match contents.find("#[cfg(test)]") {
        Some(idx) => &contents[..idx],
        None => contents,
    }
}

/// Strip `//` comments so doc examples don't count.
fn code_lines(source: &str) -> impl Iterator<Item = &str> {
    source
        .lines()
        .map(str::trim_start)
        .filter(|line| !line.starts_with("//"))
}

#[test]
fn directories_are_only_created_through_dir_creator() {
    let src = Path::new(env!("CARGO_MANIFEST_DIR")).join("src");
    let mut files = Vec::new();
    rust_files(&src, &mut files);
    assert!(!files.is_empty(), "no source files found");

    let mut violations = Vec::new();
    for file in &files {
        let relative = file
            .strip_prefix(&src)
            .expect("file under src")
            .to_string_lossy()
            .replace('\\', "/");
        if ALLOWED.contains(&relative.as_str()) {
            continue;
        }

        let contents = fs::read_to_string(file).expect("read source file");
        for line in code_lines(non_test_source(&contents)) {
            if FORBIDDEN.iter().any(|call| line.contains(call)) {
                violations.push(format!("{relative}: {line}"));
            }
        }
    }

    assert!(
        violations.is_empty(),
        "direct directory creation outside DirCreator:\n{}",
        violations.join("\n")
    );
}

#[test]
fn mock_creator_does_not_touch_disk() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("src/fs/mock.rs");
    let contents = fs::read_to_string(path).expect("read mock.rs");
    let source = non_test_source(&contents);

    assert!(!source.contains("std::fs::"));
    assert!(!source.contains("tokio::fs::"));
}
