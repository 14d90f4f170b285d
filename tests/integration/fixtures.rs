//! Shared fixtures: temporary template trees and tree comparison.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// A template root holding one template named `api` with the layout:
///
/// ```text
/// api/
///   src/
///     main.txt
///   README.md
/// ```
pub fn template_root() -> TempDir {
    let root = TempDir::new().unwrap();
    let api = root.path().join("api");
    fs::create_dir_all(api.join("src")).unwrap();
    fs::write(api.join("src/main.txt"), "fn main() {}\n").unwrap();
    fs::write(api.join("README.md"), "# api template\n").unwrap();
    root
}

/// A deeper tree for ordering and fidelity checks.
pub fn nested_template() -> TempDir {
    let root = TempDir::new().unwrap();
    fs::create_dir_all(root.path().join("a/b/c")).unwrap();
    fs::write(root.path().join("top.txt"), "top").unwrap();
    fs::write(root.path().join("a/one.txt"), "one").unwrap();
    fs::write(root.path().join("a/b/two.bin"), [0u8, 159, 146, 150]).unwrap();
    fs::write(root.path().join("a/b/c/three.txt"), "three").unwrap();
    root
}

/// Assert that `actual` reproduces `expected` exactly: same entry names,
/// same directory/file kinds, same file bytes.
pub fn assert_trees_identical(expected: &Path, actual: &Path) {
    let mut expected_entries: Vec<_> = fs::read_dir(expected)
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    let mut actual_entries: Vec<_> = fs::read_dir(actual)
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    expected_entries.sort();
    actual_entries.sort();
    assert_eq!(
        expected_entries, actual_entries,
        "Entry mismatch under {expected:?}"
    );

    for name in expected_entries {
        let exp = expected.join(&name);
        let act = actual.join(&name);
        if exp.is_dir() {
            assert!(act.is_dir(), "{act:?} should be a directory");
            assert_trees_identical(&exp, &act);
        } else {
            assert_eq!(
                fs::read(&exp).unwrap(),
                fs::read(&act).unwrap(),
                "Byte mismatch for {act:?}"
            );
        }
    }
}
