//! Temp directory and fixture file helpers.

use std::fs;
use std::path::{Path, PathBuf};

/// Creates a temporary directory for test output.
///
/// The directory is removed when the returned `TempDir` is dropped.
pub fn temp_test_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temporary test directory")
}

/// Write `contents` to `dir/name` and return the path.
pub fn write_fixture(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("Failed to write test fixture");
    path
}

/// Names of all entries in `dir`, sorted.
pub fn dir_entries(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .expect("Failed to read test directory")
        .filter_map(Result::ok)
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_fixture_and_list() {
        let dir = temp_test_dir();
        let path = write_fixture(dir.path(), "grid.asc", "ncols 1\n");
        assert!(path.exists());
        assert_eq!(dir_entries(dir.path()), vec!["grid.asc".to_string()]);
    }
}
