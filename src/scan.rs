use crate::error::ScanError;
use std::path::{Path, PathBuf};

/// Expands `<dir>/*.<ext>` and returns the matching paths, sorted.
///
/// A missing or non-directory scan path is fatal. Entries that match the
/// pattern but cannot be read during enumeration are logged and skipped.
/// Sorting makes the output ordering deterministic across runs.
pub fn scan_directory(dir: &Path, ext: &str) -> Result<Vec<PathBuf>, ScanError> {
    if !dir.is_dir() {
        return Err(ScanError::NotADirectory(dir.to_path_buf()));
    }

    let pattern = dir.join(format!("*.{ext}"));
    let mut paths: Vec<PathBuf> = glob::glob(&pattern.to_string_lossy())?
        .filter_map(|entry| match entry {
            Ok(path) => Some(path),
            Err(error) => {
                log::warn!("skipping unreadable entry: {error}");
                None
            }
        })
        .collect();

    paths.sort();
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScanError;
    use tempfile::tempdir;

    #[test]
    fn test_scan_matches_only_requested_extension() {
        let dir = tempdir().unwrap();
        for name in ["b.pgn", "a.pgn", "notes.txt", "games.pgn.zst"] {
            std::fs::write(dir.path().join(name), "").unwrap();
        }

        let paths = scan_directory(dir.path(), "pgn").unwrap();

        assert_eq!(paths.len(), 2);
        assert_eq!(paths[0].file_name().unwrap(), "a.pgn");
        assert_eq!(paths[1].file_name().unwrap(), "b.pgn");
    }

    #[test]
    fn test_scan_compound_extension_matches_compressed_files() {
        let dir = tempdir().unwrap();
        for name in ["games.pgn.zst", "plain.pgn"] {
            std::fs::write(dir.path().join(name), "").unwrap();
        }

        let paths = scan_directory(dir.path(), "pgn.zst").unwrap();

        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].file_name().unwrap(), "games.pgn.zst");
    }

    #[test]
    fn test_scan_empty_directory_is_ok() {
        let dir = tempdir().unwrap();

        let paths = scan_directory(dir.path(), "pgn").unwrap();

        assert!(paths.is_empty());
    }

    #[test]
    fn test_scan_missing_directory_is_fatal() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("no-such-subdir");

        let error = scan_directory(&missing, "pgn").unwrap_err();

        assert!(matches!(error, ScanError::NotADirectory(_)));
    }

    #[test]
    fn test_scan_ordering_is_stable_across_runs() {
        let dir = tempdir().unwrap();
        for name in ["c.pgn", "a.pgn", "b.pgn"] {
            std::fs::write(dir.path().join(name), "").unwrap();
        }

        let first = scan_directory(dir.path(), "pgn").unwrap();
        let second = scan_directory(dir.path(), "pgn").unwrap();

        assert_eq!(first, second);
    }
}
