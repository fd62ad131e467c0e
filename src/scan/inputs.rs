//! Input discovery.
//!
//! Turns the paths given on the command line into a list of project files.
//! Directories are walked recursively for `.drawio` files.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Extension of draw.io project files.
pub const PROJECT_EXTENSION: &str = "drawio";

/// Check whether a path looks like a draw.io project file.
pub fn is_project_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(PROJECT_EXTENSION))
}

/// Find project files under a directory, sorted by path.
pub fn scan_directory(root: &Path) -> Vec<PathBuf> {
    let mut found: Vec<PathBuf> = WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| is_project_file(p))
        .collect();

    found.sort();
    found
}

/// Expand input paths into project files.
///
/// Files are kept as given, even if they do not exist, so that opening them
/// reports the real error. Directories are replaced by their contents.
pub fn collect_inputs(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut inputs = Vec::new();

    for path in paths {
        if path.is_dir() {
            inputs.extend(scan_directory(path));
        } else {
            inputs.push(path.clone());
        }
    }

    inputs
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_is_project_file() {
        assert!(is_project_file(Path::new("ui.drawio")));
        assert!(is_project_file(Path::new("dir/UI.DRAWIO")));
        assert!(!is_project_file(Path::new("ui.drawio.png")));
        assert!(!is_project_file(Path::new("drawio")));
    }

    #[test]
    fn test_scan_directory_recursive_sorted() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("b.drawio"), "").unwrap();
        fs::write(dir.path().join("a.drawio"), "").unwrap();
        fs::write(dir.path().join("notes.txt"), "").unwrap();
        fs::write(dir.path().join("nested/c.drawio"), "").unwrap();

        let found = scan_directory(dir.path());

        assert_eq!(
            found,
            vec![
                dir.path().join("a.drawio"),
                dir.path().join("b.drawio"),
                dir.path().join("nested/c.drawio"),
            ]
        );
    }

    #[test]
    fn test_collect_inputs_keeps_missing_files() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing.drawio");
        fs::write(dir.path().join("x.drawio"), "").unwrap();

        let inputs = collect_inputs(&[missing.clone(), dir.path().to_path_buf()]);

        assert_eq!(inputs, vec![missing, dir.path().join("x.drawio")]);
    }

    #[test]
    fn test_collect_inputs_explicit_file_any_extension() {
        let dir = tempdir().unwrap();
        let xml = dir.path().join("export.xml");
        fs::write(&xml, "").unwrap();

        assert_eq!(collect_inputs(&[xml.clone()]), vec![xml]);
    }
}
