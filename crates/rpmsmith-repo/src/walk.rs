//! Package file enumeration.

use crate::errors::RepoError;
use std::path::{Path, PathBuf};

/// Recursively collects every `*.rpm` file under `root`.
///
/// Each call is a fresh scan of the directory tree; results are sorted so
/// batch operations process packages in a reproducible order. No side
/// effects.
pub fn find_packages(root: &Path) -> Result<Vec<PathBuf>, RepoError> {
    let mut found = Vec::new();
    visit(root, None, &mut found)?;
    found.sort();
    Ok(found)
}

/// Like [`find_packages`], but skips one subtree directly under `root`.
///
/// The release-signing tool excludes the already-public directory so
/// published packages are not re-signed.
pub fn find_packages_excluding(
    root: &Path,
    excluded_subdir: &str,
) -> Result<Vec<PathBuf>, RepoError> {
    let excluded = root.join(excluded_subdir);
    let mut found = Vec::new();
    visit(root, Some(excluded.as_path()), &mut found)?;
    found.sort();
    Ok(found)
}

fn visit(dir: &Path, excluded: Option<&Path>, found: &mut Vec<PathBuf>) -> Result<(), RepoError> {
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if excluded.is_some_and(|ex| path == ex) {
            continue;
        }
        if path.is_dir() {
            visit(&path, excluded, found)?;
        } else if path.extension().is_some_and(|ext| ext == "rpm") {
            found.push(path);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"").unwrap();
    }

    #[test]
    fn finds_packages_recursively_and_sorted() {
        let tmp = tempfile::TempDir::new().unwrap();
        let root = tmp.path();
        touch(&root.join("b/beta-1.0-1.x86_64.rpm"));
        touch(&root.join("a/alpha-1.0-1.noarch.rpm"));
        touch(&root.join("a/notes.txt"));
        touch(&root.join("top-2.0-1.x86_64.rpm"));

        let found = find_packages(root).unwrap();
        let names: Vec<_> = found
            .iter()
            .map(|p| p.strip_prefix(root).unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(
            names,
            vec![
                "a/alpha-1.0-1.noarch.rpm",
                "b/beta-1.0-1.x86_64.rpm",
                "top-2.0-1.x86_64.rpm",
            ]
        );
    }

    #[test]
    fn excluded_subtree_is_skipped() {
        let tmp = tempfile::TempDir::new().unwrap();
        let root = tmp.path();
        touch(&root.join("staging/new-1.0-1.x86_64.rpm"));
        touch(&root.join("public/old-1.0-1.x86_64.rpm"));
        touch(&root.join("public/nested/older-1.0-1.x86_64.rpm"));

        let found = find_packages_excluding(root, "public").unwrap();
        assert_eq!(found.len(), 1);
        assert!(found[0].ends_with("staging/new-1.0-1.x86_64.rpm"));
    }

    #[test]
    fn empty_tree_yields_empty_list() {
        let tmp = tempfile::TempDir::new().unwrap();
        assert!(find_packages(tmp.path()).unwrap().is_empty());
    }

    #[test]
    fn missing_root_is_io_error() {
        let err = find_packages(Path::new("no-such-root")).unwrap_err();
        assert!(matches!(err, RepoError::Io(_)));
    }
}
