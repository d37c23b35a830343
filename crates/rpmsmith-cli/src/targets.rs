//! Target resolution shared by the batch subcommands.

use anyhow::{bail, ensure, Result};
use std::path::PathBuf;

/// Resolves the set of packages a batch subcommand operates on.
///
/// With `--all`, the repository root is scanned via `walk`; finding nothing
/// is an error so an empty run can never pass for a successful one. With
/// explicit paths, every path must exist before any external tool is
/// invoked. Neither given is a usage error.
pub fn resolve(
    all: bool,
    packages: Vec<PathBuf>,
    walk: impl FnOnce() -> Result<Vec<PathBuf>>,
) -> Result<Vec<PathBuf>> {
    if !all && packages.is_empty() {
        bail!("Please specify an rpm package or --all");
    }

    if all {
        let found = walk()?;
        if found.is_empty() {
            bail!("no rpm packages found (nothing to do)");
        }
        return Ok(found);
    }

    for package in &packages {
        ensure!(
            package.exists(),
            "package does not exist: {}",
            package.display()
        );
    }
    Ok(packages)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neither_packages_nor_all_is_usage_error() {
        let err = resolve(false, vec![], || Ok(vec![])).unwrap_err();
        assert!(err.to_string().contains("Please specify an rpm package"));
    }

    #[test]
    fn all_with_empty_scan_is_an_error() {
        let err = resolve(true, vec![], || Ok(vec![])).unwrap_err();
        assert!(err.to_string().contains("no rpm packages found"));
    }

    #[test]
    fn missing_explicit_package_aborts() {
        let err = resolve(false, vec![PathBuf::from("missing.rpm")], || Ok(vec![]))
            .unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn all_takes_precedence_over_explicit_paths() {
        let found = vec![PathBuf::from("a.rpm"), PathBuf::from("b.rpm")];
        let walked = found.clone();
        let resolved = resolve(true, vec![PathBuf::from("missing.rpm")], move || {
            Ok(walked)
        })
        .unwrap();
        assert_eq!(resolved, found);
    }
}
