//! Listing model: grouping and size formatting.

use crate::errors::RepoError;
use crate::metadata::{read_package_info, PackageInfo};
use serde::Serialize;
use std::path::Path;

/// The whole listing: one entry per release directory, sorted by name.
#[derive(Debug, Serialize)]
pub struct Listing {
    /// Releases in name order.
    pub releases: Vec<Release>,
}

/// Packages of one release directory, grouped by architecture.
#[derive(Debug, Serialize)]
pub struct Release {
    /// Release directory name (e.g. `f41`).
    pub name: String,
    /// Architecture groups, in first-seen order.
    pub components: Vec<Component>,
}

/// Packages of one architecture within a release.
#[derive(Debug, Serialize)]
pub struct Component {
    /// Architecture name as reported by the package headers.
    pub architecture: String,
    /// Package records in discovery order.
    pub packages: Vec<PackageInfo>,
}

/// Formats a byte count as a human-readable size.
///
/// Fixed thresholds: below 1024 the count is printed in bytes; a boundary
/// value rolls over to the next unit (1024 is `1.0KB`, not `1024B`).
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = 1024 * 1024;
    const GB: u64 = 1024 * 1024 * 1024;
    if bytes < KB {
        format!("{bytes}B")
    } else if bytes < MB {
        format!("{:.1}KB", bytes as f64 / KB as f64)
    } else if bytes < GB {
        format!("{:.1}MB", bytes as f64 / MB as f64)
    } else {
        format!("{:.1}GB", bytes as f64 / GB as f64)
    }
}

/// Groups per-release package records into the listing model.
///
/// Within a release, packages are grouped by the architecture their header
/// reports; architecture groups keep the order in which each architecture
/// was first seen, and packages keep their discovery order.
///
/// # Errors
///
/// Returns [`RepoError::EmptyRepository`] if zero packages were found across
/// all releases.
pub fn build_listing(releases: Vec<(String, Vec<PackageInfo>)>) -> Result<Listing, RepoError> {
    let mut out = Vec::new();
    let mut total = 0usize;

    for (name, packages) in releases {
        let mut components: Vec<Component> = Vec::new();
        for package in packages {
            total += 1;
            match components
                .iter_mut()
                .find(|c| c.architecture == package.architecture)
            {
                Some(component) => component.packages.push(package),
                None => components.push(Component {
                    architecture: package.architecture.clone(),
                    packages: vec![package],
                }),
            }
        }
        out.push(Release { name, components });
    }

    if total == 0 {
        return Err(RepoError::EmptyRepository);
    }
    Ok(Listing { releases: out })
}

/// Scans the repository root and builds the listing model.
///
/// Release directories are the immediate subdirectories of `repo_root`,
/// processed in name order; each release's packages are its non-recursive
/// `*.rpm` files in name order. Metadata is re-read from scratch on every
/// call; the listing is a regenerated projection, never an incremental one.
pub fn scan_repository(repo_root: &Path) -> Result<Listing, RepoError> {
    let mut release_dirs = Vec::new();
    for entry in std::fs::read_dir(repo_root)? {
        let path = entry?.path();
        if path.is_dir() {
            release_dirs.push(path);
        }
    }
    release_dirs.sort();

    let mut releases = Vec::new();
    for dir in release_dirs {
        let name = dir
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        let mut package_files = Vec::new();
        for entry in std::fs::read_dir(&dir)? {
            let path = entry?.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == "rpm") {
                package_files.push(path);
            }
        }
        package_files.sort();

        let mut packages = Vec::new();
        for path in package_files {
            packages.push(read_package_info(repo_root, &path)?);
        }
        tracing::debug!(release = %name, count = packages.len(), "scanned release");
        releases.push((name, packages));
    }

    build_listing(releases)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(name: &str, arch: &str) -> PackageInfo {
        PackageInfo {
            name: name.to_string(),
            version: "1.0-1".to_string(),
            size: "1.0KB".to_string(),
            description: format!("{name} summary"),
            architecture: arch.to_string(),
            download_link: format!("/f41/{name}-1.0-1.{arch}.rpm"),
            filename: format!("{name}-1.0-1.{arch}.rpm"),
        }
    }

    #[test]
    fn format_size_thresholds() {
        assert_eq!(format_size(0), "0B");
        assert_eq!(format_size(512), "512B");
        assert_eq!(format_size(1023), "1023B");
        assert_eq!(format_size(1024), "1.0KB");
        assert_eq!(format_size(2048), "2.0KB");
        assert_eq!(format_size(3 * 1024 * 1024), "3.0MB");
        assert_eq!(format_size(5 * 1024 * 1024 * 1024), "5.0GB");
    }

    #[test]
    fn architectures_keep_first_seen_order() {
        let listing = build_listing(vec![(
            "f41".to_string(),
            vec![
                info("zeta", "x86_64"),
                info("alpha", "noarch"),
                info("beta", "x86_64"),
            ],
        )])
        .unwrap();

        let components = &listing.releases[0].components;
        assert_eq!(components.len(), 2);
        assert_eq!(components[0].architecture, "x86_64");
        assert_eq!(components[1].architecture, "noarch");
        let x86: Vec<_> = components[0].packages.iter().map(|p| &p.name).collect();
        assert_eq!(x86, ["zeta", "beta"]);
    }

    #[test]
    fn zero_packages_is_empty_repository() {
        let err = build_listing(vec![("f41".to_string(), vec![])]).unwrap_err();
        assert!(matches!(err, RepoError::EmptyRepository));

        let err = build_listing(vec![]).unwrap_err();
        assert!(matches!(err, RepoError::EmptyRepository));
    }

    #[test]
    fn scan_of_empty_repository_fails() {
        let tmp = tempfile::TempDir::new().unwrap();
        std::fs::create_dir(tmp.path().join("f41")).unwrap();

        let err = scan_repository(tmp.path()).unwrap_err();
        assert!(matches!(err, RepoError::EmptyRepository));
    }
}
