//! Package header metadata extraction.
//!
//! Header fields are opaque to this system: they are read through the `rpm`
//! query interface, never parsed out of the file format directly. The read
//! is explicitly unsigned-tolerant (`--nosignature --nodigest`) because
//! listing generation runs at publish time, before or after signing.

use crate::errors::RepoError;
use crate::listing::format_size;
use rpmsmith_exec::ToolCommand;
use serde::Serialize;
use std::path::Path;

const QUERY_FORMAT: &str = "%{NAME}\t%{VERSION}\t%{RELEASE}\t%{ARCH}\t%{SUMMARY}";

/// One package's listing record: header fields plus computed file size and
/// download location.
#[derive(Debug, Clone, Serialize)]
pub struct PackageInfo {
    /// Package name.
    pub name: String,
    /// `version-release` as a single string.
    pub version: String,
    /// Human-readable file size.
    pub size: String,
    /// One-line summary from the package header. Untrusted input; the
    /// renderer escapes it.
    pub description: String,
    /// Target architecture.
    pub architecture: String,
    /// Site-absolute download path, relative to the repository root.
    pub download_link: String,
    /// Bare file name.
    pub filename: String,
}

/// Reads the listing record for the package at `path`.
///
/// `repo_root` anchors the download link: a package at
/// `<repo_root>/f41/x.rpm` gets the link `/f41/x.rpm`.
///
/// # Errors
///
/// Returns [`RepoError::Metadata`] if the query output does not carry the
/// expected fields, [`RepoError::Tool`] if `rpm` itself fails.
pub fn read_package_info(repo_root: &Path, path: &Path) -> Result<PackageInfo, RepoError> {
    let output = ToolCommand::new("rpm")
        .args(["-qp", "--nosignature", "--nodigest", "--queryformat"])
        .arg(QUERY_FORMAT)
        .arg(path)
        .run()?;

    let (name, version, release, architecture, summary) =
        parse_query_output(&output.stdout).ok_or_else(|| RepoError::Metadata {
            path: path.to_path_buf(),
            detail: format!("unexpected query output: {:?}", output.stdout),
        })?;

    let size = format_size(std::fs::metadata(path)?.len());
    let filename = path
        .file_name()
        .ok_or_else(|| RepoError::Metadata {
            path: path.to_path_buf(),
            detail: "path has no file name".to_string(),
        })?
        .to_string_lossy()
        .to_string();
    let download_link = download_link(repo_root, path);

    Ok(PackageInfo {
        name: name.to_string(),
        version: format!("{version}-{release}"),
        size,
        description: summary.to_string(),
        architecture: architecture.to_string(),
        download_link,
        filename,
    })
}

/// Splits the tab-separated query output into its five header fields.
fn parse_query_output(raw: &str) -> Option<(&str, &str, &str, &str, &str)> {
    let mut fields = raw.splitn(5, '\t');
    let name = fields.next()?;
    let version = fields.next()?;
    let release = fields.next()?;
    let arch = fields.next()?;
    let summary = fields.next()?.trim_end_matches('\n');
    if name.is_empty() || version.is_empty() {
        return None;
    }
    Some((name, version, release, arch, summary))
}

fn download_link(repo_root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(repo_root).unwrap_or(path);
    let mut link = String::from("/");
    let parts: Vec<String> = rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy().to_string())
        .collect();
    link.push_str(&parts.join("/"));
    link
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn parses_five_fields() {
        let raw = "example\t1.0\t2\tx86_64\tAn example package";
        let (name, version, release, arch, summary) = parse_query_output(raw).unwrap();
        assert_eq!(name, "example");
        assert_eq!(version, "1.0");
        assert_eq!(release, "2");
        assert_eq!(arch, "x86_64");
        assert_eq!(summary, "An example package");
    }

    #[test]
    fn summary_may_contain_tabs() {
        let raw = "example\t1.0\t2\tnoarch\ttabbed\tsummary\n";
        let (.., summary) = parse_query_output(raw).unwrap();
        assert_eq!(summary, "tabbed\tsummary");
    }

    #[test]
    fn truncated_output_is_rejected() {
        assert!(parse_query_output("example\t1.0\t2").is_none());
        assert!(parse_query_output("").is_none());
    }

    #[test]
    fn download_link_is_rooted_at_repo() {
        let root = PathBuf::from("public");
        let path = root.join("f41").join("example-1.0-2.x86_64.rpm");
        assert_eq!(
            download_link(&root, &path),
            "/f41/example-1.0-2.x86_64.rpm"
        );
    }
}
