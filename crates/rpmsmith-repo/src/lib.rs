//! Repository scanning, package metadata, and HTML listing generation.
//!
//! This crate provides:
//! - Recursive enumeration of package files under a repository tree
//! - Read-only header metadata extraction via the `rpm` query interface
//! - The listing model: release → architecture → ordered package records
//! - Autoescaped HTML rendering of that model
//!
//! Listing generation is unsigned-tolerant: it runs at publish time, before
//! or after signing, and never performs a signature check.

#![deny(missing_docs)]

/// Error types for repository operations.
pub mod errors;
/// Listing model: grouping and size formatting.
pub mod listing;
/// Package header metadata extraction.
pub mod metadata;
/// HTML rendering and site output.
pub mod render;
/// Package file enumeration.
pub mod walk;

pub use errors::RepoError;
pub use listing::{build_listing, format_size, scan_repository, Component, Listing, Release};
pub use metadata::{read_package_info, PackageInfo};
pub use render::{render_listing, write_site};
pub use walk::{find_packages, find_packages_excluding};
