//! Release-sign command implementation.

use crate::targets;
use anyhow::Result;
use rpmsmith_keyring::sign_package;
use rpmsmith_repo::find_packages_excluding;
use std::path::PathBuf;

/// Key used when none is given.
pub const DEFAULT_RELEASE_KEY: &str = "Package Repository Release Key <release@example.com>";

/// Subdirectory of already-published packages, excluded from re-signing.
const PUBLIC_DIR: &str = "public";

pub fn run(all: bool, key_id: String, repo_root: PathBuf, packages: Vec<PathBuf>) -> Result<()> {
    let targets = targets::resolve(all, packages, || {
        Ok(find_packages_excluding(&repo_root, PUBLIC_DIR)?)
    })?;

    for package in &targets {
        println!(">> Signing {}", package.display());
        sign_package(&key_id, package)?;
    }

    Ok(())
}
