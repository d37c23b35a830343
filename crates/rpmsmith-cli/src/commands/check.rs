//! Check command implementation.

use crate::targets;
use anyhow::{Context, Result};
use rpmsmith_keyring::{content_digest, import_key_file, strip_signature, verify_package, ScopedRpmDb};
use rpmsmith_repo::find_packages;
use std::path::PathBuf;

/// Public key file verified packages must be signed with.
pub const DEFAULT_ARCHIVE_KEYRING: &str = "archive-keyring.gpg";

pub fn run(
    check_unsigned: bool,
    _verify: bool,
    all: bool,
    repo_root: PathBuf,
    key_file: PathBuf,
    packages: Vec<PathBuf>,
) -> Result<()> {
    let targets = targets::resolve(all, packages, || Ok(find_packages(&repo_root)?))?;

    if check_unsigned {
        for package in &targets {
            strip_signature(package)
                .with_context(|| format!("stripping {}", package.display()))?;
            let digest = content_digest(package)?;
            println!("{digest}  {}", package.display());
        }
        return Ok(());
    }

    // Verify is the default mode. Each package gets a fresh scoped database
    // holding only the archive key, so nothing signed by an unrelated but
    // locally trusted key can slip through.
    for package in &targets {
        let db = ScopedRpmDb::create()?;
        import_key_file(&db, &key_file)?;
        let verification = verify_package(&db, package)?;
        println!("{}", verification.status_line);
        verification.require_valid(package)?;
    }

    Ok(())
}
