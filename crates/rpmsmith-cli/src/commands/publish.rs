//! Publish command implementation.

use crate::targets;
use anyhow::{bail, Result};
use rpmsmith_keyring::{import_identity, sign_package, verify_package, ScopedRpmDb};
use rpmsmith_repo::find_packages;
use std::path::PathBuf;

/// Key used when none is given; publishing to the testing repository is the
/// common case and must never silently use the release key.
pub const DEFAULT_TESTING_KEY: &str = "Package Repository TESTING key <packaging@example.com>";

pub fn run(
    verify: bool,
    sign: bool,
    all: bool,
    key_id: String,
    repo_root: PathBuf,
    packages: Vec<PathBuf>,
) -> Result<()> {
    let targets = targets::resolve(all, packages, || Ok(find_packages(&repo_root)?))?;

    if verify {
        for package in &targets {
            println!(">> Verifying {}", package.display());
            let db = ScopedRpmDb::create()?;
            import_identity(&db, &key_id)?;
            let verification = verify_package(&db, package)?;
            println!("{}", verification.status_line);
            verification.require_valid(package)?;
        }
    } else if sign {
        for package in &targets {
            println!(">> Signing {}", package.display());
            sign_package(&key_id, package)?;
        }
    } else {
        bail!("Please use the --verify or the --sign option");
    }

    Ok(())
}
