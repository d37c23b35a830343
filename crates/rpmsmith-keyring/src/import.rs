//! Key import into a scoped database.

use crate::db::ScopedRpmDb;
use crate::errors::KeyringError;
use rpmsmith_exec::{ToolCommand, ToolError};
use std::io::Write;
use std::path::Path;

/// Exports the public key for `identity` from the caller's default GPG
/// keyring and imports it into the scoped database.
///
/// # Errors
///
/// - [`KeyringError::KeyResolution`] if the identity resolves to nothing
///   (`gpg --export` exits 0 but emits no material for unknown identities,
///   so an empty export is treated the same as a failed one)
/// - [`KeyringError::Import`] if the database rejects the import
pub fn import_identity(db: &ScopedRpmDb, identity: &str) -> Result<(), KeyringError> {
    let exported = ToolCommand::new("gpg")
        .args(["--export", "--armor"])
        .arg(identity)
        .run()
        .map_err(|err| match err {
            ToolError::Failed { stderr, .. } => KeyringError::KeyResolution {
                identity: identity.to_string(),
                detail: stderr,
            },
            other => KeyringError::Tool(other),
        })?;

    if exported.stdout.trim().is_empty() {
        return Err(KeyringError::KeyResolution {
            identity: identity.to_string(),
            detail: "nothing exported".to_string(),
        });
    }

    let mut staged = tempfile::NamedTempFile::new()?;
    staged.write_all(exported.stdout.as_bytes())?;
    staged.flush()?;

    import_key_file(db, staged.path())
}

/// Imports an on-disk public key file into the scoped database.
///
/// # Errors
///
/// Returns [`KeyringError::Import`] if `rpmkeys` rejects the file (invalid
/// format, unreadable, permission).
pub fn import_key_file(db: &ScopedRpmDb, key_path: &Path) -> Result<(), KeyringError> {
    tracing::debug!(key = %key_path.display(), db = %db.path().display(), "importing key");
    ToolCommand::new("rpmkeys")
        .arg("--dbpath")
        .arg(db.path())
        .arg("--import")
        .arg(key_path)
        .run()
        .map_err(|err| match err {
            ToolError::Failed { stderr, .. } => KeyringError::Import { detail: stderr },
            other => KeyringError::Tool(other),
        })?;
    Ok(())
}
