//! Package signing.

use crate::errors::KeyringError;
use rpmsmith_exec::{ToolCommand, ToolError};
use std::path::Path;

/// Adds a detached signature to the package at `path`, in place, using the
/// key named by `identity` from the signer's GPG keyring.
///
/// Re-signing with the same key is whatever `rpm --addsign` makes of it;
/// no idempotence is enforced here.
///
/// # Errors
///
/// Returns [`KeyringError::Signing`] if the signer exits nonzero (key not
/// available for signing, I/O failure, incompatible existing signature).
pub fn sign_package(identity: &str, path: &Path) -> Result<(), KeyringError> {
    tracing::debug!(package = %path.display(), identity, "signing package");
    ToolCommand::new("rpm")
        .arg("--define")
        .arg(format!("_gpg_name {identity}"))
        .arg("--addsign")
        .arg(path)
        .run()
        .map_err(|err| match err {
            ToolError::Failed { stderr, .. } => KeyringError::Signing {
                path: path.to_path_buf(),
                detail: stderr,
            },
            other => KeyringError::Tool(other),
        })?;
    Ok(())
}
