//! Signature stripping and content digests.
//!
//! Validating that a package really was signed beforehand: strip the
//! signature header in place, then print a digest of the remaining content
//! for comparison against the pre-signing artifact.

use crate::errors::KeyringError;
use rpmsmith_exec::ToolCommand;
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io;
use std::path::Path;

/// Removes the signature header from the package at `path`, in place.
pub fn strip_signature(path: &Path) -> Result<(), KeyringError> {
    tracing::debug!(package = %path.display(), "stripping signature");
    ToolCommand::new("rpm").arg("--delsign").arg(path).run()?;
    Ok(())
}

/// Streaming SHA-256 of the file at `path`, hex-encoded.
pub fn content_digest(path: &Path) -> Result<String, KeyringError> {
    let mut file = File::open(path)?;
    let mut hasher = Sha256::new();
    io::copy(&mut file, &mut hasher)?;
    Ok(hex::encode(hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn digest_matches_known_vector() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"abc").unwrap();
        file.flush().unwrap();

        let digest = content_digest(file.path()).unwrap();
        assert_eq!(
            digest,
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn digest_of_missing_file_is_io_error() {
        let err = content_digest(Path::new("no-such-file.rpm")).unwrap_err();
        assert!(matches!(err, KeyringError::Io(_)));
    }
}
