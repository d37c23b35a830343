//! Signature verification and verdict classification.

use crate::db::ScopedRpmDb;
use crate::errors::KeyringError;
use rpmsmith_exec::ToolCommand;
use std::path::Path;

/// Outcome of checking a package signature against a scoped database.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The status line matched the expected success line exactly.
    Valid,
    /// Anything else: unsigned, signed by a different key, or extra output.
    Invalid,
}

/// A classified verification result plus the raw status line behind it.
#[derive(Debug, Clone)]
pub struct Verification {
    /// Typed verdict.
    pub verdict: Verdict,
    /// The line `rpm --checksig` actually printed, trailing newline removed.
    pub status_line: String,
}

impl Verification {
    /// Converts an `Invalid` verdict into [`KeyringError::SignatureMismatch`].
    ///
    /// Batch operations abort on the first invalid package; this is the
    /// conversion point from verdict to terminal error.
    pub fn require_valid(self, path: &Path) -> Result<(), KeyringError> {
        match self.verdict {
            Verdict::Valid => Ok(()),
            Verdict::Invalid => Err(KeyringError::SignatureMismatch {
                path: path.to_path_buf(),
                line: self.status_line,
            }),
        }
    }
}

/// The only line `rpm --checksig` prints for a package whose digests and
/// signatures all verified.
fn expected_status_line(path: &Path) -> String {
    format!("{}: digests signatures OK", path.display())
}

/// Checks the signature of `path` against the keys in `db`.
///
/// `rpm --checksig` exits 0 whether or not a signature is present, and says
/// nothing machine-readable about *which* key signed. The one reliable
/// signal is its status line: an exact, byte-for-byte match against
/// `"<path>: digests signatures OK"` means the package is signed by a key in
/// the database. A package signed by an unknown key and an unsigned package
/// both produce non-matching lines and are deliberately not told apart.
///
/// # Errors
///
/// Returns [`KeyringError::Tool`] if the checker itself fails (nonzero exit,
/// e.g. a corrupt file) — distinct from an [`Verdict::Invalid`] outcome.
pub fn verify_package(db: &ScopedRpmDb, path: &Path) -> Result<Verification, KeyringError> {
    let output = ToolCommand::new("rpm")
        .arg("--dbpath")
        .arg(db.path())
        .arg("--checksig")
        .arg(path)
        .run()?;

    Ok(classify(path, &output.stdout))
}

fn classify(path: &Path, stdout: &str) -> Verification {
    let status_line = stdout.trim_end_matches('\n').to_string();
    let verdict = if status_line == expected_status_line(path) {
        Verdict::Valid
    } else {
        Verdict::Invalid
    };
    Verification {
        verdict,
        status_line,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn pkg() -> PathBuf {
        PathBuf::from("dist/f41/example-1.0-1.x86_64.rpm")
    }

    #[test]
    fn exact_success_line_is_valid() {
        let v = classify(
            &pkg(),
            "dist/f41/example-1.0-1.x86_64.rpm: digests signatures OK\n",
        );
        assert_eq!(v.verdict, Verdict::Valid);
        assert_eq!(
            v.status_line,
            "dist/f41/example-1.0-1.x86_64.rpm: digests signatures OK"
        );
    }

    #[test]
    fn unsigned_package_line_is_invalid() {
        // rpm prints this (and exits 0) when no signature is present.
        let v = classify(&pkg(), "dist/f41/example-1.0-1.x86_64.rpm: digests OK\n");
        assert_eq!(v.verdict, Verdict::Invalid);
    }

    #[test]
    fn wrong_key_line_is_invalid() {
        let v = classify(
            &pkg(),
            "dist/f41/example-1.0-1.x86_64.rpm: digests SIGNATURES NOT OK\n",
        );
        assert_eq!(v.verdict, Verdict::Invalid);
    }

    #[test]
    fn extra_lines_are_invalid() {
        let v = classify(
            &pkg(),
            "dist/f41/example-1.0-1.x86_64.rpm: digests signatures OK\nwarning: stale lock\n",
        );
        assert_eq!(v.verdict, Verdict::Invalid);
    }

    #[test]
    fn status_line_for_a_different_path_is_invalid() {
        let v = classify(&pkg(), "other.rpm: digests signatures OK\n");
        assert_eq!(v.verdict, Verdict::Invalid);
    }

    #[test]
    fn require_valid_maps_invalid_to_signature_mismatch() {
        let v = classify(&pkg(), "garbage\n");
        let err = v.require_valid(&pkg()).unwrap_err();
        match err {
            KeyringError::SignatureMismatch { path, line } => {
                assert_eq!(path, pkg());
                assert_eq!(line, "garbage");
            }
            other => panic!("expected SignatureMismatch, got {other:?}"),
        }
    }

    #[test]
    fn require_valid_passes_valid_through() {
        let v = classify(
            &pkg(),
            "dist/f41/example-1.0-1.x86_64.rpm: digests signatures OK\n",
        );
        assert!(v.require_valid(&pkg()).is_ok());
    }
}
