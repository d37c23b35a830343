//! Ephemeral scoped RPM database.

use crate::errors::KeyringError;
use std::path::Path;
use tempfile::TempDir;

/// An ephemeral RPM database used solely as a signature trust store.
///
/// `rpm --checksig` cannot be told "verify against exactly this key"; it
/// trusts every key in whatever database it is pointed at. Correctness
/// therefore requires a database containing *only* the expected key, created
/// empty for one verification session and destroyed afterwards. Holding the
/// database in a [`TempDir`] makes the cleanup unconditional: the directory
/// is removed when the handle drops, on success and error paths alike.
///
/// The handle is passed explicitly to every operation that needs it; nothing
/// in this crate consults an ambient default database.
///
/// # Example
///
/// ```no_run
/// use rpmsmith_keyring::{import_identity, verify_package, ScopedRpmDb};
///
/// let db = ScopedRpmDb::create()?;
/// import_identity(&db, "Package Repository TESTING key <packaging@example.com>")?;
/// let verification = verify_package(&db, "dist/f41/example-1.0-1.x86_64.rpm".as_ref())?;
/// println!("{}", verification.status_line);
/// # Ok::<(), rpmsmith_keyring::KeyringError>(())
/// ```
#[derive(Debug)]
pub struct ScopedRpmDb {
    dir: TempDir,
}

impl ScopedRpmDb {
    /// Creates a fresh, empty scoped database.
    pub fn create() -> Result<Self, KeyringError> {
        let dir = TempDir::new()?;
        tracing::debug!(path = %dir.path().display(), "created scoped rpm database");
        Ok(Self { dir })
    }

    /// Filesystem location to pass as `--dbpath`.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_directory_is_removed_on_drop() {
        let db = ScopedRpmDb::create().unwrap();
        let path = db.path().to_path_buf();
        assert!(path.is_dir());
        drop(db);
        assert!(!path.exists());
    }

    #[test]
    fn databases_are_disjoint() {
        let a = ScopedRpmDb::create().unwrap();
        let b = ScopedRpmDb::create().unwrap();
        assert_ne!(a.path(), b.path());
    }
}
