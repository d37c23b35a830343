use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during keyring operations.
#[derive(Error, Debug)]
pub enum KeyringError {
    /// The key identity did not resolve to any exportable key material.
    #[error("no key material for identity '{identity}': {detail}")]
    KeyResolution {
        /// Identity that failed to resolve (fingerprint or user-id string).
        identity: String,
        /// What the export reported.
        detail: String,
    },
    /// The scoped database rejected the key import.
    #[error("key import failed: {detail}")]
    Import {
        /// What the import tool reported.
        detail: String,
    },
    /// The external signer reported failure.
    #[error("signing {path} failed: {detail}")]
    Signing {
        /// Package that was being signed.
        path: PathBuf,
        /// What the signer reported.
        detail: String,
    },
    /// The signature status line did not match the expected success line.
    #[error("signature verification failed for {path}: {line}")]
    SignatureMismatch {
        /// Package whose verification failed.
        path: PathBuf,
        /// The status line actually produced by the checker.
        line: String,
    },
    /// An external tool failed for reasons unrelated to signature content.
    #[error(transparent)]
    Tool(#[from] rpmsmith_exec::ToolError),
    /// I/O error while staging key material or reading a package.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
