//! Scoped RPM signature trust stores, verification, and signing.
//!
//! This crate provides:
//! - [`ScopedRpmDb`] - an ephemeral RPM database used only as a trust store
//! - Key import from the caller's GPG keyring or from an on-disk key file
//! - Signature verification with a typed [`Verdict`]
//! - Package signing and signature stripping
//!
//! Core invariants:
//! - Verification always runs against a scoped database holding exactly the
//!   expected key, never the machine-wide keyring
//! - The scoped database is deleted on every exit path
//! - `rpm --checksig` exits 0 even for unsigned packages; the only reliable
//!   success signal is its status line matching
//!   `"<path>: digests signatures OK"` byte-for-byte. That comparison lives
//!   in one classifier; everything else sees a [`Verdict`].

#![deny(missing_docs)]

/// Ephemeral scoped RPM database.
pub mod db;
/// Error types for keyring operations.
pub mod errors;
/// Key import into a scoped database.
pub mod import;
/// Package signing.
pub mod sign;
/// Signature stripping and content digests.
pub mod strip;
/// Signature verification and verdict classification.
pub mod verify;

pub use db::ScopedRpmDb;
pub use errors::KeyringError;
pub use import::{import_identity, import_key_file};
pub use sign::sign_package;
pub use strip::{content_digest, strip_signature};
pub use verify::{verify_package, Verdict, Verification};
