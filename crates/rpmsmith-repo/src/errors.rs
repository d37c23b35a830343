use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during repository operations.
#[derive(Error, Debug)]
pub enum RepoError {
    /// No package files were found across all releases and architectures.
    #[error("no packages found in the repository")]
    EmptyRepository,
    /// Package header metadata could not be read or parsed.
    #[error("cannot read metadata for {path}: {detail}")]
    Metadata {
        /// Package whose header read failed.
        path: PathBuf,
        /// What went wrong.
        detail: String,
    },
    /// Template rendering failed.
    #[error("render error: {0}")]
    Render(#[from] minijinja::Error),
    /// An external tool failed.
    #[error(transparent)]
    Tool(#[from] rpmsmith_exec::ToolError),
    /// I/O error while scanning or writing output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
