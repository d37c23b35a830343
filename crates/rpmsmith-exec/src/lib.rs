//! Synchronous invocation of external command-line tools.
//!
//! Everything this repository does is a thin wrapper around `rpm`, `gpg`, or
//! `rpmkeys`. This crate provides the one place those tools are spawned:
//! a builder that captures output, classifies nonzero exits, and enforces a
//! bounded time budget so a hung tool cannot hang a whole release run.
//!
//! ## Quick Start
//!
//! ```no_run
//! use rpmsmith_exec::ToolCommand;
//!
//! let output = ToolCommand::new("rpm")
//!     .arg("--version")
//!     .run()?;
//! println!("{}", output.stdout.trim_end());
//! # Ok::<(), rpmsmith_exec::ToolError>(())
//! ```

#![deny(missing_docs)]

/// Error types for tool invocation.
pub mod errors;
/// The command builder and runner.
pub mod runner;

pub use errors::ToolError;
pub use runner::{ToolCommand, ToolOutput, DEFAULT_TOOL_TIMEOUT};
