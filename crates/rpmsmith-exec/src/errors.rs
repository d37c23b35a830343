use thiserror::Error;

/// Errors that can occur while invoking an external tool.
#[derive(Error, Debug)]
pub enum ToolError {
    /// The process could not be spawned or waited on.
    #[error("I/O error running {tool}: {source}")]
    Io {
        /// Tool that was being invoked.
        tool: &'static str,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The process ran but exited with a nonzero status.
    #[error("{tool} exited with status {status}: {stderr}")]
    Failed {
        /// Tool that was invoked.
        tool: &'static str,
        /// Exit code, or -1 if terminated by a signal.
        status: i32,
        /// Captured standard error, trimmed.
        stderr: String,
    },
    /// The process produced output that is not valid UTF-8.
    #[error("{tool} produced non-UTF-8 output")]
    InvalidUtf8 {
        /// Tool that was invoked.
        tool: &'static str,
    },
    /// The process exceeded its time budget and was killed.
    #[error("{tool} did not finish within {limit_secs}s")]
    Timeout {
        /// Tool that was invoked.
        tool: &'static str,
        /// Budget that was exceeded, in seconds.
        limit_secs: u64,
    },
}
