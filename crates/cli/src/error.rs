use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort an export run.
///
/// There is no partial-output mode: every variant propagates to `main` and
/// the process exits non-zero before any artifact can be produced.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Navigation listing could not be read.
    #[error("failed to read sidebar {}: {source}", path.display())]
    SidebarRead {
        /// Listing path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Navigation listing could not be parsed.
    #[error("failed to parse sidebar {}: {message}", path.display())]
    SidebarParse {
        /// Listing path.
        path: PathBuf,
        /// Parser message.
        message: String,
    },
    /// Listing resolved to no markdown entries.
    #[error("sidebar {} lists no markdown entries", path.display())]
    EmptySidebar {
        /// Listing path.
        path: PathBuf,
    },
    /// A listed source file is missing or unreadable.
    #[error("failed to read source {}: {source}", path.display())]
    SourceRead {
        /// Resolved source path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Scratch workspace could not be recreated or written.
    #[error("workspace I/O at {}: {source}", path.display())]
    Workspace {
        /// Path the operation targeted.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Converter binary failed to start.
    #[error("failed to spawn `{program}`: {source}")]
    ConverterSpawn {
        /// Program that was invoked.
        program: String,
        /// Underlying spawn error.
        #[source]
        source: std::io::Error,
    },
    /// Converter ran but exited non-zero.
    #[error("`{program}` failed ({status}): {stderr}")]
    ConverterFailed {
        /// Program that was invoked.
        program: String,
        /// Exit status description.
        status: String,
        /// Captured stderr, trimmed.
        stderr: String,
    },
}
