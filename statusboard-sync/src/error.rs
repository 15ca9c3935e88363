//! Error types for statusboard-sync.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from remote sync operations.
///
/// None of these ever cross [`sync_directory`](crate::sync_directory) — they
/// are folded into the structured [`SyncReport`](crate::SyncReport) there.
/// Only credential loading and worker spawning surface them to the caller.
#[derive(Debug, Error)]
pub enum SyncError {
    /// FTP connection or transfer failure.
    #[error("remote transfer error: {0}")]
    Ftp(#[from] suppaftp::FtpError),

    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The credentials file exists but does not hold the expected 4 lines.
    #[error("credentials file {path} is malformed: expected 4 lines (host, user, password, remote directory)")]
    MalformedCredentials { path: PathBuf },
}

/// Convenience constructor for [`SyncError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> SyncError {
    SyncError::Io {
        path: path.into(),
        source,
    }
}
