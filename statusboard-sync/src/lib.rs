//! # statusboard-sync
//!
//! Best-effort upload of generated dashboard pages to a remote file host.
//!
//! Each file is uploaded under a temporary name and atomically renamed into
//! place, so remote observers never see a partially written page. Failures
//! never propagate to the publisher — they surface as a structured
//! [`SyncReport`] handed to a [`SyncObserver`]. Invocations are serialized
//! through a single [`SyncWorker`] thread with a depth-1 request queue.

pub mod credentials;
pub mod error;
pub mod remote;
pub mod uploader;
pub mod worker;

#[cfg(test)]
mod testing;

pub use credentials::RemoteCredentials;
pub use error::SyncError;
pub use remote::{FtpHost, RemoteConnection, RemoteHost};
pub use uploader::{
    sync_directory, LogObserver, SyncErrorKind, SyncFailure, SyncObserver, SyncReport,
};
pub use worker::SyncWorker;
