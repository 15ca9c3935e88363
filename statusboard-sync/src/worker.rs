//! Serialized background sync worker.
//!
//! One dedicated thread owns the connection factory and processes requests
//! from a bounded queue of depth 1. Publishing therefore never waits on sync,
//! at most one request sits pending, and two invocations can never race the
//! same remote filenames — the upload race of a naive thread-per-request
//! design cannot occur.

use std::path::PathBuf;
use std::sync::mpsc::{self, SyncSender, TrySendError};
use std::sync::Arc;
use std::thread;

use crate::credentials::RemoteCredentials;
use crate::error::{io_err, SyncError};
use crate::remote::RemoteHost;
use crate::uploader::{sync_directory, SyncObserver};

/// Handle to the background sync thread.
///
/// Dropping the handle closes the queue; the worker finishes any in-flight
/// invocation and exits. Nothing ever joins the thread — sync stays
/// fire-and-forget from the scheduler's point of view.
pub struct SyncWorker {
    tx: SyncSender<()>,
}

impl SyncWorker {
    /// Spawn the worker thread.
    ///
    /// `dir` is the local channel output directory to mirror; every request
    /// snapshots whatever that directory holds at dequeue time.
    pub fn spawn<H>(
        dir: PathBuf,
        credentials: RemoteCredentials,
        host: H,
        observer: Arc<dyn SyncObserver>,
    ) -> Result<SyncWorker, SyncError>
    where
        H: RemoteHost + Send + 'static,
    {
        let (tx, rx) = mpsc::sync_channel::<()>(1);
        thread::Builder::new()
            .name("statusboard-sync".to_string())
            .spawn(move || {
                while rx.recv().is_ok() {
                    let report = sync_directory(&dir, &credentials, &host);
                    observer.report(&report);
                }
            })
            .map_err(|e| io_err("sync worker thread", e))?;
        Ok(SyncWorker { tx })
    }

    /// Request a sync. Non-blocking.
    ///
    /// Returns `true` if the request was queued, `false` if one is already
    /// pending (the new request is dropped — the pending run will pick up the
    /// same directory contents or newer).
    pub fn request(&self) -> bool {
        match self.tx.try_send(()) {
            Ok(()) => true,
            Err(TrySendError::Full(())) | Err(TrySendError::Disconnected(())) => false,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
