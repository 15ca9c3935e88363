//! Best-effort directory sync using the atomic rename protocol.
//!
//! Every file is uploaded under `<name>.tmp` and then renamed to `<name>`,
//! so a remote observer never sees a partially written final file. Failures
//! abort the remaining uploads for the invocation but are never raised —
//! they are folded into the returned [`SyncReport`].

use std::fs::{self, File};
use std::path::Path;

use crate::credentials::RemoteCredentials;
use crate::error::{io_err, SyncError};
use crate::remote::{RemoteConnection, RemoteHost};

// ---------------------------------------------------------------------------
// Structured report
// ---------------------------------------------------------------------------

/// Failure classification for a sync invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncErrorKind {
    /// Could not connect, authenticate or enter the remote directory.
    Connect,
    /// Could not read the local output directory or a file in it.
    LocalRead,
    /// Upload or rename failed mid-run.
    Transfer,
}

/// Structured failure: kind plus human-readable message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncFailure {
    pub kind: SyncErrorKind,
    pub message: String,
}

impl SyncFailure {
    fn new(kind: SyncErrorKind, error: impl std::fmt::Display) -> Self {
        SyncFailure {
            kind,
            message: error.to_string(),
        }
    }
}

/// Outcome of one sync invocation.
///
/// A failed invocation may leave the remote host with a mix of old and newly
/// renamed files; there is no rollback. `uploaded` lists the files whose
/// final names were successfully replaced before the failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    /// Final names successfully uploaded and renamed, in upload order.
    pub uploaded: Vec<String>,
    /// The local output directory did not exist; nothing was attempted.
    pub skipped: bool,
    pub failure: Option<SyncFailure>,
}

impl SyncReport {
    fn skipped() -> Self {
        SyncReport {
            uploaded: Vec::new(),
            skipped: true,
            failure: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.failure.is_none()
    }
}

/// Observability collaborator: receives the report of every invocation.
pub trait SyncObserver: Send + Sync {
    fn report(&self, report: &SyncReport);
}

/// Default observer: logs through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl SyncObserver for LogObserver {
    fn report(&self, report: &SyncReport) {
        match &report.failure {
            Some(failure) => tracing::error!(
                kind = ?failure.kind,
                uploaded = report.uploaded.len(),
                "remote sync failed: {}",
                failure.message,
            ),
            None if report.skipped => {
                tracing::debug!("remote sync skipped: no local output directory")
            }
            None => tracing::info!(uploaded = report.uploaded.len(), "remote sync completed"),
        }
    }
}

// ---------------------------------------------------------------------------
// sync_directory
// ---------------------------------------------------------------------------

/// Upload every file in `dir` to the remote host, atomically renaming each
/// into place. Never returns an error; see [`SyncReport`].
pub fn sync_directory<H: RemoteHost>(
    dir: &Path,
    credentials: &RemoteCredentials,
    host: &H,
) -> SyncReport {
    if !dir.exists() {
        return SyncReport::skipped();
    }

    let mut conn = match host.connect(credentials) {
        Ok(conn) => conn,
        Err(e) => {
            return SyncReport {
                uploaded: Vec::new(),
                skipped: false,
                failure: Some(SyncFailure::new(SyncErrorKind::Connect, e)),
            }
        }
    };

    let mut report = SyncReport {
        uploaded: Vec::new(),
        skipped: false,
        failure: None,
    };

    match local_file_names(dir) {
        Ok(names) => {
            for name in names {
                if let Some(failure) = upload_one(&mut conn, &dir.join(&name), &name) {
                    report.failure = Some(failure);
                    break;
                }
                report.uploaded.push(name);
            }
        }
        Err(e) => report.failure = Some(SyncFailure::new(SyncErrorKind::LocalRead, e)),
    }

    let _ = conn.close();
    report
}

/// Regular files in `dir`, sorted by name for a deterministic upload order.
fn local_file_names(dir: &Path) -> Result<Vec<String>, SyncError> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| io_err(dir, e))? {
        let entry = entry.map_err(|e| io_err(dir, e))?;
        let is_file = entry
            .file_type()
            .map_err(|e| io_err(entry.path(), e))?
            .is_file();
        if is_file {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    names.sort();
    Ok(names)
}

/// Upload one file under its temporary name, then rename into place.
fn upload_one<C: RemoteConnection>(conn: &mut C, path: &Path, name: &str) -> Option<SyncFailure> {
    let mut file = match File::open(path) {
        Ok(file) => file,
        Err(e) => return Some(SyncFailure::new(SyncErrorKind::LocalRead, io_err(path, e))),
    };

    let tmp = format!("{name}.tmp");
    if let Err(e) = conn.upload(&tmp, &mut file) {
        return Some(SyncFailure::new(SyncErrorKind::Transfer, e));
    }
    if let Err(e) = conn.rename(&tmp, name) {
        return Some(SyncFailure::new(SyncErrorKind::Transfer, e));
    }
    None
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
