//! Remote host seam — trait plus the production FTP implementation.
//!
//! The uploader only ever talks to [`RemoteConnection`], so tests drive it
//! with an in-memory fake and the atomic-rename protocol can be verified
//! without a live server.

use std::io::Read;

use suppaftp::FtpStream;

use crate::credentials::RemoteCredentials;
use crate::error::SyncError;

/// One open connection to the remote file host, already positioned in the
/// configured remote directory.
pub trait RemoteConnection {
    /// Upload `data` under `name` in the current remote directory.
    fn upload(&mut self, name: &str, data: &mut dyn Read) -> Result<(), SyncError>;

    /// Rename `from` to `to` on the remote host, overwriting any previous
    /// file with that name.
    fn rename(&mut self, from: &str, to: &str) -> Result<(), SyncError>;

    /// Close the connection. Best-effort; callers ignore the result on the
    /// error path.
    fn close(&mut self) -> Result<(), SyncError>;
}

/// Factory for remote connections. One connection per sync invocation.
pub trait RemoteHost {
    type Conn: RemoteConnection;

    /// Connect, authenticate and change into the configured remote directory.
    fn connect(&self, credentials: &RemoteCredentials) -> Result<Self::Conn, SyncError>;
}

// ---------------------------------------------------------------------------
// FTP implementation
// ---------------------------------------------------------------------------

/// Production [`RemoteHost`] backed by plain FTP.
#[derive(Debug, Clone, Copy, Default)]
pub struct FtpHost;

pub struct FtpConnection {
    stream: FtpStream,
}

impl RemoteHost for FtpHost {
    type Conn = FtpConnection;

    fn connect(&self, credentials: &RemoteCredentials) -> Result<FtpConnection, SyncError> {
        let addr = if credentials.host.contains(':') {
            credentials.host.clone()
        } else {
            format!("{}:21", credentials.host)
        };
        let mut stream = FtpStream::connect(addr)?;
        stream.login(&credentials.user, &credentials.password)?;
        stream.cwd(&credentials.remote_dir)?;
        Ok(FtpConnection { stream })
    }
}

impl RemoteConnection for FtpConnection {
    fn upload(&mut self, name: &str, mut data: &mut dyn Read) -> Result<(), SyncError> {
        // Reborrow: put_file needs a sized reader, &mut dyn Read is one.
        self.stream.put_file(name, &mut data)?;
        Ok(())
    }

    fn rename(&mut self, from: &str, to: &str) -> Result<(), SyncError> {
        self.stream.rename(from, to)?;
        Ok(())
    }

    fn close(&mut self) -> Result<(), SyncError> {
        self.stream.quit()?;
        Ok(())
    }
}
