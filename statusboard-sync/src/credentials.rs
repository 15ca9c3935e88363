//! Remote credentials file.
//!
//! Plain text, 4 lines: host, username, password, remote directory. Absence
//! of the file means sync is disabled for the process lifetime — that is not
//! an error condition. Loaded once at startup, immutable thereafter.

use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{io_err, SyncError};

/// Credentials for the remote file host.
#[derive(Clone, PartialEq, Eq)]
pub struct RemoteCredentials {
    pub host: String,
    pub user: String,
    pub password: String,
    pub remote_dir: String,
}

// Manual Debug so the password never lands in logs.
impl fmt::Debug for RemoteCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RemoteCredentials")
            .field("host", &self.host)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("remote_dir", &self.remote_dir)
            .finish()
    }
}

/// Load credentials from `path`.
///
/// Returns `Ok(None)` when the file does not exist (sync disabled),
/// [`SyncError::MalformedCredentials`] when it holds fewer than 4 lines, and
/// propagates any other I/O failure.
pub fn load_at(path: &Path) -> Result<Option<RemoteCredentials>, SyncError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(io_err(path, e)),
    };

    let mut lines = contents.lines();
    let mut next = || {
        lines
            .next()
            .map(str::to_owned)
            .ok_or_else(|| SyncError::MalformedCredentials {
                path: path.to_path_buf(),
            })
    };

    Ok(Some(RemoteCredentials {
        host: next()?,
        user: next()?,
        password: next()?,
        remote_dir: next()?,
    }))
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn missing_file_disables_sync_silently() {
        let tmp = TempDir::new().unwrap();
        let loaded = load_at(&tmp.path().join("ftpcreds.txt")).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn four_lines_load() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("ftpcreds.txt");
        fs::write(&path, "ftp.example.com\nbot\nhunter2\n/www/status\n").unwrap();

        let creds = load_at(&path).unwrap().expect("credentials");
        assert_eq!(creds.host, "ftp.example.com");
        assert_eq!(creds.user, "bot");
        assert_eq!(creds.password, "hunter2");
        assert_eq!(creds.remote_dir, "/www/status");
    }

    #[test]
    fn short_file_is_malformed() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("ftpcreds.txt");
        fs::write(&path, "host\nuser\n").unwrap();

        let err = load_at(&path).unwrap_err();
        assert!(matches!(err, SyncError::MalformedCredentials { .. }));
    }

    #[test]
    fn debug_output_redacts_the_password() {
        let creds = RemoteCredentials {
            host: "h".into(),
            user: "u".into(),
            password: "secret".into(),
            remote_dir: "/d".into(),
        };
        let debug = format!("{creds:?}");
        assert!(!debug.contains("secret"));
        assert!(debug.contains("<redacted>"));
    }
}
