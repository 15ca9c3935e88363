//! In-memory fake remote host shared by the crate's tests.

use std::collections::HashMap;
use std::io::Read;
use std::sync::{Arc, Mutex};

use crate::credentials::RemoteCredentials;
use crate::error::{io_err, SyncError};
use crate::remote::{RemoteConnection, RemoteHost};

/// Snapshot of the fake remote host.
#[derive(Debug, Clone, Default)]
pub struct FakeRemoteState {
    pub files: HashMap<String, Vec<u8>>,
    pub connects: usize,
    pub closed: bool,
    fail_connect: bool,
    fail_upload_on: Option<String>,
    fail_rename_on: Option<String>,
}

impl FakeRemoteState {
    pub fn file(&self, name: &str) -> Option<String> {
        self.files
            .get(name)
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }
}

/// Shared-state fake [`RemoteHost`] with injectable failures.
#[derive(Clone, Default)]
pub struct FakeHost {
    state: Arc<Mutex<FakeRemoteState>>,
}

impl FakeHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> FakeRemoteState {
        self.state.lock().unwrap().clone()
    }

    pub fn seed_file(&self, name: &str, contents: &str) {
        self.state
            .lock()
            .unwrap()
            .files
            .insert(name.to_string(), contents.as_bytes().to_vec());
    }

    pub fn fail_connect(&self) {
        self.state.lock().unwrap().fail_connect = true;
    }

    pub fn fail_upload_on(&self, name: &str) {
        self.state.lock().unwrap().fail_upload_on = Some(name.to_string());
    }

    pub fn fail_rename_on(&self, name: &str) {
        self.state.lock().unwrap().fail_rename_on = Some(name.to_string());
    }
}

pub struct FakeConnection {
    state: Arc<Mutex<FakeRemoteState>>,
}

impl RemoteHost for FakeHost {
    type Conn = FakeConnection;

    fn connect(&self, _credentials: &RemoteCredentials) -> Result<FakeConnection, SyncError> {
        let mut state = self.state.lock().unwrap();
        if state.fail_connect {
            return Err(io_err(
                "fake remote",
                std::io::Error::other("connection refused"),
            ));
        }
        state.connects += 1;
        state.closed = false;
        Ok(FakeConnection {
            state: self.state.clone(),
        })
    }
}

impl RemoteConnection for FakeConnection {
    fn upload(&mut self, name: &str, data: &mut dyn Read) -> Result<(), SyncError> {
        let mut state = self.state.lock().unwrap();
        if state.fail_upload_on.as_deref() == Some(name) {
            return Err(io_err(name, std::io::Error::other("transfer aborted")));
        }
        let mut buf = Vec::new();
        data.read_to_end(&mut buf).map_err(|e| io_err(name, e))?;
        state.files.insert(name.to_string(), buf);
        Ok(())
    }

    fn rename(&mut self, from: &str, to: &str) -> Result<(), SyncError> {
        let mut state = self.state.lock().unwrap();
        if state.fail_rename_on.as_deref() == Some(from) {
            return Err(io_err(from, std::io::Error::other("rename rejected")));
        }
        let contents = state
            .files
            .remove(from)
            .ok_or_else(|| io_err(from, std::io::Error::other("no such remote file")))?;
        state.files.insert(to.to_string(), contents);
        Ok(())
    }

    fn close(&mut self) -> Result<(), SyncError> {
        self.state.lock().unwrap().closed = true;
        Ok(())
    }
}
