use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("session storage error: {0}")]
    Io(#[from] io::Error),

    #[error("session record error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// The persisted "current user" record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub username: String,
}

impl Identity {
    pub fn new(username: &str) -> Self {
        Self {
            username: username.to_string(),
        }
    }
}

pub trait SessionStore {
    fn current(&self) -> Option<Identity>;

    fn is_authenticated(&self) -> bool {
        self.current().is_some()
    }

    /// Replaces any existing record with `identity`.
    fn set_authenticated(&self, identity: &Identity) -> Result<(), SessionError>;

    fn clear_authenticated(&self) -> Result<(), SessionError>;
}

/// Session record kept as a small JSON file.
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_record(&self) -> Result<Option<Identity>, SessionError> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(serde_json::from_str(&content)?)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "session.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl SessionStore for FileSessionStore {
    fn current(&self) -> Option<Identity> {
        match self.read_record() {
            Ok(record) => record,
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "unreadable session record");
                None
            }
        }
    }

    fn set_authenticated(&self, identity: &Identity) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        // Whole-record replace: write aside, then rename over the target.
        let temp = self.temp_path();
        fs::write(&temp, serde_json::to_vec(identity)?)?;
        fs::rename(&temp, &self.path)?;

        info!(username = %identity.username, "session stored");
        Ok(())
    }

    fn clear_authenticated(&self) -> Result<(), SessionError> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                info!("session cleared");
                Ok(())
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!("no session to clear");
                Ok(())
            }
            Err(err) => Err(err.into()),
        }
    }
}

/// In-process session; forgotten when the program exits.
#[derive(Default)]
pub struct MemorySessionStore {
    record: RefCell<Option<Identity>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_identity(identity: Identity) -> Self {
        Self {
            record: RefCell::new(Some(identity)),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn current(&self) -> Option<Identity> {
        self.record.borrow().clone()
    }

    fn set_authenticated(&self, identity: &Identity) -> Result<(), SessionError> {
        self.record.replace(Some(identity.clone()));
        Ok(())
    }

    fn clear_authenticated(&self) -> Result<(), SessionError> {
        self.record.replace(None);
        Ok(())
    }
}
