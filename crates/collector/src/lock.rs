//! Run-exclusivity lock file.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum LockError {
    #[error("Another collection is running (lock file {0:?} exists)")]
    Held(PathBuf),

    #[error("Cannot create lock file {path:?}: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl LockError {
    /// Process exit code reported for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            LockError::Held(_) => 101,
            LockError::Create { .. } => 102,
        }
    }
}

/// Held lock file, removed on drop.
#[derive(Debug)]
pub struct RunLock {
    path: PathBuf,
}

impl RunLock {
    /// Create the lock file, failing if it already exists.
    pub fn acquire(path: impl AsRef<Path>) -> Result<Self, LockError> {
        let path = path.as_ref().to_path_buf();
        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(mut file) => {
                // The pid is informational only.
                if let Err(e) = writeln!(file, "{}", std::process::id()) {
                    warn!("Cannot write pid to lock file {:?}: {}", path, e);
                }
                Ok(Self { path })
            }
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Err(LockError::Held(path)),
            Err(source) => Err(LockError::Create { path, source }),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for RunLock {
    fn drop(&mut self) {
        if let Err(e) = fs::remove_file(&self.path) {
            warn!("Cannot remove lock file {:?}: {}", self.path, e);
        }
    }
}
