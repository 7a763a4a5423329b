//! File-backed session store.
//!
//! The Scrutin analog of the browser's persistent key-value store: one JSON
//! file holding the four session fields written together on login. The
//! store is an explicit context object handed to the gateway constructor;
//! nothing reads session state ambiently.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use scrutin_core::Session;

/// Errors that can occur when persisting the session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Reading or writing the session file failed.
    #[error("Session store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing the session record failed.
    #[error("Session encode error: {0}")]
    Encode(#[from] serde_json::Error),
}

/// File-backed store for the persisted session record.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Create a store backed by the given file path. The file need not
    /// exist yet.
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the current session, if any.
    ///
    /// A missing file means no session. A corrupt file is treated the same
    /// way: the record is either fully present or absent, never partial.
    #[must_use]
    pub fn load(&self) -> Option<Session> {
        let bytes = fs::read(&self.path).ok()?;
        match serde_json::from_slice(&bytes) {
            Ok(session) => Some(session),
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Ignoring corrupt session file"
                );
                None
            }
        }
    }

    /// The stored bearer token, if a session exists.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.load().map(|session| session.access_token)
    }

    /// Persist a session record.
    ///
    /// Writes to a sibling temp file and renames it into place so the four
    /// fields always land together.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if the directory cannot be created or the
    /// file cannot be written.
    pub fn save(&self, session: &Session) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let bytes = serde_json::to_vec_pretty(session)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, bytes)?;
        fs::rename(&tmp, &self.path)?;

        tracing::debug!(path = %self.path.display(), "Session saved");
        Ok(())
    }

    /// Remove the stored session, if any.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if the file exists but cannot be removed.
    pub fn clear(&self) -> Result<(), SessionError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SessionError::Io(e)),
        }
    }
}
