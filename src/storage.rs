//!
//! # Session Storage
//!
//! One JSON file holding the serialized [`Session`] is the sole durable
//! client-side artifact. Loading is infallible by design: a missing or
//! unreadable file, or one whose contents no longer parse, is reported as
//! "no session" so a corrupted local record can never lock the user out.

use crate::error::AppError;
use crate::models::Session;
use log::warn;
use std::fs;
use std::path::PathBuf;

/// Handle to the persisted session file.
///
/// Cheap to clone; the `SessionStore` and the `ApiClient` each hold one
/// pointing at the same path, which is what lets the adapter re-read the
/// persisted session on every outgoing request.
#[derive(Debug, Clone)]
pub struct SessionStorage {
    path: PathBuf,
}

impl SessionStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Reads the persisted session, if any.
    ///
    /// Never fails: a missing file is "no session", and corrupt contents are
    /// logged at warn level and likewise treated as "no session".
    pub fn load(&self) -> Option<Session> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return None,
            Err(err) => {
                warn!("Could not read session file {}: {}", self.path.display(), err);
                return None;
            }
        };

        match serde_json::from_str(&contents) {
            Ok(session) => Some(session),
            Err(err) => {
                warn!(
                    "Discarding corrupt session file {}: {}",
                    self.path.display(),
                    err
                );
                None
            }
        }
    }

    /// Writes the session to disk, creating parent directories as needed.
    ///
    /// The record is written to a sibling file and renamed into place, so a
    /// crash mid-write cannot leave a half-written session behind.
    pub fn save(&self, session: &Session) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let contents = serde_json::to_string(session)
            .map_err(|err| AppError::Storage(err.to_string()))?;
        let staged = self.path.with_extension("json.tmp");
        fs::write(&staged, contents)?;
        fs::rename(&staged, &self.path)?;
        Ok(())
    }

    /// Removes the persisted session. Never fails; an already-absent file is
    /// the desired end state, and any other failure is logged and swallowed
    /// so logout stays infallible.
    pub fn clear(&self) {
        if let Err(err) = fs::remove_file(&self.path) {
            if err.kind() != std::io::ErrorKind::NotFound {
                warn!(
                    "Could not remove session file {}: {}",
                    self.path.display(),
                    err
                );
            }
        }
    }
}
