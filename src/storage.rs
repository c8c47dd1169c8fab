//! Persistence for the assistant's state.
//!
//! The address book and note book travel together as one JSON blob.
//! Loading never fails: a missing or unreadable file just means a fresh
//! manager. Saving reports errors but the command loop carries on.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;
use tracing::warn;

use crate::book::{AddressBook, NoteBook};
use crate::error::{Error, Result};

/// Default blob file name, resolved against the working directory.
pub const DATA_FILE: &str = "personal_assistant_data.json";

/// Owns both collections; the unit of persistence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataManager {
    pub contacts: AddressBook,
    pub notes: NoteBook,
}

impl DataManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a manager from `path`. A missing file yields an empty
    /// manager silently; a corrupt one yields an empty manager with a
    /// warning.
    pub fn load(path: &Path) -> Self {
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Self::new(),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "could not read data file, starting empty");
                return Self::new();
            }
        };
        match serde_json::from_slice(&bytes) {
            Ok(manager) => manager,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "data file is corrupt, starting empty");
                Self::new()
            }
        }
    }

    /// Writes the whole state to `path`. The file handle is scoped to
    /// this call and released on every exit path.
    pub fn save(&self, path: &Path) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(self)?;
        fs::write(path, bytes).map_err(|e| Error::Save(path.to_path_buf(), e))
    }
}
