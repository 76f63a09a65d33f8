// Keyfob — Store File Management
//
// Owns the path to the JSON store file and performs raw document I/O.
// A missing file reads as an empty mapping; a file that exists but does not
// parse is reported as malformed, never treated as empty.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::models::StoredCredential;
use super::StoreError;

/// The whole persisted mapping: website → stored credential value.
pub type Document = BTreeMap<String, StoredCredential>;

/// Wrapper around the on-disk JSON document.
pub struct StoreFile {
    path: PathBuf,
}

impl StoreFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole document. A missing file is an empty mapping.
    pub fn load(&self) -> Result<Document, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(text) => serde_json::from_str(&text).map_err(|source| StoreError::Malformed {
                path: self.path.clone(),
                source,
            }),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "store file absent, treating as empty");
                Ok(Document::new())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Write the whole document back, pretty-printed for readability.
    /// Creates the parent directory on first write.
    pub fn save(&self, document: &Document) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(document)?;
        fs::write(&self.path, json)?;

        tracing::debug!(
            path = %self.path.display(),
            entries = document.len(),
            "store file written"
        );
        Ok(())
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
