//! File-backed persistence for the todo collection.
//!
//! # Design
//! The whole collection is one JSON document: an array of `Todo` objects in
//! insertion order. `read_all` and `write_all` are the only primitives — the
//! service layer owns any in-memory mutation between the two.
//!
//! Writes go to a uniquely-suffixed temp file in the same directory and are
//! renamed over the target, so a reader never observes a partial write.
//! A missing or blank file reads as an empty collection; a file with
//! malformed contents is a hard error, never silently reset.

use std::io::ErrorKind;
use std::path::PathBuf;

use uuid::Uuid;

use crate::error::StoreError;
use crate::types::Todo;

/// Store configuration.
///
/// Passed explicitly at construction so tests can point each store at an
/// isolated file; there is no process-wide path.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Location of the backing JSON document.
    pub path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("todos.json"),
        }
    }
}

/// Persistence over the backing JSON document.
///
/// Construction is cheap and does not touch the filesystem; the file is
/// created on the first `write_all`.
#[derive(Debug)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(config: StoreConfig) -> Self {
        Self { path: config.path }
    }

    /// Read the full collection.
    ///
    /// A missing or whitespace-only file yields an empty collection.
    pub async fn read_all(&self) -> Result<Vec<Todo>, StoreError> {
        let raw = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(StoreError::Io(err)),
        };
        if raw.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_slice(&raw)?)
    }

    /// Serialize the full collection and replace the backing file.
    ///
    /// The document is written to a temp file next to the target and renamed
    /// into place, so concurrent `read_all` calls see either the old or the
    /// new collection, never a truncated one.
    pub async fn write_all(&self, todos: &[Todo]) -> Result<(), StoreError> {
        let payload = serde_json::to_vec_pretty(todos)?;

        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => {
                tokio::fs::create_dir_all(parent).await?;
            }
            _ => {}
        }

        let temp_path = self
            .path
            .with_extension(format!("{}.tmp", Uuid::new_v4().simple()));
        tokio::fs::write(&temp_path, &payload).await?;
        tokio::fs::rename(&temp_path, &self.path).await?;
        Ok(())
    }
}
