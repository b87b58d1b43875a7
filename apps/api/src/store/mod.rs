//! Persistence gateway.
//!
//! The canonical document lives behind a lock and is written through to a
//! single JSON file after every dispatched action. Rehydration happens
//! once at startup; a missing or unreadable file means "no prior state"
//! and never fails the process. Writes go through a temp file in the same
//! directory and an atomic rename so a crash mid-write cannot corrupt the
//! snapshot.

use std::fs;
use std::io::Write as _;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};

use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::{info, warn};

use crate::models::ResumeDocument;
use crate::wizard::reducer::{self, Action};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to write document: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize document: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to persist document: {0}")]
    Persist(#[from] tempfile::PersistError),
}

pub struct DocumentStore {
    path: PathBuf,
    doc: RwLock<ResumeDocument>,
}

impl DocumentStore {
    /// Opens the store, rehydrating from `path` when a readable snapshot
    /// exists and falling back to the default document otherwise.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let doc = match fs::read(&path) {
            Ok(bytes) => match serde_json::from_slice::<ResumeDocument>(&bytes) {
                Ok(doc) => {
                    info!("Rehydrated resume state from {}", path.display());
                    doc
                }
                Err(e) => {
                    warn!(
                        "Persisted state at {} is unreadable ({e}), starting fresh",
                        path.display()
                    );
                    ResumeDocument::default()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!("No persisted resume state, starting fresh");
                ResumeDocument::default()
            }
            Err(e) => {
                warn!("Could not read {} ({e}), starting fresh", path.display());
                ResumeDocument::default()
            }
        };
        Self {
            path,
            doc: RwLock::new(doc),
        }
    }

    /// Returns a clone of the current document.
    pub fn snapshot(&self) -> ResumeDocument {
        self.doc
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Applies one action and writes the whole document through to disk.
    /// Returns the post-apply snapshot.
    pub fn dispatch(&self, action: Action) -> Result<ResumeDocument, StoreError> {
        let mut doc = self.doc.write().unwrap_or_else(PoisonError::into_inner);
        reducer::apply(&mut doc, action);
        self.write_through(&doc)?;
        Ok(doc.clone())
    }

    fn write_through(&self, doc: &ResumeDocument) -> Result<(), StoreError> {
        let json = serde_json::to_vec_pretty(doc)?;
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir)?;
        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(&json)?;
        tmp.persist(&self.path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_starts_with_defaults() {
        let dir = tempdir().unwrap();
        let store = DocumentStore::open(dir.path().join("cv-builder.json"));
        assert_eq!(store.snapshot(), ResumeDocument::default());
    }

    #[test]
    fn test_unreadable_file_starts_with_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cv-builder.json");
        fs::write(&path, "{{{ not json").unwrap();
        let store = DocumentStore::open(&path);
        assert_eq!(store.snapshot(), ResumeDocument::default());
    }

    #[test]
    fn test_dispatch_writes_through_and_rehydrates() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cv-builder.json");

        let store = DocumentStore::open(&path);
        store
            .dispatch(Action::UpdateJobTitle("Engineer".to_string()))
            .unwrap();
        store
            .dispatch(Action::UpdateSkills(vec!["Rust".to_string()]))
            .unwrap();
        let written = store.snapshot();
        drop(store);

        let reopened = DocumentStore::open(&path);
        assert_eq!(reopened.snapshot(), written);
        assert_eq!(reopened.snapshot().job_title, "Engineer");
    }

    #[test]
    fn test_reset_persists_the_default_document() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cv-builder.json");

        let store = DocumentStore::open(&path);
        store
            .dispatch(Action::UpdateJobTitle("Engineer".to_string()))
            .unwrap();
        store.dispatch(Action::Reset).unwrap();
        drop(store);

        let reopened = DocumentStore::open(&path);
        assert_eq!(reopened.snapshot(), ResumeDocument::default());
    }

    #[test]
    fn test_snapshot_file_uses_client_field_names() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cv-builder.json");

        let store = DocumentStore::open(&path);
        store
            .dispatch(Action::UpdateCareerSummary("Builds things.".to_string()))
            .unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"careerSummary\""));
        assert!(raw.contains("\"isAIEnhanced\""));
    }
}
