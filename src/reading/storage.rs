//! Storage backends for the persisted reading collection.
//!
//! The collection occupies one logical key-value slot: the whole
//! serialized array is rewritten on every mutation. `ReadingStorage`
//! keeps the medium pluggable - the crate ships a JSON-file backend for
//! applications and an in-memory backend for tests; a browser host
//! would implement the trait over its local storage.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Fixed key for the reading collection slot.
pub const STORAGE_KEY: &str = "tarotReadings";

/// One read/write slot holding the serialized reading collection.
pub trait ReadingStorage {
    /// Read the stored payload, `None` if the slot was never written.
    fn load(&self) -> Result<Option<String>>;

    /// Overwrite the slot with a new payload.
    fn store(&mut self, payload: &str) -> Result<()>;
}

/// File-backed slot at `<dir>/tarotReadings.json`.
#[derive(Clone, Debug)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Back the slot with a file under `dir`.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            path: dir.into().join(format!("{STORAGE_KEY}.json")),
        }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ReadingStorage for FileStorage {
    fn load(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read readings from {}", self.path.display()))?;
        Ok(Some(contents))
    }

    fn store(&mut self, payload: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(&self.path, payload)
            .with_context(|| format!("Failed to write readings to {}", self.path.display()))
    }
}

/// In-memory slot for tests and ephemeral sessions.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    slot: Option<String>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate the slot, as if a previous session had written it.
    #[must_use]
    pub fn with_payload(payload: impl Into<String>) -> Self {
        Self {
            slot: Some(payload.into()),
        }
    }

    /// Current slot contents.
    #[must_use]
    pub fn payload(&self) -> Option<&str> {
        self.slot.as_deref()
    }
}

impl ReadingStorage for MemoryStorage {
    fn load(&self) -> Result<Option<String>> {
        Ok(self.slot.clone())
    }

    fn store(&mut self, payload: &str) -> Result<()> {
        self.slot = Some(payload.to_string());
        Ok(())
    }
}
