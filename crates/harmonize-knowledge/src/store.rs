//! Snapshot store implementations.
//!
//! `JsonFileStore` is the production port: whole-file JSON, written to a
//! temp file in the same directory and renamed over the target so readers
//! never observe a partial snapshot. `MemoryStore` is the test double.

use std::io::Write;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

use serde::de::DeserializeOwned;
use serde::Serialize;

use harmonize_core::errors::{HarmonizeResult, StoreError};
use harmonize_core::traits::ISnapshotStore;

/// File-backed snapshot store for any serde-serializable snapshot type.
pub struct JsonFileStore<T> {
    path: PathBuf,
    _marker: PhantomData<fn() -> T>,
}

impl<T> JsonFileStore<T> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _marker: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl<T> ISnapshotStore<T> for JsonFileStore<T>
where
    T: Serialize + DeserializeOwned + Send + Sync,
{
    fn load(&self) -> HarmonizeResult<Option<T>> {
        let bytes = match std::fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StoreError::Io(e).into()),
        };
        let value = serde_json::from_slice(&bytes).map_err(|e| StoreError::Corrupt {
            path: self.path.display().to_string(),
            reason: e.to_string(),
        })?;
        Ok(Some(value))
    }

    fn save(&self, value: &T) -> HarmonizeResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(StoreError::Io)?;
            }
        }
        let data = serde_json::to_vec_pretty(value).map_err(StoreError::Json)?;

        // Write to a sibling temp file, then rename over the target.
        let tmp_path = self.path.with_extension("tmp");
        let mut file = std::fs::File::create(&tmp_path).map_err(StoreError::Io)?;
        if let Err(e) = file.write_all(&data).and_then(|_| file.sync_all()) {
            let _ = std::fs::remove_file(&tmp_path);
            return Err(StoreError::Io(e).into());
        }
        drop(file);
        if let Err(e) = std::fs::rename(&tmp_path, &self.path) {
            let _ = std::fs::remove_file(&tmp_path);
            return Err(StoreError::Io(e).into());
        }
        Ok(())
    }
}

/// In-memory snapshot store for tests.
///
/// `fail_saves` lets tests exercise the persistence-failure path: saves
/// return an error while the caller's in-memory state stays authoritative.
#[derive(Default)]
pub struct MemoryStore<T> {
    slot: Mutex<Option<T>>,
    fail_saves: AtomicBool,
}

impl<T> MemoryStore<T> {
    pub fn new() -> Self {
        Self {
            slot: Mutex::new(None),
            fail_saves: AtomicBool::new(false),
        }
    }

    pub fn with_initial(value: T) -> Self {
        Self {
            slot: Mutex::new(Some(value)),
            fail_saves: AtomicBool::new(false),
        }
    }

    /// Make subsequent `save` calls fail with an I/O error.
    pub fn fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }
}

impl<T> ISnapshotStore<T> for MemoryStore<T>
where
    T: Clone + Send + Sync,
{
    fn load(&self) -> HarmonizeResult<Option<T>> {
        let slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(slot.clone())
    }

    fn save(&self, value: &T) -> HarmonizeResult<()> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(StoreError::Io(std::io::Error::other("simulated save failure")).into());
        }
        let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        *slot = Some(value.clone());
        Ok(())
    }
}
