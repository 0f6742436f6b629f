//! File-backed score store.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use super::ScoreStore;
use crate::core::StoreError;

/// Score store persisted as a bincode-encoded map.
///
/// Every `save` writes the whole map through to disk via a temporary file
/// and a rename, so a crash mid-write leaves the previous contents intact.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    records: FxHashMap<String, u64>,
}

impl FileStore {
    /// Open the store at `path`. A missing file yields an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let records = match fs::read(&path) {
            Ok(bytes) => bincode::deserialize(&bytes)?,
            Err(err) if err.kind() == io::ErrorKind::NotFound => FxHashMap::default(),
            Err(err) => return Err(err.into()),
        };
        debug!(path = %path.display(), records = records.len(), "opened score store");
        Ok(Self { path, records })
    }

    /// Location on disk.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the current records to disk.
    pub fn flush(&self) -> Result<(), StoreError> {
        let bytes = bincode::serialize(&self.records)?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, bytes)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl ScoreStore for FileStore {
    fn load(&self, key: &str) -> Option<u64> {
        self.records.get(key).copied()
    }

    fn save(&mut self, key: &str, value: u64) {
        self.records.insert(key.to_string(), value);
        if let Err(err) = self.flush() {
            warn!(path = %self.path.display(), %err, "failed to persist score");
        }
    }
}
