//! Best-score persistence.
//!
//! The session never touches a storage medium directly. It is handed a
//! [`ScoreStore`] at construction and calls `load` once and `save` whenever
//! the best score improves.
//!
//! - [`MemoryStore`]: process-local map, the default for tests and embedding
//! - [`FileStore`]: bincode-encoded map on disk

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Key-value store for integer records.
pub trait ScoreStore {
    /// Read the value stored under `key`, if any.
    fn load(&self, key: &str) -> Option<u64>;

    /// Store `value` under `key`.
    ///
    /// Implementations that can fail must absorb the failure; a broken
    /// store never interrupts play.
    fn save(&mut self, key: &str, value: u64);
}

impl<S: ScoreStore + ?Sized> ScoreStore for &mut S {
    fn load(&self, key: &str) -> Option<u64> {
        (**self).load(key)
    }

    fn save(&mut self, key: &str, value: u64) {
        (**self).save(key, value);
    }
}

impl<S: ScoreStore + ?Sized> ScoreStore for Box<S> {
    fn load(&self, key: &str) -> Option<u64> {
        (**self).load(key)
    }

    fn save(&mut self, key: &str, value: u64) {
        (**self).save(key, value);
    }
}
