//! In-memory score store.

use rustc_hash::FxHashMap;

use super::ScoreStore;

/// Score store backed by a hash map. Contents live as long as the value.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    records: FxHashMap<String, u64>,
    writes: usize,
}

impl MemoryStore {
    /// Empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a record.
    #[must_use]
    pub fn with_record(mut self, key: impl Into<String>, value: u64) -> Self {
        self.records.insert(key.into(), value);
        self
    }

    /// Number of `save` calls received.
    #[must_use]
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl ScoreStore for MemoryStore {
    fn load(&self, key: &str) -> Option<u64> {
        self.records.get(key).copied()
    }

    fn save(&mut self, key: &str, value: u64) {
        self.records.insert(key.to_string(), value);
        self.writes += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing() {
        let store = MemoryStore::new();
        assert_eq!(store.load("best-score"), None);
    }

    #[test]
    fn test_save_and_load() {
        let mut store = MemoryStore::new().with_record("a", 1);
        store.save("b", 42);
        store.save("a", 7);

        assert_eq!(store.load("a"), Some(7));
        assert_eq!(store.load("b"), Some(42));
        assert_eq!(store.writes(), 2);
    }
}
