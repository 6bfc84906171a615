use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::receipt::ReceiptId;

/// Process-wide map from receipt id to points.
///
/// Cloning yields another handle to the same map. Every read and write goes
/// through a single mutex; entries are never removed.
#[derive(Clone, Default)]
pub struct PointsStore {
    inner: Arc<Mutex<HashMap<ReceiptId, u64>>>,
}

impl PointsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record points for an id, replacing any previous value.
    /// Returns the previous value if the id was already present.
    pub fn insert(&self, id: ReceiptId, points: u64) -> Option<u64> {
        self.lock().insert(id, points)
    }

    pub fn get(&self, id: &str) -> Option<u64> {
        self.lock().get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<ReceiptId, u64>> {
        // Values are plain integers; a panic elsewhere can't leave one half-written
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_new_store_is_empty() {
        let store = PointsStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert_eq!(store.get("missing"), None);
    }

    #[test]
    fn test_insert_and_get() {
        let store = PointsStore::new();
        let id = ReceiptId::from_bytes(b"receipt");
        assert_eq!(store.insert(id.clone(), 28), None);
        assert_eq!(store.get(id.as_str()), Some(28));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_insert_overwrites() {
        let store = PointsStore::new();
        let id = ReceiptId::from_bytes(b"receipt");
        store.insert(id.clone(), 28);
        assert_eq!(store.insert(id.clone(), 28), Some(28));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_clones_share_state() {
        let store = PointsStore::new();
        let handle = store.clone();
        let id = ReceiptId::from_bytes(b"shared");
        handle.insert(id.clone(), 109);
        assert_eq!(store.get(id.as_str()), Some(109));
    }

    #[test]
    fn test_concurrent_inserts() {
        let store = PointsStore::new();
        let handles: Vec<_> = (0..8u64)
            .map(|i| {
                let store = store.clone();
                thread::spawn(move || {
                    for j in 0..100u64 {
                        let id = ReceiptId::from_bytes(format!("{}-{}", i, j).as_bytes());
                        store.insert(id, i * j);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(store.len(), 800);
    }
}
