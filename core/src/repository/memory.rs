use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use anyhow::Result;

use crate::repository::traits::BlobStore;

/// In-process store. Clones share the same map, so several services can
/// be pointed at one store the way they share a data directory on disk.
#[derive(Clone, Debug, Default)]
pub struct MemoryBlobStore {
    entries: Rc<RefCell<HashMap<String, Vec<u8>>>>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }
}

impl BlobStore for MemoryBlobStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn put(&self, key: &str, bytes: &[u8]) -> Result<()> {
        self.entries.borrow_mut().insert(key.to_string(), bytes.to_vec());
        Ok(())
    }
}
