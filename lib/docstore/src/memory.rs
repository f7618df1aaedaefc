use std::collections::BTreeMap;
use std::sync::RwLock;

use crate::error::StoreError;
use crate::traits::DocStore;

/// MemStore is an in-memory DocStore over a BTreeMap, keyed the same way
/// as the redb backend (`{collection}:{id}`). Backs tests that do not
/// want a file on disk.
#[derive(Default)]
pub struct MemStore {
    docs: RwLock<BTreeMap<String, Vec<u8>>>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn key(collection: &str, id: &str) -> String {
        format!("{}:{}", collection, id)
    }
}

impl DocStore for MemStore {
    fn get(&self, collection: &str, id: &str) -> Result<Option<Vec<u8>>, StoreError> {
        let docs = self.docs.read().unwrap();
        Ok(docs.get(&Self::key(collection, id)).cloned())
    }

    fn put(&self, collection: &str, id: &str, doc: &[u8]) -> Result<(), StoreError> {
        let mut docs = self.docs.write().unwrap();
        docs.insert(Self::key(collection, id), doc.to_vec());
        Ok(())
    }

    fn delete(&self, collection: &str, id: &str) -> Result<(), StoreError> {
        let mut docs = self.docs.write().unwrap();
        docs.remove(&Self::key(collection, id));
        Ok(())
    }

    fn list(&self, collection: &str) -> Result<Vec<(String, Vec<u8>)>, StoreError> {
        let prefix = format!("{}:", collection);
        let docs = self.docs.read().unwrap();

        let mut results = Vec::new();
        for (key, value) in docs.range(prefix.clone()..) {
            if !key.starts_with(&prefix) {
                break;
            }
            results.push((key[prefix.len()..].to_string(), value.clone()));
        }
        Ok(results)
    }
}
