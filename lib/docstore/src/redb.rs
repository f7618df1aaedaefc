use std::path::Path;
use std::sync::Arc;

use redb::{Database, TableDefinition};
use tracing::debug;

use crate::error::StoreError;
use crate::traits::DocStore;

const TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("docs");

/// RedbStore is a DocStore implementation backed by redb — a pure-Rust
/// embedded key-value database. Documents live in a single table keyed
/// `{collection}:{id}`.
pub struct RedbStore {
    db: Arc<Database>,
}

impl RedbStore {
    /// Open or create a redb database at the given path.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let db = Database::create(path).map_err(|e| StoreError::Backend(e.to_string()))?;

        // Ensure the table exists by doing a write transaction.
        let write_txn = db
            .begin_write()
            .map_err(|e| StoreError::Backend(e.to_string()))?;
        {
            let _table = write_txn
                .open_table(TABLE)
                .map_err(|e| StoreError::Backend(e.to_string()))?;
        }
        write_txn
            .commit()
            .map_err(|e| StoreError::Backend(e.to_string()))?;

        debug!("opened document store at {}", path.display());

        Ok(Self {
            db: Arc::new(db),
        })
    }

    fn key(collection: &str, id: &str) -> String {
        format!("{}:{}", collection, id)
    }
}

impl DocStore for RedbStore {
    fn get(&self, collection: &str, id: &str) -> Result<Option<Vec<u8>>, StoreError> {
        let key = Self::key(collection, id);
        let read_txn = self
            .db
            .begin_read()
            .map_err(|e| StoreError::Backend(e.to_string()))?;
        let table = read_txn
            .open_table(TABLE)
            .map_err(|e| StoreError::Backend(e.to_string()))?;

        match table.get(key.as_str()) {
            Ok(Some(val)) => Ok(Some(val.value().to_vec())),
            Ok(None) => Ok(None),
            Err(e) => Err(StoreError::Backend(e.to_string())),
        }
    }

    fn put(&self, collection: &str, id: &str, doc: &[u8]) -> Result<(), StoreError> {
        let key = Self::key(collection, id);
        let write_txn = self
            .db
            .begin_write()
            .map_err(|e| StoreError::Backend(e.to_string()))?;
        {
            let mut table = write_txn
                .open_table(TABLE)
                .map_err(|e| StoreError::Backend(e.to_string()))?;
            table
                .insert(key.as_str(), doc)
                .map_err(|e| StoreError::Backend(e.to_string()))?;
        }
        write_txn
            .commit()
            .map_err(|e| StoreError::Backend(e.to_string()))?;
        Ok(())
    }

    fn delete(&self, collection: &str, id: &str) -> Result<(), StoreError> {
        let key = Self::key(collection, id);
        let write_txn = self
            .db
            .begin_write()
            .map_err(|e| StoreError::Backend(e.to_string()))?;
        {
            let mut table = write_txn
                .open_table(TABLE)
                .map_err(|e| StoreError::Backend(e.to_string()))?;
            table
                .remove(key.as_str())
                .map_err(|e| StoreError::Backend(e.to_string()))?;
        }
        write_txn
            .commit()
            .map_err(|e| StoreError::Backend(e.to_string()))?;
        Ok(())
    }

    fn list(&self, collection: &str) -> Result<Vec<(String, Vec<u8>)>, StoreError> {
        let prefix = format!("{}:", collection);
        let read_txn = self
            .db
            .begin_read()
            .map_err(|e| StoreError::Backend(e.to_string()))?;
        let table = read_txn
            .open_table(TABLE)
            .map_err(|e| StoreError::Backend(e.to_string()))?;

        let mut results = Vec::new();
        let iter = table
            .range(prefix.as_str()..)
            .map_err(|e| StoreError::Backend(e.to_string()))?;

        for entry in iter {
            let entry = entry.map_err(|e| StoreError::Backend(e.to_string()))?;
            let key = entry.0.value().to_string();
            if !key.starts_with(&prefix) {
                break;
            }
            let id = key[prefix.len()..].to_string();
            let value = entry.1.value().to_vec();
            results.push((id, value));
        }

        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_temp() -> (tempfile::TempDir, RedbStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = RedbStore::open(&dir.path().join("docs.redb")).unwrap();
        (dir, store)
    }

    #[test]
    fn get_put_delete() {
        let (_dir, store) = open_temp();

        assert!(store.get("users", "u1").unwrap().is_none());

        store.put("users", "u1", b"{\"username\":\"alice\"}").unwrap();
        let doc = store.get("users", "u1").unwrap().unwrap();
        assert_eq!(doc, b"{\"username\":\"alice\"}");

        store.delete("users", "u1").unwrap();
        assert!(store.get("users", "u1").unwrap().is_none());

        // Deleting again is fine.
        store.delete("users", "u1").unwrap();
    }

    #[test]
    fn collections_are_isolated() {
        let (_dir, store) = open_temp();

        store.put("post", "x", b"{}").unwrap();
        store.put("users", "x", b"{\"a\":1}").unwrap();

        assert_eq!(store.get("post", "x").unwrap().unwrap(), b"{}");
        assert_eq!(store.get("users", "x").unwrap().unwrap(), b"{\"a\":1}");
    }

    #[test]
    fn list_returns_collection_only() {
        let (_dir, store) = open_temp();

        store.put("likes", "a", b"1").unwrap();
        store.put("likes", "b", b"2").unwrap();
        store.put("likesx", "c", b"3").unwrap();
        store.put("post", "d", b"4").unwrap();

        let docs = store.list("likes").unwrap();
        let ids: Vec<&str> = docs.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn put_replaces() {
        let (_dir, store) = open_temp();

        store.put("post", "p1", b"old").unwrap();
        store.put("post", "p1", b"new").unwrap();
        assert_eq!(store.get("post", "p1").unwrap().unwrap(), b"new");
    }
}
