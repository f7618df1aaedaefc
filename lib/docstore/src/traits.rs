use crate::error::StoreError;

/// DocStore provides fetch-by-id access to named collections of documents.
///
/// Documents are opaque byte blobs (JSON in practice); typed decoding lives
/// with the callers. Keys follow a namespaced convention in the backends:
/// `post:h7a2...`, `users:91fe...`, `likes:0c44...`.
pub trait DocStore: Send + Sync {
    /// Get a document by collection and id. Returns None if it does not exist.
    fn get(&self, collection: &str, id: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Create or replace a document.
    fn put(&self, collection: &str, id: &str, doc: &[u8]) -> Result<(), StoreError>;

    /// Delete a document. Deleting an absent document is not an error.
    fn delete(&self, collection: &str, id: &str) -> Result<(), StoreError>;

    /// List all documents in a collection. Returns sorted (id, doc) pairs.
    fn list(&self, collection: &str) -> Result<Vec<(String, Vec<u8>)>, StoreError>;
}
