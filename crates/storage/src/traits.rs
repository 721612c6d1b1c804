use crate::error::StorageError;

/// Minimal string key-value capability the draft snapshot is written through.
///
/// Writes are last-writer-wins; there is no versioning or locking.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}
