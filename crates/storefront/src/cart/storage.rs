//! Cart persistence backends.
//!
//! The cart is stored as a JSON-encoded array of product snapshots.
//! `JsonFileStorage` keeps it in a single file between runs;
//! `MemoryStorage` backs tests.

use std::cell::RefCell;
use std::path::PathBuf;

use thiserror::Error;

use shopfront_core::Product;

/// Errors from loading or saving the cart.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("cart storage I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("cart data is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Where cart snapshots live between runs.
///
/// `load` of an absent cart yields an empty list, not an error.
pub trait CartStorage {
    /// Load the stored snapshot list.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backing store is unreadable or corrupt.
    fn load(&self) -> Result<Vec<Product>, StorageError>;

    /// Replace the stored snapshot list.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backing store is unwritable.
    fn save(&self, items: &[Product]) -> Result<(), StorageError>;

    /// Remove the stored list entirely.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backing store cannot be cleared.
    fn clear(&self) -> Result<(), StorageError>;
}

/// Cart persisted as a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CartStorage for JsonFileStorage {
    fn load(&self) -> Result<Vec<Product>, StorageError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let raw = std::fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    fn save(&self, items: &[Product]) -> Result<(), StorageError> {
        let raw = serde_json::to_string(items)?;
        std::fs::write(&self.path, raw)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        if self.path.exists() {
            std::fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

/// Non-persistent storage for tests.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<Vec<Product>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl CartStorage for MemoryStorage {
    fn load(&self) -> Result<Vec<Product>, StorageError> {
        Ok(self.items.borrow().clone())
    }

    fn save(&self, items: &[Product]) -> Result<(), StorageError> {
        *self.items.borrow_mut() = items.to_vec();
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        self.items.borrow_mut().clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::mock_products;

    #[test]
    fn test_file_storage_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path().join("cart.json"));

        // Absent cart reads as empty
        assert!(storage.load().unwrap().is_empty());

        let items = mock_products();
        storage.save(&items).unwrap();
        assert_eq!(storage.load().unwrap(), items);

        storage.clear().unwrap();
        assert!(storage.load().unwrap().is_empty());
    }

    #[test]
    fn test_file_storage_corrupt_data_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cart.json");
        std::fs::write(&path, "not json").unwrap();

        let storage = JsonFileStorage::new(path);
        assert!(matches!(storage.load(), Err(StorageError::Corrupt(_))));
    }

    #[test]
    fn test_clear_absent_cart_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path().join("cart.json"));
        storage.clear().unwrap();
    }
}
