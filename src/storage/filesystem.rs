use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::traits::CartStorage;
use crate::cart::CartState;

/// Filesystem-backed cart storage: one JSON file holding the whole cart.
pub struct FileCartStorage {
    path: PathBuf,
}

impl FileCartStorage {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        FileCartStorage {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Create the parent directory if it is missing.
    pub fn initialize(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create cart directory {:?}", parent))?;
        }
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        self.path.with_extension("json.tmp")
    }
}

impl CartStorage for FileCartStorage {
    fn read_cart(&self) -> Result<CartState> {
        if !self.path.exists() {
            return Ok(CartState::new());
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read cart file {:?}", self.path))?;

        // Malformed content is treated as an empty cart, not an error.
        match serde_json::from_str(&content) {
            Ok(cart) => Ok(cart),
            Err(e) => {
                tracing::warn!("discarding unparseable cart file {:?}: {}", self.path, e);
                Ok(CartState::new())
            }
        }
    }

    fn write_cart(&self, cart: &CartState) -> Result<()> {
        let json = serde_json::to_string(cart).context("Failed to serialize cart")?;

        // Write to a temp file, then rename (atomic on POSIX systems).
        let temp_path = self.temp_path();
        fs::write(&temp_path, json)
            .with_context(|| format!("Failed to write cart file {:?}", temp_path))?;
        fs::rename(&temp_path, &self.path)
            .with_context(|| format!("Failed to replace cart file {:?}", self.path))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn storage_in(dir: &TempDir) -> FileCartStorage {
        FileCartStorage::new(dir.path().join("cart.json"))
    }

    #[test]
    fn test_missing_file_reads_as_empty_cart() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let storage = storage_in(&temp_dir);

        let cart = storage.read_cart()?;
        assert!(cart.is_empty());

        Ok(())
    }

    #[test]
    fn test_write_and_read_cart() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let storage = storage_in(&temp_dir);

        let mut cart = CartState::new();
        cart.add(42, 2);
        cart.add(7, 1);
        storage.write_cart(&cart)?;

        let read_back = storage.read_cart()?;
        assert_eq!(read_back, cart);

        Ok(())
    }

    #[test]
    fn test_malformed_file_reads_as_empty_cart() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("cart.json");
        fs::write(&path, "{not json")?;

        let storage = FileCartStorage::new(&path);
        let cart = storage.read_cart()?;
        assert!(cart.is_empty());

        Ok(())
    }

    #[test]
    fn test_wrong_shape_reads_as_empty_cart() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("cart.json");
        fs::write(&path, r#"{"book_id": 1}"#)?;

        let storage = FileCartStorage::new(&path);
        let cart = storage.read_cart()?;
        assert!(cart.is_empty());

        Ok(())
    }

    #[test]
    fn test_write_replaces_previous_content() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let storage = storage_in(&temp_dir);

        let mut cart = CartState::new();
        cart.add(1, 1);
        storage.write_cart(&cart)?;

        cart.remove(1);
        storage.write_cart(&cart)?;

        assert!(storage.read_cart()?.is_empty());
        Ok(())
    }
}
