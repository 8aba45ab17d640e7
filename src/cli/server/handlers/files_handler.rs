//! File storage for the read/write solve actions
//!
//! Client-supplied names are never used as paths directly: every name must be
//! a single plain file name inside the storage directory.

use std::path::PathBuf;
use thiserror::Error;
use tokio::{fs, io::AsyncWriteExt};
use tracing::info;

const MAX_FILE_NAME_LEN: usize = 255;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Invalid file name: {name:?}")]
    InvalidName { name: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Storage directory that confines every file action
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve a client file name to a path inside the storage directory
    pub fn resolve(&self, name: &str) -> Result<PathBuf, StorageError> {
        if !is_safe_file_name(name) {
            return Err(StorageError::InvalidName {
                name: name.to_string(),
            });
        }

        let path = self.root.join(name);

        // Security check: ensure the resolved path is still within storage directory
        if path.parent() != Some(self.root.as_path()) {
            return Err(StorageError::InvalidName {
                name: name.to_string(),
            });
        }

        Ok(path)
    }

    pub async fn read(&self, name: &str) -> Result<String, StorageError> {
        let path = self.resolve(name)?;
        let content = fs::read_to_string(&path).await?;

        info!("📄 Read file: {} ({} bytes)", name, content.len());
        Ok(content)
    }

    pub async fn write(&self, name: &str, content: &str) -> Result<(), StorageError> {
        let path = self.resolve(name)?;

        fs::create_dir_all(&self.root).await?;

        let mut file = fs::File::create(&path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;

        info!("📤 Wrote file: {} ({} bytes)", name, content.len());
        Ok(())
    }
}

/// A plain, visible file name: no separators, no leading dot, bounded length
fn is_safe_file_name(name: &str) -> bool {
    !name.is_empty()
        && name.len() <= MAX_FILE_NAME_LEN
        && !name.starts_with('.')
        && !name.contains(['/', '\\', '\0'])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name_validation() {
        assert!(is_safe_file_name("x.txt"));
        assert!(is_safe_file_name("results 2024.json"));
        assert!(!is_safe_file_name(""));
        assert!(!is_safe_file_name("../../../etc/passwd"));
        assert!(!is_safe_file_name("dir/file.txt"));
        assert!(!is_safe_file_name("dir\\file.txt"));
        assert!(!is_safe_file_name(".."));
        assert!(!is_safe_file_name(".hidden"));
        assert!(!is_safe_file_name("nul\0byte"));
    }

    #[test]
    fn test_file_name_length_limit() {
        let long_name = "a".repeat(300) + ".txt";
        assert!(!is_safe_file_name(&long_name));
        assert!(is_safe_file_name(&"a".repeat(MAX_FILE_NAME_LEN)));
    }

    #[test]
    fn resolve_stays_in_root() {
        let store = FileStore::new("/srv/storage");
        assert_eq!(
            store.resolve("x.txt").unwrap(),
            PathBuf::from("/srv/storage/x.txt")
        );
        assert!(matches!(
            store.resolve("/etc/passwd"),
            Err(StorageError::InvalidName { .. })
        ));
    }

    #[tokio::test]
    async fn write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("nested"));

        store.write("x.txt", "hi").await.unwrap();
        assert_eq!(store.read("x.txt").await.unwrap(), "hi");

        store.write("x.txt", "again").await.unwrap();
        assert_eq!(store.read("x.txt").await.unwrap(), "again");
    }

    #[tokio::test]
    async fn read_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());

        assert!(matches!(
            store.read("absent.txt").await,
            Err(StorageError::Io(_))
        ));
    }
}
