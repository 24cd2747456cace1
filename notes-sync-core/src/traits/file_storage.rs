//! Note file storage abstract Trait

use async_trait::async_trait;

use crate::error::CoreResult;

/// Remote (or local) file store holding one file per note
///
/// Paths are `/`-separated and rooted, e.g. `/Groceries.txt`.
///
/// Platform implementation:
/// - CLI: `LocalFileStorage` (a directory on disk)
/// - Tests: `MockFileStorage` (`test-utils` feature)
#[async_trait]
pub trait FileStorage: Send + Sync {
    /// List all note files, in the order they should be shown
    async fn list_files(&self) -> CoreResult<Vec<String>>;

    /// Read a file's content
    ///
    /// # Arguments
    /// * `path` - Storage path
    async fn read(&self, path: &str) -> CoreResult<String>;

    /// Whether a file exists at `path`
    async fn exists(&self, path: &str) -> CoreResult<bool>;

    /// Create a new file; fails with `PathConflict` if `path` is taken
    ///
    /// # Arguments
    /// * `path` - Storage path
    /// * `text` - Initial content
    async fn create(&self, path: &str, text: &str) -> CoreResult<()>;

    /// Create or overwrite a file
    ///
    /// # Arguments
    /// * `path` - Storage path
    /// * `text` - New content
    async fn write(&self, path: &str, text: &str) -> CoreResult<()>;

    /// Move a file; fails with `PathConflict` if `to` is taken
    ///
    /// # Arguments
    /// * `from` - Current path
    /// * `to` - New path
    async fn rename(&self, from: &str, to: &str) -> CoreResult<()>;

    /// Delete a file
    ///
    /// # Arguments
    /// * `path` - Storage path
    async fn delete(&self, path: &str) -> CoreResult<()>;
}
