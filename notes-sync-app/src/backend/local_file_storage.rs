//! 本地文件存储
//!
//! 一个目录，每条笔记一个 `.txt` 文件
//! 实现 notes-sync-core 的 FileStorage trait

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use async_trait::async_trait;
use notes_sync_core::traits::FileStorage;
use notes_sync_core::utils::path_title::NOTE_EXTENSION;
use notes_sync_core::{CoreError, CoreResult};
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// 基于本地目录的文件存储
pub struct LocalFileStorage {
    root: PathBuf,
}

impl LocalFileStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Map a storage path (`/name.txt`) onto a file directly under `root`.
    fn resolve(&self, path: &str) -> CoreResult<PathBuf> {
        let name = path.strip_prefix('/').unwrap_or(path);
        if name.is_empty()
            || name == "."
            || name == ".."
            || name.contains('/')
            || name.contains('\\')
        {
            return Err(CoreError::InvalidPath(path.to_string()));
        }
        Ok(self.root.join(name))
    }

    /// 确保笔记目录存在
    async fn ensure_root(&self) -> CoreResult<()> {
        fs::create_dir_all(&self.root)
            .await
            .map_err(|e| CoreError::StorageError(e.to_string()))
    }
}

/// 将 IO 错误映射为 CoreError
fn io_error(err: &std::io::Error, path: &str) -> CoreError {
    match err.kind() {
        ErrorKind::NotFound => CoreError::FileNotFound(path.to_string()),
        ErrorKind::AlreadyExists => CoreError::PathConflict(path.to_string()),
        _ => CoreError::StorageError(format!("{path}: {err}")),
    }
}

#[async_trait]
impl FileStorage for LocalFileStorage {
    /// Newest first, ties broken by name.
    async fn list_files(&self) -> CoreResult<Vec<String>> {
        let mut dir = match fs::read_dir(&self.root).await {
            Ok(dir) => dir,
            // 目录尚未创建：视为空
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(CoreError::StorageError(e.to_string())),
        };

        let mut entries: Vec<(SystemTime, String)> = Vec::new();
        while let Some(entry) = dir
            .next_entry()
            .await
            .map_err(|e| CoreError::StorageError(e.to_string()))?
        {
            let Ok(name) = entry.file_name().into_string() else {
                log::warn!("Skipping non UTF-8 file name in {}", self.root.display());
                continue;
            };
            if !name.ends_with(NOTE_EXTENSION) {
                continue;
            }
            let metadata = entry
                .metadata()
                .await
                .map_err(|e| CoreError::StorageError(e.to_string()))?;
            if !metadata.is_file() {
                continue;
            }
            let modified = metadata.modified().unwrap_or(SystemTime::UNIX_EPOCH);
            entries.push((modified, format!("/{name}")));
        }

        entries.sort_by(|(a_time, a_name), (b_time, b_name)| {
            b_time.cmp(a_time).then_with(|| a_name.cmp(b_name))
        });

        Ok(entries.into_iter().map(|(_, path)| path).collect())
    }

    async fn read(&self, path: &str) -> CoreResult<String> {
        let file = self.resolve(path)?;
        fs::read_to_string(&file)
            .await
            .map_err(|e| io_error(&e, path))
    }

    async fn exists(&self, path: &str) -> CoreResult<bool> {
        let file = self.resolve(path)?;
        fs::try_exists(&file)
            .await
            .map_err(|e| io_error(&e, path))
    }

    async fn create(&self, path: &str, text: &str) -> CoreResult<()> {
        let file = self.resolve(path)?;
        self.ensure_root().await?;

        let mut handle = fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&file)
            .await
            .map_err(|e| io_error(&e, path))?;
        handle
            .write_all(text.as_bytes())
            .await
            .map_err(|e| io_error(&e, path))?;
        handle.flush().await.map_err(|e| io_error(&e, path))
    }

    async fn write(&self, path: &str, text: &str) -> CoreResult<()> {
        let file = self.resolve(path)?;
        self.ensure_root().await?;
        fs::write(&file, text)
            .await
            .map_err(|e| io_error(&e, path))
    }

    async fn rename(&self, from: &str, to: &str) -> CoreResult<()> {
        let source = self.resolve(from)?;
        let target = self.resolve(to)?;

        if self.exists(to).await? {
            return Err(CoreError::PathConflict(to.to_string()));
        }
        fs::rename(&source, &target)
            .await
            .map_err(|e| io_error(&e, from))
    }

    async fn delete(&self, path: &str) -> CoreResult<()> {
        let file = self.resolve(path)?;
        fs::remove_file(&file)
            .await
            .map_err(|e| io_error(&e, path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn storage() -> (tempfile::TempDir, LocalFileStorage) {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalFileStorage::new(dir.path().join("notes"));
        (dir, storage)
    }

    #[tokio::test]
    async fn missing_root_lists_nothing() {
        let (_dir, storage) = storage();
        assert!(storage.list_files().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn create_then_read() {
        let (_dir, storage) = storage();
        storage.create("/Plan.txt", "ship it").await.unwrap();

        assert_eq!(storage.read("/Plan.txt").await.unwrap(), "ship it");
        assert!(storage.exists("/Plan.txt").await.unwrap());
        assert_eq!(storage.list_files().await.unwrap(), vec!["/Plan.txt"]);
    }

    #[tokio::test]
    async fn create_refuses_existing_path() {
        let (_dir, storage) = storage();
        storage.create("/Plan.txt", "one").await.unwrap();

        let err = storage.create("/Plan.txt", "two").await.unwrap_err();
        assert_eq!(err, CoreError::PathConflict("/Plan.txt".to_string()));
        assert_eq!(storage.read("/Plan.txt").await.unwrap(), "one");
    }

    #[tokio::test]
    async fn write_overwrites() {
        let (_dir, storage) = storage();
        storage.write("/Plan.txt", "one").await.unwrap();
        storage.write("/Plan.txt", "two").await.unwrap();
        assert_eq!(storage.read("/Plan.txt").await.unwrap(), "two");
    }

    #[tokio::test]
    async fn rename_moves_file() {
        let (_dir, storage) = storage();
        storage.create("/Old.txt", "text").await.unwrap();
        storage.rename("/Old.txt", "/New.txt").await.unwrap();

        assert!(!storage.exists("/Old.txt").await.unwrap());
        assert_eq!(storage.read("/New.txt").await.unwrap(), "text");
    }

    #[tokio::test]
    async fn rename_refuses_taken_target() {
        let (_dir, storage) = storage();
        storage.create("/A.txt", "a").await.unwrap();
        storage.create("/B.txt", "b").await.unwrap();

        let err = storage.rename("/A.txt", "/B.txt").await.unwrap_err();
        assert_eq!(err, CoreError::PathConflict("/B.txt".to_string()));
        assert_eq!(storage.read("/B.txt").await.unwrap(), "b");
    }

    #[tokio::test]
    async fn missing_file_errors() {
        let (_dir, storage) = storage();
        let expected = CoreError::FileNotFound("/Nope.txt".to_string());

        assert_eq!(storage.read("/Nope.txt").await.unwrap_err(), expected);
        assert_eq!(storage.delete("/Nope.txt").await.unwrap_err(), expected);
    }

    #[tokio::test]
    async fn delete_removes_file() {
        let (_dir, storage) = storage();
        storage.create("/Plan.txt", "x").await.unwrap();
        storage.delete("/Plan.txt").await.unwrap();
        assert!(storage.list_files().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn rejects_paths_outside_root() {
        let (_dir, storage) = storage();

        for path in ["/../escape.txt", "/a/b.txt", "/", "/.."] {
            let err = storage.read(path).await.unwrap_err();
            assert!(matches!(err, CoreError::InvalidPath(_)), "{path}: {err:?}");
        }
    }

    #[tokio::test]
    async fn lists_only_note_files() {
        let (_dir, storage) = storage();
        storage.create("/Plan.txt", "x").await.unwrap();
        fs::write(storage.root().join("image.png"), b"png").await.unwrap();
        fs::create_dir(storage.root().join("folder.txt")).await.unwrap();

        assert_eq!(storage.list_files().await.unwrap(), vec!["/Plan.txt"]);
    }

    #[tokio::test]
    async fn lists_newest_first() {
        let (_dir, storage) = storage();
        storage.create("/Old.txt", "x").await.unwrap();
        storage.create("/New.txt", "x").await.unwrap();

        let old = std::fs::File::options()
            .write(true)
            .open(storage.root().join("Old.txt"))
            .unwrap();
        old.set_modified(SystemTime::UNIX_EPOCH + std::time::Duration::from_secs(60))
            .unwrap();

        assert_eq!(
            storage.list_files().await.unwrap(),
            vec!["/New.txt", "/Old.txt"]
        );
    }
}
