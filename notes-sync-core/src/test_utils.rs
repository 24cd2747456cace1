//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{CoreError, CoreResult};
use crate::services::ServiceContext;
use crate::traits::FileStorage;

// ===== MockFileStorage =====

/// In-memory `FileStorage` keeping files in insertion order
pub struct MockFileStorage {
    files: RwLock<Vec<(String, String)>>,
    /// 读取这些路径时返回错误
    failing_reads: RwLock<HashSet<String>>,
    /// 如果 Some，所有写操作返回此错误
    write_error: RwLock<Option<String>>,
    /// 如果 Some，list_files 返回此错误
    list_error: RwLock<Option<String>>,
    /// 按路径延迟读取（用于模拟乱序完成）
    read_delays: RwLock<HashMap<String, Duration>>,
}

impl MockFileStorage {
    pub fn new() -> Self {
        Self {
            files: RwLock::new(Vec::new()),
            failing_reads: RwLock::new(HashSet::new()),
            write_error: RwLock::new(None),
            list_error: RwLock::new(None),
            read_delays: RwLock::new(HashMap::new()),
        }
    }

    pub fn with_files(files: &[(&str, &str)]) -> Self {
        Self {
            files: RwLock::new(
                files
                    .iter()
                    .map(|(path, text)| ((*path).to_string(), (*text).to_string()))
                    .collect(),
            ),
            ..Self::new()
        }
    }

    pub async fn fail_read(&self, path: &str) {
        self.failing_reads.write().await.insert(path.to_string());
    }

    pub async fn heal_read(&self, path: &str) {
        self.failing_reads.write().await.remove(path);
    }

    pub async fn set_write_error(&self, err: Option<String>) {
        *self.write_error.write().await = err;
    }

    pub async fn set_list_error(&self, err: Option<String>) {
        *self.list_error.write().await = err;
    }

    pub async fn delay_read(&self, path: &str, delay: Duration) {
        self.read_delays
            .write()
            .await
            .insert(path.to_string(), delay);
    }

    pub async fn insert(&self, path: &str, text: &str) {
        self.files
            .write()
            .await
            .push((path.to_string(), text.to_string()));
    }

    pub async fn content(&self, path: &str) -> Option<String> {
        self.files
            .read()
            .await
            .iter()
            .find(|(p, _)| p == path)
            .map(|(_, text)| text.clone())
    }

    async fn check_write(&self) -> CoreResult<()> {
        match &*self.write_error.read().await {
            Some(msg) => Err(CoreError::StorageError(msg.clone())),
            None => Ok(()),
        }
    }
}

impl Default for MockFileStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FileStorage for MockFileStorage {
    async fn list_files(&self) -> CoreResult<Vec<String>> {
        if let Some(ref msg) = *self.list_error.read().await {
            return Err(CoreError::StorageError(msg.clone()));
        }
        Ok(self
            .files
            .read()
            .await
            .iter()
            .map(|(path, _)| path.clone())
            .collect())
    }

    async fn read(&self, path: &str) -> CoreResult<String> {
        let delay = self.read_delays.read().await.get(path).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if self.failing_reads.read().await.contains(path) {
            return Err(CoreError::StorageError(format!("read failed: {path}")));
        }
        self.content(path)
            .await
            .ok_or_else(|| CoreError::FileNotFound(path.to_string()))
    }

    async fn exists(&self, path: &str) -> CoreResult<bool> {
        Ok(self.files.read().await.iter().any(|(p, _)| p == path))
    }

    async fn create(&self, path: &str, text: &str) -> CoreResult<()> {
        self.check_write().await?;
        let mut files = self.files.write().await;
        if files.iter().any(|(p, _)| p == path) {
            return Err(CoreError::PathConflict(path.to_string()));
        }
        files.push((path.to_string(), text.to_string()));
        Ok(())
    }

    async fn write(&self, path: &str, text: &str) -> CoreResult<()> {
        self.check_write().await?;
        let mut files = self.files.write().await;
        match files.iter_mut().find(|(p, _)| p == path) {
            Some(entry) => entry.1 = text.to_string(),
            None => files.push((path.to_string(), text.to_string())),
        }
        Ok(())
    }

    async fn rename(&self, from: &str, to: &str) -> CoreResult<()> {
        self.check_write().await?;
        let mut files = self.files.write().await;
        if files.iter().any(|(p, _)| p == to) {
            return Err(CoreError::PathConflict(to.to_string()));
        }
        let entry = files
            .iter_mut()
            .find(|(p, _)| p == from)
            .ok_or_else(|| CoreError::FileNotFound(from.to_string()))?;
        entry.0 = to.to_string();
        Ok(())
    }

    async fn delete(&self, path: &str) -> CoreResult<()> {
        self.check_write().await?;
        let mut files = self.files.write().await;
        let before = files.len();
        files.retain(|(p, _)| p != path);
        if files.len() == before {
            return Err(CoreError::FileNotFound(path.to_string()));
        }
        Ok(())
    }
}

// ===== 工厂方法 =====

/// 创建带 mock 存储的服务上下文
pub fn create_test_context(files: &[(&str, &str)]) -> (Arc<ServiceContext>, Arc<MockFileStorage>) {
    let storage = Arc::new(MockFileStorage::with_files(files));
    let ctx = Arc::new(ServiceContext::new(storage.clone()));
    (ctx, storage)
}
