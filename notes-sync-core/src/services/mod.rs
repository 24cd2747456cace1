//! 业务逻辑服务层

mod note_load_service;
mod note_sync_service;

pub use note_load_service::NoteLoadService;
pub use note_sync_service::NoteSyncService;

use std::sync::Arc;

use crate::traits::FileStorage;

/// 服务上下文 - 持有所有依赖
///
/// 平台层需要创建此上下文，并注入平台特定的存储实现。
pub struct ServiceContext {
    /// 笔记文件存储
    file_storage: Arc<dyn FileStorage>,
}

impl ServiceContext {
    /// 创建服务上下文
    #[must_use]
    pub fn new(file_storage: Arc<dyn FileStorage>) -> Self {
        Self { file_storage }
    }

    pub fn file_storage(&self) -> &Arc<dyn FileStorage> {
        &self.file_storage
    }
}
