//! 笔记加载服务

use std::sync::Arc;

use crate::error::CoreResult;
use crate::services::ServiceContext;
use crate::types::{NoteId, RefNote, SyncedNote};
use crate::utils::path_title::title_to_path;

/// Reads listings and note content from storage
pub struct NoteLoadService {
    ctx: Arc<ServiceContext>,
}

impl NoteLoadService {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// 获取文件列表
    pub async fn list_files(&self) -> CoreResult<Vec<String>> {
        let paths = self.ctx.file_storage().list_files().await?;
        log::debug!("Retrieved file listing with {} entries", paths.len());
        Ok(paths)
    }

    /// 加载笔记内容（Ref → Synced）
    pub async fn load(&self, note: RefNote) -> CoreResult<SyncedNote> {
        let text = self.ctx.file_storage().read(note.path()).await?;
        Ok(note.loaded(text))
    }

    /// 按标题查找并加载笔记
    pub async fn load_by_title(&self, id: NoteId, title: &str) -> CoreResult<SyncedNote> {
        self.load(RefNote::new(id, title_to_path(title))).await
    }
}
