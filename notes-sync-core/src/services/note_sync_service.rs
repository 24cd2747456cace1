//! 笔记同步服务
//!
//! Drives notes through the lifecycle against storage. Every operation moves
//! the note into `Syncing`, performs the storage call, and settles it in
//! `Synced` / `Deleted` on success or `OutOfSync` on failure. Storage
//! failures are therefore values, not errors.

use std::sync::Arc;

use crate::error::{CoreError, CoreResult};
use crate::services::ServiceContext;
use crate::types::{
    CreatingFromTextNote, CreatingFromTitleNote, DeletedNote, Note, OutOfSyncNote, SyncOperation,
    SyncedNote, SyncingNote,
};
use crate::utils::path_title::{title_to_path, versioned_title_path};

/// `~~n` suffixes tried before giving up on a title
const MAX_PATH_VERSIONS: u32 = 100;

/// Persists note changes and tracks their sync state
pub struct NoteSyncService {
    ctx: Arc<ServiceContext>,
}

impl NoteSyncService {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// 从标题创建笔记（空内容）
    pub async fn create_from_title(&self, draft: CreatingFromTitleNote) -> CoreResult<Note> {
        let path = self.allocate_path(draft.title(), None).await?;
        Ok(self.create(draft.start_sync(path), "create").await)
    }

    /// 从正文创建笔记（标题取首个非空行）
    pub async fn create_from_text(&self, draft: CreatingFromTextNote) -> CoreResult<Note> {
        let path = self.allocate_path(draft.title(), None).await?;
        Ok(self.create(draft.start_sync(path), "create").await)
    }

    /// 更新笔记内容
    pub async fn update_text(&self, note: SyncedNote, text: impl Into<String>) -> Note {
        self.write(note.start_text_update(text), "update").await
    }

    /// 重命名笔记
    ///
    /// A title that maps to the note's own path leaves it untouched. A failed
    /// move leaves the file where it was, so the note goes out of sync at its
    /// old path.
    pub async fn rename(&self, note: SyncedNote, new_title: &str) -> CoreResult<Note> {
        let old_path = note.path().to_string();
        let target = self.allocate_path(new_title, Some(&old_path)).await?;
        if target == old_path {
            log::debug!("Note {} already stored at {old_path}", note.id());
            return Ok(note.into());
        }

        match self.ctx.file_storage().rename(&old_path, &target).await {
            Ok(()) => {
                log::info!("Note {} renamed: {old_path} -> {target}", note.id());
                Ok(note.start_rename(target).synced().into())
            }
            Err(e) => {
                let text = note.text().to_string();
                Ok(settle(
                    note.start_text_update(text),
                    SyncOperation::Write,
                    "rename",
                    Err(e),
                ))
            }
        }
    }

    /// 删除笔记（保留内容以便撤销）
    pub async fn delete(&self, note: SyncedNote) -> Note {
        self.remove(note.start_delete(), "delete").await
    }

    /// 撤销删除
    ///
    /// The file is recreated, never overwritten: if the path has been taken
    /// since, the note goes out of sync.
    pub async fn restore(&self, note: DeletedNote) -> Note {
        self.create(note.restore(), "restore").await
    }

    /// 重试同步：重复失败的那次存储操作
    pub async fn retry(&self, note: OutOfSyncNote) -> Note {
        let operation = note.operation();
        let syncing = note.retry();
        match operation {
            SyncOperation::Create => self.create(syncing, "retry").await,
            SyncOperation::Write => self.write(syncing, "retry").await,
            SyncOperation::Delete => self.remove(syncing, "retry").await,
        }
    }

    async fn create(&self, syncing: SyncingNote, label: &str) -> Note {
        let result = self
            .ctx
            .file_storage()
            .create(syncing.path(), syncing.text())
            .await;
        settle(syncing, SyncOperation::Create, label, result)
    }

    async fn write(&self, syncing: SyncingNote, label: &str) -> Note {
        let result = self
            .ctx
            .file_storage()
            .write(syncing.path(), syncing.text())
            .await;
        settle(syncing, SyncOperation::Write, label, result)
    }

    async fn remove(&self, syncing: SyncingNote, label: &str) -> Note {
        match self.ctx.file_storage().delete(syncing.path()).await {
            Ok(()) => {
                log::info!("Note {} {label} removed: {}", syncing.id(), syncing.path());
                syncing.deleted().into()
            }
            Err(e) => settle(syncing, SyncOperation::Delete, label, Err(e)),
        }
    }

    /// First free path for `title`: the plain path, then `~~1`, `~~2`, ...
    ///
    /// `own_path` counts as free, so a note never competes with itself.
    async fn allocate_path(&self, title: &str, own_path: Option<&str>) -> CoreResult<String> {
        let storage = self.ctx.file_storage();
        let is_free = |candidate: &str| Some(candidate) == own_path;

        let plain = title_to_path(title);
        if is_free(&plain) || !storage.exists(&plain).await? {
            return Ok(plain);
        }
        for version in 1..=MAX_PATH_VERSIONS {
            let candidate = versioned_title_path(title, version);
            if is_free(&candidate) || !storage.exists(&candidate).await? {
                return Ok(candidate);
            }
        }
        Err(CoreError::PathConflict(plain))
    }
}

fn settle(
    syncing: SyncingNote,
    operation: SyncOperation,
    label: &str,
    result: CoreResult<()>,
) -> Note {
    match result {
        Ok(()) => {
            log::info!("Note {} {label} synced: {}", syncing.id(), syncing.path());
            syncing.synced().into()
        }
        Err(e) => {
            if e.is_expected() {
                log::warn!("Note {} {label} ({}) failed: {e}", syncing.id(), operation.as_str());
            } else {
                log::error!("Note {} {label} ({}) failed: {e}", syncing.id(), operation.as_str());
            }
            syncing.failed(operation, e.to_string()).into()
        }
    }
}
